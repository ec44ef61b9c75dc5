//! Local retrieval over the knowledge base.
//!
//! Index lifecycle: chunk guideline text into titled passages, build a
//! Tantivy index in a temp directory, answer queries with the
//! best-matching passage verbatim. Build failures surface to the caller;
//! the engine downgrades to rules-only instead of failing the session.

use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::Value;
use tantivy::{Index, TantivyDocument};
use tempfile::TempDir;
use tracing::info;

use neurobridge_core::schema::{build_schema, field, get_field};

use crate::error::DialogueError;

/// Guideline text compiled into the crate; the default knowledge base.
pub const BUNDLED_GUIDELINES: &str = include_str!("../data/medical_guidelines.txt");

/// Upper bound on passage size, in characters. Longer sections are split
/// at paragraph boundaries.
const MAX_PASSAGE_CHARS: usize = 1000;

/// Number of candidate passages retrieved per query.
const TOP_K: usize = 3;

/// A titled chunk of the knowledge base.
#[derive(Debug, Clone, PartialEq)]
pub struct Passage {
    pub title: String,
    pub body: String,
}

/// Split guideline text into titled passages.
///
/// Lines starting with `#` open a new section titled by the heading;
/// text before the first heading falls under a generic title. Sections
/// longer than `MAX_PASSAGE_CHARS` split at paragraph boundaries, each
/// part keeping the section title.
pub fn chunk_passages(text: &str) -> Vec<Passage> {
    let mut passages = Vec::new();
    let mut title = String::from("General guidance");
    let mut body = String::new();

    for line in text.lines() {
        if let Some(heading) = line.strip_prefix('#') {
            push_section(&mut passages, &title, &body);
            let heading = heading.trim_start_matches('#').trim();
            title = if heading.is_empty() {
                "General guidance".to_string()
            } else {
                heading.to_string()
            };
            body.clear();
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }
    push_section(&mut passages, &title, &body);
    passages
}

fn push_section(passages: &mut Vec<Passage>, title: &str, body: &str) {
    let body = body.trim();
    if body.is_empty() {
        return;
    }

    let mut current = String::new();
    for paragraph in body.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        if !current.is_empty() && current.len() + paragraph.len() + 2 > MAX_PASSAGE_CHARS {
            passages.push(Passage {
                title: title.to_string(),
                body: current.clone(),
            });
            current.clear();
        }
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(paragraph);
    }
    if !current.is_empty() {
        passages.push(Passage {
            title: title.to_string(),
            body: current,
        });
    }
}

/// A queryable knowledge-base index held in a temp directory.
#[derive(Debug)]
pub struct RetrievalResponder {
    index: Index,
    // Keeps the index directory alive for the life of the responder
    _index_dir: TempDir,
}

impl RetrievalResponder {
    /// Build an index over the given guideline text.
    pub fn build(knowledge_text: &str) -> Result<Self, DialogueError> {
        let passages = chunk_passages(knowledge_text);
        if passages.is_empty() {
            return Err(DialogueError::EmptyKnowledgeBase);
        }

        let index_dir = tempfile::tempdir()?;
        let schema = build_schema();
        let index = Index::create_in_dir(index_dir.path(), schema.clone())?;

        let id_field = get_field(&schema, field::ID);
        let title_field = get_field(&schema, field::TITLE);
        let body_field = get_field(&schema, field::BODY);

        let mut writer = index.writer(50_000_000)?;
        for (position, passage) in passages.iter().enumerate() {
            let mut doc = TantivyDocument::new();
            doc.add_text(id_field, format!("passage-{position}"));
            doc.add_text(title_field, &passage.title);
            doc.add_text(body_field, &passage.body);
            writer.add_document(doc)?;
        }
        writer.commit()?;

        info!(passages = passages.len(), "knowledge-base index built");
        Ok(Self {
            index,
            _index_dir: index_dir,
        })
    }

    /// Responder over the guidelines bundled with the crate.
    pub fn bundled() -> Result<Self, DialogueError> {
        Self::build(BUNDLED_GUIDELINES)
    }

    /// Best-matching passage for a query, or `None` when nothing in the
    /// knowledge base matches.
    pub fn answer(&self, query_text: &str) -> Result<Option<String>, DialogueError> {
        let reader = self.index.reader()?;
        let searcher = reader.searcher();
        let schema = self.index.schema();

        let title_field = get_field(&schema, field::TITLE);
        let body_field = get_field(&schema, field::BODY);

        let query_parser = QueryParser::for_index(&self.index, vec![title_field, body_field]);
        let query = query_parser
            .parse_query(query_text)
            .map_err(|e| DialogueError::QueryParse(e.to_string()))?;

        let top_docs = searcher.search(&query, &TopDocs::with_limit(TOP_K))?;
        let Some((_score, doc_address)) = top_docs.first() else {
            return Ok(None);
        };

        let doc = searcher.doc::<TantivyDocument>(*doc_address)?;
        let body = doc
            .get_first(body_field)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Ok((!body.is_empty()).then_some(body))
    }

    /// Number of indexed passages.
    pub fn passage_count(&self) -> Result<usize, DialogueError> {
        let reader = self.index.reader()?;
        Ok(reader.searcher().num_docs() as usize)
    }
}
