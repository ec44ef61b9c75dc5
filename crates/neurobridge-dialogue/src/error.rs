use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("knowledge base has no indexable passages")]
    EmptyKnowledgeBase,

    #[error("tantivy error: {0}")]
    Tantivy(#[from] tantivy::TantivyError),

    #[error("query parse error: {0}")]
    QueryParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
