//! Rule-based topic responses.
//!
//! An ordered table of regex rules maps a query to a topic; the reply is
//! drawn from that topic's fixed response set. Matching is deterministic,
//! variant selection comes from the responder's own RNG so a seeded
//! responder replays identical conversations.

use std::sync::LazyLock;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use regex::Regex;

// ── Response tables ──────────────────────────────────────────────────────────

pub static SYMPTOM_RESPONSES: [&str; 2] = [
    "Common early symptoms include tremors, stiffness, and balance issues.",
    "Many people experience slight tremors in their hands or fingers as an early sign.",
];

pub static TREATMENT_RESPONSES: [&str; 2] = [
    "Treatment often includes medications like Levodopa and physical therapy.",
    "Doctors may prescribe various medications to manage symptoms effectively.",
];

pub static EXERCISE_RESPONSES: [&str; 2] = [
    "Regular exercise like walking or swimming can help maintain mobility.",
    "Physical therapy is often recommended to improve balance and coordination.",
];

pub static DIET_RESPONSES: [&str; 2] = [
    "A balanced diet with plenty of fiber can help manage symptoms.",
    "Some people find that certain dietary changes help with their symptoms.",
];

pub static RISK_RESPONSES: [&str; 2] = [
    "Risk factors include age, family history, and exposure to certain toxins.",
    "The risk increases with age, but Parkinson's can affect people of all ages.",
];

/// Fallback set when no topic matches.
pub static DEFAULT_RESPONSES: [&str; 3] = [
    "I'm here to help with information about neurological health.",
    "That's a good question about Parkinson's disease management.",
    "I can provide general information, but please consult a doctor for medical advice.",
];

// ── Rule table ───────────────────────────────────────────────────────────────

/// One topic rule: a substring-style pattern and its response set.
struct TopicRule {
    topic: &'static str,
    pattern: Regex,
    responses: &'static [&'static str],
}

/// Ordered rule table. Declaration order is the tie-break: when several
/// patterns match, the first topic wins.
static TOPIC_RULES: LazyLock<Vec<TopicRule>> = LazyLock::new(|| {
    let rules = [
        ("symptoms", r"symptom|sign|feel", &SYMPTOM_RESPONSES[..]),
        ("treatment", r"treat|medication|drug", &TREATMENT_RESPONSES[..]),
        (
            "exercise",
            r"exercise|activity|physical",
            &EXERCISE_RESPONSES[..],
        ),
        ("diet", r"diet|food|eat", &DIET_RESPONSES[..]),
        ("risk", r"risk|chance|likely", &RISK_RESPONSES[..]),
    ];

    rules
        .iter()
        .map(|&(topic, pattern, responses)| TopicRule {
            topic,
            // Patterns are compile-time constants; a panic here indicates
            // a rule table bug
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid pattern for topic '{topic}': {e}")),
            responses,
        })
        .collect()
});

/// First rule in declaration order whose pattern matches the lowercased
/// query.
fn find_rule(query: &str) -> Option<&'static TopicRule> {
    let query = query.to_lowercase();
    TOPIC_RULES.iter().find(|rule| rule.pattern.is_match(&query))
}

/// Topic id a query resolves to, if any. Matching is case-insensitive
/// and happens anywhere in the query text.
pub fn matched_topic(query: &str) -> Option<&'static str> {
    find_rule(query).map(|rule| rule.topic)
}

// ── Responder ────────────────────────────────────────────────────────────────

/// Selects canned responses by scanning the rule table in order.
pub struct RuleBasedResponder {
    rng: StdRng,
}

impl RuleBasedResponder {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed responder for reproducible conversations.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reply to a query: a uniform draw from the first matching topic's
    /// response set, or from the default set when nothing matches.
    pub fn reply(&mut self, query: &str) -> String {
        let set = find_rule(query)
            .map(|rule| rule.responses)
            .unwrap_or(&DEFAULT_RESPONSES[..]);

        set.choose(&mut self.rng)
            .copied()
            .unwrap_or(DEFAULT_RESPONSES[0])
            .to_string()
    }
}

impl Default for RuleBasedResponder {
    fn default() -> Self {
        Self::new()
    }
}
