use neurobridge_core::models::chat::{ChatRole, ConversationHistory};
use neurobridge_core::models::score::RiskScore;
use neurobridge_dialogue::error::DialogueError;
use neurobridge_dialogue::retrieval::BUNDLED_GUIDELINES;
use neurobridge_dialogue::rules::{DEFAULT_RESPONSES, EXERCISE_RESPONSES, RuleBasedResponder};
use neurobridge_dialogue::{DialogueEngine, suggested_questions};

#[test]
fn each_exchange_appends_exactly_two_entries() {
    let mut engine = DialogueEngine::new(RuleBasedResponder::with_seed(1));
    let mut history = ConversationHistory::new();

    let reply = engine
        .respond("What are the early symptoms?", None, &mut history)
        .unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.messages()[0].role, ChatRole::User);
    assert_eq!(history.messages()[0].content, "What are the early symptoms?");
    assert_eq!(history.messages()[1].role, ChatRole::Assistant);
    assert_eq!(history.messages()[1].content, reply);

    engine.respond("Does exercise help?", None, &mut history).unwrap();
    assert_eq!(history.len(), 4);
}

#[test]
fn blank_queries_are_rejected_without_touching_history() {
    let mut engine = DialogueEngine::new(RuleBasedResponder::with_seed(1));
    let mut history = ConversationHistory::new();

    for query in ["", "   ", "\n\t"] {
        let err = engine.respond(query, None, &mut history).unwrap_err();
        assert!(matches!(err, DialogueError::EmptyQuery));
    }
    assert!(history.is_empty());
}

#[test]
fn queries_are_trimmed_before_matching_and_recording() {
    let mut engine = DialogueEngine::new(RuleBasedResponder::with_seed(5));
    let mut history = ConversationHistory::new();

    let reply = engine
        .respond("  What exercises can help with coordination?  ", None, &mut history)
        .unwrap();

    assert!(EXERCISE_RESPONSES.contains(&reply.as_str()));
    assert_eq!(
        history.messages()[0].content,
        "What exercises can help with coordination?"
    );
}

#[test]
fn seeded_engines_replay_identical_conversations() {
    let queries = [
        "What are the early symptoms?",
        "hello there",
        "Is my diet important?",
    ];

    let mut first = DialogueEngine::new(RuleBasedResponder::with_seed(9));
    let mut second = DialogueEngine::new(RuleBasedResponder::with_seed(9));
    let mut history_a = ConversationHistory::new();
    let mut history_b = ConversationHistory::new();

    for query in queries {
        let a = first.respond(query, None, &mut history_a).unwrap();
        let b = second.respond(query, None, &mut history_b).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn risk_score_context_does_not_change_rule_replies() {
    let mut with_score = DialogueEngine::new(RuleBasedResponder::with_seed(11));
    let mut without_score = DialogueEngine::new(RuleBasedResponder::with_seed(11));
    let mut history_a = ConversationHistory::new();
    let mut history_b = ConversationHistory::new();

    let a = with_score
        .respond("Am I at risk?", Some(RiskScore::from_raw(80.0)), &mut history_a)
        .unwrap();
    let b = without_score.respond("Am I at risk?", None, &mut history_b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unusable_knowledge_base_downgrades_to_rules_only() {
    let engine = DialogueEngine::with_retrieval(RuleBasedResponder::with_seed(2), "");
    assert!(!engine.has_retrieval());

    let mut engine = engine;
    let mut history = ConversationHistory::new();
    let reply = engine
        .respond("What are the early symptoms?", None, &mut history)
        .unwrap();
    assert!(!reply.is_empty());
}

#[test]
fn bundled_knowledge_base_enables_retrieval() {
    let mut engine =
        DialogueEngine::with_retrieval(RuleBasedResponder::with_seed(2), BUNDLED_GUIDELINES);
    assert!(engine.has_retrieval());

    let mut history = ConversationHistory::new();
    let reply = engine
        .respond("What does levodopa treat?", None, &mut history)
        .unwrap();
    assert!(!reply.is_empty());
    assert_eq!(history.len(), 2);
}

#[test]
fn queries_missing_the_index_fall_back_to_rules() {
    let mut engine = DialogueEngine::with_retrieval(
        RuleBasedResponder::with_seed(8),
        "# Hydration\nDrinking enough water supports medication absorption.\n",
    );
    assert!(engine.has_retrieval());

    let mut history = ConversationHistory::new();
    let reply = engine
        .respond("zebra quantum telescope", None, &mut history)
        .unwrap();
    assert!(DEFAULT_RESPONSES.contains(&reply.as_str()));
    assert_eq!(history.len(), 2);
}

#[test]
fn six_suggested_questions_are_offered() {
    let questions = suggested_questions();
    assert_eq!(questions.len(), 6);
    assert!(questions.contains(&"How accurate is this assessment?"));
}
