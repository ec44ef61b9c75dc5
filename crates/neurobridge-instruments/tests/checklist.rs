use neurobridge_instruments::checklist::SymptomChecklist;
use neurobridge_instruments::error::InstrumentError;

#[test]
fn checklist_has_ten_items_in_canonical_order() {
    let ids: Vec<&str> = SymptomChecklist::ids().collect();
    assert_eq!(
        ids,
        vec![
            "tremor",
            "rigidity",
            "bradykinesia",
            "postural",
            "gait",
            "micrographia",
            "speech",
            "facial",
            "sleep",
            "memory",
        ]
    );
}

#[test]
fn every_item_has_a_question_text() {
    for q in SymptomChecklist::questions() {
        assert!(!q.question.is_empty(), "empty question for {}", q.id);
        assert!(q.question.ends_with('?'), "no question mark for {}", q.id);
    }
}

#[test]
fn question_lookup_returns_the_item() {
    let q = SymptomChecklist::question("micrographia").unwrap();
    assert_eq!(q.question, "Has your handwriting become smaller or more crowded?");
    assert!(SymptomChecklist::question("dizziness").is_none());
}

#[test]
fn known_ids_pass_validation() {
    for id in SymptomChecklist::ids() {
        assert!(SymptomChecklist::ensure_known(id).is_ok());
    }
}

#[test]
fn unknown_id_is_rejected() {
    let err = SymptomChecklist::ensure_known("headache").unwrap_err();
    match err {
        InstrumentError::UnknownSymptom(id) => assert_eq!(id, "headache"),
    }
}
