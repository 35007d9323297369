use dsa_log::metadata::infer::{InferenceError, parse_payload};

#[test]
fn parses_a_complete_payload() {
    let body = r#"{"topic": "Two Pointers", "logic": "Walk from both ends",
                   "time": "O(n)", "space": "O(1)", "company": "Google"}"#;
    let meta = parse_payload(body, None).unwrap();
    assert_eq!(meta.topic, "Two Pointers");
    assert_eq!(meta.logic, "Walk from both ends");
    assert_eq!(meta.time_complexity, "O(n)");
    assert_eq!(meta.space_complexity, "O(1)");
    assert_eq!(meta.company_tags, "Google");
}

#[test]
fn accepts_long_key_spellings() {
    let body = r#"{"topic": "DP", "time complexity": "O(n^2)", "space complexity": "O(n)"}"#;
    let meta = parse_payload(body, None).unwrap();
    assert_eq!(meta.time_complexity, "O(n^2)");
    assert_eq!(meta.space_complexity, "O(n)");
}

#[test]
fn first_non_empty_spelling_wins() {
    let body = r#"{"time": "", "time complexity": "O(n log n)", "topic": "Sorting"}"#;
    let meta = parse_payload(body, None).unwrap();
    assert_eq!(meta.time_complexity, "O(n log n)");
}

#[test]
fn unknown_keys_are_ignored() {
    let body = r#"{"topic": "Graphs", "difficulty": "Hard", "confidence": 0.9,
                   "time": "O(V+E)", "space": "O(V)"}"#;
    let meta = parse_payload(body, None).unwrap();
    assert_eq!(meta.topic, "Graphs");
    assert_eq!(meta.time_complexity, "O(V+E)");
}

#[test]
fn missing_keys_default_to_sentinels() {
    let meta = parse_payload("{}", None).unwrap();
    assert_eq!(meta.topic, "unknown");
    assert_eq!(meta.logic, "");
    assert_eq!(meta.time_complexity, "unknown");
    assert_eq!(meta.space_complexity, "unknown");
    assert_eq!(meta.company_tags, "unknown");
}

#[test]
fn known_tags_override_the_model_company() {
    let body = r#"{"topic": "Greedy", "company": "SomeGuess Inc"}"#;
    let tags = vec!["Amazon".to_string(), "Netflix".to_string()];
    let meta = parse_payload(body, Some(&tags)).unwrap();
    assert_eq!(meta.company_tags, "Amazon, Netflix");
}

#[test]
fn code_fenced_payloads_are_unwrapped() {
    let body = "```json\n{\"topic\": \"Stacks\", \"time\": \"O(n)\"}\n```";
    let meta = parse_payload(body, None).unwrap();
    assert_eq!(meta.topic, "Stacks");
}

#[test]
fn field_values_are_trimmed() {
    let body = r#"{"topic": "  Heaps  ", "logic": " pop the max ", "time": " O(log n) "}"#;
    let meta = parse_payload(body, None).unwrap();
    assert_eq!(meta.topic, "Heaps");
    assert_eq!(meta.logic, "pop the max");
    assert_eq!(meta.time_complexity, "O(log n)");
}

#[test]
fn prose_is_rejected_as_malformed() {
    let err = parse_payload("Sure! Here is the analysis you asked for.", None).unwrap_err();
    assert!(matches!(err, InferenceError::Malformed(_)));
}

#[test]
fn non_object_json_is_rejected() {
    let err = parse_payload(r#"["topic", "logic"]"#, None).unwrap_err();
    assert!(matches!(err, InferenceError::Malformed(_)));
}
