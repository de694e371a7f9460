use super::*;

#[test]
fn new_transcript_is_empty() {
    let transcript = Transcript::new();
    assert!(transcript.is_empty());
    assert_eq!(transcript.last(), None);
}

#[test]
fn n_pairs_yield_two_n_entries_in_order() {
    let mut transcript = Transcript::new();
    for i in 0..4 {
        transcript.push_question(format!("q{i}"));
        transcript.push_answer(format!("a{i}"));
    }
    assert_eq!(transcript.len(), 8);
    let texts: Vec<&str> = transcript.entries().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["q0", "a0", "q1", "a1", "q2", "a2", "q3", "a3"]);
    assert!(transcript.entries().iter().step_by(2).all(|m| m.role == Role::Question));
    assert!(transcript.entries().iter().skip(1).step_by(2).all(|m| m.role == Role::Answer));
}

#[test]
fn role_serializes_lowercase() {
    let msg = ChatMessage { role: Role::Answer, text: "a summary".to_owned() };
    assert_eq!(
        serde_json::to_value(&msg).expect("json"),
        serde_json::json!({ "role": "answer", "text": "a summary" })
    );
}
