use enquiry_core::Role;

use super::*;

fn doc(id: &str, title: &str) -> DocumentRef {
    DocumentRef { id: id.to_owned(), title: title.to_owned(), status: None, created_at: None }
}

fn request(question: &str) -> QueryRequest {
    QueryRequest { document_id: "5".to_owned(), question: question.to_owned() }
}

#[test]
fn submit_requires_document_and_question() {
    let mut state = QueryState::default();
    assert!(!state.can_submit());
    state.document_id = "5".to_owned();
    assert!(!state.can_submit());
    state.question = "   ".to_owned();
    assert!(!state.can_submit());
    state.question = "what is this?".to_owned();
    assert!(state.can_submit());
}

#[test]
fn selected_title_resolves_from_loaded_page() {
    let mut state = QueryState::default();
    state.set_documents(vec![doc("1", "Handbook"), doc("5", "Minutes")]);
    state.document_id = "5".to_owned();
    assert_eq!(state.selected_title(), Some("Minutes"));
    state.document_id = "missing".to_owned();
    assert_eq!(state.selected_title(), None);
}

#[test]
fn set_documents_clears_loading_flag() {
    let mut state = QueryState { documents_loading: true, ..QueryState::default() };
    state.set_documents(Vec::new());
    assert!(!state.documents_loading);
    assert!(state.documents.is_empty());
}

#[test]
fn exchange_appends_question_then_answer() {
    let mut state = QueryState { document_id: "5".to_owned(), question: "what is this?".to_owned(), ..QueryState::default() };

    state.begin(&request("what is this?"));
    assert!(state.loading);
    assert!(state.question.is_empty());
    assert!(!state.can_submit());

    state.finish("a summary".to_owned());
    let entries = state.transcript.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].role, entries[0].text.as_str()), (Role::Question, "what is this?"));
    assert_eq!((entries[1].role, entries[1].text.as_str()), (Role::Answer, "a summary"));
    assert!(!state.loading);
}

#[test]
fn document_selection_survives_exchanges() {
    let mut state = QueryState { document_id: "5".to_owned(), ..QueryState::default() };
    for i in 0..3 {
        state.begin(&request(&format!("q{i}")));
        state.finish(format!("a{i}"));
    }
    assert_eq!(state.transcript.len(), 6);
    assert_eq!(state.document_id, "5");
}
