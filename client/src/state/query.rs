//! Query/chat view state.
//!
//! DESIGN
//! ======
//! The question is appended when the request starts and the answer (or error
//! text) when it completes. The loading flag blocks a second submit, so a
//! question is always directly followed by its own answer.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use enquiry_core::{DocumentRef, QueryRequest, Transcript};

#[derive(Clone, Debug, Default)]
pub struct QueryState {
    pub documents: Vec<DocumentRef>,
    pub documents_loading: bool,
    pub document_id: String,
    pub question: String,
    pub transcript: Transcript,
    /// Validation hint shown above the form.
    pub notice: Option<String>,
    pub loading: bool,
}

impl QueryState {
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.document_id.trim().is_empty() && !self.question.trim().is_empty()
    }

    /// Title of the picked document, if it is in the loaded page.
    pub fn selected_title(&self) -> Option<&str> {
        let id = self.document_id.trim();
        self.documents.iter().find(|d| d.id == id).map(|d| d.title.as_str())
    }

    pub fn set_documents(&mut self, documents: Vec<DocumentRef>) {
        self.documents = documents;
        self.documents_loading = false;
    }

    pub fn begin(&mut self, request: &QueryRequest) {
        self.transcript.push_question(request.question.clone());
        self.question.clear();
        self.notice = None;
        self.loading = true;
    }

    pub fn finish(&mut self, answer: String) {
        self.transcript.push_answer(answer);
        self.loading = false;
    }
}
