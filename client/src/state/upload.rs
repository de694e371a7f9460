//! Upload view state.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use enquiry_core::forms::SelectedFile;

#[derive(Clone, Debug, Default)]
pub struct UploadState {
    /// Metadata of the picked file; the `File` handle itself stays in the DOM.
    pub selected: Option<SelectedFile>,
    pub message: Option<String>,
    pub loading: bool,
}

impl UploadState {
    /// Submit is enabled once a file is picked and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.loading
    }

    pub fn select(&mut self, file: Option<SelectedFile>) {
        self.selected = file;
        self.message = None;
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.message = None;
    }

    pub fn finish(&mut self, message: String) {
        self.loading = false;
        self.message = Some(message);
    }
}
