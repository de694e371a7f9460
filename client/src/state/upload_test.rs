use super::*;

fn file() -> SelectedFile {
    SelectedFile { name: "report.pdf".to_owned(), size: 1024 }
}

#[test]
fn cannot_submit_without_file() {
    assert!(!UploadState::default().can_submit());
}

#[test]
fn selecting_enables_submit_and_clears_message() {
    let mut state = UploadState { message: Some("File uploaded successfully".to_owned()), ..UploadState::default() };
    state.select(Some(file()));
    assert!(state.can_submit());
    assert!(state.message.is_none());
}

#[test]
fn in_flight_upload_blocks_resubmit() {
    let mut state = UploadState::default();
    state.select(Some(file()));
    state.begin();
    assert!(!state.can_submit());
    state.finish("Error uploading file".to_owned());
    assert!(state.can_submit());
    assert_eq!(state.message.as_deref(), Some("Error uploading file"));
}

#[test]
fn clearing_selection_disables_submit() {
    let mut state = UploadState::default();
    state.select(Some(file()));
    state.select(None);
    assert!(!state.can_submit());
}
