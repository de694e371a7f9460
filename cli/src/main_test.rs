use std::io::Cursor;

use clap::CommandFactory;
use enquiry_core::Role;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn documents_list_defaults_to_first_page() {
    let cli = Cli::try_parse_from(["enquiry-cli", "documents", "list"]).unwrap();
    let Command::Documents(DocumentsCommand { command: DocumentsSubcommand::List { skip, limit } }) = cli.command else {
        panic!("expected documents list");
    };
    assert_eq!((skip, limit), (0, DOCUMENT_PAGE_SIZE));
}

#[test]
fn ask_requires_a_document() {
    assert!(Cli::try_parse_from(["enquiry-cli", "ask", "what is this?"]).is_err());
}

#[test]
fn read_upload_uses_file_name_unless_titled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let (meta, file) = read_upload(&path, None).unwrap();
    assert_eq!(meta, SelectedFile { name: "report.pdf".to_owned(), size: 8 });
    assert_eq!(file.name, "report.pdf");

    let (meta, file) = read_upload(&path, Some("Q3 report".to_owned())).unwrap();
    assert_eq!(meta.name, "Q3 report");
    assert_eq!(file.name, "report.pdf");
}

#[test]
fn read_upload_missing_file_names_the_path() {
    let err = read_upload(Path::new("/definitely/not/here.pdf"), None).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.pdf"));
}

#[test]
fn print_documents_lists_rows_or_empty_notice() {
    let mut out = Vec::new();
    print_documents(&[], &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No documents available\n");

    let docs = [DocumentRef {
        id: "7".to_owned(),
        title: "Handbook".to_owned(),
        status: Some("completed".to_owned()),
        created_at: None,
    }];
    let mut out = Vec::new();
    print_documents(&docs, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "7\tcompleted\tHandbook\n");
}

#[test]
fn api_errors_show_backend_detail() {
    let err = CliError::from(ApiError::from_status(400, r#"{"detail":"Email already registered"}"#));
    assert_eq!(err.to_string(), "Email already registered");
}

#[tokio::test]
async fn chat_records_each_question_and_stops_on_quit() {
    // No session: each question is answered with the not-logged-in text
    // without touching the network.
    let backend = ReqwestBackend::new("http://127.0.0.1:9");
    let session = Session::in_memory();
    let input = Cursor::new("first?\n\n  \nsecond?\nquit\nnever asked\n");
    let mut out = Vec::new();

    let transcript = run_chat(&backend, &session, "5", input, &mut out).await.unwrap();

    assert_eq!(transcript.len(), 4);
    let roles: Vec<Role> = transcript.entries().iter().map(|m| m.role).collect();
    assert_eq!(roles, [Role::Question, Role::Answer, Role::Question, Role::Answer]);
    assert_eq!(transcript.entries()[2].text, "second?");
    assert!(String::from_utf8(out).unwrap().contains("You are not logged in."));
}

#[tokio::test]
async fn chat_without_document_asks_nothing() {
    let backend = ReqwestBackend::new("http://127.0.0.1:9");
    let mut out = Vec::new();

    let transcript = run_chat(&backend, &Session::in_memory(), " ", Cursor::new("hello?\n"), &mut out)
        .await
        .unwrap();

    assert!(transcript.is_empty());
    assert_eq!(String::from_utf8(out).unwrap(), "Please select a document.\n");
}
