mod backend;
mod session_file;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use enquiry_core::forms::{SelectedFile, validate_query};
use enquiry_core::{ApiError, Backend, DOCUMENT_PAGE_SIZE, DocumentRef, Session, Transcript, flows};

use crate::backend::{ReqwestBackend, UploadFile};
use crate::session_file::FileSession;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", .0.user_message(&.0.to_string()))]
    Api(#[from] ApiError),
    #[error("no config directory on this platform; pass --session-file or set ENQUIRY_SESSION_FILE")]
    NoSessionPath,
    #[error("cannot read {path}: {source}")]
    ReadFile { path: String, source: io::Error },
    #[error("I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "enquiry-cli", about = "Document Enquiry System command-line client")]
struct Cli {
    #[arg(long, env = "ENQUIRY_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Where the bearer token is kept between runs.
    #[arg(long, env = "ENQUIRY_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Log request details to stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Signup(CredentialArgs),
    /// Log in and store the session token.
    Login(CredentialArgs),
    /// Forget the stored session token.
    Logout,
    /// Report whether a session token is stored.
    Whoami,
    Documents(DocumentsCommand),
    /// Ask one question about a document.
    Ask {
        #[arg(long)]
        document: String,
        question: String,
    },
    /// Ask questions read line by line from stdin.
    Chat {
        #[arg(long)]
        document: String,
    },
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(short, long)]
    username: String,

    #[arg(short, long, env = "ENQUIRY_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct DocumentsCommand {
    #[command(subcommand)]
    command: DocumentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum DocumentsSubcommand {
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = DOCUMENT_PAGE_SIZE)]
        limit: u32,
    },
    Upload {
        path: PathBuf,
        /// Document title; defaults to the file name.
        #[arg(long)]
        title: Option<String>,
    },
    Status {
        id: String,
    },
    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let session_path = match cli.session_file {
        Some(path) => path,
        None => session_file::default_path().ok_or(CliError::NoSessionPath)?,
    };
    let store = FileSession::new(session_path);
    let session = Session::new(store.clone());
    let backend = ReqwestBackend::new(&cli.base_url);

    match cli.command {
        Command::Signup(args) => {
            let message = flows::signup(&backend, &args.username, &args.password).await?;
            println!("{message}");
        }
        Command::Login(args) => {
            flows::login(&backend, &session, &args.username, &args.password).await?;
            println!("Logged in. Token stored at {}", store.path().display());
        }
        Command::Logout => {
            flows::logout(&session)?;
            println!("Logged out.");
        }
        Command::Whoami => {
            if session.is_authenticated() {
                println!("Logged in (token at {})", store.path().display());
            } else {
                println!("Not logged in.");
            }
        }
        Command::Documents(documents) => run_documents(&backend, &session, documents).await?,
        Command::Ask { document, question } => {
            let request = validate_query(&document, &question)?;
            let answer = flows::query(&backend, &session, &request).await?;
            println!("{}", answer.answer);
            if let Some(score) = answer.confidence_score {
                eprintln!("confidence: {score:.2}");
            }
        }
        Command::Chat { document } => {
            eprintln!("Asking about document {document}. Type a question per line; `quit` or EOF ends.");
            let stdin = io::stdin();
            run_chat(&backend, &session, &document, stdin.lock(), io::stdout()).await?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

async fn run_documents(backend: &ReqwestBackend, session: &Session, documents: DocumentsCommand) -> Result<(), CliError> {
    match documents.command {
        DocumentsSubcommand::List { skip, limit } => {
            let authorization = session.authorization().ok_or_else(ApiError::not_logged_in)?;
            let docs = backend.list_documents(&authorization, skip, limit).await?;
            print_documents(&docs, &mut io::stdout())?;
        }
        DocumentsSubcommand::Upload { path, title } => {
            let (meta, file) = read_upload(&path, title)?;
            let result = flows::upload(backend, session, Some((meta, file))).await;
            let message = flows::upload_message(&result);
            let receipt = result?;
            println!("{message}");
            if let Some(id) = receipt.id {
                println!("id: {id}");
            }
        }
        DocumentsSubcommand::Status { id } => {
            let authorization = session.authorization().ok_or_else(ApiError::not_logged_in)?;
            let status = backend.document_status(&authorization, &id).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        DocumentsSubcommand::Delete { id } => {
            let authorization = session.authorization().ok_or_else(ApiError::not_logged_in)?;
            backend.delete_document(&authorization, &id).await?;
            println!("Deleted document {id}");
        }
    }
    Ok(())
}

/// Read a file for upload. The title defaults to the file name.
fn read_upload(path: &Path, title: Option<String>) -> Result<(SelectedFile, UploadFile), CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile { path: path.display().to_string(), source })?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let meta = SelectedFile { name: title.unwrap_or_else(|| name.clone()), size: bytes.len() as u64 };
    Ok((meta, UploadFile { name, bytes }))
}

fn print_documents(docs: &[DocumentRef], out: &mut impl Write) -> io::Result<()> {
    if docs.is_empty() {
        return writeln!(out, "No documents available");
    }
    for doc in docs {
        let status = doc.status.as_deref().unwrap_or("-");
        writeln!(out, "{}\t{}\t{}", doc.id, status, doc.title)?;
    }
    Ok(())
}

/// Question/answer loop over `input`; each answer is printed as it arrives.
async fn run_chat<B: Backend + ?Sized>(
    backend: &B,
    session: &Session,
    document_id: &str,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<Transcript, CliError> {
    let mut transcript = Transcript::new();
    for line in input.lines() {
        let line = line?;
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question, "quit" | "exit") {
            break;
        }
        match flows::ask(backend, session, &mut transcript, document_id, question).await {
            Ok(()) => {
                if let Some(answer) = transcript.last() {
                    writeln!(out, "{}\n", answer.text)?;
                }
            }
            Err(e) => writeln!(out, "{}", e.user_message(flows::QUERY_FAILED))?,
        }
        out.flush()?;
    }
    Ok(transcript)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
