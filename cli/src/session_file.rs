//! Token persistence for the CLI: one file holding the bearer token.

use std::io;
use std::path::{Path, PathBuf};

use enquiry_core::{SessionError, SessionStore};

const APP_DIR: &str = "enquiry";
const SESSION_FILE: &str = "token";

/// `<config dir>/enquiry/token`, when the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SESSION_FILE))
}

#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_token(path: &Path, token: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, token)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

impl SessionStore for FileSession {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Some(raw.trim().to_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "session file unreadable");
                None
            }
        }
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        write_token(&self.path, token).map_err(|e| {
            tracing::warn!(error = %e, path = %self.path.display(), "session file not written");
            SessionError::Write(format!("{}: {e}", self.path.display()))
        })
    }

    fn remove(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "session file not removed");
                Err(SessionError::Write(format!("{}: {e}", self.path.display())))
            }
        }
    }
}

#[cfg(test)]
#[path = "session_file_test.rs"]
mod tests;
