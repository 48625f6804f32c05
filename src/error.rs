use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("No command specified.")]
    EmptyCommand,
    #[error("Please fill all fields.")]
    IncompleteInput,
    #[error("Application not found.")]
    NotFound(usize),
    #[error("settings I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("launch failed: {0}")]
    Launch(#[from] glib::Error),
}

impl LauncherError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LauncherError::Io { path: path.into(), source }
    }

    /// Heading for the modal alert shown when a user action fails.
    pub fn heading(&self) -> &'static str {
        match self {
            LauncherError::IncompleteInput => "Incomplete Input",
            LauncherError::NotFound(_) | LauncherError::Io { .. } | LauncherError::Json(_) => "Warning",
            LauncherError::EmptyCommand | LauncherError::Launch(_) => "Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
