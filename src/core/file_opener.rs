/*
 * Hands a chosen document to the platform's default "open" mechanism.
 * The confirmation step happens before this is called; an opener only launches.
 */
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum OpenError {
    Launch(io::Error),
    NotFound(PathBuf),
}

impl From<io::Error> for OpenError {
    fn from(err: io::Error) -> Self {
        OpenError::Launch(err)
    }
}

impl std::fmt::Display for OpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenError::Launch(e) => write!(f, "could not launch the default application: {e}"),
            OpenError::NotFound(p) => write!(f, "file {} no longer exists", p.display()),
        }
    }
}

impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpenError::Launch(e) => Some(e),
            OpenError::NotFound(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OpenError>;

pub trait FileOpenerOperations: Send + Sync {
    fn open(&self, path: &Path) -> Result<()>;
}

/* Opens files with the desktop's registered handler via the `open` crate. */
pub struct CoreFileOpener {}

impl CoreFileOpener {
    pub fn new() -> Self {
        CoreFileOpener {}
    }
}

impl Default for CoreFileOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOpenerOperations for CoreFileOpener {
    fn open(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(OpenError::NotFound(path.to_path_buf()));
        }
        log::debug!("FileOpener: Opening {path:?} with the default application.");
        if let Err(e) = open::that(path) {
            log::warn!("FileOpener: Failed to open {path:?}: {e}");
            return Err(OpenError::Launch(e));
        }
        log::info!("FileOpener: Opened {path:?}");
        Ok(())
    }
}
