//! Session persistence and the auth guard.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PanelError, Result};
use crate::models::User;
use crate::source::SessionProvider;

/// Stores the session cookie between invocations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved cookie, if any. A missing or blank file is no session.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let cookie = contents.trim();
                Ok((!cookie.is_empty()).then(|| cookie.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, cookie: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = private_options().open(&self.path)?;
        // The create mode does not apply to an existing file.
        restrict_permissions(&self.path)?;
        file.write_all(cookie.as_bytes())?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Removes the saved cookie. Clearing an absent session succeeds.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write-truncate options that create the file readable by the owner only.
fn private_options() -> fs::OpenOptions {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

/// Returns the logged-in user or [`PanelError::Unauthenticated`].
pub async fn require_user<P>(provider: &P) -> Result<User>
where
    P: SessionProvider + ?Sized,
{
    provider
        .current_user()
        .await?
        .ok_or(PanelError::Unauthenticated)
}
