use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::UserProfile;
use crate::session::repository::{SessionRepository, SessionState};

/// Session store persisted as a single pretty-printed JSON file.
///
/// Every mutation is written through immediately.
#[derive(Debug)]
pub struct JsonFileSessionStore {
    path: PathBuf,
    state: SessionState,
}

impl JsonFileSessionStore {
    /// Open the store at `path`. A missing file starts an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            debug!(path = %path.display(), "session file not found, starting empty");
            SessionState::default()
        };
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SessionRepository for JsonFileSessionStore {
    fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>> {
        Ok(self.state.find(username))
    }

    fn create(&mut self, user: UserProfile) -> Result<()> {
        self.state.create(user)?;
        self.save()
    }

    fn update(&mut self, user: UserProfile) -> Result<()> {
        self.state.update(user)?;
        self.save()
    }

    fn set_current(&mut self, username: &str) -> Result<()> {
        self.state.set_current(username)?;
        self.save()
    }

    fn current(&self) -> Result<Option<UserProfile>> {
        Ok(self.state.current())
    }

    fn clear(&mut self) -> Result<()> {
        self.state.current = None;
        self.save()
    }
}
