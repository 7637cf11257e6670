use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MacraveError, Result};
use crate::models::UserProfile;

/// Storage for registered users and the currently signed-in one.
pub trait SessionRepository {
    fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>>;

    /// Store a new user. Fails with `UsernameTaken` if the name exists.
    fn create(&mut self, user: UserProfile) -> Result<()>;

    /// Replace an existing user's stored profile.
    fn update(&mut self, user: UserProfile) -> Result<()>;

    /// Mark a stored user as signed in.
    fn set_current(&mut self, username: &str) -> Result<()>;

    /// The signed-in user, if any.
    fn current(&self) -> Result<Option<UserProfile>>;

    /// Sign out.
    fn clear(&mut self) -> Result<()>;
}

/// Serialized form shared by the stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SessionState {
    #[serde(default)]
    pub users: BTreeMap<String, UserProfile>,

    #[serde(default)]
    pub current: Option<String>,
}

impl SessionState {
    pub fn find(&self, username: &str) -> Option<UserProfile> {
        self.users.get(username).cloned()
    }

    pub fn create(&mut self, user: UserProfile) -> Result<()> {
        if self.users.contains_key(&user.username) {
            return Err(MacraveError::UsernameTaken(user.username));
        }
        self.users.insert(user.username.clone(), user);
        Ok(())
    }

    pub fn update(&mut self, user: UserProfile) -> Result<()> {
        match self.users.get_mut(&user.username) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(MacraveError::UnknownUser(user.username)),
        }
    }

    pub fn set_current(&mut self, username: &str) -> Result<()> {
        if !self.users.contains_key(username) {
            return Err(MacraveError::UnknownUser(username.to_string()));
        }
        self.current = Some(username.to_string());
        Ok(())
    }

    /// A dangling current name (user removed by hand) reads as signed out.
    pub fn current(&self) -> Option<UserProfile> {
        self.current.as_deref().and_then(|name| self.find(name))
    }
}

/// Session store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    state: SessionState,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionStore {
    fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>> {
        Ok(self.state.find(username))
    }

    fn create(&mut self, user: UserProfile) -> Result<()> {
        self.state.create(user)
    }

    fn update(&mut self, user: UserProfile) -> Result<()> {
        self.state.update(user)
    }

    fn set_current(&mut self, username: &str) -> Result<()> {
        self.state.set_current(username)
    }

    fn current(&self) -> Result<Option<UserProfile>> {
        Ok(self.state.current())
    }

    fn clear(&mut self) -> Result<()> {
        self.state.current = None;
        Ok(())
    }
}
