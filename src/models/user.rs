use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::FitnessGoal;

/// A registered account as kept by the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub fitness_goal: FitnessGoal,

    #[serde(default)]
    pub age: Option<u32>,

    /// Body weight in pounds.
    #[serde(default)]
    pub weight: Option<u32>,

    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Whether `password` matches the stored credential.
    pub fn verify_password(&self, password: &str) -> bool {
        self.password_hash == hash_password(&self.username, password)
    }
}

/// Registration form input, before validation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub fitness_goal: FitnessGoal,
    pub age: Option<u32>,
    pub weight: Option<u32>,
}

/// Hex SHA-256 of the password, salted with the username.
pub fn hash_password(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
