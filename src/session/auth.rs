use chrono::Utc;
use tracing::info;

use crate::error::{MacraveError, Result};
use crate::models::{hash_password, FitnessGoal, NewUser, UserProfile};
use crate::session::repository::SessionRepository;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a registration form, store the user and sign them in.
pub fn register<R: SessionRepository + ?Sized>(repo: &mut R, form: NewUser) -> Result<UserProfile> {
    let username = form.username.trim().to_string();
    if username.is_empty() {
        return Err(MacraveError::InvalidInput("Username is required".to_string()));
    }
    if form.password != form.confirm_password {
        return Err(MacraveError::InvalidInput("Passwords do not match".to_string()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MacraveError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if repo.find_by_username(&username)?.is_some() {
        return Err(MacraveError::UsernameTaken(username));
    }

    let name = match form.name.trim() {
        "" => username.clone(),
        n => n.to_string(),
    };

    let user = UserProfile {
        password_hash: hash_password(&username, &form.password),
        username,
        name,
        fitness_goal: form.fitness_goal,
        age: form.age,
        weight: form.weight,
        created_at: Utc::now(),
    };

    repo.create(user.clone())?;
    repo.set_current(&user.username)?;
    info!(username = %user.username, goal = %user.fitness_goal, "registered user");
    Ok(user)
}

/// Check credentials and sign the user in.
pub fn login<R: SessionRepository + ?Sized>(
    repo: &mut R,
    username: &str,
    password: &str,
) -> Result<UserProfile> {
    let username = username.trim();
    let user = repo
        .find_by_username(username)?
        .ok_or_else(|| MacraveError::UnknownUser(username.to_string()))?;

    if !user.verify_password(password) {
        return Err(MacraveError::IncorrectPassword);
    }

    repo.set_current(&user.username)?;
    info!(username = %user.username, "logged in");
    Ok(user)
}

pub fn logout<R: SessionRepository + ?Sized>(repo: &mut R) -> Result<()> {
    repo.clear()
}

/// The signed-in user, or `NotLoggedIn`.
pub fn require_current<R: SessionRepository + ?Sized>(repo: &R) -> Result<UserProfile> {
    repo.current()?.ok_or(MacraveError::NotLoggedIn)
}

/// Change the signed-in user's goal and persist it.
pub fn update_goal<R: SessionRepository + ?Sized>(
    repo: &mut R,
    goal: FitnessGoal,
) -> Result<UserProfile> {
    let mut user = require_current(repo)?;
    user.fitness_goal = goal;
    repo.update(user.clone())?;
    info!(username = %user.username, %goal, "updated fitness goal");
    Ok(user)
}
