use dialoguer::{Input, Password, Select};

use crate::error::Result;
use crate::models::{FitnessGoal, NewUser};

/// Prompt for a fitness goal, preselecting `default`.
pub fn prompt_goal(default: FitnessGoal) -> Result<FitnessGoal> {
    let options: Vec<String> = FitnessGoal::ALL
        .iter()
        .map(|g| {
            let profile = g.profile();
            format!("{} {} - {}", profile.icon, profile.label, profile.description)
        })
        .collect();

    let default_idx = FitnessGoal::ALL
        .iter()
        .position(|g| *g == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What is your fitness goal?")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(FitnessGoal::ALL[selection])
}

/// Collect the registration form. Validation happens in the auth flow.
pub fn prompt_registration() -> Result<NewUser> {
    let name: String = Input::new()
        .with_prompt("Name")
        .allow_empty(true)
        .interact_text()?;

    let username: String = Input::new().with_prompt("Username").interact_text()?;

    let password = Password::new().with_prompt("Password").interact()?;
    let confirm_password = Password::new().with_prompt("Confirm password").interact()?;

    let fitness_goal = prompt_goal(FitnessGoal::Cutting)?;

    let age: u32 = Input::new().with_prompt("Age").default(25).interact_text()?;
    let weight: u32 = Input::new()
        .with_prompt("Weight (lbs)")
        .default(150)
        .interact_text()?;

    Ok(NewUser {
        name,
        username,
        password,
        confirm_password,
        fitness_goal,
        age: Some(age),
        weight: Some(weight),
    })
}

/// Prompt for login credentials.
pub fn prompt_login() -> Result<(String, String)> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;
    Ok((username, password))
}

/// Offer close restaurant names after a failed lookup.
///
/// Returns the chosen name, or `None` if the user picks none of them.
pub fn prompt_restaurant_choice(wanted: &str, candidates: &[&str]) -> Result<Option<String>> {
    if candidates.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt(format!("No restaurant named '{}'. Did you mean", wanted))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).map(|c| c.to_string()))
}
