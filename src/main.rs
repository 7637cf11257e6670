use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use macrave_rs::catalog::{highlights, load_catalog, InMemoryCatalog, MenuCatalog};
use macrave_rs::cli::{Cli, Command};
use macrave_rs::config::Settings;
use macrave_rs::engine::{
    filter_by_category, rank_suggestions_with, HIGHLIGHTS_LIMIT, HIGHLIGHTS_PER_RESTAURANT,
};
use macrave_rs::error::{MacraveError, Result};
use macrave_rs::interface::{
    display_categories, display_goals, display_highlights, display_item_card, display_menu,
    display_restaurants, display_suggestions, display_user, prompt_login, prompt_registration,
    prompt_restaurant_choice, write_suggestions_csv,
};
use macrave_rs::models::{FitnessGoal, MenuItem, MenuResponse};
use macrave_rs::session::{self, JsonFileSessionStore, SessionRepository};

/// How many "did you mean" restaurants to offer.
const RESTAURANT_SUGGESTIONS: usize = 5;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;

    match cli.command {
        Command::Restaurants => cmd_restaurants(&settings),
        Command::Menu {
            restaurant,
            category,
            json,
        } => cmd_menu(&settings, &restaurant, &category, json),
        Command::Categories { restaurant } => cmd_categories(&settings, &restaurant),
        Command::Item { restaurant, name } => cmd_item(&settings, &restaurant, &name),
        Command::Suggest {
            restaurant,
            goal,
            category,
            json,
            csv,
        } => cmd_suggest(&settings, &restaurant, goal.as_deref(), &category, json, csv.as_deref()),
        Command::Highlights { goal } => cmd_highlights(&settings, goal.as_deref()),
        Command::Goals => {
            display_goals();
            Ok(())
        }
        Command::Register => cmd_register(&settings),
        Command::Login => cmd_login(&settings),
        Command::Logout => cmd_logout(&settings),
        Command::Whoami => cmd_whoami(&settings),
        Command::SetGoal { goal } => cmd_set_goal(&settings, &goal),
    }
}

/// Resolve a restaurant name, offering close matches when interactive.
fn resolve_restaurant<'c>(
    catalog: &'c InMemoryCatalog,
    wanted: &str,
    interactive: bool,
) -> Result<(String, &'c [MenuItem])> {
    match catalog.lookup(wanted) {
        Ok(items) => Ok((wanted.to_string(), items)),
        Err(MacraveError::RestaurantNotFound(name)) if interactive => {
            let candidates = catalog.closest_restaurants(&name, RESTAURANT_SUGGESTIONS);
            match prompt_restaurant_choice(&name, &candidates)? {
                Some(chosen) => {
                    let items = catalog.lookup(&chosen)?;
                    Ok((chosen, items))
                }
                None => Err(MacraveError::RestaurantNotFound(name)),
            }
        }
        Err(e) => Err(e),
    }
}

/// An explicit goal wins; otherwise use the logged-in user's goal.
fn resolve_goal(settings: &Settings, explicit: Option<&str>) -> Result<FitnessGoal> {
    if let Some(goal) = explicit {
        return goal.parse();
    }

    let store = JsonFileSessionStore::open(&settings.session_path)?;
    match store.current()? {
        Some(user) => Ok(user.fitness_goal),
        None => Err(MacraveError::InvalidInput(
            "no fitness goal given: pass --goal or log in".to_string(),
        )),
    }
}

fn cmd_restaurants(settings: &Settings) -> Result<()> {
    let catalog = load_catalog(&settings.catalog_path)?;
    display_restaurants(&catalog.restaurants());
    Ok(())
}

fn cmd_menu(settings: &Settings, restaurant: &str, category: &str, json: bool) -> Result<()> {
    let catalog = load_catalog(&settings.catalog_path)?;
    let (restaurant, items) = resolve_restaurant(&catalog, restaurant, !json)?;
    let filtered = filter_by_category(items, category);

    if json {
        let owned: Vec<MenuItem> = filtered.into_iter().cloned().collect();
        let response = MenuResponse { items: &owned };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display_menu(&restaurant, &filtered, category);
    }
    Ok(())
}

fn cmd_categories(settings: &Settings, restaurant: &str) -> Result<()> {
    let catalog = load_catalog(&settings.catalog_path)?;
    let (restaurant, _) = resolve_restaurant(&catalog, restaurant, true)?;
    display_categories(&restaurant, &catalog.categories(&restaurant)?);
    Ok(())
}

fn cmd_item(settings: &Settings, restaurant: &str, name: &str) -> Result<()> {
    let catalog = load_catalog(&settings.catalog_path)?;
    let (restaurant, _) = resolve_restaurant(&catalog, restaurant, true)?;
    let item = catalog.find_item(&restaurant, name)?;
    display_item_card(&restaurant, item);
    Ok(())
}

fn cmd_suggest(
    settings: &Settings,
    restaurant: &str,
    goal: Option<&str>,
    category: &str,
    json: bool,
    csv_path: Option<&std::path::Path>,
) -> Result<()> {
    // Goal errors surface before any catalog work
    let goal = resolve_goal(settings, goal)?;

    let catalog = load_catalog(&settings.catalog_path)?;
    let (restaurant, items) = resolve_restaurant(&catalog, restaurant, !json)?;

    let unscorable = items.iter().filter(|i| i.macros().is_none()).count();
    if unscorable > 0 {
        warn!(
            restaurant = %restaurant,
            unscorable,
            "some menu items lack nutrition data and were not ranked"
        );
    }

    let result = rank_suggestions_with(items, goal, category, &settings.weights);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_suggestions(&restaurant, goal, category, &result, &settings.weights);
    }

    if let Some(path) = csv_path {
        write_suggestions_csv(&result, goal, &settings.weights, path)?;
        if !json {
            println!("Ranking written to {}", path.display());
        }
    }

    Ok(())
}

fn cmd_highlights(settings: &Settings, goal: Option<&str>) -> Result<()> {
    let goal = resolve_goal(settings, goal)?;
    let catalog = load_catalog(&settings.catalog_path)?;
    let picks = highlights(
        &catalog,
        goal,
        &settings.weights,
        HIGHLIGHTS_PER_RESTAURANT,
        HIGHLIGHTS_LIMIT,
    );
    display_highlights(goal, &picks);
    Ok(())
}

fn cmd_register(settings: &Settings) -> Result<()> {
    let mut store = JsonFileSessionStore::open(&settings.session_path)?;
    let form = prompt_registration()?;
    let user = session::register(&mut store, form)?;
    println!("Account created.");
    display_user(&user);
    Ok(())
}

fn cmd_login(settings: &Settings) -> Result<()> {
    let mut store = JsonFileSessionStore::open(&settings.session_path)?;
    let (username, password) = prompt_login()?;
    let user = session::login(&mut store, &username, &password)?;
    display_user(&user);
    Ok(())
}

fn cmd_logout(settings: &Settings) -> Result<()> {
    let mut store = JsonFileSessionStore::open(&settings.session_path)?;
    session::logout(&mut store)?;
    println!("Logged out.");
    Ok(())
}

fn cmd_whoami(settings: &Settings) -> Result<()> {
    let store = JsonFileSessionStore::open(&settings.session_path)?;
    match store.current()? {
        Some(user) => display_user(&user),
        None => println!("Not logged in. Use 'macrave login' or 'macrave register'."),
    }
    Ok(())
}

fn cmd_set_goal(settings: &Settings, goal: &str) -> Result<()> {
    let goal: FitnessGoal = goal.parse()?;
    let mut store = JsonFileSessionStore::open(&settings.session_path)?;
    let user = session::update_goal(&mut store, goal)?;
    let profile = user.fitness_goal.profile();
    println!("Goal updated to {} {}.", profile.label, profile.icon);
    Ok(())
}
