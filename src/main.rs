use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

use meal_planner_rs::cli::{Cli, Command};
use meal_planner_rs::config::Config;
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::interface::{
    display_day_plans, display_pinned, display_shopping_list, display_week_plan, prompt_checklist,
    prompt_day_choice, write_shopping_list_csv,
};
use meal_planner_rs::models::{Ingredient, Weekday};
use meal_planner_rs::state::{JsonFileStore, PlannerStateManager};
use meal_planner_rs::SAMPLE_PLAN;

type Manager = PlannerStateManager<JsonFileStore>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging starts before the config is read so a corrupt config is reported;
    // the config's level applies once it is known.
    let rust_log = std::env::var("RUST_LOG").ok();
    let initial = Config::default().log_directives(cli.verbose, rust_log.as_deref());
    let (filter, handle) = reload::Layer::new(EnvFilter::new(initial));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load(&cli.config)?;
    if let Some(dir) = cli.state_dir.clone() {
        config.state_dir = dir;
    }
    let directives = config.log_directives(cli.verbose, rust_log.as_deref());
    if let Err(e) = handle.reload(EnvFilter::new(&directives)) {
        warn!("could not apply log level '{}': {}", directives, e);
    }
    debug!("using state dir {}", config.state_dir.display());

    let mut manager = PlannerStateManager::new(JsonFileStore::new(&config.state_dir));
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Load { file } => cmd_load(&mut manager, &file),
        Command::Sample => upload(&mut manager, SAMPLE_PLAN),
        Command::Days => cmd_days(&manager),
        Command::Week => {
            display_week_plan(manager.week_plan());
            Ok(())
        }
        Command::Assign { weekday, day } => cmd_assign(&mut manager, weekday, &day),
        Command::Clear { weekday, all } => cmd_clear(&mut manager, weekday, all),
        Command::Add {
            weekday,
            meal,
            name,
            quantity,
        } => {
            let index = one_based(meal, "meal")?;
            manager.add_ingredient(weekday, index, Ingredient::new(name, quantity))?;
            println!("Added to {} meal {}.", weekday, meal);
            Ok(())
        }
        Command::Substitute {
            weekday,
            meal,
            ingredient,
            name,
            quantity,
        } => {
            let meal_index = one_based(meal, "meal")?;
            let ingredient_index = one_based(ingredient, "ingredient")?;
            let previous = manager.substitute_ingredient(
                weekday,
                meal_index,
                ingredient_index,
                Ingredient::new(name, quantity),
            )?;
            println!("Replaced {} ({}).", previous.name, previous.quantity);
            Ok(())
        }
        Command::List {
            json,
            prices,
            sources,
        } => cmd_list(&mut manager, &config, json, prices, sources),
        Command::Check { key } => {
            manager.check(&key)?;
            println!("Checked {}.", key);
            Ok(())
        }
        Command::Uncheck { key } => {
            manager.uncheck(&key)?;
            println!("Unchecked {}.", key);
            Ok(())
        }
        Command::CheckAll => {
            let count = manager.check_all()?;
            println!("Checked {} items.", count);
            Ok(())
        }
        Command::UncheckAll => {
            manager.uncheck_all()?;
            println!("Cleared all checkmarks.");
            Ok(())
        }
        Command::Tick => cmd_tick(&mut manager),
        Command::Export { file } => cmd_export(&mut manager, &config, &file),
        Command::Pin { name } => {
            let id = manager.pin_current(&name)?;
            println!("Pinned '{}' as {}.", name.trim(), id);
            Ok(())
        }
        Command::Unpin { id } => {
            let removed = manager.unpin(&id)?;
            println!("Removed pinned plan '{}'.", removed.name);
            Ok(())
        }
        Command::Pinned => {
            display_pinned(manager.pinned(), manager.current_plan_id());
            Ok(())
        }
        Command::Use { id } => {
            let days = manager.use_pinned(&id)?.days.len();
            println!("Using pinned plan {} ({} days).", id, days);
            Ok(())
        }
    }
}

/// Convert a 1-based CLI position to an index.
fn one_based(position: usize, what: &str) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| PlannerError::InvalidInput(format!("{} numbers start at 1", what)))
}

fn cmd_load(manager: &mut Manager, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)?;
    upload(manager, &content)
}

fn upload(manager: &mut Manager, content: &str) -> Result<()> {
    let plan = manager.upload_diet_plan(content)?;
    println!("Loaded diet plan with {} days.", plan.days.len());
    Ok(())
}

fn cmd_days(manager: &Manager) -> Result<()> {
    let plan = manager.diet_plan().ok_or(PlannerError::NoDietPlan)?;
    display_day_plans(plan);
    Ok(())
}

fn cmd_assign(manager: &mut Manager, weekday: Weekday, day: &str) -> Result<()> {
    let plan = manager.diet_plan().ok_or(PlannerError::NoDietPlan)?;
    let Some(day_id) = prompt_day_choice(plan, day)? else {
        return Ok(());
    };

    let meals = manager.assign_day(weekday, &day_id)?.len();
    println!("Assigned {} to {} ({} meals).", day_id, weekday, meals);
    Ok(())
}

fn cmd_clear(manager: &mut Manager, weekday: Option<Weekday>, all: bool) -> Result<()> {
    match (weekday, all) {
        (_, true) => {
            manager.clear_week()?;
            println!("Cleared the week plan.");
        }
        (Some(day), false) => {
            manager.clear_day(day)?;
            println!("Cleared {}.", day);
        }
        (None, false) => {
            println!("Please specify a weekday or --all.");
        }
    }
    Ok(())
}

fn cmd_list(
    manager: &mut Manager,
    config: &Config,
    json: bool,
    prices: bool,
    sources: bool,
) -> Result<()> {
    let list = manager.shopping_list();

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    let estimator;
    let estimate;
    let priced = if prices {
        estimator = config.price_estimator()?;
        estimate = estimator.estimate_list(&list);
        Some((&estimate, estimator.currency()))
    } else {
        None
    };

    display_shopping_list(&list, manager.checklist(), priced, sources);
    Ok(())
}

fn cmd_tick(manager: &mut Manager) -> Result<()> {
    let list = manager.shopping_list();
    if list.is_empty() {
        println!("Shopping list is empty.");
        return Ok(());
    }

    let checked = prompt_checklist(&list, manager.checklist())?;
    manager.set_checked_keys(&checked)?;

    let (done, total) = manager.progress(&list);
    println!("Checked {}/{} items.", done, total);
    Ok(())
}

fn cmd_export(manager: &mut Manager, config: &Config, file: &Path) -> Result<()> {
    let list = manager.shopping_list();
    let estimator = config.price_estimator()?;
    let rows = write_shopping_list_csv(file, &list, manager.checklist(), &estimator)?;
    println!("Wrote {} items to {}.", rows, file.display());
    Ok(())
}
