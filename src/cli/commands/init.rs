use crate::cli::commands::open_store;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - the default team roster
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    info("Initializing fieldvisits…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {db_str}"));

    let cfg = Config {
        database: db_str.clone(),
        ..Config::load()?
    };
    let store = open_store(&cfg)?;

    success(format!(
        "Database initialized at {db_str} ({} team member(s), {} visit(s))",
        store.team().len(),
        store.visits().len()
    ));
    Ok(())
}
