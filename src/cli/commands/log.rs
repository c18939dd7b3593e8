use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::sqlite::SqlitePersistence;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let persistence = SqlitePersistence::open(&cfg.database)?;
        LogLogic::print_log(&persistence.log_entries()?)?;
    }

    Ok(())
}
