use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Complete { id } = cmd {
        let mut store = open_store(cfg)?;
        let visit = store.complete_today(id)?;
        success(format!(
            "Visit {} ({}) completed on {}",
            visit.id, visit.venue_name, visit.visit_date
        ));
        report_persistence(&store);
    }
    Ok(())
}
