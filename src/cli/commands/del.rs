use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;

        let Some(visit) = store.get(id) else {
            info(format!("No visit with id {id}; nothing deleted."));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete visit {} to {} ({}) on {}? This action is irreversible.",
            visit.id, visit.venue_name, visit.chain, visit.visit_date
        );
        if !*yes && !confirm(&prompt)? {
            info("Operation cancelled.");
            return Ok(());
        }

        if store.remove(id) {
            success(format!("Visit {id} has been deleted."));
        }
        report_persistence(&store);
    }

    Ok(())
}
