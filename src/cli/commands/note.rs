use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Appends transcript text to a note field.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { id, field, text } = cmd {
        let mut store = open_store(cfg)?;
        let visit = store.append_note(id, *field, text)?;
        success(format!(
            "{} of {}: {}",
            field.field().name(),
            visit.id,
            visit.get(field.field())
        ));
        report_persistence(&store);
    }
    Ok(())
}
