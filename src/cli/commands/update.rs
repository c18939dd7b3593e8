use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::field::Field;
use crate::models::patch::VisitPatch;
use crate::ui::messages::success;

/// Handles `update` (field assignments) and `status` (status only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, patch) = match cmd {
        Commands::Update { id, set } => {
            let mut patch = VisitPatch::new();
            for raw in set {
                let (field, value) = VisitPatch::parse_assignment(raw)?;
                patch.push(field, value);
            }
            (id, patch)
        }
        Commands::Status { id, status } => (id, VisitPatch::new().set(Field::Status, status.clone())),
        _ => return Ok(()),
    };

    let mut store = open_store(cfg)?;
    let names: Vec<&str> = patch.fields().map(Field::name).collect();
    let visit = store.update(id, &patch)?;
    success(format!(
        "Visit {} ({}) updated: {}",
        visit.id,
        visit.venue_name,
        names.join(", ")
    ));
    report_persistence(&store);
    Ok(())
}
