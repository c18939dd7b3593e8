use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::checkin::{CheckIn, GeoPoint};
use crate::ui::messages::{info, success};
use crate::utils::date::display_instant;

/// Records a check-in. Coordinates come from whatever location source the
/// caller has; without them the check-in is still recorded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { id, lat, lon } = cmd {
        let position = match (lat, lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint { lat: *lat, lon: *lon }),
            _ => None,
        };

        let mut store = open_store(cfg)?;
        let checkin = store.append_checkin(id, CheckIn::now(position))?;
        success(format!("Checked in to {id} at {}", display_instant(&checkin.ts)));
        if !checkin.has_position() {
            info("No position available: check-in recorded without coordinates.");
        }
        report_persistence(&store);
    }
    Ok(())
}
