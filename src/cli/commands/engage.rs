use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::engagement::Engagement;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Engage { id, up, down } = cmd {
        let delta = match (*up, *down) {
            (true, _) => 1,
            (_, true) => -1,
            _ => 0,
        };

        let mut store = open_store(cfg)?;
        let value = store.adjust_engagement(id, delta)?;
        success(format!("Engagement for {id}: {value}/{}", Engagement::MAX));
        report_persistence(&store);
    }
    Ok(())
}
