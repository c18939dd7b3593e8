use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        let mut store = open_store(cfg)?;
        if ImportLogic::apply(&mut store, file, *yes)?.is_some() {
            report_persistence(&store);
        }
    }
    Ok(())
}
