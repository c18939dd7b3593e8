use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Team { rename, name } = cmd {
        let mut store = open_store(cfg)?;

        if let (Some(id), Some(name)) = (rename, name) {
            let member = store.rename_member(id, name)?;
            success(format!("Team member {} is now '{}'", member.id, member.name));
            report_persistence(&store);
            return Ok(());
        }

        header("Team");
        let mut table = Table::new(vec![
            Column::new("ID", 20),
            Column::new("NAME", 30),
            Column::new("VISITS", 6),
        ]);
        for m in store.team() {
            let count = store
                .visits()
                .iter()
                .filter(|v| v.assigned_to == m.id)
                .count();
            table.add_row(vec![m.id.clone(), m.name.clone(), count.to_string()]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
