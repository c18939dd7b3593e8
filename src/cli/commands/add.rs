use crate::cli::commands::{open_store, report_persistence};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::field::Field;
use crate::models::patch::VisitPatch;
use crate::ui::messages::success;

/// Record a new visit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        chain,
        sub_chain,
        venue,
        city,
        date,
        status,
        member,
        engagement,
        problems,
        follow_up,
        needs_follow_up,
        set,
    } = cmd
    {
        //
        // 1. Generic assignments first, so the dedicated flags win
        //
        let mut patch = VisitPatch::new();
        for raw in set {
            let (field, value) = VisitPatch::parse_assignment(raw)?;
            patch.push(field, value);
        }

        //
        // 2. Dedicated flags
        //
        let mut patch = patch
            .set_opt(Field::Chain, chain.clone())
            .set_opt(Field::SubChain, sub_chain.clone())
            .set_opt(Field::VenueName, venue.clone())
            .set_opt(Field::VenueCity, city.clone())
            .set_opt(Field::VisitDate, date.clone())
            .set_opt(Field::Status, status.clone())
            .set_opt(Field::AssignedTo, member.clone())
            .set_opt(Field::StaffsEngagement, engagement.map(|e| e.to_string()))
            .set_opt(Field::Problems, problems.clone())
            .set_opt(Field::FollowUp, follow_up.clone());
        if *needs_follow_up {
            patch.push(Field::NeedsFollowUp, "Yes");
        }

        //
        // 3. Create (validation happens in the store)
        //
        let mut store = open_store(cfg)?;
        let visit = store.create(patch)?;
        success(format!(
            "Visit {} added: {} ({}) on {}",
            visit.id, visit.venue_name, visit.chain, visit.visit_date
        ));
        report_persistence(&store);
    }

    Ok(())
}
