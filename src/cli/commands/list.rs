use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::{self, Scope, VisitFilter};
use crate::core::store::Store;
use crate::db::persistence::Persistence;
use crate::errors::{AppError, AppResult};
use crate::models::visit::VisitRecord;
use crate::ui::messages::{header, info};
use crate::utils::date::{display_instant, is_iso_date};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::List {
            q,
            member,
            status,
            follow_up,
            chain,
            from,
            to,
            scope_chain,
            scope_sub_chain,
            details,
        } => {
            for bound in [from, to].into_iter().flatten() {
                if !bound.is_empty() && !is_iso_date(bound) {
                    return Err(AppError::InvalidDate(bound.clone()));
                }
            }

            let filter = VisitFilter {
                q: q.clone(),
                member: member.clone(),
                status: status.clone(),
                follow_up: *follow_up,
                chain: chain.clone(),
                from: from.clone(),
                to: to.clone(),
            };
            let scope = Scope {
                chain: scope_chain.clone(),
                sub_chain: scope_sub_chain.clone(),
            };

            let store = open_store(cfg)?;
            print_visits(&store, cfg, &filter, &scope, *details);
        }
        Commands::Chains => {
            let store = open_store(cfg)?;
            print_chains(store.visits(), &cfg.chains);
        }
        _ => {}
    }
    Ok(())
}

fn print_visits<P: Persistence>(
    store: &Store<P>,
    cfg: &Config,
    filter: &VisitFilter,
    scope: &Scope,
    details: bool,
) {
    let visits = store.query(filter, scope);

    header(format!("{} ({} of {})", scope.label(), visits.len(), store.visits().len()));

    if visits.is_empty() {
        if filter.is_empty() {
            info("No visits recorded yet.");
        } else {
            info("No visits match the current filters.");
        }
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 26),
        Column::new("DATE", 10),
        Column::new("CHAIN", 24),
        Column::new("VENUE", 28),
        Column::new("CITY", 16),
        Column::new("STATUS", 12),
        Column::new("MEMBER", 16),
        Column::new("ENG", 3),
        Column::new("F/U", 3),
        Column::new("LAST CHECK-IN", 16),
    ]);

    for v in &visits {
        let chain = if v.sub_chain.is_empty() {
            v.chain.clone()
        } else {
            format!("{} / {}", v.chain, v.sub_chain)
        };
        let last = v
            .last_checkin()
            .map(|c| display_instant(&c.ts))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            v.id.clone(),
            v.visit_date.clone(),
            chain,
            v.venue_name.clone(),
            v.venue_city.clone(),
            cfg.status_label(v.status.as_str()).to_string(),
            store.member_name(&v.assigned_to).to_string(),
            v.staffs_engagement.to_string(),
            v.needs_follow_up.to_string(),
            last,
        ]);
    }

    print!("{}", table.render());

    if details {
        for v in &visits {
            print_details(v);
        }
    }
}

fn print_details(v: &VisitRecord) {
    println!();
    println!("• {} – {} ({})", v.id, v.venue_name, v.visit_date);
    if !v.problems.is_empty() {
        println!("  Problems : {}", v.problems);
    }
    if !v.follow_up.is_empty() {
        println!("  Follow-up: {}", v.follow_up);
    }
    for c in &v.checkins {
        match (c.lat, c.lon) {
            (Some(lat), Some(lon)) => {
                println!("  Check-in : {} ({lat:.5}, {lon:.5})", display_instant(&c.ts))
            }
            _ => println!("  Check-in : {} (no position)", display_instant(&c.ts)),
        }
    }
}

fn print_chains(visits: &[VisitRecord], suggested: &[String]) {
    let chains = query::chains(visits, suggested);
    if chains.is_empty() {
        info("No chains configured or recorded.");
        return;
    }

    header("Chains");
    for chain in chains {
        let count = visits.iter().filter(|v| v.chain == chain).count();
        println!("{chain} ({count})");
        for sub in query::sub_chains(visits, &chain) {
            let count = visits
                .iter()
                .filter(|v| v.chain == chain && v.sub_chain == sub)
                .count();
            println!("  └ {sub} ({count})");
        }
    }
}
