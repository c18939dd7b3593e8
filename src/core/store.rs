//! The visit store: owns both collections and persists after every change.

use crate::config::Config;
use crate::core::query::{self, Scope, VisitFilter};
use crate::core::validate;
use crate::db::persistence::{Loaded, Persistence, TEAM_KEY, VISITS_KEY, load_json, save_json};
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::models::checkin::CheckIn;
use crate::models::engagement::Engagement;
use crate::models::field::NoteField;
use crate::models::patch::VisitPatch;
use crate::models::status::{Status, default_statuses};
use crate::models::team::{TeamMember, default_roster, member_name};
use crate::models::visit::{VisitRecord, assign_missing_ids};
use crate::utils::date;
use crate::utils::id::fresh_id;

/// What the store needs from configuration.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub default_team: Vec<TeamMember>,
    pub statuses: Vec<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            default_team: default_roster(),
            statuses: default_statuses().into_iter().map(|s| s.id).collect(),
        }
    }
}

impl StoreSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            default_team: cfg.team.clone(),
            statuses: cfg.status_ids(),
        }
    }
}

pub struct Store<P: Persistence> {
    persistence: P,
    visits: Vec<VisitRecord>,
    team: Vec<TeamMember>,
    statuses: Vec<String>,
    warning: Option<String>,
}

impl<P: Persistence> Store<P> {
    /// Loads both collections. Missing or unreadable values fall back to
    /// the default roster and an empty visit list; a freshly seeded roster
    /// is written back right away.
    pub fn open(persistence: P, settings: StoreSettings) -> Self {
        let mut warnings = Vec::new();

        let (team, seeded) = match load_json::<Vec<TeamMember>, _>(&persistence, TEAM_KEY) {
            Loaded::Found(team) => (team, false),
            Loaded::Missing => (settings.default_team.clone(), true),
            Loaded::Corrupt(msg) => {
                warnings.push(msg);
                (settings.default_team.clone(), true)
            }
        };

        let mut visits = match load_json::<Vec<VisitRecord>, _>(&persistence, VISITS_KEY) {
            Loaded::Found(visits) => visits,
            Loaded::Missing => Vec::new(),
            Loaded::Corrupt(msg) => {
                warnings.push(msg);
                Vec::new()
            }
        };
        assign_missing_ids(&mut visits);

        let mut store = Self {
            persistence,
            visits,
            team,
            statuses: settings.statuses,
            warning: None,
        };

        if seeded {
            store.commit("init", TEAM_KEY, "Seeded default team roster");
        }
        if !warnings.is_empty() {
            let mut all = warnings;
            all.extend(store.warning.take());
            store.warning = Some(all.join("; "));
        }
        store
    }

    pub fn visits(&self) -> &[VisitRecord] {
        &self.visits
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn get(&self, id: &str) -> Option<&VisitRecord> {
        self.visits.iter().find(|v| v.id == id)
    }

    pub fn member_name(&self, id: &str) -> &str {
        member_name(&self.team, id)
    }

    pub fn last_checkin(&self, id: &str) -> Option<&CheckIn> {
        self.get(id).and_then(VisitRecord::last_checkin)
    }

    /// Non-fatal problem from the last write (or from loading), if any.
    /// Cleared by the next successful write.
    pub fn persistence_warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn into_persistence(self) -> P {
        self.persistence
    }

    /// Filtered, sorted view of the current visits.
    pub fn query(&self, filter: &VisitFilter, scope: &Scope) -> Vec<&VisitRecord> {
        query::run(&self.visits, filter, scope)
    }

    fn position(&self, id: &str) -> AppResult<usize> {
        self.visits
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Writes both collections and the log line. A failed write leaves the
    /// in-memory state as is and is kept as a warning; the next commit
    /// writes everything again.
    fn commit(&mut self, operation: &str, target: &str, message: &str) {
        let saved = save_json(&mut self.persistence, VISITS_KEY, &self.visits)
            .and_then(|_| save_json(&mut self.persistence, TEAM_KEY, &self.team));

        self.warning = match saved {
            Ok(()) => self
                .persistence
                .log(operation, target, message)
                .err()
                .map(|e| format!("operation log not written: {e}")),
            Err(e) => Some(format!("changes kept in memory but not saved: {e}")),
        };
    }

    fn unused_id(&self) -> String {
        loop {
            let id = fresh_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Creates a visit from a blank form plus `fields`, assigns it an id and
    /// puts it first in the collection.
    pub fn create(&mut self, fields: VisitPatch) -> AppResult<&VisitRecord> {
        let assigned = self.team.first().map(|m| m.id.as_str()).unwrap_or("");
        let mut record = VisitRecord::blank(&date::today_iso(), assigned);
        if let Some(first) = self.statuses.first() {
            record.status = Status::parse(first);
        }

        fields.apply_to(&mut record)?;
        validate::check_new(&record, &self.statuses)?;

        record.id = self.unused_id();
        let message = format!("Added visit to {} ({})", record.venue_name, record.chain);
        let id = record.id.clone();
        self.visits.insert(0, record);
        self.commit("add", &id, &message);

        Ok(&self.visits[0])
    }

    /// Merges `patch` into the visit with `id`. Only the named fields are
    /// validated and changed; a rejected patch changes nothing.
    pub fn update(&mut self, id: &str, patch: &VisitPatch) -> AppResult<&VisitRecord> {
        let idx = self.position(id)?;

        let mut updated = self.visits[idx].clone();
        patch.apply_to(&mut updated)?;
        validate::check_fields(&updated, patch.fields(), &self.statuses)?;

        let names: Vec<&str> = patch.fields().map(|f| f.name()).collect();
        self.visits[idx] = updated;
        self.commit("edit", id, &format!("Updated {}", names.join(", ")));

        Ok(&self.visits[idx])
    }

    /// Deletes the visit with `id`. Returns false (and changes nothing)
    /// when there is no such visit.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(idx) = self.visits.iter().position(|v| v.id == id) else {
            return false;
        };
        let removed = self.visits.remove(idx);
        self.commit(
            "del",
            id,
            &format!("Deleted visit to {} ({})", removed.venue_name, removed.chain),
        );
        true
    }

    /// Appends a check-in; earlier ones are left untouched.
    pub fn append_checkin(&mut self, id: &str, checkin: CheckIn) -> AppResult<&CheckIn> {
        let idx = self.position(id)?;
        let message = if checkin.has_position() {
            format!(
                "Check-in at {} ({}, {})",
                checkin.ts,
                checkin.lat.unwrap_or_default(),
                checkin.lon.unwrap_or_default()
            )
        } else {
            format!("Check-in at {} (no position)", checkin.ts)
        };
        self.visits[idx].checkins.push(checkin);
        self.commit("checkin", id, &message);

        let visit = &self.visits[idx];
        visit
            .last_checkin()
            .ok_or_else(|| AppError::Other(format!("check-in for '{id}' was not recorded")))
    }

    /// Moves the engagement rating by `delta`, clamped to 1..=5.
    pub fn adjust_engagement(&mut self, id: &str, delta: i64) -> AppResult<Engagement> {
        let idx = self.position(id)?;
        let before = self.visits[idx].staffs_engagement;
        let after = before.step(delta);
        self.visits[idx].staffs_engagement = after;
        self.commit("edit", id, &format!("Engagement {before} -> {after}"));
        Ok(after)
    }

    /// Marks the visit completed with today's date.
    pub fn complete_today(&mut self, id: &str) -> AppResult<&VisitRecord> {
        let idx = self.position(id)?;
        let today = date::today_iso();
        let visit = &mut self.visits[idx];
        visit.visit_date = today.clone();
        visit.status = Status::Completed;
        self.commit("edit", id, &format!("Completed on {today}"));
        Ok(&self.visits[idx])
    }

    /// Appends a dictated (or typed) note to `problems` or `followUp`,
    /// separated from existing text by a space. Blank text is ignored.
    pub fn append_note(&mut self, id: &str, field: NoteField, text: &str) -> AppResult<&VisitRecord> {
        let idx = self.position(id)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(&self.visits[idx]);
        }

        let field = field.field();
        let current = self.visits[idx].get(field);
        let joined = if current.is_empty() {
            text.to_string()
        } else {
            format!("{current} {text}")
        };
        self.visits[idx].set(field, &joined);
        self.commit("edit", id, &format!("Note appended to {}", field.name()));
        Ok(&self.visits[idx])
    }

    /// Replaces the whole visit collection. Ids are made unique first.
    pub fn replace_all(&mut self, mut records: Vec<VisitRecord>) {
        assign_missing_ids(&mut records);
        let message = format!(
            "Replaced {} visit(s) with {} visit(s)",
            self.visits.len(),
            records.len()
        );
        self.visits = records;
        self.commit("import", "visits", &message);
    }

    /// Decodes CSV text and replaces every stored visit with its rows.
    /// A file without a header leaves the store untouched.
    pub fn import_csv(&mut self, text: &str) -> AppResult<usize> {
        let records = export::csv::decode(text)?;
        let count = records.len();
        self.replace_all(records);
        Ok(count)
    }

    pub fn export_csv(&self) -> AppResult<String> {
        export::csv::encode(&self.visits)
    }

    pub fn export_json(&self) -> AppResult<String> {
        export::json::encode(&self.visits)
    }

    pub fn rename_member(&mut self, id: &str, name: &str) -> AppResult<&TeamMember> {
        let idx = self
            .team
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::UnknownMember(id.to_string()))?;
        let old = std::mem::replace(&mut self.team[idx].name, name.to_string());
        self.commit("team", id, &format!("Renamed '{old}' to '{name}'"));
        Ok(&self.team[idx])
    }
}
