use super::checkin::CheckIn;
use super::engagement::Engagement;
use super::field::{Field, FieldKind};
use super::status::Status;
use super::yes_no::YesNo;
use crate::utils::id::fresh_id;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One reported visit to a venue.
///
/// Serialized with camelCase keys, so the stored JSON and the CSV header
/// share the same field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitRecord {
    pub id: String,
    pub chain: String,
    pub sub_chain: String,
    pub venue_name: String,
    pub venue_city: String,
    pub oss_owner_name: String,
    pub efood: YesNo,
    pub training_owner: String,
    pub visit_date: String,
    pub needs_follow_up: YesNo,
    pub follow_up: String,
    pub store_manager: String,
    pub personnel: String,
    pub wolts_pickers: String,
    pub staffs_engagement: Engagement,
    pub store_size: String,
    pub store_layout: String,
    pub internet: String,
    pub contact_customers: YesNo,
    pub devices: String,
    pub firmware_update: YesNo,
    pub problems: String,
    pub status: Status,
    pub assigned_to: String,
    pub created_at: String,
    pub checkins: Vec<CheckIn>,
}

impl VisitRecord {
    /// Empty form: today's dates, planned, engagement 3, every flag "No".
    pub fn blank(today: &str, assigned_to: &str) -> Self {
        Self {
            visit_date: today.to_string(),
            created_at: today.to_string(),
            assigned_to: assigned_to.to_string(),
            ..Self::default()
        }
    }

    fn text(&self, field: Field) -> Option<&String> {
        Some(match field {
            Field::Id => &self.id,
            Field::Chain => &self.chain,
            Field::SubChain => &self.sub_chain,
            Field::VenueName => &self.venue_name,
            Field::VenueCity => &self.venue_city,
            Field::OssOwnerName => &self.oss_owner_name,
            Field::TrainingOwner => &self.training_owner,
            Field::VisitDate => &self.visit_date,
            Field::FollowUp => &self.follow_up,
            Field::StoreManager => &self.store_manager,
            Field::Personnel => &self.personnel,
            Field::WoltsPickers => &self.wolts_pickers,
            Field::StoreSize => &self.store_size,
            Field::StoreLayout => &self.store_layout,
            Field::Internet => &self.internet,
            Field::Devices => &self.devices,
            Field::Problems => &self.problems,
            Field::AssignedTo => &self.assigned_to,
            Field::CreatedAt => &self.created_at,
            _ => return None,
        })
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        Some(match field {
            Field::Id => &mut self.id,
            Field::Chain => &mut self.chain,
            Field::SubChain => &mut self.sub_chain,
            Field::VenueName => &mut self.venue_name,
            Field::VenueCity => &mut self.venue_city,
            Field::OssOwnerName => &mut self.oss_owner_name,
            Field::TrainingOwner => &mut self.training_owner,
            Field::VisitDate => &mut self.visit_date,
            Field::FollowUp => &mut self.follow_up,
            Field::StoreManager => &mut self.store_manager,
            Field::Personnel => &mut self.personnel,
            Field::WoltsPickers => &mut self.wolts_pickers,
            Field::StoreSize => &mut self.store_size,
            Field::StoreLayout => &mut self.store_layout,
            Field::Internet => &mut self.internet,
            Field::Devices => &mut self.devices,
            Field::Problems => &mut self.problems,
            Field::AssignedTo => &mut self.assigned_to,
            Field::CreatedAt => &mut self.created_at,
            _ => return None,
        })
    }

    fn flag_mut(&mut self, field: Field) -> Option<&mut YesNo> {
        match field {
            Field::Efood => Some(&mut self.efood),
            Field::NeedsFollowUp => Some(&mut self.needs_follow_up),
            Field::ContactCustomers => Some(&mut self.contact_customers),
            Field::FirmwareUpdate => Some(&mut self.firmware_update),
            _ => None,
        }
    }

    /// Field value as text. `checkins` renders as a compact JSON array.
    pub fn get(&self, field: Field) -> String {
        if let Some(s) = self.text(field) {
            return s.clone();
        }
        match field {
            Field::Efood => self.efood.to_string(),
            Field::NeedsFollowUp => self.needs_follow_up.to_string(),
            Field::ContactCustomers => self.contact_customers.to_string(),
            Field::FirmwareUpdate => self.firmware_update.to_string(),
            Field::StaffsEngagement => self.staffs_engagement.to_string(),
            Field::Status => self.status.to_string(),
            Field::Checkins => {
                serde_json::to_string(&self.checkins).unwrap_or_else(|_| "[]".to_string())
            }
            _ => String::new(),
        }
    }

    /// Writes a field from text, coercing into the field's domain. Never
    /// fails: bad engagement falls back to 3, bad check-in JSON to `[]`.
    pub fn set(&mut self, field: Field, value: &str) {
        match field.kind() {
            FieldKind::Text | FieldKind::Date => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = value.to_string();
                }
            }
            FieldKind::YesNo => {
                if let Some(flag) = self.flag_mut(field) {
                    *flag = YesNo::parse(value);
                }
            }
            FieldKind::Engagement => self.staffs_engagement = Engagement::parse(value),
            FieldKind::Status => self.status = Status::parse(value),
            FieldKind::CheckIns => {
                self.checkins = if value.trim().is_empty() {
                    Vec::new()
                } else {
                    serde_json::from_str(value).unwrap_or_default()
                };
            }
        }
    }

    /// Lower-cased text searched by the free-text filter.
    pub fn search_text(&self) -> String {
        Field::SEARCHABLE
            .iter()
            .map(|f| self.get(*f))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    pub fn last_checkin(&self) -> Option<&CheckIn> {
        self.checkins.last()
    }
}

/// Gives every record without an id, or with an id already used by an
/// earlier record, a fresh one. Returns how many ids were assigned.
pub fn assign_missing_ids(records: &mut [VisitRecord]) -> usize {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut assigned = 0;

    for record in records.iter_mut() {
        if record.id.is_empty() || seen.contains(&record.id) {
            let mut id = fresh_id();
            while seen.contains(&id) {
                id = fresh_id();
            }
            record.id = id;
            assigned += 1;
        }
        seen.insert(record.id.clone());
    }

    assigned
}
