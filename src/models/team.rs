use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
}

impl TeamMember {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Roster seeded on first run.
pub fn default_roster() -> Vec<TeamMember> {
    vec![
        TeamMember::new("eleni", "Eleni"),
        TeamMember::new("member2", "Μέλος 2"),
        TeamMember::new("member3", "Μέλος 3"),
    ]
}

/// Display name for an `assignedTo` id; ids that no longer resolve are
/// shown as "unknown".
pub fn member_name<'a>(team: &'a [TeamMember], id: &str) -> &'a str {
    team.iter()
        .find(|m| m.id == id)
        .map(|m| m.name.as_str())
        .unwrap_or("unknown")
}
