use serde::{Deserialize, Serialize};
use std::fmt;

/// Visit status.
///
/// The three built-in states cover the default configuration; any other id
/// (from a customised config or an imported sheet) is kept verbatim in
/// `Other` so it survives every round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Planned,
    Completed,
    Cancelled,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Planned => "planned",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
            Status::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "planned" => Status::Planned,
            "completed" => Status::Completed,
            "cancelled" => Status::Cancelled,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::parse(&s)
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured status: stored id plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDef {
    pub id: String,
    pub label: String,
}

impl StatusDef {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn default_statuses() -> Vec<StatusDef> {
    vec![
        StatusDef::new("planned", "Planned"),
        StatusDef::new("completed", "Completed"),
        StatusDef::new("cancelled", "Cancelled"),
    ]
}
