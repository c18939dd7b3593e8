//! Query engine: scope, filters, then newest visit date first.
//!
//! Everything here is a pure function of its inputs; nothing is cached
//! between calls.

use crate::models::visit::VisitRecord;
use crate::models::yes_no::YesNo;

/// Filter form. Unset or empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitFilter {
    /// Case-insensitive substring over the searchable text fields.
    pub q: Option<String>,
    /// `assignedTo` member id.
    pub member: Option<String>,
    pub status: Option<String>,
    pub follow_up: Option<YesNo>,
    pub chain: Option<String>,
    /// Inclusive lower bound on `visitDate` (`YYYY-MM-DD`).
    pub from: Option<String>,
    /// Inclusive upper bound on `visitDate` (`YYYY-MM-DD`).
    pub to: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl VisitFilter {
    pub fn is_empty(&self) -> bool {
        active(&self.q).is_none()
            && active(&self.member).is_none()
            && active(&self.status).is_none()
            && self.follow_up.is_none()
            && active(&self.chain).is_none()
            && active(&self.from).is_none()
            && active(&self.to).is_none()
    }

    pub fn matches(&self, v: &VisitRecord) -> bool {
        if let Some(q) = active(&self.q)
            && !v.search_text().contains(&q.to_lowercase())
        {
            return false;
        }
        if let Some(member) = active(&self.member)
            && v.assigned_to != member
        {
            return false;
        }
        if let Some(status) = active(&self.status)
            && v.status.as_str() != status
        {
            return false;
        }
        if let Some(flag) = self.follow_up
            && v.needs_follow_up != flag
        {
            return false;
        }
        if let Some(chain) = active(&self.chain)
            && v.chain != chain
        {
            return false;
        }
        // ISO dates order the same as text.
        if let Some(from) = active(&self.from)
            && v.visit_date.as_str() < from
        {
            return false;
        }
        if let Some(to) = active(&self.to)
            && v.visit_date.as_str() > to
        {
            return false;
        }
        true
    }
}

/// Currently selected chain / sub-chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub chain: Option<String>,
    pub sub_chain: Option<String>,
}

impl Scope {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn chain(chain: &str) -> Self {
        Self {
            chain: Some(chain.to_string()),
            sub_chain: None,
        }
    }

    pub fn with_sub_chain(mut self, sub_chain: &str) -> Self {
        self.sub_chain = Some(sub_chain.to_string());
        self
    }

    pub fn admits(&self, v: &VisitRecord) -> bool {
        if let Some(chain) = active(&self.chain)
            && v.chain != chain
        {
            return false;
        }
        if let Some(sub) = active(&self.sub_chain)
            && v.sub_chain != sub
        {
            return false;
        }
        true
    }

    /// "All chains", "Chain" or "Chain / Sub-chain".
    pub fn label(&self) -> String {
        match (active(&self.chain), active(&self.sub_chain)) {
            (None, None) => "All chains".to_string(),
            (Some(c), None) => c.to_string(),
            (None, Some(s)) => format!("All chains / {s}"),
            (Some(c), Some(s)) => format!("{c} / {s}"),
        }
    }
}

/// Applies scope, then filters, then a stable sort by `visitDate`
/// descending (equal dates keep their stored order).
pub fn run<'a>(visits: &'a [VisitRecord], filter: &VisitFilter, scope: &Scope) -> Vec<&'a VisitRecord> {
    let mut out: Vec<&VisitRecord> = visits
        .iter()
        .filter(|v| scope.admits(v))
        .filter(|v| filter.matches(v))
        .collect();
    out.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
    out
}

/// Chains for navigation: configured ones first, then any other chain
/// found in the visits, each listed once.
pub fn chains(visits: &[VisitRecord], suggested: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let seen = suggested
        .iter()
        .map(String::as_str)
        .chain(visits.iter().map(|v| v.chain.as_str()))
        .filter(|c| !c.is_empty());
    for chain in seen {
        if !out.iter().any(|c| c == chain) {
            out.push(chain.to_string());
        }
    }
    out
}

/// Sub-chains recorded under `chain`, in first-seen order.
pub fn sub_chains(visits: &[VisitRecord], chain: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in visits.iter().filter(|v| v.chain == chain && !v.sub_chain.is_empty()) {
        if !out.contains(&v.sub_chain) {
            out.push(v.sub_chain.clone());
        }
    }
    out
}
