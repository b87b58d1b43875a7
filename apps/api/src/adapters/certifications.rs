#![allow(dead_code)]

//! Certifications section adapter (the side flow off the education step).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{encode_date, parse_date};
use crate::models::{CertificationItem, ResumeDocument};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationDraft {
    pub title: String,
    pub organization: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

fn draft_from_item(item: &CertificationItem) -> CertificationDraft {
    CertificationDraft {
        title: item.title.clone(),
        organization: item.organization.clone(),
        issue_date: parse_date(&item.issue_date),
        expiry_date: parse_date(&item.expiry_date),
    }
}

/// Loads the persisted slice, seeding one blank row when empty.
pub fn load(doc: &ResumeDocument) -> Vec<CertificationDraft> {
    if doc.certifications.is_empty() {
        return vec![CertificationDraft::default()];
    }
    doc.certifications.iter().map(draft_from_item).collect()
}

pub fn add_row(rows: &mut Vec<CertificationDraft>) {
    rows.push(CertificationDraft::default());
}

/// Removing is blocked while exactly one row remains.
pub fn remove_row(rows: &mut Vec<CertificationDraft>, index: usize) -> bool {
    if rows.len() <= 1 || index >= rows.len() {
        return false;
    }
    rows.remove(index);
    true
}

/// Re-encodes the drafts. An unset expiry stays the empty string,
/// meaning "does not expire".
pub fn submit(rows: &[CertificationDraft]) -> Vec<CertificationItem> {
    rows.iter()
        .map(|row| CertificationItem {
            title: row.title.clone(),
            organization: row.organization.clone(),
            issue_date: encode_date(row.issue_date),
            expiry_date: encode_date(row.expiry_date),
        })
        .collect()
}
