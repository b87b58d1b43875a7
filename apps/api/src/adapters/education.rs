#![allow(dead_code)]

//! Education step adapter.
//!
//! Same row mechanics as work experience. Loading is tolerant of two
//! textual date shapes (`DD/MM/YYYY` and ISO `YYYY-MM-DD`) because older
//! snapshots stored whichever the browser produced; write-back is always
//! canonical.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{encode_date, parse_date_loose};
use crate::models::{EducationItem, ResumeDocument};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub major: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub achievements: Vec<String>,
}

fn draft_from_item(item: &EducationItem) -> EducationDraft {
    EducationDraft {
        degree: item.degree.clone(),
        institution: item.institution.clone(),
        major: item.major.clone(),
        start_date: parse_date_loose(&item.start_date),
        end_date: parse_date_loose(&item.end_date),
        achievements: item.achievements.clone(),
    }
}

/// Loads the persisted slice, seeding one blank row when empty.
pub fn load(doc: &ResumeDocument) -> Vec<EducationDraft> {
    if doc.education.is_empty() {
        return vec![EducationDraft::default()];
    }
    doc.education.iter().map(draft_from_item).collect()
}

pub fn add_row(rows: &mut Vec<EducationDraft>) {
    rows.push(EducationDraft::default());
}

/// Removing is blocked while exactly one row remains.
pub fn remove_row(rows: &mut Vec<EducationDraft>, index: usize) -> bool {
    if rows.len() <= 1 || index >= rows.len() {
        return false;
    }
    rows.remove(index);
    true
}

/// Re-encodes the drafts to the canonical slice.
pub fn submit(rows: &[EducationDraft]) -> Vec<EducationItem> {
    rows.iter()
        .map(|row| EducationItem {
            degree: row.degree.clone(),
            institution: row.institution.clone(),
            major: row.major.clone(),
            start_date: encode_date(row.start_date),
            end_date: encode_date(row.end_date),
            achievements: row.achievements.clone(),
        })
        .collect()
}
