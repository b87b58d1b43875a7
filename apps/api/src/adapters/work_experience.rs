#![allow(dead_code)]

//! Work-experience step adapter.
//!
//! The form edits `ExperienceDraft` rows, which re-shape the canonical
//! `WorkExperienceItem`: `position` becomes `jobTitle`, `responsibilities`
//! becomes `description`, and dates become real `NaiveDate` values.
//! Submission replaces the slice wholesale and derives the top-level
//! `skills` union from the per-row lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::{encode_date, parse_date};
use crate::models::{ResumeDocument, WorkExperienceItem};

/// Per-row skill cap, enforced here rather than in the model.
pub const MAX_SKILLS_PER_ROW: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceDraft {
    pub job_title: String,
    pub company: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillRejection {
    #[error("skill text is empty")]
    Blank,
    #[error("a row holds at most {MAX_SKILLS_PER_ROW} skills")]
    RowFull,
}

fn draft_from_item(item: &WorkExperienceItem) -> ExperienceDraft {
    ExperienceDraft {
        job_title: item.position.clone(),
        company: item.company.clone(),
        start_date: parse_date(&item.start_date),
        end_date: parse_date(&item.end_date),
        description: item.responsibilities.clone(),
        skills: item.skills.clone(),
        achievements: item.achievements.clone(),
    }
}

/// Loads the persisted slice into editable rows. An empty slice seeds a
/// single blank row so the form always has an editable group.
pub fn load(doc: &ResumeDocument) -> Vec<ExperienceDraft> {
    if doc.work_experience.is_empty() {
        return vec![ExperienceDraft::default()];
    }
    doc.work_experience.iter().map(draft_from_item).collect()
}

pub fn add_row(rows: &mut Vec<ExperienceDraft>) {
    rows.push(ExperienceDraft::default());
}

/// Removing is blocked while exactly one row remains. Returns whether a
/// row was removed.
pub fn remove_row(rows: &mut Vec<ExperienceDraft>, index: usize) -> bool {
    if rows.len() <= 1 || index >= rows.len() {
        return false;
    }
    rows.remove(index);
    true
}

/// Commits a freeform skill token to a row (the form's tab/enter action).
/// The token is trimmed; blank tokens and full rows are rejected.
pub fn commit_skill(row: &mut ExperienceDraft, input: &str) -> Result<(), SkillRejection> {
    let token = input.trim();
    if token.is_empty() {
        return Err(SkillRejection::Blank);
    }
    if row.skills.len() >= MAX_SKILLS_PER_ROW {
        return Err(SkillRejection::RowFull);
    }
    row.skills.push(token.to_string());
    Ok(())
}

pub fn remove_skill(row: &mut ExperienceDraft, index: usize) {
    if index < row.skills.len() {
        row.skills.remove(index);
    }
}

/// Flattens all per-row skill lists into a deduplicated union,
/// first-seen order, case-sensitive equality.
pub fn aggregate_skills(rows: &[ExperienceDraft]) -> Vec<String> {
    let mut union: Vec<String> = Vec::new();
    for skill in rows.iter().flat_map(|row| row.skills.iter()) {
        if !union.contains(skill) {
            union.push(skill.clone());
        }
    }
    union
}

/// Re-encodes the drafts to canonical form. Returns the replacement slice
/// and the derived top-level skills union. Rows arriving over the wire
/// with more than five skills are clamped to the cap.
pub fn submit(rows: &[ExperienceDraft]) -> (Vec<WorkExperienceItem>, Vec<String>) {
    let items = rows
        .iter()
        .map(|row| WorkExperienceItem {
            company: row.company.clone(),
            position: row.job_title.clone(),
            start_date: encode_date(row.start_date),
            end_date: encode_date(row.end_date),
            responsibilities: row.description.clone(),
            skills: row.skills.iter().take(MAX_SKILLS_PER_ROW).cloned().collect(),
            achievements: row.achievements.clone(),
        })
        .collect();
    (items, aggregate_skills(rows))
}
