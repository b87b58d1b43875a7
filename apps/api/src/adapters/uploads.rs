#![allow(dead_code)]

//! Achievement upload bookkeeping, shared by the work-experience and
//! education steps.
//!
//! Uploaded files are session-only: the persisted document carries just
//! the display names inside the target row's `achievements` list, never
//! the bytes. The ledger mirrors what the form shows next to the drop
//! zone (name + human-readable size).

use serde::{Deserialize, Serialize};

use super::education::EducationDraft;
use super::work_experience::ExperienceDraft;

/// One entry in the ephemeral upload ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAchievement {
    pub name: String,
    pub size_label: String,
}

/// A freshly selected file, before bookkeeping.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUpload {
    pub name: String,
    pub size_bytes: u64,
}

/// `"1.23 MB"`, two decimals, mebibyte divisor.
pub fn size_label(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / (1024.0 * 1024.0))
}

/// A draft row that can carry achievement filenames.
pub trait AchievementRow {
    fn achievements_mut(&mut self) -> &mut Vec<String>;
}

impl AchievementRow for ExperienceDraft {
    fn achievements_mut(&mut self) -> &mut Vec<String> {
        &mut self.achievements
    }
}

impl AchievementRow for EducationDraft {
    fn achievements_mut(&mut self) -> &mut Vec<String> {
        &mut self.achievements
    }
}

/// Records uploads against an explicit row. Returns whether the row
/// exists; nothing is recorded otherwise.
pub fn attach<R: AchievementRow>(
    ledger: &mut Vec<UploadedAchievement>,
    rows: &mut [R],
    row: usize,
    files: Vec<NewUpload>,
) -> bool {
    let Some(target) = rows.get_mut(row) else {
        return false;
    };
    for file in files {
        target.achievements_mut().push(file.name.clone());
        ledger.push(UploadedAchievement {
            size_label: size_label(file.size_bytes),
            name: file.name,
        });
    }
    true
}

/// Removes a ledger entry and every matching filename from the row it was
/// attached to.
pub fn detach<R: AchievementRow>(
    ledger: &mut Vec<UploadedAchievement>,
    rows: &mut [R],
    row: usize,
    index: usize,
) {
    if index >= ledger.len() {
        return;
    }
    let removed = ledger.remove(index);
    if let Some(target) = rows.get_mut(row) {
        target.achievements_mut().retain(|name| name != &removed.name);
    }
}
