//! Step and section navigation rules.
//!
//! Two regions: the linear wizard (steps 1..=7) and the certifications
//! overlay. The overlay is entered from the education step and replaces
//! the step-indexed view entirely until its submit returns control to the
//! linear sequence.

use serde::{Deserialize, Serialize};

/// The seven wizard steps, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    PersonalInfo,
    CareerSummary,
    WorkExperience,
    Education,
    ContactInfo,
    AiGeneration,
    Review,
}

impl Step {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 7;

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::CareerSummary),
            3 => Some(Self::WorkExperience),
            4 => Some(Self::Education),
            5 => Some(Self::ContactInfo),
            6 => Some(Self::AiGeneration),
            7 => Some(Self::Review),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::CareerSummary => 2,
            Self::WorkExperience => 3,
            Self::Education => 4,
            Self::ContactInfo => 5,
            Self::AiGeneration => 6,
            Self::Review => 7,
        }
    }

    /// Progress-indicator label.
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::CareerSummary => "Career Summary",
            Self::WorkExperience => "Skills & Experience",
            Self::Education => "Education & Certifications",
            Self::ContactInfo => "Contact Information",
            Self::AiGeneration => "AI Resume Generation",
            Self::Review => "Review & Download",
        }
    }
}

/// Orthogonal sub-navigation around the education step. `Certifications`
/// overrides the step-indexed view entirely while set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Education,
    Certifications,
}

/// What the view layer should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Step(Step),
    Certifications,
}

/// Resolves the section override against the step index. An out-of-range
/// step (possible only in a hand-edited snapshot) falls back to step 1,
/// matching the client's default case.
pub fn active_view(step: u8, section: Section) -> ActiveView {
    if section == Section::Certifications {
        return ActiveView::Certifications;
    }
    ActiveView::Step(Step::from_number(step).unwrap_or(Step::PersonalInfo))
}

/// Progress-indicator rule: any step up to one ahead of current progress
/// is reachable, anything further is not. Rejected targets are silent
/// no-ops at the reducer.
pub fn can_navigate(current: u8, target: u8) -> bool {
    (Step::FIRST..=Step::LAST).contains(&target) && target <= current.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_round_trip() {
        for n in 1..=7 {
            assert_eq!(Step::from_number(n).unwrap().number(), n);
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(8), None);
    }

    #[test]
    fn test_navigation_allows_backward_and_one_ahead() {
        assert!(can_navigate(3, 1));
        assert!(can_navigate(3, 3));
        assert!(can_navigate(3, 4));
    }

    #[test]
    fn test_navigation_rejects_skipping_ahead() {
        assert!(!can_navigate(3, 5));
        assert!(!can_navigate(1, 7));
    }

    #[test]
    fn test_navigation_rejects_out_of_range_targets() {
        assert!(!can_navigate(3, 0));
        assert!(!can_navigate(7, 8));
        // One-ahead never escapes the step range.
        assert!(!can_navigate(7, 9));
    }

    #[test]
    fn test_section_override_wins_over_step() {
        assert_eq!(
            active_view(4, Section::Certifications),
            ActiveView::Certifications
        );
        assert_eq!(
            active_view(2, Section::Certifications),
            ActiveView::Certifications
        );
    }

    #[test]
    fn test_active_view_follows_step_without_override() {
        assert_eq!(
            active_view(4, Section::Education),
            ActiveView::Step(Step::Education)
        );
    }

    #[test]
    fn test_active_view_falls_back_to_first_step() {
        assert_eq!(
            active_view(0, Section::Education),
            ActiveView::Step(Step::PersonalInfo)
        );
    }

    #[test]
    fn test_section_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Section::Certifications).unwrap(),
            "\"certifications\""
        );
        let section: Section = serde_json::from_str("\"education\"").unwrap();
        assert_eq!(section, Section::Education);
    }
}
