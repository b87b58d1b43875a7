//! The reducer: the only code allowed to mutate `ResumeDocument`.
//!
//! Every mutation is a dispatched `Action`, applied synchronously by the
//! single logical writer. The store persists the document after each
//! apply, so an action is also the unit of write-through.

use tracing::debug;

use crate::enhance::{self, EnhancedResume};
use crate::models::{
    CertificationItem, ContactInfo, EducationItem, PersonalInfoPatch, ResumeDocument,
    WorkExperienceItem,
};

use super::navigation::{can_navigate, Section, Step};

#[derive(Debug, Clone)]
pub enum Action {
    /// Fixed forward transition dispatched by a step submit.
    SetStep(Step),
    SetSection(Section),
    /// Progress-indicator jump; out-of-bound targets are silent no-ops.
    Navigate(u8),
    UpdatePersonalInfo(PersonalInfoPatch),
    UpdateJobTitle(String),
    UpdateCareerSummary(String),
    UpdateWorkExperience(Vec<WorkExperienceItem>),
    UpdateSkills(Vec<String>),
    UpdateEducation(Vec<EducationItem>),
    UpdateCertifications(Vec<CertificationItem>),
    UpdateContactInfo(ContactInfo),
    ApplyEnhancement(EnhancedResume),
    Reset,
}

pub fn apply(doc: &mut ResumeDocument, action: Action) {
    match action {
        Action::SetStep(step) => doc.current_step = step.number(),
        Action::SetSection(section) => doc.current_section = section,
        Action::Navigate(target) => {
            if can_navigate(doc.current_step, target) {
                doc.current_step = target;
            } else {
                debug!(
                    "Ignoring navigation to step {target} from step {}",
                    doc.current_step
                );
            }
        }
        Action::UpdatePersonalInfo(patch) => doc.personal_info.apply_patch(&patch),
        Action::UpdateJobTitle(title) => doc.job_title = title,
        Action::UpdateCareerSummary(summary) => doc.career_summary = summary,
        Action::UpdateWorkExperience(items) => doc.work_experience = items,
        Action::UpdateSkills(skills) => doc.skills = skills,
        Action::UpdateEducation(items) => doc.education = items,
        Action::UpdateCertifications(items) => doc.certifications = items,
        Action::UpdateContactInfo(contact) => doc.contact_info = contact,
        Action::ApplyEnhancement(enhanced) => enhance::apply(doc, &enhanced),
        Action::Reset => *doc = ResumeDocument::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_within_bound_moves() {
        let mut doc = ResumeDocument::default();
        apply(&mut doc, Action::Navigate(2));
        assert_eq!(doc.current_step, 2);
        apply(&mut doc, Action::Navigate(1));
        assert_eq!(doc.current_step, 1);
    }

    #[test]
    fn test_navigate_beyond_bound_leaves_state_unchanged() {
        let mut doc = ResumeDocument::default();
        doc.current_step = 3;
        let before = doc.clone();
        apply(&mut doc, Action::Navigate(5));
        assert_eq!(doc, before);
        apply(&mut doc, Action::Navigate(0));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_set_step_is_a_fixed_transition() {
        // Step submits may jump past the navigation bound (e.g. the AI step
        // lands on Review regardless of prior progress).
        let mut doc = ResumeDocument::default();
        apply(&mut doc, Action::SetStep(Step::ContactInfo));
        assert_eq!(doc.current_step, 5);
    }

    #[test]
    fn test_update_actions_replace_their_slice() {
        let mut doc = ResumeDocument::default();
        apply(&mut doc, Action::UpdateJobTitle("Engineer".to_string()));
        apply(
            &mut doc,
            Action::UpdateSkills(vec!["Go".to_string(), "Rust".to_string()]),
        );
        apply(
            &mut doc,
            Action::UpdateEducation(vec![EducationItem {
                degree: "BSc".to_string(),
                ..EducationItem::default()
            }]),
        );
        assert_eq!(doc.job_title, "Engineer");
        assert_eq!(doc.skills.len(), 2);
        assert_eq!(doc.education.len(), 1);

        // A later submit replaces, never patches.
        apply(&mut doc, Action::UpdateEducation(vec![]));
        assert!(doc.education.is_empty());
    }

    #[test]
    fn test_enhancement_goes_through_the_reducer() {
        let mut doc = ResumeDocument::default();
        let enhanced = EnhancedResume {
            job_title: Some("Senior Engineer".to_string()),
            ..EnhancedResume::default()
        };
        apply(&mut doc, Action::ApplyEnhancement(enhanced));
        assert_eq!(doc.job_title, "Senior Engineer");
        assert!(doc.is_ai_enhanced);
    }

    #[test]
    fn test_reset_restores_the_default_document() {
        let mut doc = ResumeDocument::default();
        apply(&mut doc, Action::UpdateJobTitle("Engineer".to_string()));
        apply(&mut doc, Action::SetSection(Section::Certifications));
        apply(&mut doc, Action::Reset);
        assert_eq!(doc, ResumeDocument::default());
    }
}
