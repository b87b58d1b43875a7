//! Career-summary step: job title plus the free-text summary.
//!
//! The form calls the summary field `summary`; the document stores it as
//! `careerSummary`. Two separate document fields, one form.

use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerSummaryForm {
    pub job_title: String,
    pub summary: String,
}

pub fn load(doc: &ResumeDocument) -> CareerSummaryForm {
    CareerSummaryForm {
        job_title: doc.job_title.clone(),
        summary: doc.career_summary.clone(),
    }
}

/// Returns `(job_title, career_summary)` ready for dispatch.
pub fn submit(form: CareerSummaryForm) -> (String, String) {
    (form.job_title, form.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_maps_career_summary_to_summary() {
        let doc = ResumeDocument {
            job_title: "Marketing Lead".to_string(),
            career_summary: "An experienced marketing professional.".to_string(),
            ..ResumeDocument::default()
        };
        let form = load(&doc);
        assert_eq!(form.job_title, "Marketing Lead");
        assert_eq!(form.summary, "An experienced marketing professional.");
    }

    #[test]
    fn test_submit_splits_the_two_fields() {
        let (title, summary) = submit(CareerSummaryForm {
            job_title: "Engineer".to_string(),
            summary: "Ships reliable systems.".to_string(),
        });
        assert_eq!(title, "Engineer");
        assert_eq!(summary, "Ships reliable systems.");
    }
}
