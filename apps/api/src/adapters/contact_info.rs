//! Contact-info step adapter.
//!
//! Edits the looser contact bag plus the portfolio/linkedin fields, which
//! are written through to `personal_info` as well (the document's
//! authoritative contact record). URL fields block submission until valid
//! or cleared.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::models::{ContactInfo, OtherSocial, PersonalInfoPatch, ResumeDocument};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub linkedin: String,
    pub portfolio: String,
    pub other_social: Option<OtherSocial>,
}

/// What a valid submission dispatches: the replacement contact bag and the
/// personal-info write-through patch.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub contact_info: ContactInfo,
    pub personal_patch: PersonalInfoPatch,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field}: please enter a valid URL")]
pub struct InvalidUrl {
    pub field: &'static str,
}

pub fn load(doc: &ResumeDocument) -> ContactForm {
    ContactForm {
        linkedin: doc.personal_info.linkedin.clone(),
        portfolio: doc.personal_info.portfolio.clone(),
        other_social: doc.contact_info.other_social.clone(),
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), InvalidUrl> {
    if value.is_empty() || Url::parse(value).is_ok() {
        Ok(())
    } else {
        Err(InvalidUrl { field })
    }
}

/// Validates and converts the form. The social entry is kept only when
/// both platform and url are present.
pub fn submit(form: ContactForm) -> Result<ContactSubmission, InvalidUrl> {
    check_url("linkedin", &form.linkedin)?;
    check_url("portfolio", &form.portfolio)?;

    let other_social = form.other_social.filter(|social| {
        !social.platform.is_empty() && !social.url.is_empty()
    });
    if let Some(social) = &other_social {
        check_url("otherSocial", &social.url)?;
    }

    Ok(ContactSubmission {
        contact_info: ContactInfo {
            email: None,
            phone: None,
            address: None,
            other_social,
        },
        personal_patch: PersonalInfoPatch {
            portfolio: Some(form.portfolio),
            linkedin: Some(form.linkedin),
            ..PersonalInfoPatch::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reads_write_through_fields_from_personal_info() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.linkedin = "https://linkedin.com/in/ada".to_string();
        let form = load(&doc);
        assert_eq!(form.linkedin, "https://linkedin.com/in/ada");
        assert_eq!(form.other_social, None);
    }

    #[test]
    fn test_invalid_url_blocks_submission() {
        let err = submit(ContactForm {
            linkedin: "not a url".to_string(),
            ..ContactForm::default()
        })
        .unwrap_err();
        assert_eq!(err.field, "linkedin");
    }

    #[test]
    fn test_empty_urls_are_allowed() {
        let submission = submit(ContactForm::default()).unwrap();
        assert_eq!(submission.personal_patch.linkedin.as_deref(), Some(""));
        assert_eq!(submission.contact_info.other_social, None);
    }

    #[test]
    fn test_partial_social_entry_is_dropped() {
        let submission = submit(ContactForm {
            other_social: Some(OtherSocial {
                platform: "github".to_string(),
                url: String::new(),
            }),
            ..ContactForm::default()
        })
        .unwrap();
        assert_eq!(submission.contact_info.other_social, None);
    }

    #[test]
    fn test_complete_social_entry_is_kept_and_validated() {
        let submission = submit(ContactForm {
            other_social: Some(OtherSocial {
                platform: "github".to_string(),
                url: "https://github.com/ada".to_string(),
            }),
            ..ContactForm::default()
        })
        .unwrap();
        assert!(submission.contact_info.other_social.is_some());

        let err = submit(ContactForm {
            other_social: Some(OtherSocial {
                platform: "github".to_string(),
                url: "nope".to_string(),
            }),
            ..ContactForm::default()
        })
        .unwrap_err();
        assert_eq!(err.field, "otherSocial");
    }

    #[test]
    fn test_submission_patches_personal_info() {
        let submission = submit(ContactForm {
            linkedin: "https://linkedin.com/in/ada".to_string(),
            portfolio: "https://ada.dev".to_string(),
            other_social: None,
        })
        .unwrap();
        assert_eq!(
            submission.personal_patch.portfolio.as_deref(),
            Some("https://ada.dev")
        );
        assert_eq!(submission.personal_patch.first_name, None);
    }
}
