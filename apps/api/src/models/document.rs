//! Canonical resume document model.
//!
//! `ResumeDocument` is the single source of truth for the whole wizard.
//! Field names serialize as camelCase so a persisted snapshot stays
//! readable by the web client that edits it. Dates inside the document are
//! always canonical `DD/MM/YYYY` text or the empty string (see `dates`).
//!
//! Mutation happens exclusively through `wizard::reducer::Action`; nothing
//! else writes these fields.

use serde::{Deserialize, Serialize};

use crate::wizard::navigation::Section;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub state: String,
    pub zip_code: String,
    pub portfolio: String,
    pub linkedin: String,
}

/// Sparse update for `PersonalInfo`. Used by the personal-info step, the
/// contact step's portfolio/linkedin write-through, and the enhancement
/// merge. Absent keys leave the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub portfolio: Option<String>,
    pub linkedin: Option<String>,
}

impl PersonalInfo {
    /// Shallow key-by-key merge.
    pub fn apply_patch(&mut self, patch: &PersonalInfoPatch) {
        if let Some(v) = &patch.first_name {
            self.first_name = v.clone();
        }
        if let Some(v) = &patch.last_name {
            self.last_name = v.clone();
        }
        if let Some(v) = &patch.phone {
            self.phone = v.clone();
        }
        if let Some(v) = &patch.email {
            self.email = v.clone();
        }
        if let Some(v) = &patch.country {
            self.country = v.clone();
        }
        if let Some(v) = &patch.city {
            self.city = v.clone();
        }
        if let Some(v) = &patch.address {
            self.address = v.clone();
        }
        if let Some(v) = &patch.state {
            self.state = v.clone();
        }
        if let Some(v) = &patch.zip_code {
            self.zip_code = v.clone();
        }
        if let Some(v) = &patch.portfolio {
            self.portfolio = v.clone();
        }
        if let Some(v) = &patch.linkedin {
            self.linkedin = v.clone();
        }
    }
}

/// One work-experience entry. `skills` is capped at 5 by the adapter, not
/// here. The enhancement service reports `position` as `jobTitle` and
/// `responsibilities` as `description`; the aliases accept both spellings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperienceItem {
    pub company: String,
    #[serde(alias = "jobTitle")]
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(alias = "description")]
    pub responsibilities: String,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub major: String,
    pub start_date: String,
    pub end_date: String,
    pub achievements: Vec<String>,
}

/// `expiry_date` empty means "does not expire".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationItem {
    pub title: String,
    pub organization: String,
    pub issue_date: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherSocial {
    pub platform: String,
    pub url: String,
}

/// Secondary contact bag, distinct from `PersonalInfo`. Kept for snapshot
/// compatibility with the web client; `personal_info` stays authoritative
/// for email/phone/address and receives portfolio/linkedin write-through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_social: Option<OtherSocial>,
}

/// The whole wizard document. Created once per session from the default,
/// persisted on every mutation, destroyed only by an explicit reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub job_title: String,
    pub career_summary: String,
    /// Derived union of per-experience skill lists once work experience is
    /// submitted; the enhancement merge may overwrite it wholesale.
    pub skills: Vec<String>,
    pub work_experience: Vec<WorkExperienceItem>,
    pub education: Vec<EducationItem>,
    pub certifications: Vec<CertificationItem>,
    pub contact_info: ContactInfo,
    /// Serialized payload of the last applied enhancement, for redisplay.
    pub generated_resume: String,
    #[serde(rename = "isAIEnhanced")]
    pub is_ai_enhanced: bool,
    /// 1..=7. See `wizard::navigation::Step`.
    pub current_step: u8,
    pub current_section: Section,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            job_title: String::new(),
            career_summary: String::new(),
            skills: Vec::new(),
            work_experience: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            contact_info: ContactInfo::default(),
            generated_resume: String::new(),
            is_ai_enhanced: false,
            current_step: 1,
            current_section: Section::Education,
        }
    }
}
