//! Personal-info step: a flat form over a subset of `PersonalInfo`.

use serde::{Deserialize, Serialize};

use crate::models::{PersonalInfoPatch, ResumeDocument};

/// The fields the personal-info form edits. Portfolio/linkedin live on the
/// contact step; country/city/state/zip arrive from the enhancement merge
/// or a richer client form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

pub fn load(doc: &ResumeDocument) -> PersonalInfoForm {
    let info = &doc.personal_info;
    PersonalInfoForm {
        first_name: info.first_name.clone(),
        last_name: info.last_name.clone(),
        email: info.email.clone(),
        phone: info.phone.clone(),
        address: info.address.clone(),
    }
}

/// Submission patches exactly the edited keys, leaving the rest of the
/// slice (portfolio, linkedin, ...) untouched.
pub fn submit(form: PersonalInfoForm) -> PersonalInfoPatch {
    PersonalInfoPatch {
        first_name: Some(form.first_name),
        last_name: Some(form.last_name),
        email: Some(form.email),
        phone: Some(form.phone),
        address: Some(form.address),
        ..PersonalInfoPatch::default()
    }
}
