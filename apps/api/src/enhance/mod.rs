//! AI Enhancement Merge.
//!
//! The full document snapshot is serialized into a fixed prompt and sent
//! to the external text-generation service. The reply is expected to be a
//! single JSON object, possibly wrapped in code fences. Recognized fields
//! are validated one by one into an explicit partial update; everything
//! unrecognized or mistyped is dropped, never trusted. A reply that fails
//! to parse is a soft failure: the document is left untouched and the
//! caller proceeds with the pre-merge snapshot.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::models::{
    CertificationItem, EducationItem, PersonalInfoPatch, ResumeDocument, WorkExperienceItem,
};

pub mod handlers;
pub mod prompts;

/// The enhancement backend. Carried in `AppState` as `Arc<dyn Enhance>` so
/// tests can swap the remote service for a canned responder.
#[async_trait]
pub trait Enhance: Send + Sync {
    /// Returns the raw model output for an enhancement prompt.
    async fn enhance(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl Enhance for LlmClient {
    async fn enhance(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(prompt).await
    }
}

/// Builds the enhancement prompt around the serialized snapshot.
pub fn build_prompt(doc: &ResumeDocument) -> Result<String, serde_json::Error> {
    let snapshot = serde_json::to_string_pretty(doc)?;
    Ok(prompts::ENHANCE_PROMPT_TEMPLATE.replace("{cv_json}", &snapshot))
}

/// A validated partial update: one optional slot per recognized document
/// field. Absent slots leave the document untouched on apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedResume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfoPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperienceItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<CertificationItem>>,
}

/// Deserializes one recognized field, dropping it with a log line when the
/// service sent a mistyped value.
fn field<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Option<T> {
    let value = obj.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Dropping mistyped enhancement field '{key}': {e}");
            None
        }
    }
}

impl EnhancedResume {
    /// Validates a parsed reply object field by field. Anything that is
    /// not a JSON object is a parse failure.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            personal_info: field(obj, "personalInfo"),
            // An empty replacement string would wipe data; treat it as absent.
            job_title: field::<String>(obj, "jobTitle").filter(|s| !s.is_empty()),
            career_summary: field::<String>(obj, "careerSummary").filter(|s| !s.is_empty()),
            skills: field(obj, "skills"),
            work_experience: field(obj, "workExperience"),
            education: field(obj, "education"),
            certifications: field(obj, "certifications"),
        })
    }
}

/// Fence-strips and validates the raw service reply.
/// `None` means "unusable reply, keep the original data".
pub fn parse_enhancement(raw: &str) -> Option<EnhancedResume> {
    let value: Value = serde_json::from_str(strip_json_fences(raw)).ok()?;
    EnhancedResume::from_value(&value)
}

/// Folds an accepted partial update into the document. Present fields
/// replace their slice wholesale except `personal_info`, which is
/// shallow-merged key by key. Records the applied payload for redisplay
/// and marks the document enhanced.
pub fn apply(doc: &mut ResumeDocument, enhanced: &EnhancedResume) {
    if let Some(patch) = &enhanced.personal_info {
        doc.personal_info.apply_patch(patch);
    }
    if let Some(job_title) = &enhanced.job_title {
        doc.job_title = job_title.clone();
    }
    if let Some(summary) = &enhanced.career_summary {
        doc.career_summary = summary.clone();
    }
    if let Some(skills) = &enhanced.skills {
        doc.skills = skills.clone();
    }
    if let Some(experience) = &enhanced.work_experience {
        doc.work_experience = experience.clone();
    }
    if let Some(education) = &enhanced.education {
        doc.education = education.clone();
    }
    if let Some(certifications) = &enhanced.certifications {
        doc.certifications = certifications.clone();
    }
    doc.generated_resume = serde_json::to_string(enhanced).unwrap_or_default();
    doc.is_ai_enhanced = true;
}
