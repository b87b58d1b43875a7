//! Axum route handlers for the wizard API.
//!
//! Each PUT handler is one step's submit: it runs the step adapter,
//! dispatches the resulting actions, and applies that step's fixed
//! forward transition. GET handlers return the step's editable draft
//! shape, seeded the way the form expects.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::adapters::career_summary::{self, CareerSummaryForm};
use crate::adapters::certifications::{self, CertificationDraft};
use crate::adapters::contact_info::{self, ContactForm};
use crate::adapters::education::{self, EducationDraft};
use crate::adapters::personal_info::{self, PersonalInfoForm};
use crate::adapters::work_experience::{self, ExperienceDraft};
use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::render;
use crate::state::AppState;
use crate::wizard::navigation::{self, ActiveView, Section, Step};
use crate::wizard::reducer::Action;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub current_step: u8,
    pub current_section: Section,
    /// Title of the view the client should display.
    pub view: String,
    /// Highest step the progress indicator may jump to.
    pub max_reachable_step: u8,
}

#[derive(Debug, Deserialize)]
pub struct WorkExperienceSubmission {
    #[serde(rename = "workExperience")]
    pub work_experience: Vec<ExperienceDraft>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationDestination {
    /// Advance to the contact step.
    #[default]
    Next,
    /// Open the certifications section overlay instead.
    Certifications,
}

#[derive(Debug, Deserialize)]
pub struct EducationSubmission {
    pub education: Vec<EducationDraft>,
    #[serde(default)]
    pub destination: EducationDestination,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationsDestination {
    /// Close the overlay and continue the linear sequence at contact info.
    #[default]
    Next,
    /// Close the overlay only, back to the education view.
    Education,
}

#[derive(Debug, Deserialize)]
pub struct CertificationsSubmission {
    pub certifications: Vec<CertificationDraft>,
    #[serde(default)]
    pub destination: CertificationsDestination,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub step: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub text: String,
    pub filename: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Document and view
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv
pub async fn handle_get_document(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.store.snapshot())
}

/// GET /api/v1/cv/view
///
/// Resolves the section override against the step index, so the client
/// never re-implements that rule.
pub async fn handle_get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let doc = state.store.snapshot();
    let view = match navigation::active_view(doc.current_step, doc.current_section) {
        ActiveView::Certifications => "Certifications".to_string(),
        ActiveView::Step(step) => step.title().to_string(),
    };
    Json(ViewResponse {
        current_step: doc.current_step,
        current_section: doc.current_section,
        view,
        max_reachable_step: doc.current_step.saturating_add(1).min(Step::LAST),
    })
}

/// POST /api/v1/cv/navigate
///
/// Progress-indicator navigation. Targets beyond `current + 1` are
/// silently ignored; the response always carries the resulting document.
pub async fn handle_navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let doc = state.store.dispatch(Action::Navigate(request.step))?;
    Ok(Json(doc))
}

/// POST /api/v1/cv/reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<ResumeDocument>, AppError> {
    let doc = state.store.dispatch(Action::Reset)?;
    Ok(Json(doc))
}

// ────────────────────────────────────────────────────────────────────────────
// Step 1: personal info
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv/personal-info
pub async fn handle_get_personal_info(State(state): State<AppState>) -> Json<PersonalInfoForm> {
    Json(personal_info::load(&state.store.snapshot()))
}

/// PUT /api/v1/cv/personal-info
pub async fn handle_submit_personal_info(
    State(state): State<AppState>,
    Json(form): Json<PersonalInfoForm>,
) -> Result<Json<ResumeDocument>, AppError> {
    state
        .store
        .dispatch(Action::UpdatePersonalInfo(personal_info::submit(form)))?;
    let doc = state.store.dispatch(Action::SetStep(Step::CareerSummary))?;
    Ok(Json(doc))
}

// ────────────────────────────────────────────────────────────────────────────
// Step 2: career summary
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv/career-summary
pub async fn handle_get_career_summary(State(state): State<AppState>) -> Json<CareerSummaryForm> {
    Json(career_summary::load(&state.store.snapshot()))
}

/// PUT /api/v1/cv/career-summary
pub async fn handle_submit_career_summary(
    State(state): State<AppState>,
    Json(form): Json<CareerSummaryForm>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (job_title, summary) = career_summary::submit(form);
    state.store.dispatch(Action::UpdateCareerSummary(summary))?;
    state.store.dispatch(Action::UpdateJobTitle(job_title))?;
    let doc = state
        .store
        .dispatch(Action::SetStep(Step::WorkExperience))?;
    Ok(Json(doc))
}

// ────────────────────────────────────────────────────────────────────────────
// Step 3: work experience
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv/work-experience
pub async fn handle_get_work_experience(
    State(state): State<AppState>,
) -> Json<Vec<ExperienceDraft>> {
    Json(work_experience::load(&state.store.snapshot()))
}

/// PUT /api/v1/cv/work-experience
///
/// Replaces the slice wholesale and derives the top-level skills union.
pub async fn handle_submit_work_experience(
    State(state): State<AppState>,
    Json(submission): Json<WorkExperienceSubmission>,
) -> Result<Json<ResumeDocument>, AppError> {
    let (items, skills) = work_experience::submit(&submission.work_experience);
    state.store.dispatch(Action::UpdateWorkExperience(items))?;
    state.store.dispatch(Action::UpdateSkills(skills))?;
    let doc = state.store.dispatch(Action::SetStep(Step::Education))?;
    Ok(Json(doc))
}

// ────────────────────────────────────────────────────────────────────────────
// Step 4: education, with the certifications side flow
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv/education
pub async fn handle_get_education(State(state): State<AppState>) -> Json<Vec<EducationDraft>> {
    Json(education::load(&state.store.snapshot()))
}

/// PUT /api/v1/cv/education
///
/// The primary submit advances to contact info; the secondary destination
/// saves the slice and opens the certifications overlay, leaving the step
/// untouched.
pub async fn handle_submit_education(
    State(state): State<AppState>,
    Json(submission): Json<EducationSubmission>,
) -> Result<Json<ResumeDocument>, AppError> {
    state
        .store
        .dispatch(Action::UpdateEducation(education::submit(&submission.education)))?;
    let doc = match submission.destination {
        EducationDestination::Next => state.store.dispatch(Action::SetStep(Step::ContactInfo))?,
        EducationDestination::Certifications => state
            .store
            .dispatch(Action::SetSection(Section::Certifications))?,
    };
    Ok(Json(doc))
}

/// GET /api/v1/cv/certifications
pub async fn handle_get_certifications(
    State(state): State<AppState>,
) -> Json<Vec<CertificationDraft>> {
    Json(certifications::load(&state.store.snapshot()))
}

/// PUT /api/v1/cv/certifications
///
/// Submitting the overlay clears the override and returns control to the
/// linear sequence at contact info; the secondary destination only
/// clears the override.
pub async fn handle_submit_certifications(
    State(state): State<AppState>,
    Json(submission): Json<CertificationsSubmission>,
) -> Result<Json<ResumeDocument>, AppError> {
    state.store.dispatch(Action::UpdateCertifications(
        certifications::submit(&submission.certifications),
    ))?;
    state
        .store
        .dispatch(Action::SetSection(Section::Education))?;
    let doc = match submission.destination {
        CertificationsDestination::Next => {
            state.store.dispatch(Action::SetStep(Step::ContactInfo))?
        }
        CertificationsDestination::Education => state.store.snapshot(),
    };
    Ok(Json(doc))
}

// ────────────────────────────────────────────────────────────────────────────
// Step 5: contact info
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv/contact-info
pub async fn handle_get_contact_info(State(state): State<AppState>) -> Json<ContactForm> {
    Json(contact_info::load(&state.store.snapshot()))
}

/// PUT /api/v1/cv/contact-info
///
/// URL fields block submission until valid or cleared. Portfolio and
/// linkedin are written through to the personal slice as well.
pub async fn handle_submit_contact_info(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ResumeDocument>, AppError> {
    let submission =
        contact_info::submit(form).map_err(|e| AppError::Validation(e.to_string()))?;
    state
        .store
        .dispatch(Action::UpdateContactInfo(submission.contact_info))?;
    state
        .store
        .dispatch(Action::UpdatePersonalInfo(submission.personal_patch))?;
    let doc = state.store.dispatch(Action::SetStep(Step::AiGeneration))?;
    Ok(Json(doc))
}

// ────────────────────────────────────────────────────────────────────────────
// Step 7: review
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv/review
///
/// Read-only snapshot rendered for the review step, plus the download
/// filename the export collaborator should use.
pub async fn handle_review(State(state): State<AppState>) -> Json<ReviewResponse> {
    let doc = state.store.snapshot();
    Json(ReviewResponse {
        text: render::render_text(&doc),
        filename: render::suggested_filename(&doc),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
