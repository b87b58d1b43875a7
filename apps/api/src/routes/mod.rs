pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhance::handlers as enhance;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document and navigation
        .route("/api/v1/cv", get(wizard::handle_get_document))
        .route("/api/v1/cv/view", get(wizard::handle_get_view))
        .route("/api/v1/cv/navigate", post(wizard::handle_navigate))
        .route("/api/v1/cv/reset", post(wizard::handle_reset))
        // Step slices: GET the editable draft, PUT the submission
        .route(
            "/api/v1/cv/personal-info",
            get(wizard::handle_get_personal_info).put(wizard::handle_submit_personal_info),
        )
        .route(
            "/api/v1/cv/career-summary",
            get(wizard::handle_get_career_summary).put(wizard::handle_submit_career_summary),
        )
        .route(
            "/api/v1/cv/work-experience",
            get(wizard::handle_get_work_experience).put(wizard::handle_submit_work_experience),
        )
        .route(
            "/api/v1/cv/education",
            get(wizard::handle_get_education).put(wizard::handle_submit_education),
        )
        .route(
            "/api/v1/cv/certifications",
            get(wizard::handle_get_certifications).put(wizard::handle_submit_certifications),
        )
        .route(
            "/api/v1/cv/contact-info",
            get(wizard::handle_get_contact_info).put(wizard::handle_submit_contact_info),
        )
        // Enhancement and review
        .route("/api/v1/cv/enhance", post(enhance::handle_enhance))
        .route("/api/v1/cv/review", get(wizard::handle_review))
        .with_state(state)
}
