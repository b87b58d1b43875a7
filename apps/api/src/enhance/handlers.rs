//! Axum route handler for the enhancement step.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::state::AppState;
use crate::wizard::navigation::Step;
use crate::wizard::reducer::Action;

use super::{build_prompt, parse_enhancement};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    /// False when the service reply was unusable and the original data
    /// was kept. Never an error: the wizard must not block on AI failure.
    pub applied: bool,
    pub document: ResumeDocument,
}

/// Releases the in-flight flag when the call settles, success or failure.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// POST /api/v1/cv/enhance
///
/// Sends the whole document snapshot to the enhancement service and folds
/// the validated reply back into the document. Duplicate submissions
/// while a call is in flight are rejected with a conflict.
pub async fn handle_enhance(
    State(state): State<AppState>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let enhancer = state
        .enhancer
        .clone()
        .ok_or(AppError::EnhanceNotConfigured)?;

    if state
        .enhance_in_flight
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(AppError::EnhanceInFlight);
    }
    let _in_flight = InFlight(&state.enhance_in_flight);

    let snapshot = state.store.snapshot();
    let prompt = build_prompt(&snapshot)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize snapshot: {e}")))?;

    let raw = enhancer
        .enhance(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Enhancement call failed: {e}")))?;

    match parse_enhancement(&raw) {
        Some(enhanced) => {
            state.store.dispatch(Action::ApplyEnhancement(enhanced))?;
            let document = state.store.dispatch(Action::SetStep(Step::Review))?;
            info!("Enhancement merged, moving to review");
            Ok(Json(EnhanceResponse {
                applied: true,
                document,
            }))
        }
        None => {
            // Soft failure: keep the original data, do not surface an error.
            warn!("Enhancement reply was not a usable JSON object, keeping original data");
            Ok(Json(EnhanceResponse {
                applied: false,
                document: snapshot,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::Enhance;
    use crate::llm_client::LlmError;
    use crate::store::DocumentStore;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct CannedEnhancer(&'static str);

    #[async_trait]
    impl Enhance for CannedEnhancer {
        async fn enhance(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingEnhancer;

    #[async_trait]
    impl Enhance for FailingEnhancer {
        async fn enhance(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    fn test_state(enhancer: Option<Arc<dyn Enhance>>) -> (AppState, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState {
            store: Arc::new(DocumentStore::open(dir.path().join("cv-builder.json"))),
            enhancer,
            enhance_in_flight: Arc::new(AtomicBool::new(false)),
        };
        (state, dir)
    }

    #[tokio::test]
    async fn test_missing_credentials_is_a_config_error() {
        let (state, _dir) = test_state(None);
        let result = handle_enhance(State(state)).await;
        assert!(matches!(result, Err(AppError::EnhanceNotConfigured)));
    }

    #[tokio::test]
    async fn test_fenced_reply_is_merged_and_advances_to_review() {
        let (state, _dir) = test_state(Some(Arc::new(CannedEnhancer(
            "```json\n{\"jobTitle\":\"Senior Engineer\"}\n```",
        ))));
        state
            .store
            .dispatch(Action::UpdateJobTitle("Engineer".to_string()))
            .unwrap();

        let Json(response) = handle_enhance(State(state.clone())).await.unwrap();
        assert!(response.applied);
        assert_eq!(response.document.job_title, "Senior Engineer");
        assert!(response.document.is_ai_enhanced);
        assert_eq!(response.document.current_step, 7);
        assert!(!state.enhance_in_flight.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_unparsable_reply_keeps_document_untouched() {
        let (state, _dir) = test_state(Some(Arc::new(CannedEnhancer(
            "Sure! Here is a much better resume for you.",
        ))));
        state
            .store
            .dispatch(Action::UpdateJobTitle("Engineer".to_string()))
            .unwrap();
        let before = state.store.snapshot();

        let Json(response) = handle_enhance(State(state.clone())).await.unwrap();
        assert!(!response.applied);
        assert_eq!(response.document, before);
        assert_eq!(state.store.snapshot(), before);
        assert!(!state.store.snapshot().is_ai_enhanced);
    }

    #[tokio::test]
    async fn test_service_failure_releases_the_guard() {
        let (state, _dir) = test_state(Some(Arc::new(FailingEnhancer)));
        let result = handle_enhance(State(state.clone())).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
        // The user can retry immediately.
        assert!(!state.enhance_in_flight.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_duplicate_submission_is_rejected_while_in_flight() {
        let (state, _dir) = test_state(Some(Arc::new(CannedEnhancer("{}"))));
        state.enhance_in_flight.store(true, Ordering::SeqCst);
        let result = handle_enhance(State(state)).await;
        assert!(matches!(result, Err(AppError::EnhanceInFlight)));
    }
}
