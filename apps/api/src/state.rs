use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::enhance::Enhance;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    /// Present only when enhancement credentials are configured.
    /// Pluggable so tests can swap in a canned responder.
    pub enhancer: Option<Arc<dyn Enhance>>,
    /// Guard flag for the single allowed in-flight enhancement call.
    pub enhance_in_flight: Arc<AtomicBool>,
}
