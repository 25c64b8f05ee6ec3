use std::sync::Arc;

use crate::layout::PageGeometry;
use crate::letter::composer::GenerationSettings;
use crate::letter::gate::InFlightGate;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion provider. `LlmClient` in production, a fake in tests.
    pub llm: Arc<dyn CompletionProvider>,
    pub settings: GenerationSettings,
    /// Page size, margins, and wrap width used for every PDF.
    pub page_geometry: PageGeometry,
    pub gate: InFlightGate,
}
