//! Analysis sessions: the latest request wins.
//!
//! Every request takes a ticket from a generation counter. When its response
//! arrives, it is only handed back if no newer request has started since;
//! otherwise it is dropped, so a slow stale answer can never overwrite the
//! result of a newer one.

use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::resistor::{MergeReport, ResistorBands};
use crate::vision::detection::{
    parse_band_detection, parse_component_analysis, BandDetection, ComponentAnalysis,
};
use crate::vision::prompts;
use crate::vision::provider::{ImagePayload, VisionProvider};
use crate::vision::VisionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Default)]
pub struct AnalysisSession {
    generation: AtomicU64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any in flight.
    pub fn begin(&self) -> AnalysisTicket {
        AnalysisTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: AnalysisTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Drop whatever is in flight without starting anything new.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Run `request` under a fresh ticket. `Ok(None)` means a newer request
    /// started before this one finished; its outcome, error or not, is dropped.
    pub async fn run<T, F>(&self, request: F) -> Result<Option<T>, VisionError>
    where
        F: Future<Output = Result<T, VisionError>>,
    {
        let ticket = self.begin();
        let outcome = request.await;
        if !self.is_current(ticket) {
            tracing::debug!("discarding stale analysis response (ticket {})", ticket.0);
            return Ok(None);
        }
        outcome.map(Some)
    }
}

/// Result of a band detection applied to the current band state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedBands {
    pub detection: BandDetection,
    pub bands: ResistorBands,
    pub report: MergeReport,
}

#[derive(Clone)]
pub struct ComponentAnalyzer {
    provider: Arc<dyn VisionProvider>,
    session: Arc<AnalysisSession>,
}

impl ComponentAnalyzer {
    pub fn new(provider: Arc<dyn VisionProvider>) -> Self {
        Self {
            provider,
            session: Arc::new(AnalysisSession::new()),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    /// Detect band colors and merge them into `current`.
    pub async fn detect_bands(
        &self,
        image: &ImagePayload,
        current: ResistorBands,
    ) -> Result<Option<DetectedBands>, VisionError> {
        let provider = Arc::clone(&self.provider);
        self.session
            .run(async move {
                let text = provider.generate(&prompts::BAND_DETECTION, image).await?;
                let detection = parse_band_detection(&text)?;
                let (bands, report) = current.merged(&detection);
                Ok(DetectedBands {
                    detection,
                    bands,
                    report,
                })
            })
            .await
    }

    /// Identify whatever component is in the photo.
    pub async fn identify(
        &self,
        image: &ImagePayload,
    ) -> Result<Option<ComponentAnalysis>, VisionError> {
        let provider = Arc::clone(&self.provider);
        self.session
            .run(async move {
                let text = provider
                    .generate(&prompts::COMPONENT_IDENTIFICATION, image)
                    .await?;
                Ok(parse_component_analysis(&text))
            })
            .await
    }
}
