use crate::core::{Probe, ProbeOutcome, ProbeReport, ProbeRequest};
use chrono::Utc;
use std::time::Instant;

pub struct ProbeEngine<P: Probe> {
    probe: P,
}

impl<P: Probe> ProbeEngine<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Runs the single request to completion. No retries.
    pub async fn run(&self, request: &ProbeRequest) -> ProbeReport {
        let started_at = Utc::now();
        let start = Instant::now();
        tracing::info!("Probing GET {}", request.url);

        let outcome = self.probe.probe(request).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &outcome {
            ProbeOutcome::Success { status, .. } => {
                tracing::info!("Probe succeeded with status {} in {} ms", status, elapsed_ms);
            }
            ProbeOutcome::Failure {
                status, message, ..
            } => {
                tracing::warn!(
                    "Probe failed after {} ms (status: {:?}): {}",
                    elapsed_ms,
                    status,
                    message
                );
            }
        }

        ProbeReport {
            url: request.url.clone(),
            started_at,
            elapsed_ms,
            outcome,
        }
    }
}
