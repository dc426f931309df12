pub mod digest;
pub mod fallback;
pub mod prompt;

use std::sync::Arc;

use crate::error::StoreError;
use crate::inference::InferenceClient;
use crate::store::JournalStore;
use crate::types::{SummaryResult, SummarySource};

pub const NO_ENTRIES_MESSAGE: &str =
    "You haven't written any journal entries yet. Start journaling to see insights!";

/// Fetch, digest, prompt, infer, and fall back to the heuristic summary on failure.
#[derive(Clone)]
pub struct SummaryService {
    store: Arc<dyn JournalStore>,
    inference: Arc<dyn InferenceClient>,
}

impl SummaryService {
    pub fn new(store: Arc<dyn JournalStore>, inference: Arc<dyn InferenceClient>) -> Self {
        Self { store, inference }
    }

    /// Only a store failure is returned as an error. Inference problems are
    /// logged and answered with the fallback summary.
    pub async fn summarize(
        &self,
        user_id: i64,
        query: Option<&str>,
    ) -> Result<SummaryResult, StoreError> {
        let entries = self.store.entries_for_user(user_id).await?;
        tracing::info!(user_id, entries = entries.len(), "creating summary");

        if entries.is_empty() {
            return Ok(SummaryResult::new(NO_ENTRIES_MESSAGE, SummarySource::Fallback));
        }

        let digest = digest::JournalDigest::from_entries(&entries).render();
        let prompt = prompt::build_prompt(&digest, query);

        let result = match self.inference.generate(&prompt).await {
            Ok(text) => SummaryResult::new(text, SummarySource::Model),
            Err(e) => {
                tracing::warn!(user_id, error = %e, "inference failed, using fallback summary");
                SummaryResult::new(fallback::basic_summary(&entries), SummarySource::Fallback)
            }
        };

        tracing::debug!(user_id, source = result.source.as_str(), "summary ready");
        Ok(result)
    }
}
