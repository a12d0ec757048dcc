use std::sync::Arc;

use crate::{config::Config, store::TallyStore};

/// Shared by every request. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub tally: Arc<TallyStore>,
    pub question: Arc<str>,
}

impl AppState {
    pub fn new(tally: Arc<TallyStore>, config: &Config) -> Self {
        Self {
            tally,
            question: Arc::from(config.poll_question.as_str()),
        }
    }
}
