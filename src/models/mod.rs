use serde::Deserialize;

use crate::store::Tally;

/// Form body posted by the voting page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteForm {
    #[serde(rename = "selectedOption")]
    pub selected_option: Option<String>,
}

/// What the summary page needs to know about the current visitor.
#[derive(Debug, Clone, Default)]
pub struct VoteViewModel {
    pub has_voted: bool,
    // Left empty until the visitor has voted.
    pub vote_counts: Tally,
}

impl VoteViewModel {
    pub fn new(has_voted: bool, vote_counts: Tally) -> Self {
        Self {
            has_voted,
            vote_counts,
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.vote_counts.values().sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ErrorViewModel {
    pub request_id: Option<String>,
}

impl ErrorViewModel {
    pub fn new(request_id: Option<String>) -> Self {
        Self { request_id }
    }

    pub fn show_request_id(&self) -> bool {
        self.request_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
