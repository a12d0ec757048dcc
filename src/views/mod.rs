//! Askama Templates
//!
//! Pages are rendered from view models; nothing here touches shared state.

use askama::Template;

use crate::{
    models::{ErrorViewModel, VoteViewModel},
    voting::{PollResults, VoteCount, plurality::calculate_results},
};

/// Summary page: the voting form, or the results once the visitor has voted.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub question: String,
    pub has_voted: bool,
    pub options: Vec<String>,
    pub rows: Vec<VoteCount>,
    pub total_votes: u64,
    pub leaders: String,
    pub taken_at: String,
}

impl IndexTemplate {
    pub fn new(question: impl Into<String>, options: &[String], model: &VoteViewModel) -> Self {
        let results: Option<PollResults> = model
            .has_voted
            .then(|| calculate_results(&model.vote_counts));

        Self {
            question: question.into(),
            has_voted: model.has_voted,
            options: options.to_vec(),
            rows: results
                .as_ref()
                .map(|r| r.raw_results.clone())
                .unwrap_or_default(),
            total_votes: results.as_ref().map_or(0, |r| r.total_votes),
            leaders: results.as_ref().map(PollResults::leaders_text).unwrap_or_default(),
            taken_at: results.as_ref().map(PollResults::taken_at_text).unwrap_or_default(),
        }
    }
}

/// Generic error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub show_request_id: bool,
    pub request_id: String,
}

impl ErrorTemplate {
    pub fn new(model: &ErrorViewModel) -> Self {
        Self {
            show_request_id: model.show_request_id(),
            request_id: model.request_id.clone().unwrap_or_default(),
        }
    }
}
