pub mod plurality;

use chrono::{DateTime, Utc};

// Summary of a tally snapshot, ready for display
#[derive(Debug, Clone)]
pub struct PollResults {
    pub leaders: Vec<String>,      // Option(s) with the most votes, empty when nobody voted
    pub total_votes: u64,
    pub raw_results: Vec<VoteCount>, // One row per option, in option order
    pub taken_at: DateTime<Utc>,
}

// Structure to hold vote counts
#[derive(Debug, Clone, PartialEq)]
pub struct VoteCount {
    pub option_text: String,
    pub votes: u64,
    pub share: f64, // Percentage of all votes, 0.0 when there are none
    pub rank: usize,
}

impl VoteCount {
    pub fn share_percent(&self) -> String {
        format!("{:.1}%", self.share)
    }
}

impl PollResults {
    pub fn leaders_text(&self) -> String {
        self.leaders.join(", ")
    }

    pub fn taken_at_text(&self) -> String {
        self.taken_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}
