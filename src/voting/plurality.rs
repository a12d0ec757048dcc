use crate::store::Tally;
use crate::voting::{PollResults, VoteCount};
use chrono::Utc;

pub fn calculate_results(tally: &Tally) -> PollResults {
    let total_votes: u64 = tally.values().sum();

    // Competition ranking: tied options share a rank, the next rank skips ahead
    let rank_of = |votes: u64| 1 + tally.values().filter(|&&other| other > votes).count();

    let raw_results: Vec<VoteCount> = tally
        .iter()
        .map(|(option_text, &votes)| VoteCount {
            option_text: option_text.clone(),
            votes,
            share: share_of(votes, total_votes),
            rank: rank_of(votes),
        })
        .collect();

    // If no votes were cast there is no leader
    let leaders = if total_votes == 0 {
        Vec::new()
    } else {
        raw_results
            .iter()
            .filter(|count| count.rank == 1)
            .map(|count| count.option_text.clone())
            .collect()
    };

    PollResults {
        leaders,
        total_votes,
        raw_results,
        taken_at: Utc::now(),
    }
}

// Percentage rounded to one decimal place
fn share_of(votes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (votes as f64 * 1000.0 / total as f64).round() / 10.0
}
