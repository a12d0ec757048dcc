use crate::error::AppError;
use crate::session::VoterSession;
use crate::store::TallyStore;
use log::{info, warn};

/// What happened to a submitted ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    AlreadyVoted,
    NoSelection,
    // Session is still marked: the ballot was spent on a label we don't count.
    UnknownOption,
}

/// Count one ballot for this session, at most once per session.
///
/// Sessions that already voted and empty selections leave both the tally and the
/// session untouched. Any other selection is passed to the store and the session
/// is marked, whether or not the store recognised the label.
pub async fn cast_vote<S>(
    tally: &TallyStore,
    session: &S,
    selected_option: Option<&str>,
) -> Result<VoteOutcome, AppError>
where
    S: VoterSession + ?Sized,
{
    if session.has_voted().await? {
        info!("Ignoring repeat vote from a session that already voted");
        return Ok(VoteOutcome::AlreadyVoted);
    }

    let option = match selected_option {
        Some(option) if !option.is_empty() => option,
        _ => {
            info!("Ignoring vote with no option selected");
            return Ok(VoteOutcome::NoSelection);
        }
    };

    let counted = tally.record(option);
    session.mark_voted().await?;

    if counted {
        info!("Recorded vote for {:?}", option);
        Ok(VoteOutcome::Recorded)
    } else {
        warn!("Vote for unknown option {:?} was dropped", option);
        Ok(VoteOutcome::UnknownOption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::FakeSession;

    fn abc() -> TallyStore {
        TallyStore::new(["A", "B", "C"])
    }

    #[tokio::test]
    async fn first_vote_is_recorded_and_marks_session() {
        let tally = abc();
        let session = FakeSession::default();

        let outcome = cast_vote(&tally, &session, Some("B")).await.unwrap();

        assert_eq!(outcome, VoteOutcome::Recorded);
        assert_eq!(tally.snapshot()["B"], 1);
        assert!(session.has_voted().await.unwrap());
    }

    #[tokio::test]
    async fn second_vote_in_same_session_changes_nothing() {
        let tally = abc();
        let session = FakeSession::default();

        cast_vote(&tally, &session, Some("A")).await.unwrap();
        let outcome = cast_vote(&tally, &session, Some("B")).await.unwrap();

        assert_eq!(outcome, VoteOutcome::AlreadyVoted);
        let snapshot = tally.snapshot();
        assert_eq!(snapshot["A"], 1);
        assert_eq!(snapshot["B"], 0);
    }

    #[tokio::test]
    async fn already_voted_session_cannot_vote() {
        let tally = abc();
        let session = FakeSession::already_voted();

        let outcome = cast_vote(&tally, &session, Some("A")).await.unwrap();

        assert_eq!(outcome, VoteOutcome::AlreadyVoted);
        assert_eq!(tally.snapshot().values().sum::<u64>(), 0);
    }

    #[tokio::test]
    async fn empty_or_missing_selection_is_ignored() {
        let tally = abc();
        let session = FakeSession::default();

        assert_eq!(
            cast_vote(&tally, &session, Some("")).await.unwrap(),
            VoteOutcome::NoSelection
        );
        assert_eq!(
            cast_vote(&tally, &session, None).await.unwrap(),
            VoteOutcome::NoSelection
        );

        assert_eq!(tally.snapshot().values().sum::<u64>(), 0);
        // The ballot is not spent, a real vote still goes through afterwards.
        assert!(!session.has_voted().await.unwrap());
        assert_eq!(
            cast_vote(&tally, &session, Some("C")).await.unwrap(),
            VoteOutcome::Recorded
        );
    }

    #[tokio::test]
    async fn empty_selection_after_voting_is_still_a_no_op() {
        let tally = abc();
        let session = FakeSession::already_voted();

        cast_vote(&tally, &session, Some("")).await.unwrap();
        assert_eq!(tally.snapshot().values().sum::<u64>(), 0);
    }

    #[tokio::test]
    async fn unknown_option_spends_the_ballot_without_counting() {
        let tally = abc();
        let session = FakeSession::default();

        let outcome = cast_vote(&tally, &session, Some("D")).await.unwrap();

        assert_eq!(outcome, VoteOutcome::UnknownOption);
        assert_eq!(tally.snapshot().values().sum::<u64>(), 0);
        assert!(session.has_voted().await.unwrap());
    }

    #[tokio::test]
    async fn separate_sessions_each_get_one_vote() {
        let tally = abc();
        for option in ["A", "A", "B"] {
            let session = FakeSession::default();
            cast_vote(&tally, &session, Some(option)).await.unwrap();
            cast_vote(&tally, &session, Some(option)).await.unwrap();
        }

        let snapshot = tally.snapshot();
        assert_eq!(snapshot["A"], 2);
        assert_eq!(snapshot["B"], 1);
        assert_eq!(snapshot["C"], 0);
    }
}
