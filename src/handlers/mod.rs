mod vote;

pub use vote::{VoteOutcome, cast_vote};

use crate::correlation::correlation_id;
use crate::error::AppError;
use crate::models::{ErrorViewModel, VoteForm, VoteViewModel};
use crate::session::VoterSession;
use crate::state::AppState;
use crate::store::Tally;
use crate::views::{ErrorTemplate, IndexTemplate};
use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::header::{CACHE_CONTROL, LOCATION};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use log::{debug, warn};
use tower_sessions::Session;

pub const INDEX_PATH: &str = "/";

// GET / - voting form, or tallies once this session has voted
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let has_voted = session.has_voted().await?;
    let vote_counts = if has_voted {
        state.tally.snapshot()
    } else {
        Tally::new()
    };

    let model = VoteViewModel::new(has_voted, vote_counts);
    let page = IndexTemplate::new(&*state.question, state.tally.options(), &model).render()?;
    Ok(Html(page))
}

// POST /vote - always answers with a redirect to the summary page
pub async fn submit_vote(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Response, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            // Treated the same as a submission with nothing selected
            debug!("Unreadable vote form: {}", rejection);
            VoteForm::default()
        }
    };

    let outcome = cast_vote(&state.tally, &session, form.selected_option.as_deref()).await?;
    debug!("Vote outcome: {:?}", outcome);

    Ok(redirect_to_index())
}

// GET /error - generic error page carrying the request correlation id
pub async fn error_page(headers: HeaderMap) -> Result<Response, AppError> {
    render_error(StatusCode::OK, &headers)
}

// Anything unrouted
pub async fn not_found(headers: HeaderMap) -> Result<Response, AppError> {
    warn!("No route for request, serving error page");
    render_error(StatusCode::NOT_FOUND, &headers)
}

fn render_error(status: StatusCode, headers: &HeaderMap) -> Result<Response, AppError> {
    let model = ErrorViewModel::new(correlation_id(headers));
    let page = ErrorTemplate::new(&model).render()?;

    Ok((
        status,
        [(CACHE_CONTROL, "no-store, no-cache")],
        Html(page),
    )
        .into_response())
}

// 302 rather than axum's Redirect::to, which answers 303
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(LOCATION, INDEX_PATH)]).into_response()
}
