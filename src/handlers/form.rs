use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{info, warn};

use crate::handlers::html::{self, FormView};
use crate::middleware::session::Session;
use crate::router::AppState;
use crate::service::{PropertyMap, SubmitOutcome};
use crate::types::{AstCheckForm, INVALID_DWELLING_PLACEHOLDER, LoginForm};
use crate::AstError;

/// GET / -> login page, or the AST form previewing the query values.
pub async fn form_page(
    State(state): State<AppState>,
    session: Session,
    Query(form): Query<AstCheckForm>,
) -> Result<Response, AstError> {
    if !session.state().is_authenticated() {
        return Ok(Html(html::login_page(&state.options, session.state())).into_response());
    }
    let properties = state.directory.list_properties().await?;
    Ok(form_response(&state, &properties, &form, None))
}

/// POST /login -> checks the password and stores the resulting session state.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(login): Form<LoginForm>,
) -> impl IntoResponse {
    let next = state.gate.attempt(session.state(), login.password);
    if next.is_authenticated() {
        info!("login accepted");
    } else {
        warn!("login rejected: password incorrect");
    }
    (session.store(next), Redirect::to("/"))
}

/// POST /submit -> upserts the AST check and re-renders the form with feedback.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AstCheckForm>,
) -> Result<Response, AstError> {
    if !session.state().is_authenticated() {
        return Ok(Redirect::to("/").into_response());
    }

    let properties = state.directory.list_properties().await?;
    let check = form.to_check(&properties, &state.options);
    if check.dwelling_id == INVALID_DWELLING_PLACEHOLDER {
        warn!(
            property = %form.property,
            "submitting AST check without a valid property selection"
        );
    }
    let outcome = state.service.record(&check).await;

    Ok(form_response(&state, &properties, &form, Some(outcome)))
}

/// POST /logout -> ends the session.
pub async fn logout(session: Session) -> impl IntoResponse {
    (session.end(), Redirect::to("/"))
}

pub async fn health() -> &'static str {
    "ok"
}

fn form_response(
    state: &AppState,
    properties: &PropertyMap,
    form: &AstCheckForm,
    feedback: Option<SubmitOutcome>,
) -> Response {
    Html(html::form_page(&FormView {
        options: &state.options,
        properties,
        form,
        feedback,
    }))
    .into_response()
}
