use axum::extract::State;
use tracing::{info, instrument};

use crate::{
    error::AppError,
    models::user::{SignupPayload, User},
    AppState,
};

/// `POST /signup`: stores the submitted email and password as a new user.
#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    payload: SignupPayload,
) -> Result<&'static str, AppError> {
    let id = User::create(
        &state.db,
        payload.email.as_deref(),
        payload.password.as_deref(),
    )
    .await?;

    info!(user_id = id, "user registered");
    Ok("OK")
}
