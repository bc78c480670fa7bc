use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use service::auth::service as auth_service;

use crate::auth::ServerState;
use crate::errors::ApiError;

#[derive(Deserialize)]
pub struct TokenInput {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenOutput {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Credential check + token issuance. Unknown email and wrong password are
/// indistinguishable to the caller.
pub async fn issue(
    State(state): State<ServerState>,
    Json(input): Json<TokenInput>,
) -> Result<(StatusCode, Json<TokenOutput>), ApiError> {
    let session =
        auth_service::issue_session(&state.db, &input.email, &input.password, &state.tokens)
            .await?;
    Ok((
        StatusCode::CREATED,
        Json(TokenOutput { access_token: session.token, token_type: "bearer" }),
    ))
}
