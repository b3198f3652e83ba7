use axum::{Json, extract::State};
use google_oauth::AsyncClient;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{AuthResponse, GoogleAuthRequest},
    queries::user_queries,
    utils::jwt,
};

pub async fn google_auth(
    State(state): State<AppState>,
    Json(payload): Json<GoogleAuthRequest>,
) -> Result<Json<AuthResponse>> {
    let google_client_id = std::env::var("GOOGLE_CLIENT_ID")
        .map_err(|_| AppError::ConfigError("GOOGLE_CLIENT_ID not set".to_string()))?;

    let client = AsyncClient::new(&google_client_id);

    let payload_result = client
        .validate_id_token(&payload.id_token)
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid Google token: {}", e)))?;

    let google_id = &payload_result.sub;
    let email = payload_result
        .email
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("Email not provided by Google".to_string()))?;
    let name = payload_result
        .name
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("Name not provided by Google".to_string()))?;

    let user = match user_queries::find_by_google_id(&state.db, google_id).await? {
        Some(existing_user) => existing_user,
        None => {
            user_queries::create_google_user(
                &state.db,
                google_id,
                email,
                name,
                payload_result.picture.as_deref(),
            )
            .await?
        }
    };

    let token = jwt::generate_token(user.id, &user.email)?;

    Ok(Json(AuthResponse { token, user }))
}
