//! Account routes: signup, login, profile.
//!
//! Login returns only the display name. No session token or cookie is
//! issued, and the profile endpoint is unauthenticated — a known security
//! gap of the current design, preserved deliberately rather than papered
//! over with an auth scheme the rest of the system does not expect.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use database::account::{self, NewAccount};
use database::validation::require_non_empty;
use database::{password, DatabaseError};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Signup request body.
#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

/// Login request body.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response.
#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub name: String,
}

/// Plain message response.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Profile query parameters.
#[derive(Deserialize)]
pub struct ProfileQuery {
    pub email: String,
}

/// Profile response. The password hash never leaves the database layer.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Register a new account with a bcrypt-hashed password.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<MessageResponse>> {
    require_non_empty("name", &req.name)?;
    require_non_empty("email", &req.email)?;
    require_non_empty("password", &req.password)?;
    require_non_empty("phone", &req.phone)?;
    require_non_empty("address", &req.address)?;

    let new = NewAccount {
        email: req.email.clone(),
        password_hash: password::hash_password(&req.password)?,
        name: req.name,
        phone: req.phone,
        address: req.address,
    };

    account::create_account(state.db.pool(), &new)
        .await
        .map_err(|e| match e {
            DatabaseError::AlreadyExists { .. } => ApiError::AlreadyRegistered,
            other => other.into(),
        })?;

    info!(email = %req.email, "Account created");

    Ok(Json(MessageResponse {
        message: "Account created successfully!".to_string(),
    }))
}

/// Authenticate by email and password.
///
/// An unknown email and a wrong password produce the identical error so
/// the response does not leak which emails have accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let account = match account::get_account(state.db.pool(), &req.email).await {
        Ok(account) => account,
        Err(DatabaseError::NotFound { .. }) => return Err(ApiError::InvalidCredentials),
        Err(other) => return Err(other.into()),
    };

    if !password::verify_password(&req.password, &account.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    info!(email = %req.email, "Login successful");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        name: account.name,
    }))
}

/// Fetch a profile by email. Pure read.
pub async fn profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>> {
    let account = account::get_account(state.db.pool(), &query.email)
        .await
        .map_err(|e| match e {
            DatabaseError::NotFound { .. } => ApiError::NotFound("User not found"),
            other => other.into(),
        })?;

    Ok(Json(ProfileResponse {
        name: account.name,
        email: account.email,
        phone: account.phone,
        address: account.address,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::testing::test_state;

    fn signup_req(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone: "555-0101".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let state = test_state().await;

        signup(State(state.clone()), Json(signup_req("alice@example.com", "s3cret")))
            .await
            .unwrap();

        let resp = login(
            State(state),
            Json(LoginRequest {
                email: "alice@example.com".to_string(),
                password: "s3cret".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(resp.0.message, "Login successful");
        assert_eq!(resp.0.name, "Alice");
    }

    #[tokio::test]
    async fn test_duplicate_signup_rejected() {
        let state = test_state().await;

        signup(State(state.clone()), Json(signup_req("bob@example.com", "one")))
            .await
            .unwrap();

        let result = signup(State(state), Json(signup_req("bob@example.com", "two"))).await;
        assert!(matches!(result, Err(ApiError::AlreadyRegistered)));
    }

    #[tokio::test]
    async fn test_signup_requires_fields() {
        let state = test_state().await;

        let result = signup(State(state), Json(signup_req("carol@example.com", " "))).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_bad_credentials_are_indistinguishable() {
        let state = test_state().await;

        signup(State(state.clone()), Json(signup_req("dave@example.com", "right")))
            .await
            .unwrap();

        // Wrong password for a real account.
        let wrong_password = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "dave@example.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await;

        // No account at all.
        let unknown_email = login(
            State(state),
            Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "right".to_string(),
            }),
        )
        .await;

        assert!(matches!(wrong_password, Err(ApiError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(ApiError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_profile_fetch() {
        let state = test_state().await;

        signup(State(state.clone()), Json(signup_req("eve@example.com", "pw")))
            .await
            .unwrap();

        let resp = profile(
            State(state.clone()),
            Query(ProfileQuery {
                email: "eve@example.com".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(resp.0.email, "eve@example.com");
        assert_eq!(resp.0.name, "Alice");

        let missing = profile(
            State(state),
            Query(ProfileQuery {
                email: "ghost@example.com".to_string(),
            }),
        )
        .await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
    }
}
