use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::credentials;
use crate::state::AppState;

// POST /api/admin/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    message: String,
    role: String,
}

pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    // Unknown email and wrong password report identically.
    let admin = state.store.find_admin(&email).ok_or(AppError::Auth)?;
    if !credentials::verify_password(password, admin.password_hash.clone()).await? {
        return Err(AppError::Auth);
    }

    tracing::info!(email = %email, "admin login");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        role: admin.role.as_str().to_string(),
    }))
}

// POST /api/customer/register
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    id: String,
    name: String,
    email: String,
    phone: String,
}

pub async fn register_customer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let name = body.name.unwrap_or_default();
    let email = body.email.unwrap_or_default();
    let phone = body.phone.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    if name.is_empty() || email.is_empty() || phone.is_empty() || password.is_empty() {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    // The duplicate check runs under the store's write lock, so two
    // concurrent registrations for the same email cannot both land.
    let password_hash = credentials::hash_password(password, state.config.bcrypt_cost).await?;
    let customer = state
        .store
        .register_customer(&name, &email, &phone, password_hash)?;

    tracing::info!(customer_id = %customer.id, "customer registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
        }),
    ))
}
