use rail_core::repository::NewAccount;
use rail_core::{ApiSuccess, LoginData, Payload, ResponseData, SignupData};
use tracing::info;

use crate::{error::AppError, state::AppState};

/// `username` may be the login handle or the mobile number.
///
/// Unknown user and wrong password fail identically.
pub async fn login(state: &AppState, payload: &Payload) -> Result<ApiSuccess, AppError> {
    let username = payload.str_field("username");
    let password = payload.str_field("password");

    let account = state
        .accounts
        .find_by_credentials(username, password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let token = state.tokens.issue(&account)?;
    info!(user_id = account.id, "Login successful");

    Ok(ApiSuccess::new(
        "Login successful",
        ResponseData::Login(LoginData {
            user_id: account.id,
            name: account.name,
            token,
        }),
    ))
}

pub async fn signup(state: &AppState, payload: &Payload) -> Result<ApiSuccess, AppError> {
    let new_account = NewAccount {
        mobile: payload.str_field("mobile").to_string(),
        email: payload.str_field("email").to_string(),
        name: format!(
            "{} {}",
            payload.str_field("firstName"),
            payload.str_field("lastName")
        ),
        password: payload.str_field("password").into(),
    };

    let created = state.accounts.register(new_account).await?;
    info!(user_id = created.id, username = %created.username, "Account created");

    Ok(ApiSuccess::new(
        "Account created successfully",
        ResponseData::Signup(SignupData {
            user_id: created.id,
            username: created.username,
        }),
    ))
}
