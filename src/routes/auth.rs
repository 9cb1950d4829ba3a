use crate::error::{AppError, AuthError};
use crate::helper::form_fields::FormFields;
use crate::middleware::cleared_session_cookie;
use crate::models::Role;
use crate::routes::{found, html};
use crate::views::{LoginPage, RegisterPage};
use crate::AppState;
use actix_web::http::header;
use actix_web::{web, HttpResponse};

pub async fn show_login_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(html(state.views.render(&LoginPage {})?))
}

/// Plain string comparison against the stored password. No session cookie is issued;
/// the redirect target depends on the role alone.
pub async fn handle_login(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let form = FormFields::parse(&body);

    let user = match state.store.get_user_by_username(form.get("username"))? {
        Some(user) if user.password == form.get("password") => user,
        _ => return Err(AuthError::InvalidCredentials.into()),
    };

    let role = Role::parse(&user.role).ok_or_else(|| AuthError::InvalidRole(user.role.clone()))?;
    log::info!("User '{}' logged in with role '{}'", user.username, role.as_str());

    Ok(found(role.home_path()))
}

pub async fn show_register_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(html(state.views.render(&RegisterPage {})?))
}

/// New accounts always get the "user" role.
pub async fn handle_register(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let form = FormFields::parse(&body);
    let username = form.get("username");

    state.store.create_user(
        form.get("name"),
        form.get("email"),
        username,
        form.get("password"),
        Role::User.as_str(),
    )?;
    log::info!("Registered user '{}'", username);

    Ok(found("/"))
}

pub async fn handle_logout() -> HttpResponse {
    HttpResponse::Found()
        .cookie(cleared_session_cookie())
        .append_header((header::LOCATION, "/"))
        .finish()
}
