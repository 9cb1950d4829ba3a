use crate::error::AppError;
use crate::models::User;
use crate::routes::html;
use crate::views::{AdminDashboard, Profile, UserLanding};
use crate::AppState;
use actix_web::{web, HttpResponse};

pub async fn show_user_landing(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(html(state.views.render(&UserLanding {})?))
}

pub async fn show_admin_dashboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(html(state.views.render(&AdminDashboard {})?))
}

/// Fixed placeholder; the profile page is not backed by any stored user.
pub fn placeholder_profile() -> User {
    User {
        id: 0,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        username: "johndoe".to_string(),
        password: String::new(),
        role: String::new(),
    }
}

pub async fn show_profile(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(html(state.views.render(&Profile { user: placeholder_profile() })?))
}
