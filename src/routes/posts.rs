use crate::error::AppError;
use crate::helper::form_fields::FormFields;
use crate::routes::{html, see_other};
use crate::store::StoreError;
use crate::views::{AdminPostList, CreatePostForm, EditPostForm, PostList};
use crate::AppState;
use actix_web::{web, HttpRequest, HttpResponse};

const POSTS_URL: &str = "/posts";

/// Ids travel as raw strings; anything that is not an integer matches no row.
fn parse_post_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub async fn show_posts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let posts = state.store.list_posts()?;
    Ok(html(state.views.render(&PostList { posts })?))
}

pub async fn show_admin_posts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let posts = state.store.list_posts()?;
    Ok(html(state.views.render(&AdminPostList { posts })?))
}

pub async fn show_create_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(html(state.views.render(&CreatePostForm {})?))
}

pub async fn create_post_action(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let form = FormFields::parse(&body);
    state.store.create_post(form.get("title"), form.get("content"))?;
    Ok(see_other(POSTS_URL))
}

pub async fn show_edit_form(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let query = FormFields::parse(req.query_string().as_bytes());
    let raw_id = query.get("id");
    let id = parse_post_id(raw_id).ok_or_else(|| StoreError::NotFound(format!("post '{}'", raw_id)))?;
    let post = state.store.get_post(id)?;
    Ok(html(state.views.render(&EditPostForm { post })?))
}

pub async fn update_post_action(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let form = FormFields::parse(&body);
    match parse_post_id(form.get("id")) {
        Some(id) => state.store.update_post(id, form.get("title"), form.get("content"))?,
        None => log::warn!("Ignoring edit for non-numeric post id '{}'", form.get("id")),
    }
    Ok(see_other(POSTS_URL))
}

pub async fn delete_post_action(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let form = FormFields::parse(&body);
    match parse_post_id(form.get("id")) {
        Some(id) => state.store.delete_post(id)?,
        None => log::warn!("Ignoring delete for non-numeric post id '{}'", form.get("id")),
    }
    Ok(see_other(POSTS_URL))
}
