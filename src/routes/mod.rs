//! Route Dispatcher: the static `(method, path) -> handler` table.
//!
//! Every resource answers unlisted methods with 405; unknown paths fall through to actix's 404.

use crate::error::method_not_allowed;
use actix_web::http::header;
use actix_web::{web, HttpResponse, Resource};

pub mod auth;
pub mod contact;
pub mod gallery;
pub mod pages;
pub mod posts;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        resource("/")
            .route(web::get().to(auth::show_login_form))
            .route(web::post().to(auth::handle_login)),
    )
    .service(
        resource("/register")
            .route(web::get().to(auth::show_register_form))
            .route(web::post().to(auth::handle_register)),
    )
    .service(resource("/logout").route(web::get().to(auth::handle_logout)))
    .service(resource("/home-usr").route(web::get().to(pages::show_user_landing)))
    .service(resource("/home-adm").route(web::get().to(pages::show_admin_dashboard)))
    .service(resource("/profile").route(web::get().to(pages::show_profile)))
    .service(resource("/posts").route(web::get().to(posts::show_posts)))
    .service(resource("/posts-admin").route(web::get().to(posts::show_admin_posts)))
    .service(
        resource("/post/create")
            .route(web::get().to(posts::show_create_form))
            .route(web::post().to(posts::create_post_action)),
    )
    .service(
        resource("/post/edit")
            .route(web::get().to(posts::show_edit_form))
            .route(web::post().to(posts::update_post_action)),
    )
    .service(resource("/post/delete").route(web::post().to(posts::delete_post_action)))
    .service(
        resource("/gallery")
            .route(web::get().to(gallery::show_gallery))
            .route(web::post().to(gallery::redirect_to_gallery)),
    )
    .service(
        resource("/galery-admin")
            .route(web::get().to(gallery::show_admin_gallery))
            .route(web::post().to(gallery::redirect_to_admin_gallery)),
    )
    .service(
        resource("/galery/create")
            .route(web::get().to(gallery::show_upload_form))
            .route(web::post().to(gallery::upload_image_action)),
    )
    .service(resource("/galery/delete").route(web::post().to(gallery::delete_image_action)))
    .service(
        resource("/contact")
            .route(web::get().to(contact::show_contact_form))
            .route(web::post().to(contact::submit_contact_action)),
    )
    .service(resource("/contact/list").route(web::get().to(contact::show_contact_list)));
}

fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::route().to(method_not_allowed))
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body)
}

/// 303, used after content forms so a refresh does not resubmit.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther().append_header((header::LOCATION, location)).finish()
}

/// 302, used by the auth flows.
pub(crate) fn found(location: &str) -> HttpResponse {
    HttpResponse::Found().append_header((header::LOCATION, location)).finish()
}
