use crate::error::AppError;
use crate::helper::file_store::UploadError;
use crate::helper::form_fields::FormFields;
use crate::routes::{html, see_other};
use crate::views::{AdminGallery, Gallery, UploadImageForm, UploadResult};
use crate::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;

pub async fn show_gallery(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let image_urls = state.store.list_images()?;
    Ok(html(state.views.render(&Gallery { image_urls })?))
}

pub async fn redirect_to_gallery() -> HttpResponse {
    see_other("/gallery")
}

pub async fn show_admin_gallery(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let image_urls = state.store.list_images()?;
    log::debug!("Admin gallery lists {} images", image_urls.len());
    Ok(html(state.views.render(&AdminGallery { image_urls })?))
}

pub async fn redirect_to_admin_gallery() -> HttpResponse {
    see_other("/galery-admin")
}

pub async fn show_upload_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(html(state.views.render(&UploadImageForm {})?))
}

/// Stores the first part named `file` under its original filename, records its locator,
/// then renders the refreshed image list.
pub async fn upload_image_action(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut saved = None;

    while let Some(item) = payload.next().await {
        let field = item.map_err(UploadError::from)?;
        if field.content_disposition().get_name() != Some("file") {
            continue;
        }
        // A form submitted with no file chosen still sends the part, with `filename=""`.
        let filename = match field.content_disposition().get_filename() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        saved = Some(state.files.save_upload(&filename, field).await?);
        break;
    }

    let image = saved.ok_or(UploadError::MissingFile)?;
    state.store.create_image(&image.url)?;

    let image_urls = state.store.list_images()?;
    Ok(html(state.views.render(&UploadResult { image_urls })?))
}

/// Removes the gallery row only. The file stays on disk.
pub async fn delete_image_action(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let form = FormFields::parse(&body);
    state.store.delete_image(form.get("imageURL"))?;
    Ok(see_other("/gallery"))
}
