use crate::error::AppError;
use crate::helper::form_fields::FormFields;
use crate::routes::{html, see_other};
use crate::views::{ContactForm, ContactList};
use crate::AppState;
use actix_web::{web, HttpResponse};

pub async fn show_contact_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(html(state.views.render(&ContactForm {})?))
}

/// Records the entry and redirects to `/success`, which no route serves.
pub async fn submit_contact_action(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let form = FormFields::parse(&body);
    state
        .store
        .create_contact_entry(form.get("name"), form.get("email"), form.get("message"))?;
    Ok(see_other("/success"))
}

pub async fn show_contact_list(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries = state.store.list_contact_entries()?;
    Ok(html(state.views.render(&ContactList { entries })?))
}
