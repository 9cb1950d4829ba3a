pub mod file_store;
pub mod form_fields;
