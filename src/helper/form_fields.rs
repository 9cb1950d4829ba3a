use std::collections::HashMap;
use url::form_urlencoded;

/// Urlencoded fields read leniently: no content-type check, absent keys read as "".
/// When a key repeats, its first value wins.
#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        let mut fields = HashMap::new();
        for (key, value) in form_urlencoded::parse(body).into_owned() {
            fields.entry(key).or_insert(value);
        }
        Self(fields)
    }

    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }
}
