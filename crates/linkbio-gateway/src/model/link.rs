use linkbio_core::{NewLink, ValidationErrors};
use serde::Deserialize;

/// Request body of `POST /api/links` and `PUT /api/links/{id}`.
///
/// `id` and `created_at` are owned by the store, so they are not part of the
/// payload and are ignored if a client sends them. A missing or `null`
/// field is treated as empty and rejected by validation.
#[derive(Debug, Deserialize)]
pub struct LinkPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl LinkPayload {
    pub fn into_new_link(self) -> Result<NewLink, ValidationErrors> {
        NewLink::new(
            self.title.unwrap_or_default(),
            self.url.unwrap_or_default(),
        )
    }
}
