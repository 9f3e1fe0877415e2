//! Navbar entry creation against `api/admin/navheaders`.

use storefront_core::NavbarEntry;

use super::CategoryClient;
use crate::error::HttpResult;
use crate::http::HttpBackend;
use crate::url::navheaders_url;

impl<B: HttpBackend> CategoryClient<B> {
    /// POST the navbar entry as JSON.
    pub(crate) async fn post_navbar_entry(&self, entry: &NavbarEntry) -> HttpResult<()> {
        let url = navheaders_url(&self.config)?;
        let body = serde_json::to_value(entry)?;
        self.backend.post_json(&url, &body).await
    }
}
