//! Category CRUD against `api/categories`.

use storefront_core::{Category, CategoryId, CategoryRecord, CategoryUpdate, NewCategory};

use super::CategoryClient;
use crate::error::HttpResult;
use crate::form::MultipartForm;
use crate::http::{FormMethod, HttpBackend};
use crate::parsing::{parse_category_list, parse_saved_category};
use crate::url::{categories_url, category_url};

impl<B: HttpBackend> CategoryClient<B> {
    /// Fetch and normalize the full category collection.
    pub(crate) async fn fetch_categories(&self) -> HttpResult<Vec<CategoryRecord>> {
        let url = categories_url(&self.config)?;
        let json = self.backend.get_json(&url).await?;
        let records = parse_category_list(json)?;
        tracing::debug!(count = records.len(), "fetched categories");
        Ok(records)
    }

    /// Validate, then POST the category as multipart.
    ///
    /// Any 2xx counts as stored; the record is `None` when the body does
    /// not describe it.
    pub(crate) async fn post_category(
        &self,
        category: &NewCategory,
    ) -> HttpResult<Option<Category>> {
        category.validate()?;

        let url = categories_url(&self.config)?;
        let form = MultipartForm::category(&category.name, &category.subcategories, &category.images);
        let json = self.backend.send_form(FormMethod::Post, &url, form).await?;
        Ok(parse_saved_category(&json))
    }

    /// Validate, then PUT the update as multipart.
    ///
    /// When the update carries no images the form has no `files` field, so
    /// the server keeps the stored images.
    pub(crate) async fn put_category(
        &self,
        id: &CategoryId,
        update: &CategoryUpdate,
    ) -> HttpResult<Option<Category>> {
        update.validate()?;

        let url = category_url(&self.config, id)?;
        let form = MultipartForm::category(&update.name, &update.subcategories, &update.images);
        let json = self.backend.send_form(FormMethod::Put, &url, form).await?;
        Ok(parse_saved_category(&json))
    }

    pub(crate) async fn remove_category(&self, id: &CategoryId) -> HttpResult<()> {
        let url = category_url(&self.config, id)?;
        self.backend.delete(&url).await
    }
}
