//! Marketplace products.

use reqwest::multipart::Form;

use studenthub_core::ApiResult;
use studenthub_core::domain::{ItemId, Product};
use studenthub_shared::dto::ProductRequest;

use super::Upload;
use crate::http::{ApiClient, id_path};

impl ApiClient {
    /// GET /api/products/{id}
    pub async fn product(&self, id: &ItemId) -> ApiResult<Product> {
        self.get_json(&id_path("/api/products", id, "")?).await
    }

    /// POST /api/products - multipart form with an optional `image` part.
    pub async fn create_product(
        &self,
        request: &ProductRequest,
        image: Option<Upload>,
    ) -> ApiResult<Product> {
        let mut form = Form::new()
            .text("title", request.title.clone())
            .text("description", request.description.clone())
            .text("price", request.price.to_string());
        if let Some(category) = &request.category {
            form = form.text("category", category.clone());
        }
        if let Some(image) = image {
            form = form.part("image", image.into_part()?);
        }

        let req = self
            .authed(self.http().post(self.url("/api/products")).multipart(form))
            .await?;
        self.send(req).await
    }

    /// PUT /api/products/{id}
    pub async fn update_product(&self, id: &ItemId, request: &ProductRequest) -> ApiResult<Product> {
        self.put_json(&id_path("/api/products", id, "")?, request).await
    }

    /// DELETE /api/products/{id}
    pub async fn delete_product(&self, id: &ItemId) -> ApiResult<()> {
        self.delete(&id_path("/api/products", id, "")?).await
    }
}
