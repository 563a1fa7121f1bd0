//! Event listings.

use studenthub_core::ApiResult;
use studenthub_core::domain::Event;
use studenthub_shared::dto::EventRequest;

use crate::http::ApiClient;

impl ApiClient {
    /// POST /api/events
    pub async fn create_event(&self, request: &EventRequest) -> ApiResult<Event> {
        self.post_json("/api/events", request).await
    }
}
