//! Backup management. Backup ids are opaque strings assigned by the
//! remote service.

use serde_json::json;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

use super::VscaleClient;

impl VscaleClient {
    /// GET `/v1/backups`.
    pub fn build_list_backups(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/backups")
    }

    /// GET `/v1/backups/{id}`.
    pub fn build_get_backup(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/v1/backups/{id}"))
    }

    /// DELETE `/v1/backups/{id}`.
    pub fn build_delete_backup(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/v1/backups/{id}"))
    }

    /// POST `/v1/backups/{id}/relocate` — copy the backup to another
    /// location so scalets there can be restored from it.
    pub fn build_relocate_backup(
        &self,
        id: &str,
        destination: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            &format!("/v1/backups/{id}/relocate"),
            &json!({ "destination": destination }),
        )
    }
}
