//! Scalet lifecycle: create, query, power control, rebuild, upgrade,
//! key attachment, and backup creation/restore.

use serde_json::json;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::ServerCreate;

use super::VscaleClient;

impl VscaleClient {
    /// GET `/v1/scalets` — every scalet on the account.
    pub fn build_list_servers(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/scalets")
    }

    /// POST `/v1/scalets` — provision a new scalet.
    ///
    /// See [`ServerCreate`] for the defaults and the password/keys
    /// omission rules.
    pub fn build_create_server(&self, input: &ServerCreate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/v1/scalets", input)
    }

    /// GET `/v1/scalets/{ctid}` — one scalet.
    pub fn build_get_server(&self, ctid: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/v1/scalets/{ctid}"))
    }

    /// PATCH `/v1/scalets/{ctid}/restart`.
    ///
    /// The remote API wants the ctid repeated in the body.
    pub fn build_restart_server(&self, ctid: u64) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Patch,
            &format!("/v1/scalets/{ctid}/restart"),
            &json!({ "id": ctid }),
        )
    }

    /// PATCH `/v1/scalets/{ctid}/rebuild` — reinstall the OS, keeping the
    /// scalet's address and plan. Destroys all data on the scalet.
    pub fn build_rebuild_server(&self, ctid: u64, password: &str) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Patch,
            &format!("/v1/scalets/{ctid}/rebuild"),
            &json!({ "password": password }),
        )
    }

    /// PATCH `/v1/scalets/{ctid}/stop`.
    pub fn build_stop_server(&self, ctid: u64) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Patch,
            &format!("/v1/scalets/{ctid}/stop"),
            &json!({ "id": ctid }),
        )
    }

    /// PATCH `/v1/scalets/{ctid}/start`.
    pub fn build_start_server(&self, ctid: u64) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Patch,
            &format!("/v1/scalets/{ctid}/start"),
            &json!({ "id": ctid }),
        )
    }

    /// POST `/v1/scalets/{ctid}/upgrade` — move the scalet to a bigger
    /// rplan. Downgrades are rejected by the remote service.
    pub fn build_upgrade_server(&self, ctid: u64, rplan: &str) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            &format!("/v1/scalets/{ctid}/upgrade"),
            &json!({ "rplan": rplan }),
        )
    }

    /// DELETE `/v1/scalets/{ctid}`.
    pub fn build_delete_server(&self, ctid: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/v1/scalets/{ctid}"))
    }

    /// PATCH `/v1/scalets/{ctid}` — attach SSH keys to a running scalet.
    pub fn build_attach_ssh_keys(
        &self,
        ctid: u64,
        keys: &[String],
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Patch,
            &format!("/v1/scalets/{ctid}"),
            &json!({ "keys": keys }),
        )
    }

    /// POST `/v1/scalets/{ctid}/backup` — snapshot the scalet under the
    /// given name.
    pub fn build_create_server_backup(
        &self,
        ctid: u64,
        name: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            &format!("/v1/scalets/{ctid}/backup"),
            &json!({ "name": name }),
        )
    }

    /// POST `/v1/scalets/{ctid}/rebuild` — recreate the scalet from a
    /// previously taken backup.
    pub fn build_restore_server(
        &self,
        ctid: u64,
        backup_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            &format!("/v1/scalets/{ctid}/rebuild"),
            &json!({ "make_from": backup_id }),
        )
    }
}
