//! DNS domains and their resource records.
//!
//! The remote API addresses both collections with a trailing slash
//! (`/v1/domains/`, `/v1/domains/{id}/records/`); the per-item paths have
//! none. Record payloads are caller-supplied JSON mappings sent verbatim,
//! since the field set varies by record type (A, AAAA, MX, TXT, ...).

use serde_json::{json, Value};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

use super::VscaleClient;

impl VscaleClient {
    /// GET `/v1/domains/`.
    pub fn build_list_domains(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/domains/")
    }

    /// POST `/v1/domains/` — register a domain, optionally seeding it from
    /// the contents of a BIND-format zone file.
    pub fn build_create_domain(
        &self,
        name: &str,
        bind_zone: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        let body = match bind_zone {
            Some(zone) => json!({ "name": name, "bind_zone": zone }),
            None => json!({ "name": name }),
        };
        self.json_request(HttpMethod::Post, "/v1/domains/", &body)
    }

    /// GET `/v1/domains/{id}`.
    pub fn build_get_domain(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/v1/domains/{id}"))
    }

    /// PATCH `/v1/domains/{id}` — replace the domain's tag set.
    pub fn build_update_domain(&self, id: u64, tags: &[u64]) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Patch,
            &format!("/v1/domains/{id}"),
            &json!({ "tags": tags }),
        )
    }

    /// DELETE `/v1/domains/{id}`.
    pub fn build_delete_domain(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/v1/domains/{id}"))
    }

    /// GET `/v1/domains/{id}/records/`.
    pub fn build_list_domain_records(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/v1/domains/{id}/records/"))
    }

    /// POST `/v1/domains/{id}/records/` — `record` is passed through as-is.
    pub fn build_create_domain_record(
        &self,
        id: u64,
        record: &Value,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, &format!("/v1/domains/{id}/records/"), record)
    }

    /// PUT `/v1/domains/{id}/records/{rid}` — `record` is passed through
    /// as-is.
    pub fn build_update_domain_record(
        &self,
        id: u64,
        rid: u64,
        record: &Value,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Put,
            &format!("/v1/domains/{id}/records/{rid}"),
            record,
        )
    }

    /// DELETE `/v1/domains/{id}/records/{rid}`.
    pub fn build_delete_domain_record(&self, id: u64, rid: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/v1/domains/{id}/records/{rid}"))
    }

    /// GET `/v1/domains/{id}/records/{rid}`.
    pub fn build_get_domain_record(&self, id: u64, rid: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/v1/domains/{id}/records/{rid}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{
        assert_bodyless_headers, assert_json_headers, body_json, client, BASE_URL,
    };
    use crate::http::HttpMethod;
    use serde_json::json;

    #[test]
    fn list_domains_keeps_trailing_slash() {
        let req = client().build_list_domains();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/v1/domains/"));
        assert_bodyless_headers(&req);
    }

    #[test]
    fn create_domain_without_zone() {
        let req = client().build_create_domain("example.com", None).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE_URL}/v1/domains/"));
        assert_json_headers(&req);
        assert_eq!(body_json(&req), json!({ "name": "example.com" }));
    }

    #[test]
    fn create_domain_with_zone() {
        let zone = "$ORIGIN example.com.\n@ IN SOA ns1 admin 1 3600 600 86400 300\n";
        let req = client()
            .build_create_domain("example.com", Some(zone))
            .unwrap();
        assert_eq!(
            body_json(&req),
            json!({ "name": "example.com", "bind_zone": zone })
        );
    }

    #[test]
    fn get_domain() {
        let req = client().build_get_domain(77);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/v1/domains/77"));
        assert_bodyless_headers(&req);
    }

    #[test]
    fn update_domain_tags() {
        let req = client().build_update_domain(77, &[1, 2]).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, format!("{BASE_URL}/v1/domains/77"));
        assert_eq!(body_json(&req), json!({ "tags": [1, 2] }));
    }

    #[test]
    fn delete_domain() {
        let req = client().build_delete_domain(77);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, format!("{BASE_URL}/v1/domains/77"));
        assert_bodyless_headers(&req);
    }

    #[test]
    fn record_collection_keeps_trailing_slash() {
        let req = client().build_list_domain_records(77);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/v1/domains/77/records/"));
        assert_bodyless_headers(&req);
    }

    #[test]
    fn create_domain_record_passes_mapping_verbatim() {
        let record = json!({ "type": "A", "name": "www.example.com", "content": "10.0.0.1" });
        let req = client().build_create_domain_record(77, &record).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE_URL}/v1/domains/77/records/"));
        assert_json_headers(&req);
        assert_eq!(body_json(&req), record);
    }

    #[test]
    fn update_domain_record() {
        let record = json!({ "type": "TXT", "name": "example.com", "content": "v=spf1 -all" });
        let req = client().build_update_domain_record(77, 301, &record).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, format!("{BASE_URL}/v1/domains/77/records/301"));
        assert_eq!(body_json(&req), record);
    }

    #[test]
    fn get_and_delete_domain_record() {
        let get = client().build_get_domain_record(77, 301);
        assert_eq!(get.method, HttpMethod::Get);
        assert_eq!(get.url, format!("{BASE_URL}/v1/domains/77/records/301"));
        assert_bodyless_headers(&get);

        let del = client().build_delete_domain_record(77, 301);
        assert_eq!(del.method, HttpMethod::Delete);
        assert_eq!(del.url, format!("{BASE_URL}/v1/domains/77/records/301"));
        assert_bodyless_headers(&del);
    }
}
