//! SSH key registry.
//!
//! The delete path historically shipped without the separator between the
//! collection and the id (`/v1/sshkeys{id}`); this binding uses the
//! separated form, which the service accepts. See DESIGN.md.

use serde_json::json;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

use super::VscaleClient;

impl VscaleClient {
    /// GET `/v1/sshkeys`.
    pub fn build_list_ssh_keys(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/sshkeys")
    }

    /// POST `/v1/sshkeys` — register a public key under a name.
    pub fn build_add_ssh_key(&self, name: &str, key: &str) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            "/v1/sshkeys",
            &json!({ "name": name, "key": key }),
        )
    }

    /// DELETE `/v1/sshkeys/{id}`.
    pub fn build_delete_ssh_key(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/v1/sshkeys/{id}"))
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
    fn list_ssh_keys() {
        let req = client().build_list_ssh_keys();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/v1/sshkeys"));
        assert_bodyless_headers(&req);
    }

    #[test]
    fn add_ssh_key() {
        let req = client()
            .build_add_ssh_key("laptop", "ssh-ed25519 AAAA...")
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE_URL}/v1/sshkeys"));
        assert_json_headers(&req);
        assert_eq!(
            body_json(&req),
            json!({ "name": "laptop", "key": "ssh-ed25519 AAAA..." })
        );
    }

    #[test]
    fn delete_ssh_key_path_has_separator() {
        let req = client().build_delete_ssh_key(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, format!("{BASE_URL}/v1/sshkeys/42"));
        assert_bodyless_headers(&req);
    }
}
