//! Scalet tags: named labels over sets of scalets.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::TagPayload;

use super::VscaleClient;

impl VscaleClient {
    /// POST `/v1/scalets/tags` — create a tag, optionally attaching it to
    /// scalets right away.
    pub fn build_add_tag(&self, input: &TagPayload) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/v1/scalets/tags", input)
    }

    /// GET `/v1/scalets/tags`.
    pub fn build_list_tags(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/scalets/tags")
    }

    /// GET `/v1/scalets/tags/{id}`.
    pub fn build_get_tag(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/v1/scalets/tags/{id}"))
    }

    /// PUT `/v1/scalets/tags/{id}` — replace the tag's name and scalet set.
    pub fn build_update_tag(&self, id: u64, input: &TagPayload) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, &format!("/v1/scalets/tags/{id}"), input)
    }

    /// DELETE `/v1/scalets/tags/{id}` — removes the tag, not the scalets.
    pub fn build_delete_tag(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/v1/scalets/tags/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{
        assert_bodyless_headers, assert_json_headers, body_json, client, BASE_URL,
    };
    use crate::http::HttpMethod;
    use crate::types::TagPayload;
    use serde_json::json;

    #[test]
    fn add_tag_without_scalets() {
        let input = TagPayload {
            name: "web".to_string(),
            scalets: None,
        };
        let req = client().build_add_tag(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE_URL}/v1/scalets/tags"));
        assert_json_headers(&req);
        assert_eq!(body_json(&req), json!({ "name": "web" }));
    }

    #[test]
    fn add_tag_with_scalets_preserves_order() {
        let input = TagPayload {
            name: "web".to_string(),
            scalets: Some(vec![12, 7, 9]),
        };
        let req = client().build_add_tag(&input).unwrap();
        assert_eq!(
            body_json(&req),
            json!({ "name": "web", "scalets": [12, 7, 9] })
        );
    }

    #[test]
    fn list_tags() {
        let req = client().build_list_tags();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/v1/scalets/tags"));
        assert_bodyless_headers(&req);
    }

    #[test]
    fn get_tag() {
        let req = client().build_get_tag(5);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/v1/scalets/tags/5"));
        assert_bodyless_headers(&req);
    }

    #[test]
    fn update_tag() {
        let input = TagPayload {
            name: "db".to_string(),
            scalets: Some(vec![3]),
        };
        let req = client().build_update_tag(5, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, format!("{BASE_URL}/v1/scalets/tags/5"));
        assert_eq!(body_json(&req), json!({ "name": "db", "scalets": [3] }));
    }

    #[test]
    fn delete_tag() {
        let req = client().build_delete_tag(5);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, format!("{BASE_URL}/v1/scalets/tags/5"));
        assert_bodyless_headers(&req);
    }
}
