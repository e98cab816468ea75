//! Read-only catalogs: datacenter locations, base images, and rplans.

use crate::http::{HttpMethod, HttpRequest};

use super::VscaleClient;

impl VscaleClient {
    /// GET `/v1/locations`.
    pub fn build_list_locations(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/locations")
    }

    /// GET `/v1/images` — OS images usable as `make_from` at creation.
    pub fn build_list_images(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/images")
    }

    /// GET `/v1/rplans` — hardware/billing tiers.
    pub fn build_list_plans(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/rplans")
    }
}
