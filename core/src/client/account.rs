//! Account information and background task listing.

use crate::http::{HttpMethod, HttpRequest};

use super::VscaleClient;

impl VscaleClient {
    /// GET `/v1/account` — name, activation date, email of the token owner.
    pub fn build_get_account(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/account")
    }

    /// GET `/v1/tasks` — in-flight asynchronous operations (creates,
    /// rebuilds, relocations) with their completion state.
    pub fn build_list_tasks(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/tasks")
    }
}
