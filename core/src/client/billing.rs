//! Billing: price list, balance, payment history, consumption reports,
//! and the low-balance notification policy.

use serde_json::json;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

use super::VscaleClient;

impl VscaleClient {
    /// GET `/v1/billing/prices`.
    pub fn build_list_prices(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/billing/prices")
    }

    /// GET `/v1/billing/notify` — balance threshold that triggers an email.
    pub fn build_get_notify_policy(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/billing/notify")
    }

    /// PUT `/v1/billing/notify`.
    pub fn build_set_notify_policy(&self, notify_balance: i64) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Put,
            "/v1/billing/notify",
            &json!({ "notify_balance": notify_balance }),
        )
    }

    /// GET `/v1/billing/balance`.
    pub fn build_get_balance(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/billing/balance")
    }

    /// GET `/v1/billing/payments`.
    pub fn build_list_payments(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/v1/billing/payments")
    }

    /// GET `/v1/billing/consumption?start={s}&end={e}`.
    ///
    /// Dates are `YYYY-MM-DD`, passed through verbatim as query
    /// parameters; the remote service validates the format.
    pub fn build_get_consumption(&self, start: &str, end: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &format!("/v1/billing/consumption?start={start}&end={end}"),
        )
    }
}
