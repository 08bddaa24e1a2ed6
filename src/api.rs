//! Grocery API Bindings
//!
//! Frontend bindings to the list/history HTTP endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{
    ActionResponse, AddItemArgs, AddResponse, CopyResponse, DeleteResponse, HistorySnapshot,
    ItemId, ItemIdArgs, ListSnapshot, ToggleResponse,
};

// ========================
// Errors
// ========================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch rejected, or no browser window to fetch from
    #[error("request failed: {0}")]
    Transport(String),
    /// body was not JSON, or not the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
    /// well-formed response with `success: false`
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl ApiError {
    /// The message the server asked us to show, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(Some(msg)) if !msg.trim().is_empty() => Some(msg),
            _ => None,
        }
    }
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// ========================
// Typed outcomes
// ========================

/// Names the server added and skipped for one `/add-item` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Added {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
}

fn rejected(error: Option<String>) -> ApiError {
    ApiError::Rejected(error)
}

impl AddResponse {
    pub fn into_result(self) -> Result<Added, ApiError> {
        if !self.success {
            return Err(rejected(self.error));
        }
        Ok(Added {
            added: self.added,
            skipped: self.skipped,
        })
    }
}

impl ToggleResponse {
    /// New checked state
    pub fn into_result(self) -> Result<bool, ApiError> {
        if !self.success {
            return Err(rejected(self.error));
        }
        Ok(self.checked)
    }
}

impl DeleteResponse {
    /// Name of the deleted item, as the server knows it
    pub fn into_result(self) -> Result<String, ApiError> {
        if !self.success {
            return Err(rejected(self.error));
        }
        Ok(self.deleted)
    }
}

impl ActionResponse {
    /// Optional human-readable message from the server
    pub fn into_result(self) -> Result<Option<String>, ApiError> {
        if !self.success {
            return Err(rejected(self.error));
        }
        Ok(self.message)
    }
}

impl CopyResponse {
    /// Number of items copied forward
    pub fn into_result(self) -> Result<u32, ApiError> {
        if !self.success {
            return Err(rejected(self.error));
        }
        Ok(self.copied_count)
    }
}

// ========================
// Client
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("[API] {} {}", method, url);

        let init = RequestInit::new();
        init.set_method(method);
        if method != "GET" {
            let headers = Headers::new().map_err(|e| ApiError::Transport(js_error(e)))?;
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| ApiError::Transport(js_error(e)))?;
            init.set_headers(&headers);
        }
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&url, &init)
            .map_err(|e| ApiError::Transport(js_error(e)))?;
        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Transport(js_error(e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| ApiError::Transport(js_error(e)))?;
        if !response.ok() {
            // Error statuses still carry a JSON `{ "error": ... }` body
            log::warn!("[API] {} {} -> HTTP {}", method, url, response.status());
        }

        let json = response.json().map_err(|e| ApiError::Decode(js_error(e)))?;
        let json = JsFuture::from(json)
            .await
            .map_err(|e| ApiError::Decode(js_error(e)))?;
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post<A: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        args: Option<&A>,
    ) -> Result<T, ApiError> {
        let body = match args {
            Some(args) => {
                Some(serde_json::to_string(args).map_err(|e| ApiError::Decode(e.to_string()))?)
            }
            None => None,
        };
        self.send("POST", path, body).await
    }

    // ========================
    // Endpoints
    // ========================

    pub async fn get_current_list(&self) -> Result<ListSnapshot, ApiError> {
        self.send("GET", "/get-current-list", None).await
    }

    pub async fn get_history(&self) -> Result<HistorySnapshot, ApiError> {
        self.send("GET", "/get-history", None).await
    }

    pub async fn add_item(&self, text: &str) -> Result<Added, ApiError> {
        let response: AddResponse = self.post("/add-item", Some(&AddItemArgs { text })).await?;
        response.into_result()
    }

    pub async fn toggle_item(&self, item_id: &ItemId) -> Result<bool, ApiError> {
        let response: ToggleResponse =
            self.post("/toggle-item", Some(&ItemIdArgs { item_id })).await?;
        response.into_result()
    }

    pub async fn delete_item(&self, item_id: &ItemId) -> Result<String, ApiError> {
        let response: DeleteResponse =
            self.post("/delete-item", Some(&ItemIdArgs { item_id })).await?;
        response.into_result()
    }

    pub async fn clear_all(&self) -> Result<(), ApiError> {
        let response: ActionResponse = self.post::<(), _>("/clear-all", None).await?;
        response.into_result().map(|_| ())
    }

    pub async fn complete_trip(&self) -> Result<Option<String>, ApiError> {
        let response: ActionResponse = self.post::<(), _>("/complete-trip", None).await?;
        response.into_result()
    }

    pub async fn copy_from_last_trip(&self) -> Result<u32, ApiError> {
        let response: CopyResponse = self.post::<(), _>("/copy-from-last-trip", None).await?;
        response.into_result()
    }
}
