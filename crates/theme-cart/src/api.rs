//! HTTP client for the cart endpoints.

use gloo_net::http::Request;
use theme_core::{AddPayload, CartSnapshot, ThemeError, UpdatePayload};

use crate::endpoints;

fn transport(e: gloo_net::Error) -> ThemeError {
    ThemeError::Network(e.to_string())
}

fn body(e: gloo_net::Error) -> ThemeError {
    ThemeError::Serialization(e.to_string())
}

/// `GET /cart.js`.
pub async fn fetch_snapshot() -> Result<CartSnapshot, ThemeError> {
    let resp = Request::get(endpoints::SNAPSHOT)
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(ThemeError::Status(resp.status()));
    }
    resp.json().await.map_err(body)
}

/// `POST /cart/add.js`. The response fields are ignored by the core.
pub async fn post_add(payload: &AddPayload) -> Result<(), ThemeError> {
    let resp = Request::post(endpoints::ADD)
        .json(payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(ThemeError::Status(resp.status()));
    }
    // Drain the body so protocol errors surface, then drop it.
    let _: serde_json::Value = resp.json().await.map_err(body)?;
    Ok(())
}

/// `POST /cart/update.js` with the complete absolute-quantity map.
pub async fn post_update(payload: &UpdatePayload) -> Result<CartSnapshot, ThemeError> {
    let resp = Request::post(endpoints::UPDATE)
        .json(payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(ThemeError::Status(resp.status()));
    }
    resp.json().await.map_err(body)
}
