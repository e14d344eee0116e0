//! Backend API Client
//!
//! HTTP bindings to the items REST endpoints.

use reqwest::Client;
use serde::Serialize;

use crate::models::Item;

const ITEMS_PATH: &str = "/api/items";

/// Request body for creating an item
#[derive(Serialize)]
pub struct CreateItemArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

pub async fn list_items() -> Result<Vec<Item>, String> {
    let resp = reqwest::get(api_url(ITEMS_PATH))
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<Vec<Item>>().await.map_err(|e| e.to_string())
}

pub async fn create_item(args: &CreateItemArgs<'_>) -> Result<Item, String> {
    let resp = Client::new()
        .post(api_url(ITEMS_PATH))
        .json(args)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<Item>().await.map_err(|e| e.to_string())
}

/// Resolve an API path against the current window origin.
/// The fetch-backed client only accepts absolute URLs.
fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .expect("window should exist")
        .location()
        .origin()
        .unwrap_or_default();
    join_origin(&origin, path)
}

fn join_origin(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_origin() {
        assert_eq!(
            join_origin("http://localhost:8080", "/api/items"),
            "http://localhost:8080/api/items"
        );
        // Trailing slash on the origin must not double up
        assert_eq!(
            join_origin("http://localhost:8080/", "/api/items"),
            "http://localhost:8080/api/items"
        );
    }

    #[test]
    fn test_create_item_body_shape() {
        let args = CreateItemArgs {
            name: "Widget",
            description: "A thing",
        };
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Widget", "description": "A thing"})
        );
    }

    #[test]
    fn test_create_item_body_keeps_empty_description() {
        let args = CreateItemArgs {
            name: "Widget",
            description: "",
        };
        let body = serde_json::to_string(&args).unwrap();
        assert_eq!(body, r#"{"name":"Widget","description":""}"#);
    }
}
