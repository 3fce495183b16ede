//! Ingredient Endpoints

use serde::Serialize;

use super::{send, Auth};
use crate::error::ApiError;
use crate::models::Ingredient;

#[derive(Serialize)]
struct CreateBody<'a> {
    name: &'a str,
}

pub async fn list(token: &str) -> Result<Vec<Ingredient>, ApiError> {
    let response = send("GET", "/ingredients", Auth::Bearer(token), None).await?;
    if !response.is_success() {
        return Err(ApiError::from_status(response.status));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Malformed(e.to_string()))
}

pub async fn create(token: &str, name: &str) -> Result<(), ApiError> {
    let body = serde_json::to_string(&CreateBody { name })
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    let response = send("POST", "/ingredients", Auth::Bearer(token), Some(body)).await?;
    if !response.is_success() {
        return Err(ApiError::from_status(response.status));
    }
    Ok(())
}

pub async fn delete(token: &str, id: u32) -> Result<(), ApiError> {
    let path = format!("/ingredients/{}", id);
    let response = send("DELETE", &path, Auth::Bearer(token), None).await?;
    if !response.is_success() {
        return Err(ApiError::from_status(response.status));
    }
    Ok(())
}
