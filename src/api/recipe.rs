//! Recipe Endpoints
//!
//! The backend exposes no update-by-name or delete-by-name routes, so the
//! page runs a two-step workflow: `resolve` by name first, then `update` or
//! `delete` by the resolved id. The two requests are not atomic; a 404 on
//! the second step means the record changed in between and is reported as
//! `ApiError::Stale`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use super::{send, Auth};
use crate::error::ApiError;
use crate::lookup;
use crate::models::Recipe;

/// Characters escaped inside a query-string value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?');

#[derive(Serialize)]
struct RecipeBody<'a> {
    name: &'a str,
    instructions: &'a str,
}

fn search_path(term: &str) -> String {
    format!("/recipes?term={}", utf8_percent_encode(term, QUERY_VALUE))
}

fn resolve_path(name: &str) -> String {
    format!("/recipes?name={}", utf8_percent_encode(name, QUERY_VALUE))
}

/// Full listing. A 404 maps to `NotFound`, which the page treats as an
/// empty collection rather than a failure.
pub async fn list(token: &str) -> Result<Vec<Recipe>, ApiError> {
    let response = send("GET", "/recipes", Auth::Bearer(token), None).await?;
    if !response.is_success() {
        return Err(ApiError::from_status(response.status));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Server-side filtered listing; rendered directly, never merged into the
/// mirror.
pub async fn search(token: &str, term: &str) -> Result<Vec<Recipe>, ApiError> {
    let response = send("GET", &search_path(term), Auth::Bearer(token), None).await?;
    if !response.is_success() {
        return Err(ApiError::from_status(response.status));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Malformed(e.to_string()))
}

pub async fn create(token: &str, name: &str, instructions: &str) -> Result<(), ApiError> {
    let body = serde_json::to_string(&RecipeBody { name, instructions })
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    let response = send("POST", "/recipes", Auth::Bearer(token), Some(body)).await?;
    if !response.is_success() {
        return Err(ApiError::from_status(response.status));
    }
    Ok(())
}

/// Step one of resolve-then-mutate: find the recipe carrying this exact
/// name. `NotFound` here means the mutating request is never sent.
pub async fn resolve(token: &str, name: &str) -> Result<Recipe, ApiError> {
    let response = send("GET", &resolve_path(name), Auth::Bearer(token), None).await?;
    if !response.is_success() {
        return Err(ApiError::from_status(response.status));
    }
    let matches: Vec<Recipe> =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    lookup::recipe_by_name(&matches, name)
        .cloned()
        .ok_or(ApiError::NotFound)
}

pub async fn update(
    token: &str,
    id: u32,
    name: &str,
    instructions: &str,
) -> Result<(), ApiError> {
    let body = serde_json::to_string(&RecipeBody { name, instructions })
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    let path = format!("/recipes/{}", id);
    let response = send("PUT", &path, Auth::Bearer(token), Some(body)).await?;
    if !response.is_success() {
        return Err(ApiError::from_mutation_status(response.status));
    }
    Ok(())
}

pub async fn delete(token: &str, id: u32) -> Result<(), ApiError> {
    let path = format!("/recipes/{}", id);
    let response = send("DELETE", &path, Auth::Bearer(token), None).await?;
    if !response.is_success() {
        return Err(ApiError::from_mutation_status(response.status));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_path_encodes_the_term() {
        assert_eq!(search_path("stew"), "/recipes?term=stew");
        assert_eq!(search_path("beef stew"), "/recipes?term=beef%20stew");
        assert_eq!(search_path("salt&pepper"), "/recipes?term=salt%26pepper");
    }

    #[test]
    fn resolve_path_encodes_the_name() {
        assert_eq!(resolve_path("Beef Stew"), "/recipes?name=Beef%20Stew");
        assert_eq!(resolve_path("50% rye"), "/recipes?name=50%25%20rye");
    }
}
