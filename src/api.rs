//! Task Service Client
//!
//! HTTP bindings for the remote task collection. Every operation is a
//! single attempt; callers decide what a failure means for local state.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::models::Task;

/// A remote operation failed
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded {status} to {url}")]
    Status { status: u16, url: String },
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
struct CreateTask<'a> {
    title: &'a str,
    completed: bool,
}

/// Partial update; unset fields stay untouched on the server
#[derive(Debug, Default, Serialize)]
pub struct TaskPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

fn collection_url() -> String {
    format!("{}/api/todos/", config::get().api.base_url)
}

fn task_url(id: u64) -> String {
    format!("{}/api/todos/{}/", config::get().api.base_url, id)
}

fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            url: response.url(),
        })
    }
}

// ========================
// Operations
// ========================

/// Fetch the full task collection
pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let response = check(Request::get(&collection_url()).send().await?)?;
    Ok(response.json().await?)
}

/// Create a task; the service assigns the id and returns the stored record
pub async fn create_task(title: &str) -> Result<Task, ApiError> {
    let body = CreateTask {
        title,
        completed: false,
    };
    let response = check(Request::post(&collection_url()).json(&body)?.send().await?)?;
    Ok(response.json().await?)
}

/// Apply `patch` to the task with `id`, returning the full updated record
pub async fn update_task(id: u64, patch: &TaskPatch<'_>) -> Result<Task, ApiError> {
    let response = check(Request::patch(&task_url(id)).json(patch)?.send().await?)?;
    Ok(response.json().await?)
}

/// Delete the task with `id`
pub async fn delete_task(id: u64) -> Result<(), ApiError> {
    check(Request::delete(&task_url(id)).send().await?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = TaskPatch {
            completed: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"completed": true})
        );

        let patch = TaskPatch {
            title: Some("new title"),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"title": "new title"})
        );
    }

    #[test]
    fn test_create_body_shape() {
        let body = CreateTask {
            title: "write spec",
            completed: false,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"title": "write spec", "completed": false})
        );
    }

    #[test]
    fn test_resource_urls() {
        // Default config: same-origin, Django-style trailing slashes
        assert_eq!(collection_url(), "/api/todos/");
        assert_eq!(task_url(7), "/api/todos/7/");
    }
}
