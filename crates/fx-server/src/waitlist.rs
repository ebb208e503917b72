//! Waitlist signups persisted to a JSON file on disk.

use crate::serve::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("this email is already on the waitlist")]
    Duplicate,
    #[error("waitlist io: {0}")]
    Io(#[from] std::io::Error),
    #[error("waitlist file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WaitlistEntry {
    pub email: String,
    pub created_at: u64,
}

/// Append-only JSON store. The file is read and rewritten whole on each
/// signup; the expected volume is tiny. All file access goes through
/// `tokio::fs` so the handler never blocks a runtime thread.
pub struct WaitlistStore {
    path: PathBuf,
}

impl WaitlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn add(&mut self, email: &str) -> Result<WaitlistEntry, WaitlistError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(WaitlistError::InvalidEmail);
        }
        let mut entries = self.entries().await?;
        if entries.iter().any(|e| e.email == email) {
            return Err(WaitlistError::Duplicate);
        }
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let entry = WaitlistEntry { email, created_at };
        entries.push(entry.clone());
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&entries)?).await?;
        Ok(entry)
    }
}

#[derive(Deserialize)]
pub struct WaitlistRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

pub async fn add_to_waitlist(
    State(state): State<AppState>,
    Json(req): Json<WaitlistRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let mut store = state.waitlist.lock().await;
    match store.add(&req.email).await {
        Ok(entry) => {
            log::info!("waitlist signup: {}", entry.email);
            (
                StatusCode::OK,
                Json(ApiResponse {
                    success: true,
                    message: "you're on the waitlist".to_string(),
                }),
            )
        }
        Err(e @ (WaitlistError::InvalidEmail | WaitlistError::Duplicate)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                success: false,
                message: e.to_string(),
            }),
        ),
        Err(e) => {
            log::error!("waitlist signup failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    success: false,
                    message: "An error occurred. Please try again.".to_string(),
                }),
            )
        }
    }
}
