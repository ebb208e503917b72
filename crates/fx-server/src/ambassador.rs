//! Ambassador program applications, persisted like the waitlist.

use crate::serve::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AmbassadorError {
    #[error("ambassador io: {0}")]
    Io(#[from] std::io::Error),
    #[error("ambassador file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AmbassadorApplication {
    pub name: String,
    pub email: String,
    pub school: String,
    pub grade: String,
    pub community_access: String,
    pub why_interested: String,
    /// Optional on submission.
    #[serde(default)]
    pub experience: String,
    pub time_commitment: String,
    pub created_at: u64,
}

/// JSON-file store for submitted applications. Applications are append-only
/// and never deduplicated.
pub struct AmbassadorStore {
    path: PathBuf,
}

impl AmbassadorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn entries(&self) -> Result<Vec<AmbassadorApplication>, AmbassadorError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn add(&mut self, app: AmbassadorApplication) -> Result<(), AmbassadorError> {
        let mut entries = self.entries().await?;
        entries.push(app);
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&entries)?).await?;
        Ok(())
    }
}

#[derive(Deserialize, Default)]
pub struct AmbassadorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub community_access: String,
    #[serde(default)]
    pub why_interested: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub time_commitment: String,
}

impl AmbassadorRequest {
    /// First required field left blank, as a display label for the error.
    fn missing_field(&self) -> Option<&'static str> {
        [
            (self.name.trim(), "Name"),
            (self.email.trim(), "Email"),
            (self.school.trim(), "School"),
            (self.grade.trim(), "Grade"),
            (self.community_access.trim(), "Community Access"),
            (self.why_interested.trim(), "Why Interested"),
            (self.time_commitment.trim(), "Time Commitment"),
        ]
        .into_iter()
        .find(|(value, _)| value.is_empty())
        .map(|(_, label)| label)
    }
}

pub async fn submit_application(
    State(state): State<AppState>,
    Json(req): Json<AmbassadorRequest>,
) -> (StatusCode, Json<crate::waitlist::ApiResponse>) {
    use crate::waitlist::ApiResponse;

    if let Some(label) = req.missing_field() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                success: false,
                message: format!("{label} is required"),
            }),
        );
    }

    let created_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let application = AmbassadorApplication {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_lowercase(),
        school: req.school.trim().to_string(),
        grade: req.grade.trim().to_string(),
        community_access: req.community_access.trim().to_string(),
        why_interested: req.why_interested.trim().to_string(),
        experience: req.experience.trim().to_string(),
        time_commitment: req.time_commitment.trim().to_string(),
        created_at,
    };

    let mut store = state.ambassador.lock().await;
    match store.add(application).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                message: "Application submitted successfully!".to_string(),
            }),
        ),
        Err(e) => {
            log::error!("ambassador application failed: {e}");
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
