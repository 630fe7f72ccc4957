// src/models/api.rs
//! JSON bodies exchanged with the page script.
use crate::models::chat::{ChatMessage, SendRejected, WidgetState};
use crate::models::insight::{InsightStatus, ProjectInsight};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSnapshot {
    pub state: WidgetState,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SendRejected>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    pub chat: ChatSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightView {
    pub slug: String,
    pub status: InsightStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub button_label: String,
    pub disabled: bool,
}

impl InsightView {
    pub fn from_insight(slug: &str, insight: &ProjectInsight) -> Self {
        Self {
            slug: slug.to_string(),
            status: insight.status,
            text: insight.text.clone(),
            button_label: insight.button_label().to_string(),
            disabled: insight.is_disabled(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightResponse {
    pub success: bool,
    /// True only when this request triggered the upstream call.
    pub generated: bool,
    pub insight: InsightView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session_id: String,
    pub chat: ChatSnapshot,
    pub insights: Vec<InsightView>,
}
