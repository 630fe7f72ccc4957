// src/models/insight.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InsightStatus {
    #[default]
    NotRequested,
    Pending,
    Done,
}

/// Cached AI summary for one project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectInsight {
    pub status: InsightStatus,
    pub text: Option<String>,
}

impl ProjectInsight {
    pub fn button_label(&self) -> &'static str {
        match self.status {
            InsightStatus::NotRequested => "✨ Generate AI Insight",
            InsightStatus::Pending => "Analyzing...",
            InsightStatus::Done => "Insight Generated",
        }
    }

    pub fn is_disabled(&self) -> bool {
        !matches!(self.status, InsightStatus::NotRequested)
    }
}
