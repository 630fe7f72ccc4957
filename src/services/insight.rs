// src/services/insight.rs
use crate::content::{find_project, insight_prompt, PROJECTS};
use crate::models::api::InsightView;
use crate::models::insight::{InsightStatus, ProjectInsight};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInsight {
    pub slug: &'static str,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightRejected {
    UnknownProject,
    InProgress,
    AlreadyGenerated(String),
}

/// Per-visit insight cache: one entry per project card, generated at most once.
#[derive(Debug, Clone)]
pub struct InsightBoard {
    insights: HashMap<&'static str, ProjectInsight>,
}

impl Default for InsightBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightBoard {
    pub fn new() -> Self {
        let insights = PROJECTS
            .iter()
            .map(|p| (p.slug, ProjectInsight::default()))
            .collect();
        Self { insights }
    }

    pub fn get(&self, slug: &str) -> Option<&ProjectInsight> {
        self.insights.get(slug)
    }

    /// Flip `NotRequested` to `Pending` and hand back the prompt to send.
    pub fn begin(&mut self, slug: &str) -> Result<PendingInsight, InsightRejected> {
        let project = find_project(slug).ok_or(InsightRejected::UnknownProject)?;
        let insight = self
            .insights
            .get_mut(project.slug)
            .ok_or(InsightRejected::UnknownProject)?;

        match insight.status {
            InsightStatus::NotRequested => {
                insight.status = InsightStatus::Pending;
                Ok(PendingInsight {
                    slug: project.slug,
                    prompt: insight_prompt(project),
                })
            }
            InsightStatus::Pending => Err(InsightRejected::InProgress),
            InsightStatus::Done => Err(InsightRejected::AlreadyGenerated(
                insight.text.clone().unwrap_or_default(),
            )),
        }
    }

    pub fn complete(&mut self, pending: &PendingInsight, text: String) -> bool {
        match self.insights.get_mut(pending.slug) {
            Some(insight) if insight.status == InsightStatus::Pending => {
                insight.status = InsightStatus::Done;
                insight.text = Some(text);
                true
            }
            _ => false,
        }
    }

    /// Put a `Pending` insight back to `NotRequested` so the card can be retried.
    pub fn abandon(&mut self, pending: &PendingInsight) -> bool {
        match self.insights.get_mut(pending.slug) {
            Some(insight) if insight.status == InsightStatus::Pending => {
                insight.status = InsightStatus::NotRequested;
                true
            }
            _ => false,
        }
    }

    pub fn view(&self, slug: &str) -> Option<InsightView> {
        self.insights
            .get(slug)
            .map(|insight| InsightView::from_insight(slug, insight))
    }

    /// Views in page order.
    pub fn views(&self) -> Vec<InsightView> {
        PROJECTS.iter().filter_map(|p| self.view(p.slug)).collect()
    }
}
