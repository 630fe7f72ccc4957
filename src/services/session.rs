// src/services/session.rs
//! In-memory visit sessions: the per-browser-visit UI state behind the page.

use crate::services::chat_widget::ChatWidget;
use crate::services::insight::InsightBoard;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub type SessionId = Uuid;

/// State owned by one page visit. Chat and insights are locked independently.
#[derive(Debug)]
pub struct VisitSession {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    last_seen_ms: AtomicI64,
    pub chat: Mutex<ChatWidget>,
    pub insights: Mutex<InsightBoard>,
    cancel: CancellationToken,
}

impl VisitSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_seen_ms: AtomicI64::new(now.timestamp_millis()),
            chat: Mutex::new(ChatWidget::new()),
            insights: Mutex::new(InsightBoard::new()),
            cancel: CancellationToken::new(),
        }
    }

    pub fn touch(&self) {
        self.last_seen_ms
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.last_seen_ms.load(Ordering::Relaxed))
            .unwrap_or(self.created_at)
    }

    /// Fires when the visit ends; in-flight calls race against it.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn is_ended(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn end(&self) {
        self.cancel.cancel();
    }
}

impl Default for VisitSession {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<VisitSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn create(&self) -> Arc<VisitSession> {
        let session = Arc::new(VisitSession::new());
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, Arc::clone(&session));
        tracing::info!(session_id = %session.id, "Started visit session");
        session
    }

    /// Look up by the id string the page sends back; refreshes last-seen.
    pub async fn get(&self, session_id: &str) -> Option<Arc<VisitSession>> {
        let id = Uuid::parse_str(session_id).ok()?;
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).cloned();
        if let Some(ref s) = session {
            s.touch();
        }
        session
    }

    /// Remove the session and cancel anything it still has in flight.
    pub async fn end(&self, session_id: &str) -> bool {
        let Ok(id) = Uuid::parse_str(session_id) else {
            return false;
        };
        let removed = self.sessions.write().await.remove(&id);
        match removed {
            Some(session) => {
                session.end();
                tracing::info!(session_id = %id, "Ended visit session");
                true
            }
            None => false,
        }
    }

    /// Drop sessions idle for longer than `ttl`. Returns how many were removed.
    pub async fn cleanup_expired(&self, ttl: chrono::Duration) -> usize {
        let cutoff = Utc::now() - ttl;
        let mut sessions = self.sessions.write().await;

        let expired: Vec<SessionId> = sessions
            .iter()
            .filter(|(_, s)| s.last_seen() < cutoff)
            .map(|(id, _)| *id)
            .collect();

        for id in &expired {
            if let Some(session) = sessions.remove(id) {
                session.end();
                tracing::debug!(session_id = %id, "Expired idle visit session");
            }
        }
        expired.len()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedSessionStore = Arc<SessionStore>;
