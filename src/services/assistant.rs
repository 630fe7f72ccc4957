// src/services/assistant.rs
//! The two call sites of the generator: chat send and project insight.

use crate::content::RECRUITER_INSTRUCTION;
use crate::gemini_client::TextGenerator;
use crate::models::chat::SendRejected;
use crate::services::insight::InsightRejected;
use crate::services::session::VisitSession;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatSendOutcome {
    Accepted { reply: String },
    Rejected(SendRejected),
    /// The visit ended before the reply arrived; nothing was committed.
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightOutcome {
    Generated { text: String },
    AlreadyGenerated { text: String },
    InProgress,
    UnknownProject,
    Abandoned,
}

#[derive(Clone)]
pub struct PortfolioAssistant {
    generator: Arc<dyn TextGenerator>,
}

impl PortfolioAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Accept a chat message and wait for the assistant reply.
    ///
    /// The upstream call and the commit run in a spawned task, so a dropped request
    /// still settles the widget; ending the session cancels it instead.
    pub async fn send_chat(&self, session: &Arc<VisitSession>, input: &str) -> ChatSendOutcome {
        let pending = {
            let mut chat = session.chat.lock().await;
            match chat.begin_send(input) {
                Ok(pending) => pending,
                Err(reason) => {
                    tracing::debug!(session_id = %session.id, %reason, "Chat send ignored");
                    return ChatSendOutcome::Rejected(reason);
                }
            }
        };

        tracing::info!(session_id = %session.id, ticket = pending.ticket, "💬 Chat message accepted");

        let generator = Arc::clone(&self.generator);
        let session_ref = Arc::clone(session);
        let ticket = pending.clone();
        let task = tokio::spawn(async move {
            let reply = tokio::select! {
                _ = session_ref.cancellation().cancelled() => return None,
                reply = generator.generate(&pending.prompt, None) => reply,
            };

            let mut chat = session_ref.chat.lock().await;
            if session_ref.is_ended() || !chat.complete(&pending, reply.clone()) {
                return None;
            }
            Some(reply)
        });

        match task.await {
            Ok(Some(reply)) => ChatSendOutcome::Accepted { reply },
            Ok(None) => {
                tracing::debug!(session_id = %session.id, "Chat reply dropped, session ended");
                ChatSendOutcome::Abandoned
            }
            Err(e) => {
                tracing::error!(session_id = %session.id, error = %e, "Chat reply task failed");
                session.chat.lock().await.abandon(&ticket);
                ChatSendOutcome::Abandoned
            }
        }
    }

    /// Generate the insight for one project card, at most once per session.
    pub async fn generate_insight(&self, session: &Arc<VisitSession>, slug: &str) -> InsightOutcome {
        let pending = {
            let mut insights = session.insights.lock().await;
            match insights.begin(slug) {
                Ok(pending) => pending,
                Err(InsightRejected::UnknownProject) => return InsightOutcome::UnknownProject,
                Err(InsightRejected::InProgress) => return InsightOutcome::InProgress,
                Err(InsightRejected::AlreadyGenerated(text)) => {
                    return InsightOutcome::AlreadyGenerated { text }
                }
            }
        };

        tracing::info!(session_id = %session.id, project = pending.slug, "✨ Generating project insight");

        let generator = Arc::clone(&self.generator);
        let session_ref = Arc::clone(session);
        let claim = pending.clone();
        let task = tokio::spawn(async move {
            let text = tokio::select! {
                _ = session_ref.cancellation().cancelled() => return None,
                text = generator.generate(&pending.prompt, Some(RECRUITER_INSTRUCTION)) => text,
            };

            let mut insights = session_ref.insights.lock().await;
            if session_ref.is_ended() || !insights.complete(&pending, text.clone()) {
                return None;
            }
            Some(text)
        });

        match task.await {
            Ok(Some(text)) => InsightOutcome::Generated { text },
            Ok(None) => InsightOutcome::Abandoned,
            Err(e) => {
                tracing::error!(session_id = %session.id, error = %e, "Insight task failed");
                session.insights.lock().await.abandon(&claim);
                InsightOutcome::Abandoned
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::{find_project, insight_prompt, CHAT_GREETING};
    use crate::gemini_client::ERROR_FALLBACK;
    use crate::models::chat::{ChatMessage, WidgetState};
    use crate::models::insight::InsightStatus;
    use crate::services::session::SessionStore;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Semaphore;

    /// Records every call and answers with a fixed reply, optionally after being released.
    pub(crate) struct FakeGenerator {
        pub reply: String,
        pub calls: Mutex<Vec<(String, Option<String>)>>,
        pub gate: Option<Arc<Semaphore>>,
    }

    impl FakeGenerator {
        pub(crate) fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
                gate: None,
            })
        }

        pub(crate) fn gated(reply: &str, gate: Arc<Semaphore>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
                gate: Some(gate),
            })
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str, system_instruction: Option<&str>) -> String {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), system_instruction.map(str::to_string)));
            if let Some(gate) = &self.gate {
                gate.acquire().await.unwrap().forget();
            }
            self.reply.clone()
        }
    }

    /// Generator whose call dies mid-flight.
    struct PanickingGenerator;

    #[async_trait]
    impl TextGenerator for PanickingGenerator {
        async fn generate(&self, _prompt: &str, _system_instruction: Option<&str>) -> String {
            panic!("generator crashed");
        }
    }

    async fn open_session(store: &SessionStore) -> Arc<VisitSession> {
        let session = store.create().await;
        session.chat.lock().await.toggle();
        session
    }

    #[tokio::test]
    async fn test_chat_scenario_appends_user_then_assistant() {
        let store = SessionStore::new();
        let session = open_session(&store).await;
        let fake = FakeGenerator::replying("Azhar kuliah di Universitas Airlangga.");
        let assistant = PortfolioAssistant::new(fake.clone());

        let outcome = assistant.send_chat(&session, "Dimana Azhar kuliah?").await;
        assert_eq!(
            outcome,
            ChatSendOutcome::Accepted { reply: "Azhar kuliah di Universitas Airlangga.".to_string() }
        );

        let calls = fake.calls.lock().unwrap().clone();
        assert_eq!(calls, vec![("Dimana Azhar kuliah?".to_string(), None)]);

        let chat = session.chat.lock().await;
        assert_eq!(
            chat.messages(),
            &[
                ChatMessage::assistant(CHAT_GREETING),
                ChatMessage::user("Dimana Azhar kuliah?"),
                ChatMessage::assistant("Azhar kuliah di Universitas Airlangga."),
            ]
        );
        assert_eq!(chat.state(), WidgetState::OpenIdle);
    }

    #[tokio::test]
    async fn test_failed_call_fallback_is_appended_as_reply() {
        let store = SessionStore::new();
        let session = open_session(&store).await;
        let assistant = PortfolioAssistant::new(FakeGenerator::replying(ERROR_FALLBACK));

        let outcome = assistant.send_chat(&session, "hello").await;
        assert_eq!(outcome, ChatSendOutcome::Accepted { reply: ERROR_FALLBACK.to_string() });
        let chat = session.chat.lock().await;
        assert_eq!(chat.messages().last().unwrap(), &ChatMessage::assistant(ERROR_FALLBACK));
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_call() {
        let store = SessionStore::new();
        let session = open_session(&store).await;
        let fake = FakeGenerator::replying("x");
        let assistant = PortfolioAssistant::new(fake.clone());

        let outcome = assistant.send_chat(&session, "   ").await;
        assert_eq!(outcome, ChatSendOutcome::Rejected(SendRejected::EmptyInput));
        assert_eq!(fake.call_count(), 0);
        assert_eq!(session.chat.lock().await.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_send_while_pending_makes_no_extra_call() {
        let store = SessionStore::new();
        let session = open_session(&store).await;
        let gate = Arc::new(Semaphore::new(0));
        let fake = FakeGenerator::gated("late reply", Arc::clone(&gate));
        let assistant = PortfolioAssistant::new(fake.clone());

        let first = {
            let assistant = assistant.clone();
            let session = Arc::clone(&session);
            tokio::spawn(async move { assistant.send_chat(&session, "first").await })
        };

        while fake.call_count() == 0 {
            tokio::task::yield_now().await;
        }

        let second = assistant.send_chat(&session, "second").await;
        assert_eq!(second, ChatSendOutcome::Rejected(SendRejected::AwaitingResponse));
        assert_eq!(fake.call_count(), 1);

        gate.add_permits(1);
        assert_eq!(
            first.await.unwrap(),
            ChatSendOutcome::Accepted { reply: "late reply".to_string() }
        );
        assert_eq!(session.chat.lock().await.messages().len(), 3);
    }

    #[tokio::test]
    async fn test_ending_session_abandons_in_flight_reply() {
        let store = SessionStore::new();
        let session = open_session(&store).await;
        let gate = Arc::new(Semaphore::new(0));
        let fake = FakeGenerator::gated("never shown", Arc::clone(&gate));
        let assistant = PortfolioAssistant::new(fake.clone());

        let in_flight = {
            let assistant = assistant.clone();
            let session = Arc::clone(&session);
            tokio::spawn(async move { assistant.send_chat(&session, "hello").await })
        };
        while fake.call_count() == 0 {
            tokio::task::yield_now().await;
        }

        assert!(store.end(&session.id.to_string()).await);
        assert_eq!(in_flight.await.unwrap(), ChatSendOutcome::Abandoned);

        let chat = session.chat.lock().await;
        assert_eq!(chat.messages().len(), 2);
        assert!(chat.messages().iter().all(|m| m.text != "never shown"));
    }

    #[tokio::test]
    async fn test_insight_generated_at_most_once() {
        let store = SessionStore::new();
        let session = store.create().await;
        let fake = FakeGenerator::replying("Challenge: ... Solution: ... Impact: ...");
        let assistant = PortfolioAssistant::new(fake.clone());
        let slug = "podcast-summarization-ai";

        let first = assistant.generate_insight(&session, slug).await;
        assert_eq!(
            first,
            InsightOutcome::Generated { text: "Challenge: ... Solution: ... Impact: ...".to_string() }
        );
        let second = assistant.generate_insight(&session, slug).await;
        assert_eq!(
            second,
            InsightOutcome::AlreadyGenerated { text: "Challenge: ... Solution: ... Impact: ...".to_string() }
        );
        assert_eq!(fake.call_count(), 1);

        let project = find_project(slug).unwrap();
        let calls = fake.calls.lock().unwrap().clone();
        assert_eq!(calls[0].0, insight_prompt(project));
        assert_eq!(calls[0].1.as_deref(), Some(RECRUITER_INSTRUCTION));

        let insights = session.insights.lock().await;
        assert_eq!(insights.get(slug).unwrap().status, InsightStatus::Done);
    }

    #[tokio::test]
    async fn test_rapid_double_activation_issues_one_call() {
        let store = SessionStore::new();
        let session = store.create().await;
        let gate = Arc::new(Semaphore::new(0));
        let fake = FakeGenerator::gated("insight", Arc::clone(&gate));
        let assistant = PortfolioAssistant::new(fake.clone());
        let slug = "sales-inventory-dashboard";

        let first = {
            let assistant = assistant.clone();
            let session = Arc::clone(&session);
            tokio::spawn(async move { assistant.generate_insight(&session, slug).await })
        };
        while fake.call_count() == 0 {
            tokio::task::yield_now().await;
        }

        assert_eq!(assistant.generate_insight(&session, slug).await, InsightOutcome::InProgress);
        gate.add_permits(1);
        assert_eq!(
            first.await.unwrap(),
            InsightOutcome::Generated { text: "insight".to_string() }
        );
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_project_makes_no_call() {
        let store = SessionStore::new();
        let session = store.create().await;
        let fake = FakeGenerator::replying("x");
        let assistant = PortfolioAssistant::new(fake.clone());
        assert_eq!(
            assistant.generate_insight(&session, "missing").await,
            InsightOutcome::UnknownProject
        );
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_chat_and_insight_run_concurrently() {
        let store = SessionStore::new();
        let session = open_session(&store).await;
        let gate = Arc::new(Semaphore::new(0));
        let fake = FakeGenerator::gated("done", Arc::clone(&gate));
        let assistant = PortfolioAssistant::new(fake.clone());

        let chat = {
            let assistant = assistant.clone();
            let session = Arc::clone(&session);
            tokio::spawn(async move { assistant.send_chat(&session, "hi").await })
        };
        let insight = {
            let assistant = assistant.clone();
            let session = Arc::clone(&session);
            tokio::spawn(async move {
                assistant.generate_insight(&session, "autonomous-mobile-robot").await
            })
        };

        while fake.call_count() < 2 {
            tokio::task::yield_now().await;
        }
        gate.add_permits(2);

        assert!(matches!(chat.await.unwrap(), ChatSendOutcome::Accepted { .. }));
        assert!(matches!(insight.await.unwrap(), InsightOutcome::Generated { .. }));
    }

    #[tokio::test]
    async fn test_crashed_chat_task_unlocks_widget() {
        let store = SessionStore::new();
        let session = open_session(&store).await;
        let crashing = PortfolioAssistant::new(Arc::new(PanickingGenerator));

        assert_eq!(crashing.send_chat(&session, "hello").await, ChatSendOutcome::Abandoned);
        {
            let chat = session.chat.lock().await;
            assert!(!chat.is_awaiting());
            assert_eq!(chat.state(), WidgetState::OpenIdle);
        }

        let assistant = PortfolioAssistant::new(FakeGenerator::replying("back online"));
        assert_eq!(
            assistant.send_chat(&session, "again").await,
            ChatSendOutcome::Accepted { reply: "back online".to_string() }
        );
    }

    #[tokio::test]
    async fn test_crashed_insight_task_can_be_retried() {
        let store = SessionStore::new();
        let session = store.create().await;
        let slug = "autonomous-mobile-robot";
        let crashing = PortfolioAssistant::new(Arc::new(PanickingGenerator));

        assert_eq!(crashing.generate_insight(&session, slug).await, InsightOutcome::Abandoned);
        assert_eq!(
            session.insights.lock().await.get(slug).unwrap().status,
            InsightStatus::NotRequested
        );

        let fake = FakeGenerator::replying("retried");
        let assistant = PortfolioAssistant::new(fake.clone());
        assert_eq!(
            assistant.generate_insight(&session, slug).await,
            InsightOutcome::Generated { text: "retried".to_string() }
        );
        assert_eq!(fake.call_count(), 1);
    }
}
