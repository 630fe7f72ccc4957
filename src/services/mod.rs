// src/services/mod.rs
pub mod assistant;
pub mod chat_widget;
pub mod insight;
pub mod session;

pub use assistant::{ChatSendOutcome, InsightOutcome, PortfolioAssistant};
pub use session::{SessionStore, SharedSessionStore, VisitSession};
