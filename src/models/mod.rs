// src/models/mod.rs
pub mod api;
pub mod chat;
pub mod insight;
