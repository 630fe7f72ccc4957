// src/handlers/mod.rs
pub mod assets;
pub mod chat;
pub mod projects;
pub mod status;
pub mod ui;
