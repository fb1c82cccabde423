// src/application/commands/mod.rs
pub mod articles;
pub mod auth;
pub mod contacts;
