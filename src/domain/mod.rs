// src/domain/mod.rs
pub mod article;
pub mod contact;
pub mod errors;
pub mod user;
