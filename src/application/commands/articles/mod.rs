// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod preview;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use preview::PreviewMarkdownCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
