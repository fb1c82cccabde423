use std::sync::Arc;

use crate::application::ports::markdown::MarkdownRenderer;
use crate::domain::article::{ArticleReadRepository, services::ArticleSlugService};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) renderer: Arc<dyn MarkdownRenderer>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<ArticleSlugService>,
        renderer: Arc<dyn MarkdownRenderer>,
    ) -> Self {
        Self {
            read_repo,
            slug_service,
            renderer,
        }
    }
}
