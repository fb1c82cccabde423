use super::ArticleCommandService;
use crate::application::dto::PreviewDto;

pub struct PreviewMarkdownCommand {
    pub content: Option<String>,
}

impl ArticleCommandService {
    /// Renders editor content with the same renderer used for published articles.
    pub fn preview(&self, command: PreviewMarkdownCommand) -> PreviewDto {
        let html = self
            .renderer
            .render(command.content.as_deref().unwrap_or_default());
        PreviewDto { html }
    }
}
