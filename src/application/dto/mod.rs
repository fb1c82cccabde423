pub mod articles;
pub mod auth;
pub mod contacts;
pub mod pagination;
pub mod serde_time;

pub use articles::{
    AdminArticleSummaryDto, ArticleDto, ArticleSummaryDto, ArticleViewDto, PreviewDto,
    SlugAvailabilityDto, SlugSuggestionDto,
};
pub use auth::{AuthenticatedUser, SessionDto, SessionTokenDto, UserDto};
pub use contacts::ContactReceiptDto;
pub use pagination::CursorPage;
