mod admin;
mod get_by_slug;
mod list;
mod service;
mod slugs;

pub use admin::ADMIN_LIST_LIMIT;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{ListArticlesByTagQuery, ListArticlesQuery};
pub use service::ArticleQueryService;
pub use slugs::{SlugAvailabilityQuery, SuggestSlugQuery};
