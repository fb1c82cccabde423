pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleListFilter, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleExcerpt, ArticleId, ArticleListCursor, ArticleSlug, ArticleTitle,
    CoverUrl, Tag, TagList,
};
