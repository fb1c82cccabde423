pub mod articles;
pub mod feed;
