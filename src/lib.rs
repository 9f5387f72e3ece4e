pub mod article;
pub mod config;
pub mod error;
pub mod http;

pub use article::{Article, ArticleStore, QueryResult, TagDateQuery};
pub use config::ServerConfig;
pub use error::RestError;
