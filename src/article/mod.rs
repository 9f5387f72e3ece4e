pub mod error;
pub mod query;
pub mod store;
pub mod types;

pub use error::ArticleError;
pub use query::{QueryResult, TagDateQuery};
pub use store::ArticleStore;
pub use types::{parse_id, Article};
