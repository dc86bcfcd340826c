pub mod error;
pub mod models;
pub mod pagination;
pub mod repo_url;
pub mod resolver;
pub mod tag;
pub mod traits;


pub use error::{CommentError, Result};
pub use models::*;
pub use pagination::{find_in_pages, get_max_pages};
pub use repo_url::parse_repository_url;
pub use resolver::resolve;
pub use traits::CommentApi;
