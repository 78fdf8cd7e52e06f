pub mod config;
pub mod error;
pub mod types;

pub use config::SiteConfig;
pub use error::Error;
pub use types::{Article, FeedEnvelope};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::types::{Article, FeedEnvelope};
    pub use crate::{Error, Result};
}
