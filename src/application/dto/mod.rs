pub mod articles;
pub mod auth;
pub mod serde_time;

pub use articles::ArticleDto;
pub use auth::{AuthMethod, AuthenticatedUser, SessionDto};
