// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repo;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

pub use article_repo::InMemoryArticleRepo;
pub use security::PlainPasswordHasher;
pub use time::{TestClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
pub use util::SequentialTokens;
