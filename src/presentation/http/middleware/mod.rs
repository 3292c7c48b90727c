pub mod authentication;
pub mod rate_limit;
