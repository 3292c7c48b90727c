mod authenticate;
mod credentials;
mod service;

pub(crate) use credentials::check_credentials;
pub use service::UserQueryService;
