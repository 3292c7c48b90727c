mod account;
mod login;
mod logout;
mod service;

pub use account::EnsureAccountCommand;
pub use login::LoginCommand;
pub use logout::LogoutCommand;
pub use service::UserCommandService;
