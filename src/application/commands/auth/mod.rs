mod bootstrap;
mod login;
mod logout;
mod password;
mod service;
mod session;

pub use bootstrap::BootstrapAdminCommand;
pub use login::{LoginCommand, LoginResult};
pub use service::AuthCommandService;
