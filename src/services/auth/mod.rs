pub mod access_jwt;
pub mod factory;
pub mod identity;

pub use access_jwt::{AuthBuildError, AuthError, AuthService};
pub use factory::build_auth_service;
pub use identity::Identity;
