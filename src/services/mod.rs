pub mod auth;
pub mod mock;
