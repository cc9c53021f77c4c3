pub mod auth;
pub mod recovery;
pub mod users;
