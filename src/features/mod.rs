//! Domain features (auth, users). The CLI actions stay thin and delegate here.

pub mod auth;
pub mod users;
