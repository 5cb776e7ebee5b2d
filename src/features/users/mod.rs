//! Paginated user management: listing, the edit modal and deletion.

pub mod client;
pub mod controller;
pub mod types;
pub mod view;

pub use controller::{LoadTicket, UserListController};
pub use types::{PageWindow, User, UserPage, UserUpdate};
