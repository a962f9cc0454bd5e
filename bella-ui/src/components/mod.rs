//! Reusable UI components

mod navbar;
mod status;

pub use navbar::Navbar;
pub use status::StatusMessage;
