//! Page components

mod contact;
mod home;
mod menu;
mod not_found;

pub use contact::ContactPage;
pub use home::HomePage;
pub use menu::MenuPage;
pub use not_found::NotFound;
