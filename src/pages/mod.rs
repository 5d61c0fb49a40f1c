//! Page components for Sweetheart.

mod home;

pub use home::Home;
