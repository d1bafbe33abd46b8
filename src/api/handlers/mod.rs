//! HTTP request handlers.

pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use redirect::{not_found_handler, redirect_handler};
pub use shorten::shorten_handler;
