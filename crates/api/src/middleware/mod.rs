//! Top-level handlers for panics and unknown routes.

mod catch_all;

pub use catch_all::{handle_panic, not_found};
