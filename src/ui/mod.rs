//! Ratatui front-end. The state model in [`crate::state`] decides what is on
//! screen; this module only maps keys to actions and draws the result.

mod app;
mod helpers;
mod pages;
mod palette;
mod terminal;

pub use app::App;
pub use terminal::run_app;
