//! Session state. Each holder owns one concern and exposes accessor/mutator
//! pairs; derived values are recomputed on read. Nothing in here knows about
//! the terminal.

mod about;
mod chrome;
mod navigation;
mod scroll;
mod selection;
mod shell;

pub use about::AboutState;
pub use chrome::UiChromeState;
pub use navigation::NavigationState;
pub use scroll::ScrollState;
pub use selection::SelectionState;
pub use shell::{AppShell, Page};
