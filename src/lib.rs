pub mod config;
pub mod error;
pub mod menu;
pub mod term;
pub mod ui;

pub use error::{MenuError, Result};
pub use menu::Menu;
pub use term::{Screen, Term};
