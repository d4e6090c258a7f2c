pub mod cli;
pub mod links;
pub mod logging;
pub mod session;
pub mod tui;
