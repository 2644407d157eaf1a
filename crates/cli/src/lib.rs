//! Interactive front-end for the inventory tracker.
//!
//! Thin layer: translates menu input into inventory calls and reports every
//! failure without leaving the session.

pub mod command;
pub mod errors;
pub mod menu;

pub use command::Command;
pub use menu::Menu;
