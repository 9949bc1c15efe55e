//! This crate contains the library behind the terminal maze game mazewalk.
//!
//! A maze file is validated into a [`grid::Grid`] by the [`loader`], a [`session::Session`] keeps
//! the player's position on it and the [`movement`] rules decide which steps are legal. The
//! terminal front end in [`App`] drives one session until the exit is reached.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod cli;
mod events;
pub mod grid;
pub mod loader;
pub mod movement;
pub mod session;
mod types;
mod ui;

pub use app::App;
