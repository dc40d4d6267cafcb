//! Pokédex TUI - browse, filter and favorite Pokémon
//!
//! The library exposes the app's modules for testing.

pub mod action;
pub mod catalog;
pub mod components;
pub mod effect;
pub mod favorites;
pub mod logging;
pub mod reducer;
pub mod route;
pub mod selection;
pub mod state;
pub mod storage;
pub mod view;
