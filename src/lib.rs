//! # theme-toggle
//!
//! Light/dark display mode toggle for a web page, compiled to WebAssembly.
//!
//! On load the crate resolves the active [`Mode`] from `localStorage`
//! (defaulting to dark), mirrors it onto a `data-theme` attribute on the
//! `<html>` element, and labels the page's toggle control. Each click on the
//! control flips the mode, re-applies it and persists it again. Styling that
//! reacts to the attribute is the page's business.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`mode`] | The two-valued [`Mode`] and its label/description derivations |
//! | [`config`] | [`ThemeConfig`]: element id, storage key, attribute name, default |
//! | [`error`] | [`ThemeError`] |
//! | [`env`] | [`ThemeEnv`] capability trait over the DOM and persisted store |
//! | [`memory`] | [`MemoryEnv`], an in-process environment for tests and non-browser hosts |
//! | [`controller`] | [`ThemeController`] and [`install`] |
//! | `web` | Browser environment and WASM exports (`hydrate` feature only) |

pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod memory;
pub mod mode;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::{SharedController, ThemeController, install};
pub use env::ThemeEnv;
pub use error::ThemeError;
pub use memory::MemoryEnv;
pub use mode::Mode;
