//! Platform abstraction layer
//!
//! The browser host owns rendering, input and the tick timer; this layer
//! only forwards its actions into a [`crate::Session`].

#[cfg(target_arch = "wasm32")]
pub mod web;
