//! Desktop image-strip gallery built on the `glidestrip-core` engine.
//!
//! Elm-architecture application: `state`, `messages`, `update`, `view`, and
//! `subscriptions` are free modules wired together by [`app::run`]. The
//! drag/momentum/snap behavior lives entirely in `glidestrip-core`; this
//! crate maps iced input events onto it, drives it from a conditional frame
//! tick, and renders the resulting offset into a hidden-scrollbar strip.

pub mod app;
pub mod crossfade;
pub mod infra;
pub mod layout;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod tuning;
pub mod update;
pub mod view;
pub mod views;
