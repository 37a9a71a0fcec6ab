//! Session state for the editor.
//!
//! This module provides:
//! - Source, background and logo image slots
//! - Lazily created per-asset edit state
//! - Derived views (current asset, completion gates)
//! - Render plans handed to the canvas renderer
//!
//! # Architecture
//!
//! A [`SessionStore`] is created once per editing session and owned by the
//! caller. All operations are synchronous; every read reflects every prior
//! write.

mod session;
mod source;

pub use session::{LogoPlacement, RenderPlan, SessionStore};
pub use source::{SourceImage, SourceOrientation};
