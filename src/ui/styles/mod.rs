// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the viewer and the host page.

pub mod button;
pub mod container;
pub mod overlay;
pub mod tooltip;

pub use button::{overlay as button_overlay, thumbnail as button_thumbnail};
