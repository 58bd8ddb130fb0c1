// SPDX-License-Identifier: MPL-2.0
//! Modal gallery viewer.
//!
//! Presents an ordered list of images over the host page with arrow, dot
//! and thumbnail navigation, swipe gestures and keyboard shortcuts. The
//! page behind it is pinned for as long as the viewer is open.

pub mod breakpoint;
pub mod component;
pub mod gesture;
mod intent;
pub mod keyboard;
pub mod scroll_lock;
mod view;

pub use breakpoint::Layout;
pub use component::{Effect, Message, OpenRequest, State, ViewEnv, ViewerOptions};
pub use gesture::SwipeThresholds;
pub use intent::Intent;
pub use scroll_lock::{BodyPosition, ScrollLock, ScrollSurface, SharedSurface};
