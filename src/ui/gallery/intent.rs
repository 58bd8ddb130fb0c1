// SPDX-License-Identifier: MPL-2.0
//! Navigation intents shared by the keyboard and touch interpreters.

/// What a piece of raw input asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Show the next image (wraps).
    Next,
    /// Show the previous image (wraps).
    Previous,
    /// Jump to the first image.
    First,
    /// Jump to the last image.
    Last,
    /// Dismiss the viewer.
    Close,
}
