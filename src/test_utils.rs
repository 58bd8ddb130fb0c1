// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Float assertions come from `approx`; `assert_eq!` on `f32` pixel values
//! breaks as soon as a layout computation rounds differently.

pub use approx::assert_abs_diff_eq;
