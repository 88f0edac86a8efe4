// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Pointer-driven two-axis tilt effect.
//!
//! As the pointer moves over a container, a visual inside it rotates about
//! the horizontal and vertical axes in proportion to the pointer's offset
//! from the container center; leaving the container resets the rotation.
//!
//! # Key entry points
//!
//! - [`tilt::compute_tilt`] - the pure pointer-to-rotation mapping
//! - [`controller::TiltController`] - binds a container and a visual and
//!   applies the mapping on [`input::PointerEvent`]s
//! - [`options::TiltOptions`] - selectors and tilt magnitude (TOML / JSON)
//! - `web` (feature `web`) - DOM handles, listener wiring and the
//!   `attachTilt` wasm export
//!
//! The controller only talks to the page through the
//! [`controller::Container`] and [`controller::Visual`] traits, so it runs
//! unchanged against test doubles.

pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod tilt;
#[cfg(feature = "web")]
pub mod web;

pub use controller::{Container, TiltController, TiltState, Visual};
pub use error::TiltError;
pub use geometry::Rect;
pub use input::PointerEvent;
pub use options::TiltOptions;
pub use tilt::{compute_tilt, Tilt, DEFAULT_MAX_TILT_DEG};
