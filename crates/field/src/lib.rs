#![deny(clippy::all, clippy::pedantic)]
// The hash constant is quoted at full precision from the noise literature.
#![allow(clippy::module_name_repetitions, clippy::excessive_precision)]
//! # Procedural Surface Field
//!
//! The animated implicit surface behind the fireball renderer.
//!
//! This crate is the pure-math layer of the project. It has no I/O and no
//! hidden state; every function is deterministic in its arguments, which is
//! what makes the pixel loop in the render crate freely parallelizable.
//!
//! ## Key Components
//!
//! -   **Lattice noise:** [`hash`] and [`noise()`] provide a deterministic
//!     scalar hash and smoothly interpolated 3-D value noise over the
//!     integer lattice.
//! -   **Fractal accumulator:** [`fbm()`] sums four rotated, rescaled
//!     octaves of lattice noise into a single scalar field with a nominal
//!     `[0, 1]` range.
//! -   **Distance field:** [`DistanceField`] combines a breathing base
//!     radius, a high-frequency ripple and the `fbm` turbulence into an
//!     approximate signed distance, parameterized by animation time.

pub mod fbm;
pub mod noise;
pub mod sdf;

pub use fbm::fbm;
pub use noise::{hash, noise};
pub use sdf::DistanceField;
