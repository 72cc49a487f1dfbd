//! # Sphere-Tracing Renderer
//!
//! CPU renderer for the animated distance field in the `field` crate.
//!
//! ## Key Components
//!
//! -   **Camera:** [`Camera`] turns pixel coordinates into primary ray
//!     directions through a pinhole at a fixed eye position.
//! -   **Tracer:** [`trace`] marches rays through the field with a damped,
//!     floored step; [`surface_normal`] estimates the gradient at a hit.
//! -   **Shading:** [`shade()`] combines a Lambert term, a rim term and the
//!     fire palette into an HDR color; misses fall back to [`SKY`].
//! -   **Frames:** [`Framebuffer`] holds one frame of HDR pixels;
//!     [`Renderer`] fans the pipeline out over rows with rayon;
//!     [`encode::write_ppm`] and [`encode::write_png`] serialize a
//!     completed frame.

pub mod camera;
pub mod encode;
pub mod frame;
pub mod renderer;
pub mod shade;
pub mod tracer;

pub use camera::Camera;
pub use encode::{write_png, write_ppm};
pub use frame::Framebuffer;
pub use renderer::Renderer;
pub use shade::{palette_fire, shade, SKY};
pub use tracer::{surface_normal, trace, MarchConfig};
