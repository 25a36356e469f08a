//! Render-ready geometry
//!
//! Turns a session and its latest frame into plain triangle lists. No GPU API
//! lives here; any backend can upload `Vertex` slices with `bytemuck`.

pub mod shapes;
pub mod vertex;

pub use shapes::{frame_vertices, indicator_quad, ring_band, target_band};
pub use vertex::{Vertex, colors};
