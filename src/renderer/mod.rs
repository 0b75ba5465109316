//! Geometry bridge for presentation layers
//!
//! Turns a [`RenderSnapshot`](crate::snapshot::RenderSnapshot) into colored
//! triangle lists. The vertices are `Pod`, so a host can upload them with
//! `bytemuck::cast_slice` into whatever graphics API it uses.

pub mod shapes;
pub mod vertex;

pub use shapes::{frame, frame_data};
pub use vertex::{Vertex, colors};
