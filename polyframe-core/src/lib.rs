/// polyframe core library - shared 2D transform and rasterization engine
///
/// This library provides the frame-stepped pieces every demo is built from:
/// homogeneous transform matrices, an integer line rasterizer, polygon outlines,
/// canonical shapes, a scene graph for chained poses, and the frame loop that
/// hands finished canvases to a display surface.

pub mod animation;
pub mod canvas;
pub mod demos;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use animation::AnimatedBody;
pub use canvas::{Canvas, Color};
pub use demos::{ClockTime, Demo, DemoKind, DemoSeed};
pub use error::{Error, Result};
pub use frame_loop::{run_demo, RunOptions, RunSummary};
pub use geometry::{Pixel, VertexList};
pub use raster::{rasterize_line, LinePolicy};
pub use renderer::{DrawStats, Renderer};
pub use scene::{NodeId, SceneGraph};
pub use surface::{DisplaySurface, HeadlessSurface};
pub use transform::Transform;
