/// Error type shared by the core rendering and scene modules
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A polygon needs at least two vertices to have an edge
    InvalidGeometry { vertices: usize },
    /// A pixel coordinate fell outside the canvas
    OutOfBounds { x: i32, y: i32 },
    /// A scene node index that was never handed out
    UnknownNode(usize),
    /// A demo name that no demo answers to
    UnknownDemo(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGeometry { vertices } => {
                write!(f, "polygon needs at least 2 vertices, got {}", vertices)
            }
            Error::OutOfBounds { x, y } => write!(f, "pixel ({}, {}) is outside the canvas", x, y),
            Error::UnknownNode(id) => write!(f, "scene node #{} does not exist", id),
            Error::UnknownDemo(name) => write!(f, "unknown demo '{}'", name),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
