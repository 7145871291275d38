pub mod drag;

pub use drag::{DragSample, DragUpdate, HorizontalDragDetector};
