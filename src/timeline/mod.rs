//! Timeline coordinate system for the day view.
//!
//! `layout` holds the pure time↔layout-unit math; `drag` turns a
//! drag-start/move/end event sequence into a committed reschedule.

pub mod drag;
pub mod layout;

pub use drag::{DragController, DragPreview};
pub use layout::ZoomLevel;
