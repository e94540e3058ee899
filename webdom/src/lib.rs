pub mod event;
pub mod geometry;
pub mod media;
pub mod node;
pub mod style;

pub use event::{ancestor_rect, Modifiers, MouseButton, PathNode, PointerEvent};
pub use geometry::{Point, Rect};
pub use media::{Breakpoint, ParseBreakpointError};
pub use node::{ParseTagError, Tag, BUTTON_TAGS, CELL_TAGS};
pub use style::Css;
