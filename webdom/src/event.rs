use crate::geometry::Rect;
use crate::node::Tag;

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Key modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// One element on the path from an event target up to the document root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub tag: Tag,
    pub rect: Rect,
}

impl PathNode {
    pub const fn new(tag: Tag, rect: Rect) -> Self {
        Self { tag, rect }
    }
}

/// A pointer interaction as reported by the host surface.
///
/// `path` lists the ancestor chain of the event target, target first,
/// so components can resolve element bounds without touching the DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    pub path: Vec<PathNode>,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, button: MouseButton) -> Self {
        Self {
            x,
            y,
            button,
            modifiers: Modifiers::new(),
            path: Vec::new(),
        }
    }

    /// A primary-button press at the given coordinates.
    pub fn click(x: f32, y: f32) -> Self {
        Self::new(x, y, MouseButton::Left)
    }

    /// A secondary-button press at the given coordinates.
    pub fn context(x: f32, y: f32) -> Self {
        Self::new(x, y, MouseButton::Right)
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Append an element to the ancestor path. Call target first, root last.
    pub fn node(mut self, tag: Tag, rect: Rect) -> Self {
        self.path.push(PathNode::new(tag, rect));
        self
    }

    /// The event target, when the path carries one.
    pub fn target(&self) -> Option<&PathNode> {
        self.path.first()
    }
}

/// Walk outward from the event target and return the bounding rect of the
/// first element whose tag is in `tags`.
///
/// Returns [`Rect::ZERO`] when no element on the path matches.
pub fn ancestor_rect(event: &PointerEvent, tags: &[Tag]) -> Rect {
    match event.path.iter().find(|node| tags.contains(&node.tag)) {
        Some(node) => node.rect,
        None => {
            log::debug!("no {tags:?} on event path, zero rect");
            Rect::ZERO
        }
    }
}
