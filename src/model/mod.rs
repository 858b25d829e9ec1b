//! # Scene Model
//!
//! The input representation handed over by the design tool. A scene is the
//! host's current selection: a list of nodes, each with a type tag, a frame
//! (position and size in its parent's coordinate space), a layout mode, and
//! children.
//!
//! The resizer never sees these concrete types directly. It works through
//! the capability traits at the bottom of this module, so any host binding
//! that can expose a frame, a layout mode, padding and children can be
//! resized without going through JSON.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// The host's current selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Top-level nodes the user has selected, in selection order.
    #[serde(default)]
    pub selection: Vec<SceneNode>,
}

/// A node in the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Host identifier, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Layer name, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What kind of node this is.
    #[serde(rename = "type")]
    pub kind: NodeKind,

    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,

    /// Whether the host auto-arranges this node's children.
    #[serde(default)]
    pub layout_mode: LayoutMode,

    /// Interior padding. Only meaningful in auto-layout mode.
    #[serde(default)]
    pub padding: Padding,

    /// Child nodes, in the host's stacking order.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// Node type tags, spelled the way the host spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Component,
    ComponentSet,
    Group,
    Rectangle,
    Text,
    /// Anything the host has that we don't model.
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Frame-like node types that can be resized around their contents.
    pub fn is_container_like(self) -> bool {
        matches!(
            self,
            NodeKind::Frame | NodeKind::Component | NodeKind::ComponentSet
        )
    }
}

/// How a container arranges its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// Free-form: children keep explicit local coordinates.
    #[default]
    None,
    Horizontal,
    Vertical,
    /// Any other host layout (e.g. `GRID`). Treated as auto-layout.
    #[serde(other)]
    Other,
}

impl LayoutMode {
    /// Everything except free-form lets the host place children from padding.
    pub fn is_auto_layout(self) -> bool {
        !matches!(self, LayoutMode::None)
    }
}

/// Auto-layout padding, in the host's units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
}

impl Padding {
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

impl SceneNode {
    /// Create a node of the given kind with a frame and no children.
    pub fn new(kind: NodeKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: None,
            name: None,
            kind,
            x,
            y,
            width,
            height,
            layout_mode: LayoutMode::None,
            padding: Padding::default(),
            children: vec![],
        }
    }

    /// Create a free-form frame with children.
    pub fn frame(x: f64, y: f64, width: f64, height: f64, children: Vec<SceneNode>) -> Self {
        Self {
            children,
            ..Self::new(NodeKind::Frame, x, y, width, height)
        }
    }

    /// Create a leaf rectangle.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(NodeKind::Rectangle, x, y, width, height)
    }

    pub fn with_layout(mut self, layout_mode: LayoutMode, padding: Padding) -> Self {
        self.layout_mode = layout_mode;
        self.padding = padding;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

// ── Capabilities ────────────────────────────────────────────────

/// Anything with a frame in its parent's coordinate space.
pub trait Frame {
    fn rect(&self) -> Rect;

    /// Move to an absolute position in the parent's coordinate space.
    fn set_position(&mut self, x: f64, y: f64);

    /// Set width and height directly, without running constraints or
    /// auto-layout sizing rules.
    fn resize_without_constraints(&mut self, width: f64, height: f64);

    fn translate(&mut self, dx: f64, dy: f64) {
        let r = self.rect();
        self.set_position(r.x + dx, r.y + dy);
    }
}

/// A frame that holds children and may auto-arrange them.
pub trait Container: Frame {
    type Child: Frame;

    fn layout_mode(&self) -> LayoutMode;
    fn padding(&self) -> Padding;
    fn set_padding(&mut self, padding: Padding);
    fn children(&self) -> &[Self::Child];
    fn children_mut(&mut self) -> &mut [Self::Child];
}

impl Frame for SceneNode {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn resize_without_constraints(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Container for SceneNode {
    type Child = SceneNode;

    fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    fn children(&self) -> &[SceneNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }
}
