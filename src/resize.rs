//! # Offset Resize
//!
//! Moves and resizes a container so each edge sits exactly `offset` away
//! from the bounding box of its direct children.
//!
//! Two cases, depending on who owns child placement:
//!
//! - **Free-form**: we do. Compute the children's bounding box, move the
//!   container so its origin is `offset` above-left of the box, size it to
//!   the box plus `offset` on every side, then shift every child back by the
//!   same amount the origin moved so nothing moves on screen.
//! - **Auto-layout**: the host does. Padding *is* the offset, so set all
//!   four sides to it and move the container by the change in leading
//!   padding to keep the content anchored.

use crate::geometry::bounding_box;
use crate::model::{Container, Frame, Padding};
use crate::offset::Offset;

/// What [`resize_with_offset`] did to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// No children, nothing to wrap.
    Skipped,
    FreeForm,
    AutoLayout,
}

/// Resize `container` so its content sits `offset` from every edge.
pub fn resize_with_offset<C: Container>(container: &mut C, offset: Offset) -> ResizeOutcome {
    if container.children().is_empty() {
        tracing::trace!("container has no children, skipping");
        return ResizeOutcome::Skipped;
    }

    if container.layout_mode().is_auto_layout() {
        resize_auto_layout(container, offset);
        ResizeOutcome::AutoLayout
    } else {
        resize_free_form(container, offset);
        ResizeOutcome::FreeForm
    }
}

fn resize_free_form<C: Container>(container: &mut C, offset: Offset) {
    let offset = offset.get();
    let Some(content) = bounding_box(container.children().iter().map(Frame::rect)) else {
        return;
    };

    // Content box in the parent's space, grown by the offset.
    let frame = container.rect();
    let target = content.translate(frame.x, frame.y).outset(offset);
    container.set_position(target.x, target.y);
    container.resize_without_constraints(target.width, target.height);

    // Children are positioned relative to the container, which just moved.
    let dx = offset - content.x;
    let dy = offset - content.y;
    for child in container.children_mut() {
        child.translate(dx, dy);
    }

    tracing::debug!(
        dx,
        dy,
        width = target.width,
        height = target.height,
        "resized free-form container"
    );
}

fn resize_auto_layout<C: Container>(container: &mut C, offset: Offset) {
    let offset = offset.get();
    let padding = container.padding();

    // Both axes use the leading padding from before the change.
    container.translate(padding.left - offset, padding.top - offset);
    container.set_padding(Padding::uniform(offset));

    tracing::debug!(
        previous_left = padding.left,
        previous_top = padding.top,
        padding = offset,
        "repadded auto-layout container"
    );
}
