//! Property tests for the offset resize.
//!
//! Coordinates are generated on a quarter-unit grid so every sum and
//! difference is exact in `f64` and results can be compared with `==`.

use frame_offset::model::{LayoutMode, Padding, SceneNode};
use frame_offset::{resize_with_offset, Offset};
use proptest::prelude::*;

fn quarter(range: std::ops::Range<i32>) -> impl Strategy<Value = f64> {
    range.prop_map(|v| v as f64 / 4.0)
}

fn child() -> impl Strategy<Value = SceneNode> {
    (
        quarter(-4000..4000),
        quarter(-4000..4000),
        quarter(0..2000),
        quarter(0..2000),
    )
        .prop_map(|(x, y, w, h)| SceneNode::rectangle(x, y, w, h))
}

fn free_form_frame() -> impl Strategy<Value = SceneNode> {
    (
        quarter(-4000..4000),
        quarter(-4000..4000),
        prop::collection::vec(child(), 1..8),
    )
        .prop_map(|(x, y, children)| SceneNode::frame(x, y, 10.0, 10.0, children))
}

fn offsets() -> impl Strategy<Value = Offset> {
    quarter(0..800).prop_map(|v| Offset::new(v).unwrap())
}

fn absolute_positions(node: &SceneNode) -> Vec<(f64, f64)> {
    node.children
        .iter()
        .map(|c| (node.x + c.x, node.y + c.y))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Applying the same offset twice changes nothing the second time.
    #[test]
    fn free_form_is_idempotent(frame in free_form_frame(), offset in offsets()) {
        let mut once = frame;
        resize_with_offset(&mut once, offset);
        let mut twice = once.clone();
        resize_with_offset(&mut twice, offset);
        prop_assert_eq!(once, twice);
    }

    /// Children stay where they were on screen.
    #[test]
    fn free_form_preserves_absolute_positions(frame in free_form_frame(), offset in offsets()) {
        let before = absolute_positions(&frame);
        let mut frame = frame;
        resize_with_offset(&mut frame, offset);
        prop_assert_eq!(absolute_positions(&frame), before);
    }

    /// Content sits exactly `offset` inside every edge.
    #[test]
    fn free_form_edge_distance(frame in free_form_frame(), offset in offsets()) {
        let o = offset.get();
        let mut frame = frame;
        resize_with_offset(&mut frame, offset);

        let min_x = frame.children.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
        let min_y = frame.children.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
        let max_x = frame.children.iter().map(|c| c.x + c.width).fold(f64::NEG_INFINITY, f64::max);
        let max_y = frame.children.iter().map(|c| c.y + c.height).fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(min_x, o);
        prop_assert_eq!(min_y, o);
        prop_assert_eq!(frame.width, max_x - min_x + 2.0 * o);
        prop_assert_eq!(frame.height, max_y - min_y + 2.0 * o);
    }

    /// All four paddings end up equal to the offset.
    #[test]
    fn auto_layout_padding_exact(
        frame in free_form_frame(),
        left in quarter(0..400),
        top in quarter(0..400),
        offset in offsets(),
    ) {
        let mut frame = frame.with_layout(
            LayoutMode::Horizontal,
            Padding { left, top, right: 3.0, bottom: 9.0 },
        );
        let (x, y) = (frame.x, frame.y);
        resize_with_offset(&mut frame, offset);

        prop_assert_eq!(frame.padding, Padding::uniform(offset.get()));
        prop_assert_eq!(frame.x, x + left - offset.get());
        prop_assert_eq!(frame.y, y + top - offset.get());
    }

    /// Containers without children are left bit-for-bit alone.
    #[test]
    fn empty_container_is_untouched(
        x in quarter(-4000..4000),
        pad in quarter(0..400),
        auto in any::<bool>(),
        offset in offsets(),
    ) {
        let layout = if auto { LayoutMode::Vertical } else { LayoutMode::None };
        let mut frame = SceneNode::frame(x, -x, 33.0, 44.0, vec![])
            .with_layout(layout, Padding::uniform(pad));
        let before = frame.clone();
        resize_with_offset(&mut frame, offset);
        prop_assert_eq!(frame, before);
    }
}
