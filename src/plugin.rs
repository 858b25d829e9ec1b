//! # Plugin Run
//!
//! The layer between the host and the resizer: read the `offset`
//! parameter, pick out the selected nodes that can be resized, resize each
//! one, and tell the user what happened.
//!
//! The host is passed in explicitly through [`Host`] rather than reached
//! through a global, which is what lets the CLI, the wasm binding and the
//! tests all drive the same code.

use std::collections::HashMap;

use crate::error::PluginError;
use crate::model::{Scene, SceneNode};
use crate::offset::Offset;
use crate::resize::{resize_with_offset, ResizeOutcome};

/// Name of the quick-action parameter holding the offset.
pub const OFFSET_PARAMETER: &str = "offset";

/// Parameter values submitted from the quick-action box, keyed by name.
pub type Parameters = HashMap<String, String>;

/// What the plugin needs from the design tool.
pub trait Host {
    /// The current selection, in selection order.
    fn selection_mut(&mut self) -> &mut [SceneNode];

    /// Show a short toast to the user.
    fn notify(&mut self, message: &str);

    /// End the plugin run. Called exactly once per run.
    fn close_plugin(&mut self);
}

/// A host backed by an in-memory [`Scene`], for the CLI and wasm bindings.
#[derive(Debug, Default)]
pub struct SceneHost {
    pub scene: Scene,
    pub notifications: Vec<String>,
    pub closed: bool,
}

impl SceneHost {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            ..Default::default()
        }
    }

    /// The most recent toast, if any.
    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(String::as_str)
    }
}

impl Host for SceneHost {
    fn selection_mut(&mut self) -> &mut [SceneNode] {
        &mut self.scene.selection
    }

    fn notify(&mut self, message: &str) {
        tracing::debug!(message, "notify");
        self.notifications.push(message.to_string());
    }

    fn close_plugin(&mut self) {
        self.closed = true;
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of containers resized.
    pub resized: usize,
    pub free_form: usize,
    pub auto_layout: usize,
}

impl RunReport {
    /// Toast text for this report.
    pub fn message(&self) -> String {
        if self.resized == 1 {
            "1 layer resized".to_string()
        } else {
            format!("{} layers resized", self.resized)
        }
    }
}

/// Frame-like nodes with at least one child.
pub fn is_eligible(node: &SceneNode) -> bool {
    node.kind.is_container_like() && !node.children.is_empty()
}

/// Resize every eligible node in `selection`, leaving the rest alone.
pub fn apply(selection: &mut [SceneNode], offset: Offset) -> RunReport {
    let mut report = RunReport::default();
    for node in selection.iter_mut().filter(|n| is_eligible(n)) {
        match resize_with_offset(node, offset) {
            ResizeOutcome::FreeForm => report.free_form += 1,
            ResizeOutcome::AutoLayout => report.auto_layout += 1,
            ResizeOutcome::Skipped => continue,
        }
        report.resized += 1;
    }
    report
}

/// Read the offset parameter.
pub fn offset_from(params: &Parameters) -> Result<Offset, PluginError> {
    let raw = params
        .get(OFFSET_PARAMETER)
        .ok_or_else(|| PluginError::MissingParameter(OFFSET_PARAMETER.to_string()))?;
    Ok(Offset::parse(raw)?)
}

/// Validate parameters and resize the host's selection.
///
/// No geometry is touched unless the offset is valid.
pub fn run<H: Host + ?Sized>(host: &mut H, params: &Parameters) -> Result<RunReport, PluginError> {
    let offset = offset_from(params)?;
    let report = apply(host.selection_mut(), offset);
    if report.resized == 0 {
        return Err(PluginError::EmptySelection);
    }
    tracing::info!(
        resized = report.resized,
        free_form = report.free_form,
        auto_layout = report.auto_layout,
        %offset,
        "resize run complete"
    );
    Ok(report)
}

/// Full run lifecycle: resize, notify once, close.
pub fn start_with_parameters<H: Host + ?Sized>(
    host: &mut H,
    params: &Parameters,
) -> Result<RunReport, PluginError> {
    let result = run(host, params);
    match &result {
        Ok(report) => host.notify(&report.message()),
        Err(e) => {
            tracing::warn!("resize run rejected: {}", e);
            host.notify(&e.user_message());
        }
    }
    host.close_plugin();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutMode, NodeKind, Padding};

    #[derive(Default)]
    struct MockHost {
        selection: Vec<SceneNode>,
        notifications: Vec<String>,
        closed: usize,
    }

    impl Host for MockHost {
        fn selection_mut(&mut self) -> &mut [SceneNode] {
            &mut self.selection
        }

        fn notify(&mut self, message: &str) {
            self.notifications.push(message.to_string());
        }

        fn close_plugin(&mut self) {
            self.closed += 1;
        }
    }

    fn params(offset: &str) -> Parameters {
        let mut p = Parameters::new();
        p.insert(OFFSET_PARAMETER.to_string(), offset.to_string());
        p
    }

    fn framed() -> SceneNode {
        SceneNode::frame(0.0, 0.0, 100.0, 100.0, vec![SceneNode::rectangle(10.0, 10.0, 5.0, 5.0)])
    }

    #[test]
    fn test_single_layer_message() {
        let mut host = MockHost {
            selection: vec![framed()],
            ..Default::default()
        };
        let report = start_with_parameters(&mut host, &params("8")).unwrap();
        assert_eq!(report.resized, 1);
        assert_eq!(host.notifications, vec!["1 layer resized"]);
        assert_eq!(host.closed, 1);
    }

    #[test]
    fn test_multiple_layers_message() {
        let auto = framed().with_layout(LayoutMode::Horizontal, Padding::uniform(2.0));
        let mut host = MockHost {
            selection: vec![framed(), auto, framed()],
            ..Default::default()
        };
        let report = start_with_parameters(&mut host, &params("16")).unwrap();
        assert_eq!(report.resized, 3);
        assert_eq!(report.free_form, 2);
        assert_eq!(report.auto_layout, 1);
        assert_eq!(host.notifications, vec!["3 layers resized"]);
    }

    #[test]
    fn test_invalid_offset_touches_nothing() {
        let mut host = MockHost {
            selection: vec![framed()],
            ..Default::default()
        };
        let before = host.selection.clone();
        let err = start_with_parameters(&mut host, &params("-4")).unwrap_err();
        assert!(matches!(err, PluginError::InvalidOffset(_)));
        assert_eq!(host.selection, before);
        assert_eq!(host.notifications, vec!["Try entering a positive number"]);
        assert_eq!(host.closed, 1);
    }

    #[test]
    fn test_missing_offset_parameter() {
        let mut host = MockHost {
            selection: vec![framed()],
            ..Default::default()
        };
        let err = start_with_parameters(&mut host, &Parameters::new()).unwrap_err();
        assert!(matches!(err, PluginError::MissingParameter(_)));
        assert_eq!(host.closed, 1);
    }

    #[test]
    fn test_empty_selection() {
        let mut host = MockHost::default();
        let err = start_with_parameters(&mut host, &params("8")).unwrap_err();
        assert!(matches!(err, PluginError::EmptySelection));
        assert_eq!(
            host.notifications,
            vec!["Select at least one frame or component"]
        );
        assert_eq!(host.closed, 1);
    }

    #[test]
    fn test_ineligible_nodes_skipped() {
        let group = SceneNode {
            children: vec![SceneNode::rectangle(1.0, 1.0, 1.0, 1.0)],
            ..SceneNode::new(NodeKind::Group, 0.0, 0.0, 10.0, 10.0)
        };
        let childless = SceneNode::frame(5.0, 5.0, 10.0, 10.0, vec![]);
        let mut host = MockHost {
            selection: vec![group.clone(), childless.clone(), framed()],
            ..Default::default()
        };
        let report = run(&mut host, &params("4")).unwrap();
        assert_eq!(report.resized, 1);
        assert_eq!(host.selection[0], group);
        assert_eq!(host.selection[1], childless);
    }

    #[test]
    fn test_only_ineligible_is_empty_selection() {
        let mut host = MockHost {
            selection: vec![SceneNode::rectangle(0.0, 0.0, 1.0, 1.0)],
            ..Default::default()
        };
        assert!(matches!(
            run(&mut host, &params("4")),
            Err(PluginError::EmptySelection)
        ));
    }

    #[test]
    fn test_eligibility() {
        assert!(is_eligible(&framed()));
        let mut component = framed();
        component.kind = NodeKind::Component;
        assert!(is_eligible(&component));
        assert!(!is_eligible(&SceneNode::frame(0.0, 0.0, 1.0, 1.0, vec![])));
    }
}
