//! # frame-offset
//!
//! Resize frames and components so their edges sit a fixed distance from
//! their contents.
//!
//! Designers group content inside a frame and want the same breathing room
//! on every side. Doing it by hand means measuring the content, moving the
//! frame, resizing it, and then nudging every child back into place. This
//! crate does that in one step for a whole selection.
//!
//! ## Architecture
//!
//! ```text
//! Parameters ("offset")       Selection (scene nodes)
//!       ↓                            ↓
//!   [offset]  validate          [plugin]  eligibility filter
//!       ↓                            ↓
//!       └────────► [resize] ◄────────┘
//!                      ↓
//!               [plugin]  report → toast
//! ```
//!
//! The resizer works through the capability traits in [`model`], so it can
//! be driven by the serde scene types here or by any other binding to the
//! host's node API.

pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod offset;
pub mod plugin;
pub mod resize;
pub mod suggest;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{OffsetError, PluginError};
pub use offset::Offset;
pub use plugin::{Host, Parameters, RunReport, SceneHost};
pub use resize::{resize_with_offset, ResizeOutcome};

use model::Scene;

/// Resize every eligible node in a scene.
pub fn resize_scene(scene: &mut Scene, offset: Offset) -> RunReport {
    plugin::apply(&mut scene.selection, offset)
}

/// Resize a scene described as JSON, returning the transformed scene JSON
/// and the toast text.
///
/// An invalid offset or an empty selection still yields the untouched scene
/// along with the guidance message; only malformed JSON is an error.
pub fn resize_scene_json(json: &str, offset: &str) -> Result<(String, String), PluginError> {
    let scene: Scene = serde_json::from_str(json)?;
    let mut host = SceneHost::new(scene);

    let mut params = Parameters::new();
    params.insert(plugin::OFFSET_PARAMETER.to_string(), offset.to_string());
    // Rejections are already reported through the host's toast.
    let _ = plugin::start_with_parameters(&mut host, &params);

    let message = host.last_notification().unwrap_or_default().to_string();
    let out = serde_json::to_string_pretty(&host.scene)?;
    Ok((out, message))
}
