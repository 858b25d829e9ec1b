use wasm_bindgen::prelude::*;

use crate::model::Scene;
use crate::plugin::{self, Parameters, SceneHost, OFFSET_PARAMETER};
use crate::suggest::{suggestions, DEFAULT_SUGGESTIONS};

/// Resize a scene given as JSON. Returns `{ scene, message }` with the
/// scene re-serialized as JSON.
#[wasm_bindgen(js_name = resizeSceneJson)]
pub fn resize_scene_json(json: &str, offset: &str) -> Result<JsValue, JsValue> {
    let (scene, message) = crate::resize_scene_json(json, offset)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let out = js_sys::Object::new();
    js_sys::Reflect::set(&out, &"scene".into(), &JsValue::from_str(&scene))?;
    js_sys::Reflect::set(&out, &"message".into(), &JsValue::from_str(&message))?;
    Ok(out.into())
}

/// Resize a selection passed as plain JS objects. Returns `{ selection,
/// message }`.
#[wasm_bindgen(js_name = resizeSelection)]
pub fn resize_selection(selection: JsValue, offset: &str) -> Result<JsValue, JsValue> {
    let scene = Scene {
        selection: serde_wasm_bindgen::from_value(selection)?,
    };
    let mut host = SceneHost::new(scene);
    let mut params = Parameters::new();
    params.insert(OFFSET_PARAMETER.to_string(), offset.to_string());
    let _ = plugin::start_with_parameters(&mut host, &params);

    let out = js_sys::Object::new();
    js_sys::Reflect::set(
        &out,
        &"selection".into(),
        &serde_wasm_bindgen::to_value(&host.scene.selection)?,
    )?;
    js_sys::Reflect::set(
        &out,
        &"message".into(),
        &JsValue::from_str(host.last_notification().unwrap_or_default()),
    )?;
    Ok(out.into())
}

/// Quick-action suggestions for the offset box.
///
/// The wasm host has no config file, so the candidate list comes from the
/// caller. `undefined` or `null` falls back to the built-in offsets.
#[wasm_bindgen(js_name = suggestOffsets)]
pub fn suggest_offsets(query: &str, candidates: JsValue) -> Result<js_sys::Array, JsValue> {
    let candidates: Vec<String> = if candidates.is_undefined() || candidates.is_null() {
        DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        serde_wasm_bindgen::from_value(candidates)?
    };
    Ok(suggestions(&candidates, query)
        .into_iter()
        .map(JsValue::from_str)
        .collect())
}
