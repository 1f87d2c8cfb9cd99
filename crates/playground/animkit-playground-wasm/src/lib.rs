use std::time::Duration;

use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use animkit_catalog_core::{result_count_label, Catalog, CatalogFilter};
use animkit_descriptor_core::{
    build_descriptor, duration_from_ms, render_code, CardPlayback, Easing, ElementKind,
    MotionDescriptor, MotionParams, PlaygroundConfig, PlaygroundSession, Preset, ReplayOutcome,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Plain JS objects for maps so hosts can spread descriptors into props.
fn to_js<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} serialize error: {e}")))
}

fn millis(dt_ms: f64) -> Result<Duration, JsError> {
    duration_from_ms(dt_ms).map_err(|e| JsError::new(&e.to_string()))
}

fn config_from_js(config: JsValue) -> Result<PlaygroundConfig, JsError> {
    let cfg: PlaygroundConfig = if jsvalue_is_undefined_or_null(&config) {
        PlaygroundConfig::default()
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
    };
    cfg.validate()
        .map_err(|e| JsError::new(&format!("config error: {e}")))?;
    Ok(cfg)
}

fn outcome_name(outcome: ReplayOutcome) -> &'static str {
    match outcome {
        ReplayOutcome::Scheduled => "scheduled",
        ReplayOutcome::Debounced => "debounced",
        ReplayOutcome::Ignored => "ignored",
    }
}

/// Read-only view over the built-in catalog.
#[wasm_bindgen]
pub struct AnimKitCatalog {
    core: &'static Catalog,
}

#[wasm_bindgen]
impl AnimKitCatalog {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AnimKitCatalog {
        console_error_panic_hook::set_once();
        AnimKitCatalog {
            core: Catalog::builtin(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.core.len()
    }

    pub fn all(&self) -> Result<JsValue, JsError> {
        to_js(self.core.all_records(), "records")
    }

    /// Category display names in declaration order.
    pub fn categories(&self) -> js_sys::Array {
        self.core
            .categories()
            .iter()
            .map(|c| JsValue::from_str(c.name()))
            .collect()
    }

    #[wasm_bindgen(js_name = byCategory)]
    pub fn by_category(&self, name: &str) -> Result<JsValue, JsError> {
        to_js(&self.core.by_category_name(name), "records")
    }

    /// Returns `undefined` for unknown ids.
    #[wasm_bindgen(js_name = byId)]
    pub fn by_id(&self, id: &str) -> Result<JsValue, JsError> {
        match self.core.by_id(id) {
            Ok(record) => to_js(record, "record"),
            Err(_) => Ok(JsValue::UNDEFINED),
        }
    }

    pub fn search(&self, query: &str) -> Result<JsValue, JsError> {
        to_js(&self.core.search(query), "records")
    }

    /// Apply a `{ category, query }` filter. Pass undefined for the full catalog.
    pub fn filter(&self, filter: JsValue) -> Result<JsValue, JsError> {
        let filter: CatalogFilter = if jsvalue_is_undefined_or_null(&filter) {
            CatalogFilter::default()
        } else {
            swb::from_value(filter).map_err(|e| JsError::new(&format!("filter error: {e}")))?
        };
        to_js(&self.core.filter(&filter), "records")
    }
}

impl Default for AnimKitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Interactive composer with preview, code output and replay.
#[wasm_bindgen]
pub struct AnimKitPlayground {
    core: PlaygroundSession,
}

#[wasm_bindgen]
impl AnimKitPlayground {
    /// Create a session. Pass a config object (see PlaygroundConfig) or undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<AnimKitPlayground, JsError> {
        console_error_panic_hook::set_once();

        let cfg = config_from_js(config)?;
        let core = PlaygroundSession::new(cfg)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(AnimKitPlayground { core })
    }

    /// Select a preset; returns the resolved preset key.
    #[wasm_bindgen(js_name = setPreset)]
    pub fn set_preset(&mut self, key: &str) -> String {
        self.core.set_preset(key).key().to_string()
    }

    /// Load a catalog record by id; returns the resolved preset key.
    #[wasm_bindgen(js_name = selectRecord)]
    pub fn select_record(&mut self, id: &str) -> Result<String, JsError> {
        let record = Catalog::builtin()
            .by_id(id)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(self.core.select_record(record).key().to_string())
    }

    #[wasm_bindgen(js_name = setElement)]
    pub fn set_element(&mut self, kind: &str) -> Result<(), JsError> {
        let kind: ElementKind = kind.parse().map_err(|e| JsError::new(&format!("{e}")))?;
        self.core.set_element(kind);
        Ok(())
    }

    #[wasm_bindgen(js_name = setDuration)]
    pub fn set_duration(&mut self, seconds: f64) -> Result<(), JsError> {
        self.core
            .set_duration(seconds)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setDelay)]
    pub fn set_delay(&mut self, seconds: f64) -> Result<(), JsError> {
        self.core
            .set_delay(seconds)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setEasing)]
    pub fn set_easing(&mut self, easing: &str) -> Result<(), JsError> {
        let easing: Easing = easing.parse().map_err(|e| JsError::new(&format!("{e}")))?;
        self.core.set_easing(easing);
        Ok(())
    }

    /// `{ element, generation, isPlaying, descriptor }` for the renderer.
    pub fn preview(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.preview(), "preview")
    }

    pub fn code(&self) -> String {
        self.core.code()
    }

    /// Snippet for the clipboard; also arms the copy confirmation.
    #[wasm_bindgen(js_name = copyCode)]
    pub fn copy_code(&mut self) -> String {
        self.core.copy_code()
    }

    #[wasm_bindgen(getter, js_name = copyLabel)]
    pub fn copy_label(&self) -> String {
        self.core.copy_feedback().label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> f64 {
        self.core.replay_state().generation() as f64
    }

    /// Returns "scheduled", "debounced" or "ignored".
    pub fn replay(&mut self) -> String {
        outcome_name(self.core.replay()).to_string()
    }

    /// Advance timers by `dt_ms`. Returns the new generation when the preview remounts.
    pub fn update(&mut self, dt_ms: f64) -> Result<Option<f64>, JsError> {
        let dt = millis(dt_ms)?;
        Ok(self.core.advance(dt).map(|g| g as f64))
    }
}

/// Play overlay for one catalog card.
#[wasm_bindgen]
pub struct AnimKitCardPreview {
    core: CardPlayback,
}

#[wasm_bindgen]
impl AnimKitCardPreview {
    /// Hold time comes from the config's `card_play_ms`. Pass undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<AnimKitCardPreview, JsError> {
        console_error_panic_hook::set_once();
        let cfg = config_from_js(config)?;
        Ok(AnimKitCardPreview {
            core: CardPlayback::from_config(&cfg),
        })
    }

    pub fn play(&mut self) {
        self.core.play();
    }

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.core.is_playing()
    }

    /// Identity key for the demo element: "playing" or "idle".
    #[wasm_bindgen(getter)]
    pub fn key(&self) -> String {
        self.core.key().to_string()
    }

    pub fn preview(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.preview_descriptor(), "card preview")
    }

    /// Advance the overlay timer. Returns true when it clears during this step.
    pub fn update(&mut self, dt_ms: f64) -> Result<bool, JsError> {
        let dt = millis(dt_ms)?;
        Ok(self.core.advance(dt))
    }
}

/// Stateless descriptor build. `params` is `{ duration, delay, easing }` or undefined.
#[wasm_bindgen(js_name = buildDescriptor)]
pub fn build_descriptor_js(preset: &str, params: JsValue) -> Result<JsValue, JsError> {
    let params: MotionParams = if jsvalue_is_undefined_or_null(&params) {
        MotionParams::default()
    } else {
        swb::from_value(params).map_err(|e| JsError::new(&format!("params error: {e}")))?
    };
    params
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&build_descriptor(preset, &params), "descriptor")
}

#[wasm_bindgen(js_name = renderCode)]
pub fn render_code_js(descriptor: JsValue) -> Result<String, JsError> {
    let d: MotionDescriptor = swb::from_value(descriptor)
        .map_err(|e| JsError::new(&format!("descriptor error: {e}")))?;
    d.validate()
        .map_err(|e| JsError::new(&format!("descriptor error: {e}")))?;
    Ok(render_code(&d))
}

/// Keys for the playground's animation type selector.
#[wasm_bindgen]
pub fn presets() -> Result<JsValue, JsError> {
    let keys: Vec<&str> = Preset::PLAYGROUND.iter().map(Preset::key).collect();
    to_js(&keys, "presets")
}

#[derive(Serialize)]
struct Choice {
    label: &'static str,
    value: &'static str,
}

#[wasm_bindgen]
pub fn easings() -> Result<JsValue, JsError> {
    let choices: Vec<Choice> = Easing::ALL
        .iter()
        .map(|e| Choice {
            label: e.label(),
            value: e.id(),
        })
        .collect();
    to_js(&choices, "easings")
}

#[wasm_bindgen(js_name = elementKinds)]
pub fn element_kinds_js() -> Result<JsValue, JsError> {
    let choices: Vec<Choice> = ElementKind::ALL
        .iter()
        .map(|k| Choice {
            label: k.label(),
            value: k.id(),
        })
        .collect();
    to_js(&choices, "element kinds")
}

#[wasm_bindgen(js_name = resultCountLabel)]
pub fn result_count_label_js(count: usize) -> String {
    result_count_label(count)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
