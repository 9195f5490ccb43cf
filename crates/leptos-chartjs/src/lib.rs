//! Leptos Chart.js Utilities
//!
//! Chart.js bindings and a slot registry for Leptos apps.
//! Each named slot owns at most one live chart; redrawing a slot always
//! destroys the previous chart before the new one is constructed.

use std::collections::BTreeMap;
use std::fmt;

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ========================
// Bindings
// ========================

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js instance (global `Chart` constructor).
    #[derive(Debug, Clone)]
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

/// Chart creation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("canvas `{0}` not found")]
    MissingCanvas(&'static str),
    #[error("invalid chart config: {0}")]
    Config(String),
    #[error("chart library error: {0}")]
    Library(String),
}

// ========================
// Config Model
// ========================

/// Chart.js chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

/// A single colour for the whole dataset, or one colour per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    Indexed(Vec<String>),
}

impl Paint {
    pub fn indexed(colors: &[&str]) -> Self {
        Paint::Indexed(colors.iter().map(|c| c.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Full Chart.js configuration object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: serde_json::Value,
}

// ========================
// Backends
// ========================

/// A named chart position on the page.
pub trait ChartSlot: Copy + Ord + fmt::Debug {
    /// DOM id of the `<canvas>` the slot draws into
    fn canvas_id(self) -> &'static str;
}

/// Something that can construct and tear down chart resources.
pub trait ChartBackend<K: ChartSlot> {
    type Handle;

    fn create(&mut self, slot: K, config: &ChartConfig) -> Result<Self::Handle, ChartError>;

    fn destroy(&mut self, slot: K, handle: Self::Handle);
}

/// Chart.js backed by the host page's global `Chart`
#[derive(Debug, Default, Clone, Copy)]
pub struct ChartJs;

impl<K: ChartSlot> ChartBackend<K> for ChartJs {
    type Handle = Chart;

    fn create(&mut self, slot: K, config: &ChartConfig) -> Result<Chart, ChartError> {
        let id = slot.canvas_id();
        let canvas = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .ok_or(ChartError::MissingCanvas(id))?;

        // Plain objects, not JS Maps, for the options tree
        let js_config = config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ChartError::Config(e.to_string()))?;

        Chart::new(&canvas, &js_config).map_err(|e| ChartError::Library(format!("{:?}", e)))
    }

    fn destroy(&mut self, _slot: K, handle: Chart) {
        handle.destroy();
    }
}

// ========================
// Registry
// ========================

/// Owns every live chart, at most one per slot.
///
/// Slots move `Empty -> Live -> Empty`; there is no `Live -> Live` step.
/// Handles never leave the registry, so nothing else can hold a chart
/// across its destroy.
pub struct ChartRegistry<K: ChartSlot, B: ChartBackend<K>> {
    backend: B,
    live: BTreeMap<K, B::Handle>,
}

impl<K: ChartSlot, B: ChartBackend<K>> ChartRegistry<K, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: BTreeMap::new(),
        }
    }

    /// Draw `config` into `slot`, destroying whatever was there first.
    ///
    /// On error the slot is left empty.
    pub fn render(&mut self, slot: K, config: &ChartConfig) -> Result<(), ChartError> {
        self.clear(slot);
        let handle = self.backend.create(slot, config)?;
        self.live.insert(slot, handle);
        Ok(())
    }

    /// Destroy the chart in `slot`. No-op on an empty slot.
    pub fn clear(&mut self, slot: K) {
        if let Some(handle) = self.live.remove(&slot) {
            log::debug!("destroying chart in {:?}", slot);
            self.backend.destroy(slot, handle);
        }
    }

    /// Destroy every live chart.
    pub fn clear_all(&mut self) {
        let live = std::mem::take(&mut self.live);
        for (slot, handle) in live {
            log::debug!("destroying chart in {:?}", slot);
            self.backend.destroy(slot, handle);
        }
    }

    pub fn is_live(&self, slot: K) -> bool {
        self.live.contains_key(&slot)
    }
}

impl<K: ChartSlot, B: ChartBackend<K>> fmt::Debug for ChartRegistry<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartRegistry")
            .field("live", &self.live.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ========================
// Components
// ========================

/// Titled card holding the `<canvas>` a slot draws into
#[component]
pub fn ChartCanvas(
    canvas_id: &'static str,
    #[prop(into)] title: String,
) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <canvas id=canvas_id></canvas>
        </div>
    }
}
