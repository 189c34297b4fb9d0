use wasm_bindgen::prelude::*;

pub mod animation;
pub mod data;
pub mod error;
pub mod layers;
pub mod layout;
pub mod math;
pub mod render;
pub mod scene;

pub use animation::Mode;
pub use data::SceneConfig;
pub use error::SceneError;
pub use scene::Scene;

use tracing::info;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine state exposed to JavaScript
#[wasm_bindgen]
pub struct ChristmasTreeScene {
    scene: Scene,
    mode: Mode,
    /// Elapsed time of the last update, seconds
    time: f32,
}

#[wasm_bindgen]
impl ChristmasTreeScene {
    /// Create a scene with the stock tree
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChristmasTreeScene {
        Self::from_scene(Scene::new(&SceneConfig::default()))
    }

    /// Create a scene from a YAML configuration
    #[wasm_bindgen]
    pub fn from_yaml(yaml: &str) -> Result<ChristmasTreeScene, JsValue> {
        let config = SceneConfig::from_yaml(yaml).map_err(to_js)?;
        Ok(Self::from_scene(Scene::new(&config)))
    }

    /// Flip between scattered and assembled
    #[wasm_bindgen]
    pub fn toggle_mode(&mut self) -> String {
        self.set(self.mode.toggled());
        self.mode.to_string()
    }

    /// Set the mode by name (`SCATTERED` or `TREE_SHAPE`)
    #[wasm_bindgen]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = mode.parse::<Mode>().map_err(to_js)?;
        self.set(mode);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn mode(&self) -> String {
        self.mode.to_string()
    }

    /// Add photo references (strings); returns how many were accepted
    #[wasm_bindgen]
    pub fn add_photos(&mut self, urls: js_sys::Array) -> usize {
        let urls: Vec<String> = urls.iter().filter_map(|v| v.as_string()).collect();
        self.scene.add_photos(urls)
    }

    #[wasm_bindgen]
    pub fn photo_count(&self) -> usize {
        self.scene.album().len()
    }

    #[wasm_bindgen]
    pub fn photo_capacity(&self) -> usize {
        self.scene.album().capacity()
    }

    /// Advance one frame; `elapsed` is the frame clock in seconds
    #[wasm_bindgen]
    pub fn update(&mut self, elapsed: f32) {
        self.time = elapsed;
        self.scene.update(self.mode);
    }

    #[wasm_bindgen]
    pub fn is_settled(&self) -> bool {
        self.scene.is_settled(self.mode)
    }

    // === Foliage ===

    #[wasm_bindgen]
    pub fn foliage_count(&self) -> usize {
        self.scene.foliage().count()
    }

    /// Static attribute: scatter positions (xyz per point)
    #[wasm_bindgen]
    pub fn foliage_scatter_positions(&self) -> Vec<f32> {
        self.scene.foliage().scatter_attribute()
    }

    /// Static attribute: tree positions (xyz per point)
    #[wasm_bindgen]
    pub fn foliage_target_positions(&self) -> Vec<f32> {
        self.scene.foliage().target_attribute()
    }

    /// Static attribute: per-point random seed
    #[wasm_bindgen]
    pub fn foliage_randoms(&self) -> Vec<f32> {
        self.scene.foliage().random_attribute()
    }

    /// Value for the `u_progress` uniform
    #[wasm_bindgen]
    pub fn foliage_progress(&self) -> f32 {
        self.scene.foliage().progress()
    }

    /// Value for the `u_time` uniform
    #[wasm_bindgen]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[wasm_bindgen]
    pub fn foliage_vertex_shader() -> String {
        render::FOLIAGE_VERTEX_SHADER.to_string()
    }

    #[wasm_bindgen]
    pub fn foliage_fragment_shader() -> String {
        render::FOLIAGE_FRAGMENT_SHADER.to_string()
    }

    // === Ornaments ===

    #[wasm_bindgen]
    pub fn ornament_layer_count(&self) -> usize {
        self.scene.ornaments().len()
    }

    /// Weight class of a layer (`heavy`, `light` or `tiny`)
    #[wasm_bindgen]
    pub fn ornament_kind(&self, layer: usize) -> Option<String> {
        self.scene
            .ornaments()
            .get(layer)
            .map(|l| l.kind().as_str().to_string())
    }

    /// Instance matrices for a layer, 16 floats (column-major) per instance
    #[wasm_bindgen]
    pub fn ornament_instances(&self, layer: usize) -> Vec<f32> {
        let mut buffer = Vec::new();
        if let Some(layer) = self.scene.ornaments().get(layer) {
            layer.write_instances(self.time, &mut buffer);
        }
        buffer
    }

    // === Photos ===

    /// Instance matrices for the photo frames, 16 floats per frame
    #[wasm_bindgen]
    pub fn photo_instances(&self) -> Vec<f32> {
        let mut buffer = Vec::new();
        self.scene.photos().write_instances(self.time, &mut buffer);
        buffer
    }

    /// Photo reference shown in frame `index`
    #[wasm_bindgen]
    pub fn photo_id(&self, index: usize) -> Option<String> {
        self.scene.photos().photo_id(index).map(str::to_string)
    }
}

impl ChristmasTreeScene {
    fn from_scene(scene: Scene) -> Self {
        Self {
            scene,
            mode: Mode::default(),
            time: 0.0,
        }
    }

    fn set(&mut self, mode: Mode) {
        if mode != self.mode {
            info!(from = %self.mode, to = %mode, "mode changed");
            self.mode = mode;
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Default for ChristmasTreeScene {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(err: SceneError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
