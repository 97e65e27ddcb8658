use wasm_bindgen::prelude::*;

/// Snapshot of the last simulated frame.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) step_ms: f64,
    pub(super) dt: f32,
    pub(super) frame: u64,
    pub(super) skipped_frames: u32,
    /// Largest correction in the final relaxation pass.
    pub(super) solver_residual: f32,
    pub(super) max_link_error: f32,
    pub(super) vertex_count: u32,
    pub(super) dragging: bool,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn skipped_frames(&self) -> u32 { self.skipped_frames }
    #[wasm_bindgen(getter)]
    pub fn solver_residual(&self) -> f32 { self.solver_residual }
    #[wasm_bindgen(getter)]
    pub fn max_link_error(&self) -> f32 { self.max_link_error }
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 { self.vertex_count }
    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool { self.dragging }
}
