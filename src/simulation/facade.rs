use wasm_bindgen::prelude::*;

use crate::core::math::Vec2;
use crate::systems::pendant::Release;

use super::frame_stats::FrameStats;
use super::PendantRig;

/// JS handle to the pendant scene. Mesh buffers are exposed as raw pointers
/// into wasm memory; they stay valid until the next `step`.
#[wasm_bindgen]
pub struct Pendant {
    rig: PendantRig,
}

#[wasm_bindgen]
impl Pendant {
    /// Build from a settings JSON document (`"{}"` for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<Pendant, JsValue> {
        PendantRig::from_json(settings_json)
            .map(|rig| Self { rig })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn step(&mut self, dt: f32) -> bool {
        self.rig.step(dt)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.rig.pointer_down(Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.rig.pointer_move(Vec2::new(x, y))
    }

    /// "thrown", "settled" or "ignored".
    pub fn pointer_up(&mut self) -> String {
        match self.rig.pointer_up() {
            Release::Thrown { .. } => "thrown",
            Release::Settled => "settled",
            Release::Ignored => "ignored",
        }
        .to_string()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.rig.set_aspect(aspect);
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.rig.frame() }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool { self.rig.card().is_dragging() }

    /// Card centre as `[x, y, z]`.
    pub fn card_position(&self) -> Vec<f32> {
        self.rig.card().pos.to_array().to_vec()
    }

    pub fn card_angle(&self) -> f32 {
        self.rig.card().angle
    }

    /// Joint positions, flat `[x, y, z, ...]`.
    pub fn joints(&self) -> Vec<f32> {
        self.rig.chain().positions().flat_map(|p| p.to_array()).collect()
    }

    pub fn get_stats(&self) -> FrameStats {
        self.rig.stats()
    }

    // === STRAP MESH ===

    pub fn positions(&self) -> Vec<f32> { self.rig.ribbon().positions.clone() }
    pub fn normals(&self) -> Vec<f32> { self.rig.ribbon().normals.clone() }
    pub fn uvs(&self) -> Vec<f32> { self.rig.ribbon().uvs.clone() }
    pub fn indices(&self) -> Vec<u32> { self.rig.ribbon().indices.clone() }

    pub fn positions_ptr(&self) -> *const f32 { self.rig.ribbon().positions.as_ptr() }
    pub fn normals_ptr(&self) -> *const f32 { self.rig.ribbon().normals.as_ptr() }
    pub fn uvs_ptr(&self) -> *const f32 { self.rig.ribbon().uvs.as_ptr() }
    pub fn indices_ptr(&self) -> *const u32 { self.rig.ribbon().indices.as_ptr() }

    pub fn vertex_count(&self) -> usize { self.rig.ribbon().vertex_count() }
    pub fn index_count(&self) -> usize { self.rig.ribbon().indices.len() }
}
