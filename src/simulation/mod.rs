//! Pendant rig - per-frame orchestration of strap, card and strap mesh
//!
//! The rig owns every piece of the scene and only sequences them:
//! - chain/card physics live in systems::pendant
//! - step/ runs one frame
//! - commands/ handles pointer input
//! - facade.rs exposes the rig to JS

use crate::core::math::{vec3, Vec2, Vec3};
use crate::domain::{PendantSettings, SettingsError};
use crate::systems::pendant::{Camera, CardBody, CatmullRom, Release, RibbonMesh, VerletChain};

#[path = "perf/clock.rs"]
mod clock;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/pointer.rs"]
mod pointer;
mod facade;

pub use facade::Pendant;
pub use frame_stats::FrameStats;

pub struct PendantRig {
    settings: PendantSettings,
    chain: VerletChain,
    card: CardBody,
    camera: Camera,
    curve: CatmullRom,
    /// Sampled curve points, reused every frame.
    samples: Vec<Vec3>,
    ribbon: RibbonMesh,
    /// Last pointer position in NDC.
    pointer: Vec2,
    /// Clamped dt of the last simulated frame.
    last_dt: f32,
    frame: u64,
    stats: FrameStats,
}

impl PendantRig {
    pub fn new(settings: PendantSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(init::create_rig(settings))
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Self::new(PendantSettings::from_json(json)?)
    }

    /// Advance one frame. Returns `false` when the frame was skipped.
    pub fn step(&mut self, dt: f32) -> bool {
        step::step(self, dt)
    }

    /// Grab the card if the pointer is over it.
    pub fn pointer_down(&mut self, ndc: Vec2) -> bool {
        pointer::pointer_down(self, ndc)
    }

    pub fn pointer_move(&mut self, ndc: Vec2) {
        pointer::pointer_move(self, ndc)
    }

    pub fn pointer_up(&mut self) -> Release {
        pointer::pointer_up(self)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    pub fn settings(&self) -> &PendantSettings {
        &self.settings
    }

    pub fn chain(&self) -> &VerletChain {
        &self.chain
    }

    pub fn card(&self) -> &CardBody {
        &self.card
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn curve(&self) -> &CatmullRom {
        &self.curve
    }

    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }

    pub fn ribbon(&self) -> &RibbonMesh {
        &self.ribbon
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Card attachment point in world space.
    pub fn attachment(&self) -> Vec3 {
        self.card.local_to_world(vec3(self.settings.attachment_offset))
    }

    /// Last curve control point: the attachment lifted by the clasp height.
    fn clasp(&self) -> Vec3 {
        self.attachment() + Vec3::Y * self.settings.clasp_lift
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
