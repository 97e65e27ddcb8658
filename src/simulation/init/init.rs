use crate::core::math::{vec3, Vec2, Vec3};
use crate::domain::PendantSettings;
use crate::systems::pendant::{Camera, CardBody, CatmullRom, RibbonMesh, VerletChain};

use super::frame_stats::FrameStats;
use super::step::rebuild_strap;
use super::PendantRig;

/// Strap hanging straight down from the anchor with the card below it and
/// the strap mesh already built.
pub(super) fn create_rig(settings: PendantSettings) -> PendantRig {
    let anchor = vec3(settings.anchor);
    let chain = VerletChain::hanging(
        anchor,
        settings.links,
        settings.rest_length,
        settings.joint_mass,
        settings.card_mass,
        settings.link_mode,
    );

    let end = chain.pos(chain.end_index()).unwrap_or(anchor);
    let [w, h] = settings.card_size;
    let mut card = CardBody::new(Vec3::ZERO, settings.card_mass, Vec2::new(w, h));
    card.align_local_to(vec3(settings.attachment_offset), end);

    let curve = CatmullRom::new(Vec::with_capacity(chain.len()), settings.curve_type);
    let samples = Vec::with_capacity(settings.curve_resolution + 1);

    let mut rig = PendantRig {
        camera: Camera::new(settings.camera),
        last_dt: settings.max_dt,
        chain,
        card,
        curve,
        samples,
        ribbon: RibbonMesh::new(),
        pointer: Vec2::ZERO,
        frame: 0,
        stats: FrameStats::default(),
        settings,
    };
    rebuild_strap(&mut rig);
    rig.stats.vertex_count = rig.ribbon.vertex_count() as u32;
    rig
}
