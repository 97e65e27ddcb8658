use crate::core::math::Vec2;
use crate::systems::pendant::Release;

use super::PendantRig;

pub(super) fn pointer_down(rig: &mut PendantRig, ndc: Vec2) -> bool {
    if !ndc.is_finite() || rig.card.is_dragging() {
        return false;
    }
    rig.pointer = ndc;
    let Some(hit) = rig.camera.pointer_on_plane(ndc, rig.settings.drag_plane_z) else {
        return false;
    };
    if !rig.card.hit_test(hit) {
        return false;
    }

    rig.card.begin_drag(hit);
    let attachment = rig.attachment();
    let end = rig.chain.end_index();
    rig.chain.pin(end, attachment);
    true
}

pub(super) fn pointer_move(rig: &mut PendantRig, ndc: Vec2) {
    if ndc.is_finite() {
        rig.pointer = ndc;
    }
}

/// Hands the card back to the strap. A throw carries the card velocity into
/// the strap end; a settle leaves it at rest.
pub(super) fn pointer_up(rig: &mut PendantRig) -> Release {
    let release = rig
        .card
        .end_drag(rig.settings.release_threshold, rig.settings.torque_scale);
    if release == Release::Ignored {
        return release;
    }

    let end = rig.chain.end_index();
    rig.chain.unpin(end);
    rig.chain.inject_velocity(end, rig.card.velocity, rig.last_dt);
    rig.stats.dragging = false;
    release
}
