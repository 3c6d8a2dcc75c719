use nalgebra_glm as glm;

use crate::camera::state::{CameraMode, CameraPose, DragState, FlyKey, KeyState};
use crate::geometry;

/// Drag scale in degrees for a full half-viewport of travel.
const FREE_DRAG_SCALE: f32 = 90.0;
const ORIGIN_DRAG_SCALE: f32 = 180.0;

/// Wheel-zoom factor per scroll pixel.
const ZOOM_PER_PIXEL: f32 = 0.01;

/// Lower bound for the orbit radius so zooming can never cross the origin.
const MIN_RADIUS: f32 = 0.1;

/// Camera state machine. All pointer/keyboard events are routed through the
/// explicit `on_*` methods; `update` integrates fly movement and recomputes
/// the pose once per frame.
pub struct CameraController {
    pose: CameraPose,
    drag: DragState,
    keys: KeyState,
    eye: glm::Vec3,
    target: glm::Vec3,
    world: glm::Mat4,
}

impl CameraController {
    pub fn new(mode: CameraMode) -> Self {
        let mut controller = Self {
            pose: CameraPose::for_mode(mode),
            drag: DragState::default(),
            keys: KeyState::default(),
            eye: glm::vec3(0.0, 0.0, 0.0),
            target: glm::vec3(0.0, 0.0, 0.0),
            world: glm::Mat4::identity(),
        };
        controller.set_pose();
        controller
    }

    /// Re-initialize to the mode-specific default pose. This is the only way
    /// to switch modes; no automatic switching happens during operation.
    pub fn reset(&mut self, mode: CameraMode) {
        self.pose = CameraPose::for_mode(mode);
        self.drag = DragState::default();
        self.keys = KeyState::default();
        self.set_pose();
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn mode(&self) -> &CameraMode {
        &self.pose.mode
    }

    pub fn eye(&self) -> glm::Vec3 {
        self.eye
    }

    pub fn target(&self) -> glm::Vec3 {
        self.target
    }

    pub fn world(&self) -> &glm::Mat4 {
        &self.world
    }

    /// Arm a drag gesture. The anchor is only captured on the first move.
    pub fn on_pointer_down(&mut self) {
        if !self.drag.active {
            self.drag.active = true;
        }
    }

    /// Feed one pointer-move sample in viewport pixels. Returns true when the
    /// pose changed, so the caller can repaint without waiting for the next
    /// frame tick.
    pub fn on_pointer_move(&mut self, px: f32, py: f32, vp_w: f32, vp_h: f32) -> bool {
        if !self.drag.active {
            return false;
        }

        let scale = match self.pose.mode {
            CameraMode::Free { .. } => FREE_DRAG_SCALE,
            CameraMode::Origin => ORIGIN_DRAG_SCALE,
        };
        let x = ((px / vp_w) * 2.0 - 1.0) * scale;
        let y = -((py / vp_h) * 2.0 - 1.0) * scale;

        let Some(anchor) = self.drag.anchor else {
            self.drag.anchor = Some(glm::vec2(x, y));
            return false;
        };

        self.pose.delta_azimuth = x - anchor.x;
        self.pose.delta_polar = y - anchor.y;
        self.set_pose();
        true
    }

    /// Fold the accumulated drag deltas into the persistent angles.
    pub fn on_pointer_up(&mut self) {
        self.pose.azimuth += self.pose.delta_azimuth;
        self.pose.polar += self.pose.delta_polar;
        self.pose.delta_azimuth = 0.0;
        self.pose.delta_polar = 0.0;
        self.drag.active = false;
        self.drag.anchor = None;
    }

    /// Wheel zoom, orbit mode only. `delta_y` is in scroll pixels, positive
    /// away from the user.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if let CameraMode::Origin = self.pose.mode {
            self.pose.radius = (self.pose.radius - delta_y * ZOOM_PER_PIXEL).max(MIN_RADIUS);
        }
    }

    /// Last key down wins, replacing any currently held key.
    pub fn on_key_down(&mut self, key: FlyKey) {
        self.keys.pressed = Some(key);
        self.keys.last_sec = None;
    }

    /// Any key release clears the slot, even if a different key went down
    /// first. Deliberate: a chord release never leaves a stuck key.
    pub fn on_key_up(&mut self) {
        self.keys.pressed = None;
        self.keys.last_sec = None;
    }

    /// Per-frame update with seconds since app start.
    pub fn update(&mut self, secs: f32) {
        self.integrate_fly(secs);
        self.set_pose();
    }

    fn integrate_fly(&mut self, secs: f32) {
        if self.keys.pressed.is_none() {
            return;
        }
        let last = self.keys.last_sec.replace(secs);
        let Some(last) = last else {
            // First frame since the key state changed: no stale delta to use.
            return;
        };
        let scalar = secs - last;

        let up = geometry::up(&self.world);
        let right = geometry::right(&self.world);
        let forward = geometry::forward(&self.world);

        let CameraMode::Free { position } = &mut self.pose.mode else {
            return;
        };
        match self.keys.pressed {
            Some(FlyKey::W) => *position -= up * scalar,
            Some(FlyKey::S) => *position += up * scalar,
            Some(FlyKey::A) => *position += right * scalar,
            Some(FlyKey::D) => *position -= right * scalar,
            Some(FlyKey::R) => *position += forward * scalar,
            Some(FlyKey::F) => *position -= forward * scalar,
            None => {}
        }
    }

    /// Recompute eye/target and the world transform from the spherical pose.
    fn set_pose(&mut self) {
        let offset = geometry::spherical_to_cartesian(
            self.pose.radius,
            self.pose.polar + self.pose.delta_polar,
            self.pose.azimuth + self.pose.delta_azimuth,
        );
        let (eye, target) = match &self.pose.mode {
            CameraMode::Origin => (offset, glm::vec3(0.0, 0.0, 0.0)),
            CameraMode::Free { position } => (*position, *position + offset),
        };
        self.eye = eye;
        self.target = target;
        self.world = geometry::compose_look_at(&eye, &target, &geometry::world_up());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: f32 = 1000.0;

    fn drag_to(controller: &mut CameraController, nx: f32, ny: f32) -> bool {
        // nx/ny in [-1, 1] normalized viewport coordinates
        controller.on_pointer_move((nx + 1.0) / 2.0 * VP, (-ny + 1.0) / 2.0 * VP, VP, VP)
    }

    #[test]
    fn origin_default_pose_sits_on_positive_y() {
        let controller = CameraController::new(CameraMode::origin());
        // radius 10, polar 90, azimuth 90 => (0, 10, 0), looking at the origin
        assert!(glm::distance(&controller.eye(), &glm::vec3(0.0, 10.0, 0.0)) < 1e-3);
        assert!(glm::length(&controller.target()) < 1e-6);
    }

    #[test]
    fn free_default_pose_looks_back_across_origin() {
        let controller = CameraController::new(CameraMode::free());
        // free position (0, 10, 0); azimuth 270 offsets the target to (0, 0, 0)
        assert!(glm::distance(&controller.eye(), &glm::vec3(0.0, 10.0, 0.0)) < 1e-3);
        assert!(glm::length(&controller.target()) < 1e-3);
    }

    #[test]
    fn first_move_sample_becomes_anchor_without_rotation() {
        let mut controller = CameraController::new(CameraMode::origin());
        controller.on_pointer_down();
        assert!(!drag_to(&mut controller, 0.1, 0.1));
        assert_eq!(controller.pose().delta_azimuth, 0.0);
        assert_eq!(controller.pose().delta_polar, 0.0);
    }

    #[test]
    fn move_without_pointer_down_is_ignored() {
        let mut controller = CameraController::new(CameraMode::origin());
        assert!(!drag_to(&mut controller, 0.5, 0.5));
        assert!(controller.drag.anchor.is_none());
    }

    #[test]
    fn drag_deltas_grow_with_distance_from_anchor() {
        let mut controller = CameraController::new(CameraMode::origin());
        controller.on_pointer_down();
        drag_to(&mut controller, 0.0, 0.0);

        assert!(drag_to(&mut controller, 0.1, 0.1));
        let first = (
            controller.pose().delta_azimuth.abs(),
            controller.pose().delta_polar.abs(),
        );
        assert!(drag_to(&mut controller, 0.2, 0.2));
        let second = (
            controller.pose().delta_azimuth.abs(),
            controller.pose().delta_polar.abs(),
        );
        assert!(second.0 > first.0);
        assert!(second.1 > first.1);
    }

    #[test]
    fn origin_drag_scale_is_double_free_scale() {
        let mut origin = CameraController::new(CameraMode::origin());
        origin.on_pointer_down();
        drag_to(&mut origin, 0.0, 0.0);
        drag_to(&mut origin, 0.5, 0.0);

        let mut free = CameraController::new(CameraMode::free());
        free.on_pointer_down();
        drag_to(&mut free, 0.0, 0.0);
        drag_to(&mut free, 0.5, 0.0);

        assert!((origin.pose().delta_azimuth - 90.0).abs() < 1e-3);
        assert!((free.pose().delta_azimuth - 45.0).abs() < 1e-3);
    }

    #[test]
    fn pointer_up_folds_deltas_and_resets_them_to_zero() {
        let mut controller = CameraController::new(CameraMode::origin());
        let azimuth0 = controller.pose().azimuth;
        let polar0 = controller.pose().polar;

        controller.on_pointer_down();
        drag_to(&mut controller, 0.0, 0.0);
        drag_to(&mut controller, 0.25, -0.25);
        let da = controller.pose().delta_azimuth;
        let dp = controller.pose().delta_polar;
        assert!(da != 0.0 && dp != 0.0);

        controller.on_pointer_up();
        assert_eq!(controller.pose().delta_azimuth, 0.0);
        assert_eq!(controller.pose().delta_polar, 0.0);
        assert!((controller.pose().azimuth - (azimuth0 + da)).abs() < 1e-4);
        assert!((controller.pose().polar - (polar0 + dp)).abs() < 1e-4);
        assert!(controller.drag.anchor.is_none());
        assert!(!controller.drag.active);
    }

    #[test]
    fn wheel_zooms_in_origin_mode_only() {
        let mut origin = CameraController::new(CameraMode::origin());
        origin.on_wheel(-100.0);
        assert!((origin.pose().radius - 11.0).abs() < 1e-4);

        let mut free = CameraController::new(CameraMode::free());
        free.on_wheel(-100.0);
        assert_eq!(free.pose().radius, 10.0);
    }

    #[test]
    fn wheel_zoom_clamps_radius_above_zero() {
        let mut controller = CameraController::new(CameraMode::origin());
        controller.on_wheel(1_000_000.0);
        assert!(controller.pose().radius >= MIN_RADIUS);
    }

    #[test]
    fn last_key_down_wins() {
        let mut controller = CameraController::new(CameraMode::free());
        controller.on_key_down(FlyKey::W);
        controller.on_key_down(FlyKey::D);
        assert_eq!(controller.keys.pressed, Some(FlyKey::D));
    }

    #[test]
    fn any_key_up_clears_the_held_key() {
        // Releasing a different key than the held one still clears the slot.
        let mut controller = CameraController::new(CameraMode::free());
        controller.on_key_down(FlyKey::W);
        controller.on_key_up();
        assert_eq!(controller.keys.pressed, None);
        assert_eq!(controller.keys.last_sec, None);
    }

    #[test]
    fn first_frame_after_key_down_moves_nothing() {
        let mut controller = CameraController::new(CameraMode::free());
        let eye0 = controller.eye();
        controller.on_key_down(FlyKey::R);
        controller.update(5.0);
        assert!(glm::distance(&controller.eye(), &eye0) < 1e-6);
    }

    #[test]
    fn held_key_integrates_elapsed_time_along_forward() {
        let mut controller = CameraController::new(CameraMode::free());
        let eye0 = controller.eye();
        let forward = geometry::forward(controller.world());

        controller.on_key_down(FlyKey::R);
        controller.update(1.0);
        controller.update(1.5);
        let moved = controller.eye() - eye0;
        assert!(glm::distance(&moved, &(forward * 0.5)) < 1e-4);
    }

    #[test]
    fn fly_keys_do_nothing_in_origin_mode() {
        let mut controller = CameraController::new(CameraMode::origin());
        let eye0 = controller.eye();
        controller.on_key_down(FlyKey::W);
        controller.update(1.0);
        controller.update(2.0);
        assert!(glm::distance(&controller.eye(), &eye0) < 1e-6);
    }

    #[test]
    fn key_state_change_resets_the_time_base() {
        let mut controller = CameraController::new(CameraMode::free());
        controller.on_key_down(FlyKey::R);
        controller.update(1.0);
        controller.update(2.0);
        let eye_after_first = controller.eye();

        // Re-pressing resets the accumulator: the next frame is free.
        controller.on_key_up();
        controller.on_key_down(FlyKey::R);
        controller.update(10.0);
        assert!(glm::distance(&controller.eye(), &eye_after_first) < 1e-6);
    }

    #[test]
    fn reset_switches_mode_and_restores_defaults() {
        let mut controller = CameraController::new(CameraMode::origin());
        controller.on_wheel(-500.0);
        controller.reset(CameraMode::free());
        assert!(controller.mode().is_free());
        assert_eq!(controller.pose().radius, 10.0);
        assert_eq!(controller.pose().azimuth, 270.0);
        assert_eq!(controller.pose().polar, 90.0);
    }

    #[test]
    fn drag_updates_pose_mid_gesture() {
        let mut controller = CameraController::new(CameraMode::origin());
        let eye0 = controller.eye();
        controller.on_pointer_down();
        drag_to(&mut controller, 0.0, 0.0);
        drag_to(&mut controller, 0.3, 0.0);
        // set_pose ran inside the move handler, not waiting for update()
        assert!(glm::distance(&controller.eye(), &eye0) > 0.1);
        // orbit invariant: still looking at the origin at the same radius
        assert!(glm::length(&controller.target()) < 1e-6);
        assert!((glm::length(&controller.eye()) - 10.0).abs() < 1e-3);
    }
}
