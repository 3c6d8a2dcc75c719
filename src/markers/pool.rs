use nalgebra_glm as glm;

use crate::markers::point::{parse_points, PointParseError};
use crate::scene::{ObjectId, Scene, SceneObject};

/// Marker size used when the nearest-neighbor heuristic is undefined
/// (fewer than two points).
pub const DEFAULT_MARKER_SIZE: f32 = 0.5;

/// One marker: a box and a direction arrow, bound to one point slot.
#[derive(Debug)]
pub struct Marker {
    pub box_id: ObjectId,
    pub arrow_id: ObjectId,
    pub position: glm::Vec3,
}

/// Pool of markers reconciled against the parsed point list. Existing
/// markers are reused slot-for-slot; only the excess is created or disposed.
#[derive(Debug)]
pub struct MarkerPool {
    markers: Vec<Marker>,
    marker_size: f32,
}

impl Default for MarkerPool {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerPool {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn marker_size(&self) -> f32 {
        self.marker_size
    }

    /// Parse `text` and reconcile the pool against it. On a parse error the
    /// pool and scene are left completely untouched.
    pub fn apply_text(&mut self, scene: &mut Scene, text: &str) -> Result<(), PointParseError> {
        let points = parse_points(text)?;
        self.reconcile(scene, &points);
        Ok(())
    }

    /// Reconcile the pool against a validated point list.
    pub fn reconcile(&mut self, scene: &mut Scene, points: &[glm::Vec3]) {
        // The size heuristic only runs when growing from empty; it stays
        // fixed until the pool is reset to empty again.
        if self.markers.is_empty() {
            self.marker_size = heuristic_size(points);
        }

        // Shrink from the highest index down.
        while self.markers.len() > points.len() {
            let Some(marker) = self.markers.pop() else {
                break;
            };
            scene.remove(marker.box_id);
            scene.remove(marker.arrow_id);
        }

        // Grow lazily, then overwrite every position whether the marker was
        // just created or reused.
        for (i, point) in points.iter().enumerate() {
            if i >= self.markers.len() {
                let box_id = scene.add(box_object(*point, self.marker_size));
                let arrow_id = scene.add(arrow_object(*point, self.marker_size));
                self.markers.push(Marker {
                    box_id,
                    arrow_id,
                    position: *point,
                });
            } else {
                let marker = &mut self.markers[i];
                marker.position = *point;
                scene.update(marker.box_id, box_object(*point, self.marker_size));
                scene.update(marker.arrow_id, arrow_object(*point, self.marker_size));
            }
        }
    }

    /// Dispose every marker and empty the pool.
    pub fn reset(&mut self, scene: &mut Scene) {
        for marker in self.markers.drain(..) {
            scene.remove(marker.box_id);
            scene.remove(marker.arrow_id);
        }
        self.marker_size = DEFAULT_MARKER_SIZE;
    }
}

/// Average nearest-neighbor distance over all points, divided by 3.
/// Undefined for fewer than two points; falls back to the default size.
fn heuristic_size(points: &[glm::Vec3]) -> f32 {
    if points.len() < 2 {
        return DEFAULT_MARKER_SIZE;
    }
    let total: f32 = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            points
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, q)| glm::distance(p, q))
                .fold(f32::INFINITY, f32::min)
        })
        .sum();
    total / points.len() as f32 / 3.0
}

fn box_object(position: glm::Vec3, size: f32) -> SceneObject {
    SceneObject::Box {
        center: position,
        half_extent: size / 2.0,
    }
}

/// Markers stand in for camera poses, so the arrow looks at the world
/// origin. A marker sitting exactly on the origin falls back to +X.
fn arrow_object(position: glm::Vec3, size: f32) -> SceneObject {
    let dir = if glm::length(&position) > 1e-6 {
        -glm::normalize(&position)
    } else {
        glm::vec3(1.0, 0.0, 0.0)
    };
    SceneObject::Arrow {
        origin: position,
        dir,
        length: size * 2.0,
    }
}
