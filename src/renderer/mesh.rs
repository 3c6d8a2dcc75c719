use nalgebra_glm as glm;

use crate::renderer::vertex::{LineVertex, Vertex};
use crate::scene::{Scene, SceneObject};

const BOX_COLOR: [f32; 3] = [0.56, 0.20, 1.0];
const ARROW_COLOR: [f32; 3] = [1.0, 0.85, 0.2];

/// Triangulated box geometry plus arrow line segments for the whole scene.
pub struct SceneGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub lines: Vec<LineVertex>,
}

pub fn build_scene_geometry(scene: &Scene) -> SceneGeometry {
    let mut geometry = SceneGeometry {
        vertices: Vec::new(),
        indices: Vec::new(),
        lines: Vec::new(),
    };
    for object in scene.objects() {
        match object {
            SceneObject::Box {
                center,
                half_extent,
            } => push_box(&mut geometry, *center, *half_extent),
            SceneObject::Arrow {
                origin,
                dir,
                length,
            } => push_arrow(&mut geometry.lines, *origin, *dir, *length),
        }
    }
    geometry
}

/// Axis-aligned box with per-face normals, 4 vertices and 2 triangles per face.
fn push_box(geometry: &mut SceneGeometry, center: glm::Vec3, half: f32) {
    for axis in 0..3usize {
        for sign in [1.0f32, -1.0] {
            let u = (axis + 1) % 3;
            let v = (axis + 2) % 3;

            let mut normal = [0.0f32; 3];
            normal[axis] = sign;

            let base = geometry.vertices.len() as u32;
            for (su, sv) in [(-1.0f32, -1.0f32), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let mut corner = [0.0f32; 3];
                corner[axis] = sign * half;
                corner[u] = su * half;
                corner[v] = sv * half;
                geometry.vertices.push(Vertex {
                    position: [
                        center.x + corner[0],
                        center.y + corner[1],
                        center.z + corner[2],
                    ],
                    normal,
                    color: BOX_COLOR,
                });
            }
            for tri in [[0, 1, 2], [0, 2, 3]] {
                for i in tri {
                    geometry.indices.push(base + i);
                }
            }
        }
    }
}

/// Shaft plus two head strokes, as three line segments.
fn push_arrow(lines: &mut Vec<LineVertex>, origin: glm::Vec3, dir: glm::Vec3, length: f32) {
    let tip = origin + dir * length;

    let reference = if dir.z.abs() < 0.9 {
        glm::vec3(0.0, 0.0, 1.0)
    } else {
        glm::vec3(1.0, 0.0, 0.0)
    };
    let side = glm::normalize(&glm::cross(&dir, &reference)) * (length * 0.15);
    let back = tip - dir * (length * 0.25);

    let mut segment = |from: glm::Vec3, to: glm::Vec3| {
        lines.push(LineVertex {
            position: [from.x, from.y, from.z],
            color: ARROW_COLOR,
        });
        lines.push(LineVertex {
            position: [to.x, to.y, to.z],
            color: ARROW_COLOR,
        });
    };

    segment(origin, tip);
    segment(tip, back + side);
    segment(tip, back - side);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_produces_24_vertices_and_36_indices() {
        let mut scene = Scene::new();
        let _ = scene.add(SceneObject::Box {
            center: glm::vec3(1.0, 2.0, 3.0),
            half_extent: 0.5,
        });
        let geometry = build_scene_geometry(&scene);
        assert_eq!(geometry.vertices.len(), 24);
        assert_eq!(geometry.indices.len(), 36);
        assert!(geometry.lines.is_empty());

        // All corners sit half an extent away from the center on each axis.
        for vertex in &geometry.vertices {
            assert!((vertex.position[0] - 1.0).abs() <= 0.5 + 1e-6);
            assert!((vertex.position[1] - 2.0).abs() <= 0.5 + 1e-6);
            assert!((vertex.position[2] - 3.0).abs() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn arrow_produces_three_segments_from_origin_to_tip() {
        let mut scene = Scene::new();
        let _ = scene.add(SceneObject::Arrow {
            origin: glm::vec3(0.0, 0.0, 0.0),
            dir: glm::vec3(1.0, 0.0, 0.0),
            length: 2.0,
        });
        let geometry = build_scene_geometry(&scene);
        assert_eq!(geometry.lines.len(), 6);
        assert_eq!(geometry.lines[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(geometry.lines[1].position, [2.0, 0.0, 0.0]);
    }
}
