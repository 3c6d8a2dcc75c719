use crate::renderer::vertex::LineVertex;

const AXIS_LEN: f32 = 8.0;
const GRID_EXTENT: f32 = 8.0;

/// Axes plus a ground grid in the XY plane, sized for unit-scale scenes.
pub fn grid_lines(major_color: [f32; 3], minor_color: [f32; 3]) -> Vec<LineVertex> {
    let mut vertices = Vec::new();

    let mut axis = |from: [f32; 3], to: [f32; 3], color: [f32; 3]| {
        vertices.push(LineVertex {
            position: from,
            color,
        });
        vertices.push(LineVertex {
            position: to,
            color,
        });
    };

    // X red, Y green, Z blue
    axis([-AXIS_LEN, 0.0, 0.0], [AXIS_LEN, 0.0, 0.0], [1.0, 0.0, 0.0]);
    axis([0.0, -AXIS_LEN, 0.0], [0.0, AXIS_LEN, 0.0], [0.0, 1.0, 0.0]);
    axis([0.0, 0.0, -AXIS_LEN], [0.0, 0.0, AXIS_LEN], [0.0, 0.0, 1.0]);

    // Minor grid every 0.5 units
    for i in -16..=16i32 {
        let pos = i as f32 * 0.5;
        axis(
            [pos, -GRID_EXTENT, 0.0],
            [pos, GRID_EXTENT, 0.0],
            minor_color,
        );
        axis(
            [-GRID_EXTENT, pos, 0.0],
            [GRID_EXTENT, pos, 0.0],
            minor_color,
        );
    }

    // Major grid every 2 units
    for i in -4..=4i32 {
        let pos = i as f32 * 2.0;
        axis(
            [pos, -GRID_EXTENT, 0.0],
            [pos, GRID_EXTENT, 0.0],
            major_color,
        );
        axis(
            [-GRID_EXTENT, pos, 0.0],
            [GRID_EXTENT, pos, 0.0],
            major_color,
        );
    }

    vertices
}
