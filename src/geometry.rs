use nalgebra_glm as glm;

/// World up direction. The scene is Z-up, matching the grid plane.
pub fn world_up() -> glm::Vec3 {
    glm::vec3(0.0, 0.0, 1.0)
}

/// Right basis vector (column 0) of a camera world transform.
pub fn right(m: &glm::Mat4) -> glm::Vec3 {
    glm::vec3(m[(0, 0)], m[(1, 0)], m[(2, 0)])
}

/// Up basis vector (column 1) of a camera world transform.
pub fn up(m: &glm::Mat4) -> glm::Vec3 {
    glm::vec3(m[(0, 1)], m[(1, 1)], m[(2, 1)])
}

/// Forward basis vector (column 2) of a camera world transform.
pub fn forward(m: &glm::Mat4) -> glm::Vec3 {
    glm::vec3(m[(0, 2)], m[(1, 2)], m[(2, 2)])
}

/// Translation (column 3) of a camera world transform.
pub fn position(m: &glm::Mat4) -> glm::Vec3 {
    glm::vec3(m[(0, 3)], m[(1, 3)], m[(2, 3)])
}

/// Build a camera world transform from a position and a look-at target.
///
/// Columns are (right, up, forward, position) with
/// `forward = normalize(look_at - pos)` and `right = normalize(forward x up)`.
/// Caller contract: `up` must not be parallel to the look direction.
pub fn compose_look_at(pos: &glm::Vec3, look_at: &glm::Vec3, up: &glm::Vec3) -> glm::Mat4 {
    let forward = glm::normalize(&(look_at - pos));
    let up = glm::normalize(up);
    let right = glm::normalize(&glm::cross(&forward, &up));
    glm::mat4(
        right.x, up.x, forward.x, pos.x, //
        right.y, up.y, forward.y, pos.y, //
        right.z, up.z, forward.z, pos.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Spherical to Cartesian, physics convention, angles in degrees.
/// `polar` is measured from the +Z axis, `azimuth` from +X toward +Y.
pub fn spherical_to_cartesian(radius: f32, polar_deg: f32, azimuth_deg: f32) -> glm::Vec3 {
    let polar = polar_deg.to_radians();
    let azimuth = azimuth_deg.to_radians();
    glm::vec3(
        radius * polar.sin() * azimuth.cos(),
        radius * polar.sin() * azimuth.sin(),
        radius * polar.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_eq(a: glm::Vec3, b: glm::Vec3) {
        assert!(
            glm::distance(&a, &b) < 1e-4,
            "expected {:?}, got {:?}",
            b,
            a
        );
    }

    #[test]
    fn spherical_poles_and_equator() {
        assert_vec3_eq(spherical_to_cartesian(2.0, 0.0, 0.0), glm::vec3(0.0, 0.0, 2.0));
        assert_vec3_eq(spherical_to_cartesian(2.0, 90.0, 0.0), glm::vec3(2.0, 0.0, 0.0));
        assert_vec3_eq(spherical_to_cartesian(2.0, 90.0, 90.0), glm::vec3(0.0, 2.0, 0.0));
        assert_vec3_eq(
            spherical_to_cartesian(2.0, 180.0, 45.0),
            glm::vec3(0.0, 0.0, -2.0),
        );
    }

    #[test]
    fn spherical_round_trip() {
        for &radius in &[0.5f32, 1.0, 10.0, 123.4] {
            for polar in (10..180).step_by(17) {
                for azimuth in (0..360).step_by(23) {
                    let p = spherical_to_cartesian(radius, polar as f32, azimuth as f32);
                    let r = glm::length(&p);
                    let rec_polar = (p.z / r).acos().to_degrees();
                    let rec_azimuth = p.y.atan2(p.x).to_degrees().rem_euclid(360.0);
                    assert!((r - radius).abs() < 1e-3);
                    assert!((rec_polar - polar as f32).abs() < 1e-2);
                    assert!((rec_azimuth - azimuth as f32).abs() < 1e-2);
                }
            }
        }
    }

    #[test]
    fn compose_look_at_basis_round_trip() {
        let pos = glm::vec3(1.0, -2.0, 3.0);
        let target = glm::vec3(4.0, 0.0, 1.0);
        let m = compose_look_at(&pos, &target, &world_up());

        assert_vec3_eq(position(&m), pos);
        assert_vec3_eq(forward(&m), glm::normalize(&(target - pos)));
        assert_vec3_eq(right(&m), glm::normalize(&glm::cross(&forward(&m), &world_up())));
        assert_vec3_eq(up(&m), world_up());
    }

    #[test]
    fn compose_look_at_right_is_perpendicular_to_forward() {
        let m = compose_look_at(
            &glm::vec3(0.0, 10.0, 0.0),
            &glm::vec3(0.0, 0.0, 0.0),
            &world_up(),
        );
        assert!(glm::dot(&right(&m), &forward(&m)).abs() < 1e-5);
        assert!((glm::length(&right(&m)) - 1.0).abs() < 1e-5);
        assert!((glm::length(&forward(&m)) - 1.0).abs() < 1e-5);
    }
}
