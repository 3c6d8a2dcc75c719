use nalgebra_glm as glm;
use serde_json::Value;
use thiserror::Error;

/// Why a point-list edit was rejected. The whole list is rejected on the
/// first failure; the caller keeps its previous valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointParseError {
    #[error("not valid JSON: {0}")]
    Json(String),
    #[error("top-level value is not an array")]
    NotAnArray,
    #[error("point {index} is not an array")]
    ElementNotAnArray { index: usize },
    #[error("point {index} has {len} components, expected 3")]
    WrongArity { index: usize, len: usize },
    #[error("point {index}, component {component} is not a finite number")]
    NotANumber { index: usize, component: usize },
}

/// Parse a JSON array of 3-element number arrays, e.g. `[[0,0,0],[0,1,0]]`.
/// Order is preserved: point `i` maps to marker slot `i`.
pub fn parse_points(text: &str) -> Result<Vec<glm::Vec3>, PointParseError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| PointParseError::Json(e.to_string()))?;
    let Value::Array(elements) = value else {
        return Err(PointParseError::NotAnArray);
    };

    let mut points = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let Value::Array(coords) = element else {
            return Err(PointParseError::ElementNotAnArray { index });
        };
        if coords.len() != 3 {
            return Err(PointParseError::WrongArity {
                index,
                len: coords.len(),
            });
        }
        let mut point = [0.0f32; 3];
        for (component, coord) in coords.iter().enumerate() {
            let number = coord
                .as_f64()
                .filter(|n| n.is_finite())
                .ok_or(PointParseError::NotANumber { index, component })?;
            point[component] = number as f32;
        }
        points.push(glm::vec3(point[0], point[1], point[2]));
    }
    Ok(points)
}
