use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

pub const DEFAULT_POINT_LIST: &str = "[[0,0,0], [0,0,1], [0,1,0], [0,1,1]]";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub show_grid: bool,
    pub far_plane: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            far_plane: 10000.0,
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "display", self);
    }
}

/// Persisted point-list text, seeded on startup and written back on the
/// explicit save action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    pub point_list: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            point_list: DEFAULT_POINT_LIST.to_string(),
        }
    }
}

impl InputSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "input").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "input", self);
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub display: DisplaySettings,
    pub input: InputSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            display: DisplaySettings::load(),
            input: InputSettings::load(),
        }
    }
}
