//! TOML rig configuration.
//!
//! A rig file declares the lights and emissive surfaces of a scene plus the
//! named controls that drive them. Without a file, the built-in coffee-house
//! rig is used.

use std::path::Path;

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::color::parse_css_color;
use crate::controller::{ControlBinding, NamedControl};
use crate::scene::{Light, SceneRegistry, Surface};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Figment layering error
    Layering(figment::Error),
    /// Invalid color format
    InvalidColor(String),
    /// A control references a light or surface that does not exist
    UnknownTarget { control: String, target: String },
    /// Two lights or two surfaces share a name
    DuplicateName(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Layering(e) => write!(f, "config layering error: {}", e),
            Self::InvalidColor(s) => write!(f, "Invalid color: {}", s),
            Self::UnknownTarget { control, target } => write!(
                f,
                "control '{}' references unknown target '{}'",
                control, target
            ),
            Self::DuplicateName(name) => write!(f, "duplicate object name '{}'", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Layering(e)
    }
}

/// Root configuration structure for TOML rig files.
///
/// Missing sections fall back to the built-in coffee-house rig.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Rig metadata
    pub rig: RigMetadata,
    /// Light definitions
    pub lights: Vec<LightConfig>,
    /// Emissive surface definitions
    pub surfaces: Vec<SurfaceConfig>,
    /// Named controls binding inputs to target groups
    pub controls: Vec<ControlConfig>,
}

/// Rig metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RigMetadata {
    /// Name of the rig/scene
    pub name: String,
}

/// One light in the rig.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub name: String,
    /// Any CSS color format
    pub color: String,
    /// Intensity percentage (0-100)
    pub intensity: f32,
    /// Position in scene space, passed through to the renderer
    pub position: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: "#ffffff".to_string(),
            intensity: 100.0,
            position: [0.0; 3],
        }
    }
}

/// One emissive surface in the rig.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub name: String,
    /// Any CSS color format
    pub emissive: String,
    /// Emissive intensity percentage (0-100)
    pub intensity: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            emissive: "#ffffff".to_string(),
            intensity: 100.0,
        }
    }
}

/// One named control and the targets it drives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub name: String,
    /// Names of lights in this group
    pub lights: Vec<String>,
    /// Names of surfaces in this group
    pub surfaces: Vec<String>,
}

impl Default for RigConfig {
    /// The coffee-house rig: a warm lamp, two cool environment spots, and
    /// two emissive surfaces. The lamp control drives both the lamp light
    /// and the lamp-shade material.
    fn default() -> Self {
        Self {
            rig: RigMetadata {
                name: "Coffee House".to_string(),
            },
            lights: vec![
                LightConfig {
                    name: "lamp".to_string(),
                    color: "#FFD36C".to_string(),
                    intensity: 20.0,
                    position: [-2.8, 5.0, 2.6],
                },
                LightConfig {
                    name: "spot-rear".to_string(),
                    color: "#A0FFFF".to_string(),
                    intensity: 100.0,
                    position: [-7.0, 7.0, -7.0],
                },
                LightConfig {
                    name: "spot-front".to_string(),
                    color: "#A0FFFF".to_string(),
                    intensity: 100.0,
                    position: [7.0, 7.0, -7.0],
                },
            ],
            surfaces: vec![
                SurfaceConfig {
                    name: "lamp-shade".to_string(),
                    emissive: "#FFD36C".to_string(),
                    intensity: 20.0,
                },
                SurfaceConfig {
                    name: "windows".to_string(),
                    emissive: "#FFFFFF".to_string(),
                    intensity: 50.0,
                },
            ],
            controls: vec![
                ControlConfig {
                    name: "lamp".to_string(),
                    lights: vec!["lamp".to_string()],
                    surfaces: vec!["lamp-shade".to_string()],
                },
                ControlConfig {
                    name: "env".to_string(),
                    lights: vec!["spot-rear".to_string(), "spot-front".to_string()],
                    surfaces: vec![],
                },
                ControlConfig {
                    name: "windows".to_string(),
                    lights: vec![],
                    surfaces: vec!["windows".to_string()],
                },
            ],
        }
    }
}

impl RigConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Layer an optional rig file and CLI overrides over the defaults.
    ///
    /// Precedence, lowest to highest: built-in rig, TOML file, overrides.
    /// A rig file that was given but does not exist is an error, never a
    /// silent fall-through to the built-in rig.
    pub fn layered(file: Option<&Path>, overrides: impl Serialize) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file_exact(path));
        }
        let config = figment.merge(Serialized::defaults(overrides)).extract()?;
        Ok(config)
    }

    /// Build the scene registry and named controls this config describes.
    ///
    /// Colors are parsed, intensity percentages normalized to [0, 1], and
    /// control target names resolved to handles. Bad names fail here, at
    /// build time, so applying a control later cannot hit a missing target.
    pub fn build(&self) -> Result<(SceneRegistry, Vec<NamedControl>), ConfigError> {
        let mut scene = SceneRegistry::new(self.rig.name.clone());

        for light in &self.lights {
            if scene.find_light(&light.name).is_some() {
                return Err(ConfigError::DuplicateName(light.name.clone()));
            }
            let color = parse_css_color(&light.color).map_err(ConfigError::InvalidColor)?;
            scene.add_light(Light {
                name: light.name.clone(),
                color,
                intensity: light.intensity.clamp(0.0, 100.0) / 100.0,
                position: light.position,
            });
        }

        for surface in &self.surfaces {
            if scene.find_surface(&surface.name).is_some() {
                return Err(ConfigError::DuplicateName(surface.name.clone()));
            }
            let emissive = parse_css_color(&surface.emissive).map_err(ConfigError::InvalidColor)?;
            scene.add_surface(Surface {
                name: surface.name.clone(),
                emissive,
                emissive_intensity: surface.intensity.clamp(0.0, 100.0) / 100.0,
            });
        }

        let mut controls = Vec::with_capacity(self.controls.len());
        for control in &self.controls {
            let mut light_ids = Vec::with_capacity(control.lights.len());
            for name in &control.lights {
                let id = scene
                    .find_light(name)
                    .ok_or_else(|| ConfigError::UnknownTarget {
                        control: control.name.clone(),
                        target: name.clone(),
                    })?;
                light_ids.push(id);
            }

            let mut surface_ids = Vec::with_capacity(control.surfaces.len());
            for name in &control.surfaces {
                let id = scene
                    .find_surface(name)
                    .ok_or_else(|| ConfigError::UnknownTarget {
                        control: control.name.clone(),
                        target: name.clone(),
                    })?;
                surface_ids.push(id);
            }

            controls.push(NamedControl {
                name: control.name.clone(),
                binding: ControlBinding::new(light_ids, surface_ids),
            });
        }

        Ok((scene, controls))
    }
}
