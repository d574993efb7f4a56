//! Input-driven controllers that fan one control value out to scene objects.
//!
//! A controller is constructed over a group of handles and applied with a
//! [`ControlInput`]; every target in the group receives the same update.
//! Applying is stateless and idempotent for the same input.

use float_cmp::approx_eq;
use tracing::{debug, warn};

use crate::input::ControlInput;
use crate::scene::{LightId, SceneRegistry, SurfaceId};

/// Drives `color`/`intensity` on a group of lights.
#[derive(Debug, Clone, Default)]
pub struct LightController {
    targets: Vec<LightId>,
}

impl LightController {
    pub fn new(targets: Vec<LightId>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[LightId] {
        &self.targets
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Apply one control input to every light in the group.
    pub fn apply(&self, input: ControlInput, scene: &mut SceneRegistry) {
        for &id in &self.targets {
            let Some(light) = scene.light_mut(id) else {
                warn!(?id, "light handle missing from registry");
                continue;
            };
            match input {
                ControlInput::Color(color) => light.color = color,
                ControlInput::Intensity(value) => {
                    if approx_eq!(f32, light.intensity, value, ulps = 2) {
                        continue;
                    }
                    light.intensity = value;
                }
            }
        }
        debug!(targets = self.targets.len(), ?input, "applied light input");
    }
}

/// Drives `emissive`/`emissive_intensity` on a group of surfaces.
///
/// Structurally identical to [`LightController`], just against material
/// fields.
#[derive(Debug, Clone, Default)]
pub struct EmissionController {
    targets: Vec<SurfaceId>,
}

impl EmissionController {
    pub fn new(targets: Vec<SurfaceId>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[SurfaceId] {
        &self.targets
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Apply one control input to every surface in the group.
    pub fn apply(&self, input: ControlInput, scene: &mut SceneRegistry) {
        for &id in &self.targets {
            let Some(surface) = scene.surface_mut(id) else {
                warn!(?id, "surface handle missing from registry");
                continue;
            };
            match input {
                ControlInput::Color(color) => surface.emissive = color,
                ControlInput::Intensity(value) => {
                    if approx_eq!(f32, surface.emissive_intensity, value, ulps = 2) {
                        continue;
                    }
                    surface.emissive_intensity = value;
                }
            }
        }
        debug!(targets = self.targets.len(), ?input, "applied emission input");
    }
}

/// A light group and an emissive group driven by the same input.
///
/// A single rig control can point at both, e.g. a lamp control that updates
/// the lamp light and the lamp-shade material together.
#[derive(Debug, Clone, Default)]
pub struct ControlBinding {
    pub lights: LightController,
    pub surfaces: EmissionController,
}

impl ControlBinding {
    pub fn new(lights: Vec<LightId>, surfaces: Vec<SurfaceId>) -> Self {
        Self {
            lights: LightController::new(lights),
            surfaces: EmissionController::new(surfaces),
        }
    }

    pub fn apply(&self, input: ControlInput, scene: &mut SceneRegistry) {
        self.lights.apply(input, scene);
        self.surfaces.apply(input, scene);
    }
}

/// A named control as declared in a rig config.
#[derive(Debug, Clone)]
pub struct NamedControl {
    pub name: String,
    pub binding: ControlBinding,
}
