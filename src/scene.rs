//! Scene registry for lights and emissive surfaces.
//!
//! The registry owns every controllable object and hands out opaque handles;
//! controllers hold handles, never references. Objects are created once at
//! startup and mutated in place for the life of the process.

use palette::Srgb;
use serde::Serialize;

use crate::color::to_hex;

/// Opaque handle to a light in a [`SceneRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(usize);

/// Opaque handle to an emissive surface in a [`SceneRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(usize);

/// A light source: color, intensity and a position in scene space.
///
/// The position is carried as plain data for the renderer; nothing here
/// interprets it.
#[derive(Debug, Clone)]
pub struct Light {
    pub name: String,
    pub color: Srgb<f32>,
    /// Normalized intensity in [0, 1]
    pub intensity: f32,
    pub position: [f32; 3],
}

/// A renderable surface whose material self-illuminates.
#[derive(Debug, Clone)]
pub struct Surface {
    pub name: String,
    pub emissive: Srgb<f32>,
    /// Normalized emissive intensity in [0, 1]
    pub emissive_intensity: f32,
}

/// Flat registry owning the controllable objects of one scene.
///
/// Handles are insertion indices. Objects are never removed, so a handle
/// issued by a registry stays valid for that registry's lifetime.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    name: String,
    lights: Vec<Light>,
    surfaces: Vec<Surface>,
}

impl SceneRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lights: Vec::new(),
            surfaces: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_light(&mut self, light: Light) -> LightId {
        self.lights.push(light);
        LightId(self.lights.len() - 1)
    }

    pub fn add_surface(&mut self, surface: Surface) -> SurfaceId {
        self.surfaces.push(surface);
        SurfaceId(self.surfaces.len() - 1)
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0)
    }

    pub fn light_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.get_mut(id.0)
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.0)
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(id.0)
    }

    pub fn lights(&self) -> impl Iterator<Item = (LightId, &Light)> {
        self.lights.iter().enumerate().map(|(i, l)| (LightId(i), l))
    }

    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| (SurfaceId(i), s))
    }

    /// Look up a light handle by name.
    pub fn find_light(&self, name: &str) -> Option<LightId> {
        self.lights.iter().position(|l| l.name == name).map(LightId)
    }

    /// Look up a surface handle by name.
    pub fn find_surface(&self, name: &str) -> Option<SurfaceId> {
        self.surfaces
            .iter()
            .position(|s| s.name == name)
            .map(SurfaceId)
    }

    /// Indented tree of everything in the scene, for `--tree` output.
    pub fn tree(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push_str("\n  lights");
        for light in &self.lights {
            out.push_str("\n    ");
            out.push_str(&light.name);
        }
        out.push_str("\n  surfaces");
        for surface in &self.surfaces {
            out.push_str("\n    ");
            out.push_str(&surface.name);
        }
        out
    }

    /// Serializable snapshot of the current rig state.
    pub fn snapshot(&self) -> RigState {
        RigState {
            name: self.name.clone(),
            lights: self
                .lights
                .iter()
                .map(|l| LightState {
                    name: l.name.clone(),
                    color: to_hex(l.color),
                    intensity: l.intensity,
                    position: l.position,
                })
                .collect(),
            surfaces: self
                .surfaces
                .iter()
                .map(|s| SurfaceState {
                    name: s.name.clone(),
                    emissive: to_hex(s.emissive),
                    emissive_intensity: s.emissive_intensity,
                })
                .collect(),
        }
    }
}

/// Snapshot of a whole rig, for YAML output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RigState {
    pub name: String,
    pub lights: Vec<LightState>,
    pub surfaces: Vec<SurfaceState>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightState {
    pub name: String,
    /// `#rrggbb`
    pub color: String,
    pub intensity: f32,
    pub position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceState {
    pub name: String,
    /// `#rrggbb`
    pub emissive: String,
    pub emissive_intensity: f32,
}
