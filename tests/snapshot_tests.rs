//! Snapshot tests for rig state output.
//!
//! Pins the YAML rig state and scene tree for the built-in rig so output
//! format regressions are caught.

use lumenrig::config::RigConfig;
use lumenrig::input::ControlInput;

#[test]
fn snapshot_default_scene_tree() {
    let (scene, _) = RigConfig::default().build().unwrap();

    insta::assert_snapshot!(scene.tree(), @r"
    Coffee House
      lights
        lamp
        spot-rear
        spot-front
      surfaces
        lamp-shade
        windows
    ");
}

#[test]
fn snapshot_default_rig_state_yaml() {
    let (scene, _) = RigConfig::default().build().unwrap();
    let yaml = serde_yaml::to_string(&scene.snapshot()).unwrap();

    insta::assert_snapshot!(yaml, @r"
    name: Coffee House
    lights:
    - name: lamp
      color: '#ffd36c'
      intensity: 0.2
      position:
      - -2.8
      - 5.0
      - 2.6
    - name: spot-rear
      color: '#a0ffff'
      intensity: 1.0
      position:
      - -7.0
      - 7.0
      - -7.0
    - name: spot-front
      color: '#a0ffff'
      intensity: 1.0
      position:
      - 7.0
      - 7.0
      - -7.0
    surfaces:
    - name: lamp-shade
      emissive: '#ffd36c'
      emissive_intensity: 0.2
    - name: windows
      emissive: '#ffffff'
      emissive_intensity: 0.5
    ");
}

#[test]
fn snapshot_rig_state_after_lamp_update() {
    let (mut scene, controls) = RigConfig::default().build().unwrap();
    let lamp = controls.iter().find(|c| c.name == "lamp").unwrap();

    lamp.binding.apply(
        ControlInput::parse("#ff0000", Default::default()).unwrap(),
        &mut scene,
    );
    lamp.binding.apply(
        ControlInput::parse("40", Default::default()).unwrap(),
        &mut scene,
    );

    let state = scene.snapshot();
    assert_eq!(state.lights[0].color, "#ff0000");
    assert_eq!(state.lights[0].intensity, 0.4);
    assert_eq!(state.surfaces[0].emissive, "#ff0000");
    assert_eq!(state.surfaces[0].emissive_intensity, 0.4);
}
