use palette::Srgb;

use lumenrig::scene::{Light, SceneRegistry, Surface};

fn lamp() -> Light {
    Light {
        name: "lamp".to_string(),
        color: Srgb::new(1.0, 0.0, 0.0),
        intensity: 0.2,
        position: [-2.8, 5.0, 2.6],
    }
}

fn shade() -> Surface {
    Surface {
        name: "shade".to_string(),
        emissive: Srgb::new(1.0, 1.0, 1.0),
        emissive_intensity: 0.5,
    }
}

#[test]
fn test_handles_resolve_to_their_objects() {
    let mut scene = SceneRegistry::new("Test");
    let light_id = scene.add_light(lamp());
    let surface_id = scene.add_surface(shade());

    assert_eq!(scene.light(light_id).unwrap().name, "lamp");
    assert_eq!(scene.surface(surface_id).unwrap().name, "shade");
}

#[test]
fn test_find_by_name() {
    let mut scene = SceneRegistry::new("Test");
    let light_id = scene.add_light(lamp());
    let surface_id = scene.add_surface(shade());

    assert_eq!(scene.find_light("lamp"), Some(light_id));
    assert_eq!(scene.find_surface("shade"), Some(surface_id));
    assert_eq!(scene.find_light("missing"), None);
    assert_eq!(scene.find_surface("missing"), None);
}

#[test]
fn test_mutation_through_handle() {
    let mut scene = SceneRegistry::new("Test");
    let id = scene.add_light(lamp());

    scene.light_mut(id).unwrap().intensity = 0.9;
    assert_eq!(scene.light(id).unwrap().intensity, 0.9);
}

#[test]
fn test_iterators_pair_handles_with_objects() {
    let mut scene = SceneRegistry::new("Test");
    scene.add_light(lamp());
    scene.add_surface(shade());

    for (id, light) in scene.lights() {
        assert_eq!(scene.light(id).unwrap().name, light.name);
    }
    for (id, surface) in scene.surfaces() {
        assert_eq!(scene.surface(id).unwrap().name, surface.name);
    }
}

#[test]
fn test_snapshot_formats_colors_as_hex() {
    let mut scene = SceneRegistry::new("Test");
    scene.add_light(lamp());
    scene.add_surface(shade());

    let state = scene.snapshot();
    assert_eq!(state.name, "Test");
    assert_eq!(state.lights[0].color, "#ff0000");
    assert_eq!(state.lights[0].intensity, 0.2);
    assert_eq!(state.lights[0].position, [-2.8, 5.0, 2.6]);
    assert_eq!(state.surfaces[0].emissive, "#ffffff");
    assert_eq!(state.surfaces[0].emissive_intensity, 0.5);
}

#[test]
fn test_tree_lists_sections_and_names() {
    let mut scene = SceneRegistry::new("Test");
    scene.add_light(lamp());
    scene.add_surface(shade());

    let tree = scene.tree();
    assert_eq!(tree, "Test\n  lights\n    lamp\n  surfaces\n    shade");
}
