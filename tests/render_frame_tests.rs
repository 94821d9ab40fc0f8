use approx::assert_abs_diff_eq;
use glam::DVec3;
use kyros_portal::PortalError;
use kyros_portal::core::Viewport;
use kyros_portal::render::{
    CameraPose, Color, DrawKind, Geometry, Light, LightKind, Material, NullRenderer, RenderFrame,
    Renderer, SceneNode, Transform,
};

fn camera() -> CameraPose {
    CameraPose {
        position: DVec3::new(0.0, 0.0, 5.0),
        look_at: DVec3::ZERO,
        fov_degrees: 50.0,
    }
}

fn cube(name: &'static str) -> SceneNode {
    SceneNode::mesh(
        name,
        Geometry::Cuboid {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        },
        Material::standard(Color::rgb(0.5, 0.5, 0.5)),
    )
}

#[test]
fn draw_calls_compose_transforms_and_opacity() {
    let frame = RenderFrame::new(Viewport::new(800, 600), Color::rgb(0.0, 0.0, 0.0), camera())
        .with_node(
            SceneNode::group("parent")
                .at(DVec3::new(1.0, 0.0, 0.0))
                .with_opacity(0.5)
                .with_child(cube("child").at(DVec3::new(0.0, 2.0, 0.0)).with_opacity(0.5)),
        );
    let calls = frame.draw_calls();
    assert_eq!(calls.len(), 1);
    let call = calls[0];
    assert_eq!(call.name, "child");
    assert_abs_diff_eq!(call.opacity, 0.25, epsilon = 1e-12);
    let origin = call.world.transform_point3(DVec3::ZERO);
    assert_abs_diff_eq!(origin.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(origin.y, 2.0, epsilon = 1e-12);
}

#[test]
fn hidden_groups_prune_their_subtree() {
    let frame = RenderFrame::new(Viewport::new(800, 600), Color::rgb(0.0, 0.0, 0.0), camera())
        .with_node(cube("visible"))
        .with_node(
            SceneNode::group("hidden")
                .with_visibility(false)
                .with_child(cube("inside")),
        )
        .with_node(SceneNode::light(
            "sun",
            Light::new(LightKind::Directional, Color::rgb(1.0, 1.0, 1.0), 1.0),
        ));
    let calls = frame.draw_calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[1].kind, DrawKind::Light(_)));
    assert!(frame.root.find("inside").is_some());
}

#[test]
fn rotation_is_applied_in_local_space() {
    let transform =
        Transform::IDENTITY.with_rotation(DVec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0));
    let rotated = transform.matrix().transform_point3(DVec3::X);
    assert_abs_diff_eq!(rotated.z, -1.0, epsilon = 1e-12);
}

#[test]
fn invalid_frames_are_rejected() {
    let bad_viewport = RenderFrame::new(Viewport::new(0, 600), Color::rgb(0.0, 0.0, 0.0), camera());
    assert!(matches!(
        bad_viewport.validate(),
        Err(PortalError::InvalidViewport {
            width: 0,
            height: 600
        })
    ));

    let bad_opacity = RenderFrame::new(Viewport::new(10, 10), Color::rgb(0.0, 0.0, 0.0), camera())
        .with_node(cube("ghost").with_opacity(1.5));
    assert!(matches!(bad_opacity.validate(), Err(PortalError::InvalidData(_))));

    let degenerate = SceneNode::mesh(
        "flat",
        Geometry::Sphere { radius: 0.0 },
        Material::standard(Color::rgb(1.0, 1.0, 1.0)),
    );
    assert!(degenerate.validate().is_err());
}

#[test]
fn null_renderer_counts_meshes_and_lights() {
    let frame = RenderFrame::new(Viewport::new(320, 240), Color::rgb(0.0, 0.0, 0.0), camera())
        .with_node(cube("a"))
        .with_node(cube("b"))
        .with_node(SceneNode::light(
            "ambient",
            Light::new(LightKind::Ambient, Color::rgb(1.0, 1.0, 1.0), 0.2),
        ));
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_mesh_count, 2);
    assert_eq!(renderer.last_light_count, 1);
}
