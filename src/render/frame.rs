use glam::{DMat4, DVec3};

use crate::core::Viewport;
use crate::error::{PortalError, PortalResult};

use super::{Color, Geometry, Light, Material, NodeContent, SceneNode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
    pub fov_degrees: f64,
}

impl CameraPose {
    pub fn validate(self) -> PortalResult<()> {
        if !self.position.is_finite() || !self.look_at.is_finite() {
            return Err(PortalError::InvalidData(
                "camera position and target must be finite".to_owned(),
            ));
        }
        if self.position == self.look_at {
            return Err(PortalError::InvalidData(
                "camera position must differ from its target".to_owned(),
            ));
        }
        if !self.fov_degrees.is_finite() || !(1.0..180.0).contains(&self.fov_degrees) {
            return Err(PortalError::InvalidData(
                "camera field of view must be in [1, 180) degrees".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Linear distance fog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f64,
    pub far: f64,
}

/// One flattened draw command with its world matrix and inherited opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall<'a> {
    pub name: &'static str,
    pub world: DMat4,
    pub opacity: f64,
    pub kind: DrawKind<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawKind<'a> {
    Mesh {
        geometry: &'a Geometry,
        material: &'a Material,
    },
    Light(&'a Light),
}

/// Backend-agnostic scene for one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub fog: Option<Fog>,
    pub camera: CameraPose,
    pub root: SceneNode,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color, camera: CameraPose) -> Self {
        Self {
            viewport,
            background,
            fog: None,
            camera,
            root: SceneNode::group("root"),
        }
    }

    #[must_use]
    pub fn with_fog(mut self, fog: Fog) -> Self {
        self.fog = Some(fog);
        self
    }

    #[must_use]
    pub fn with_node(mut self, node: SceneNode) -> Self {
        self.root.push_child(node);
        self
    }

    pub fn validate(&self) -> PortalResult<()> {
        if !self.viewport.is_valid() {
            return Err(PortalError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;
        self.camera.validate()?;
        if let Some(fog) = self.fog {
            fog.color.validate()?;
            if !fog.near.is_finite() || !fog.far.is_finite() || fog.near < 0.0 || fog.far <= fog.near
            {
                return Err(PortalError::InvalidData(
                    "fog range must be finite with 0 <= near < far".to_owned(),
                ));
            }
        }
        self.root.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Flattens the visible tree into draw calls in depth-first order.
    ///
    /// Hidden nodes prune their whole subtree.
    #[must_use]
    pub fn draw_calls(&self) -> Vec<DrawCall<'_>> {
        let mut calls = Vec::new();
        collect_draw_calls(&self.root, DMat4::IDENTITY, 1.0, &mut calls);
        calls
    }
}

fn collect_draw_calls<'a>(
    node: &'a SceneNode,
    parent_world: DMat4,
    parent_opacity: f64,
    calls: &mut Vec<DrawCall<'a>>,
) {
    if !node.visible {
        return;
    }
    let world = parent_world * node.transform.matrix();
    let opacity = parent_opacity * node.opacity;
    let kind = match &node.content {
        NodeContent::Group => None,
        NodeContent::Mesh { geometry, material } => Some(DrawKind::Mesh { geometry, material }),
        NodeContent::Light(light) => Some(DrawKind::Light(light)),
    };
    if let Some(kind) = kind {
        calls.push(DrawCall {
            name: node.name,
            world,
            opacity,
            kind,
        });
    }
    for child in &node.children {
        collect_draw_calls(child, world, opacity, calls);
    }
}
