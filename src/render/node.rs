use glam::{DMat4, DQuat, DVec3, EulerRot};

use crate::error::{PortalError, PortalResult};

use super::{Geometry, Light, Material};

/// Local transform: translation, XYZ Euler rotation in radians, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: DVec3,
    pub rotation: DVec3,
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation: DVec3::ZERO,
        scale: DVec3::ONE,
    };

    #[must_use]
    pub const fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }

    #[must_use]
    pub const fn with_rotation(mut self, rotation: DVec3) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: DVec3) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_uniform_scale(self, scale: f64) -> Self {
        self.with_scale(DVec3::splat(scale))
    }

    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        let rotation = DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        DMat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    Group,
    Mesh { geometry: Geometry, material: Material },
    Light(Light),
}

/// One node of the per-frame scene tree.
///
/// `opacity` multiplies down the tree, so fading a group fades every
/// descendant mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: &'static str,
    pub transform: Transform,
    pub opacity: f64,
    pub visible: bool,
    pub content: NodeContent,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    #[must_use]
    pub fn group(name: &'static str) -> Self {
        Self::with_content(name, NodeContent::Group)
    }

    #[must_use]
    pub fn mesh(name: &'static str, geometry: Geometry, material: Material) -> Self {
        Self::with_content(name, NodeContent::Mesh { geometry, material })
    }

    #[must_use]
    pub fn light(name: &'static str, light: Light) -> Self {
        Self::with_content(name, NodeContent::Light(light))
    }

    fn with_content(name: &'static str, content: NodeContent) -> Self {
        Self {
            name,
            transform: Transform::IDENTITY,
            opacity: 1.0,
            visible: true,
            content,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn at(self, translation: DVec3) -> Self {
        let transform = self.transform;
        self.with_transform(Transform {
            translation,
            ..transform
        })
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SceneNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Depth-first search for the first node named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Every node named `name`, in depth-first order.
    #[must_use]
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a SceneNode> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a SceneNode>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect_named(name, found);
        }
    }

    pub fn validate(&self) -> PortalResult<()> {
        if !self.transform.is_finite() {
            return Err(PortalError::InvalidData(format!(
                "node `{}` transform must be finite",
                self.name
            )));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(PortalError::InvalidData(format!(
                "node `{}` opacity must be finite and in [0, 1]",
                self.name
            )));
        }
        match &self.content {
            NodeContent::Group => {}
            NodeContent::Mesh { geometry, material } => {
                geometry.validate()?;
                material.validate()?;
            }
            NodeContent::Light(light) => light.validate()?,
        }
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}
