use glam::DVec3;

use crate::error::{PortalError, PortalResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub fn validate(self) -> PortalResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PortalError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blending {
    #[default]
    Normal,
    Additive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// Inputs of a procedural surface shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShaderParams {
    /// Rippling floor: vertex ripple plus radial fade, animated by `time`.
    RippleFloor { time: f64, base: Color, highlight: Color },
}

/// Physically based material parameters of one mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f64,
    pub opacity: f64,
    pub metalness: f64,
    pub roughness: f64,
    pub wireframe: bool,
    pub blending: Blending,
    pub side: Side,
    pub shader: Option<ShaderParams>,
}

impl Material {
    #[must_use]
    pub const fn standard(color: Color) -> Self {
        Self {
            color,
            emissive: Color::rgb(0.0, 0.0, 0.0),
            emissive_intensity: 0.0,
            opacity: 1.0,
            metalness: 0.0,
            roughness: 1.0,
            wireframe: false,
            blending: Blending::Normal,
            side: Side::Front,
            shader: None,
        }
    }

    #[must_use]
    pub const fn with_emissive(mut self, emissive: Color, intensity: f64) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    #[must_use]
    pub const fn with_surface(mut self, metalness: f64, roughness: f64) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub const fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    #[must_use]
    pub const fn additive(mut self) -> Self {
        self.blending = Blending::Additive;
        self
    }

    #[must_use]
    pub const fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub const fn with_shader(mut self, shader: ShaderParams) -> Self {
        self.shader = Some(shader);
        self
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0 || self.blending == Blending::Additive
    }

    pub fn validate(&self) -> PortalResult<()> {
        self.color.validate()?;
        self.emissive.validate()?;
        if !self.emissive_intensity.is_finite() || self.emissive_intensity < 0.0 {
            return Err(PortalError::InvalidData(
                "material emissive intensity must be finite and >= 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("opacity", self.opacity),
            ("metalness", self.metalness),
            ("roughness", self.roughness),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PortalError::InvalidData(format!(
                    "material `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        if let Some(ShaderParams::RippleFloor {
            time,
            base,
            highlight,
        }) = self.shader
        {
            if !time.is_finite() {
                return Err(PortalError::InvalidData(
                    "ripple shader time must be finite".to_owned(),
                ));
            }
            base.validate()?;
            highlight.validate()?;
        }
        Ok(())
    }
}

/// Backend-neutral mesh shape in local units.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Torus {
        radius: f64,
        tube: f64,
    },
    Sphere {
        radius: f64,
    },
    Icosahedron {
        radius: f64,
        detail: u8,
    },
    Dodecahedron {
        radius: f64,
    },
    Cuboid {
        width: f64,
        height: f64,
        depth: f64,
    },
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
    },
    Plane {
        width: f64,
        height: f64,
    },
    /// Point cloud with one color per position.
    Points {
        positions: Vec<DVec3>,
        colors: Vec<Color>,
        size: f64,
    },
    Text {
        content: String,
        font_size: f64,
    },
}

impl Geometry {
    pub fn validate(&self) -> PortalResult<()> {
        match self {
            Self::Torus { radius, tube } => {
                positive_extent("radius", *radius)?;
                positive_extent("tube", *tube)
            }
            Self::Sphere { radius }
            | Self::Icosahedron { radius, .. }
            | Self::Dodecahedron { radius } => positive_extent("radius", *radius),
            Self::Cuboid {
                width,
                height,
                depth,
            } => {
                positive_extent("width", *width)?;
                positive_extent("height", *height)?;
                positive_extent("depth", *depth)
            }
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => {
                positive_extent("radius_top", *radius_top)?;
                positive_extent("radius_bottom", *radius_bottom)?;
                positive_extent("height", *height)
            }
            Self::Plane { width, height } => {
                positive_extent("width", *width)?;
                positive_extent("height", *height)
            }
            Self::Points {
                positions,
                colors,
                size,
            } => {
                if positions.len() != colors.len() {
                    return Err(PortalError::InvalidData(
                        "point cloud needs one color per position".to_owned(),
                    ));
                }
                if positions.iter().any(|position| !position.is_finite()) {
                    return Err(PortalError::InvalidData(
                        "point positions must be finite".to_owned(),
                    ));
                }
                for color in colors {
                    color.validate()?;
                }
                positive_extent("size", *size)
            }
            Self::Text { font_size, .. } => positive_extent("font_size", *font_size),
        }
    }
}

fn positive_extent(name: &str, value: f64) -> PortalResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PortalError::InvalidData(format!(
            "geometry `{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point { distance: f64, decay: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f64,
}

impl Light {
    #[must_use]
    pub const fn new(kind: LightKind, color: Color, intensity: f64) -> Self {
        Self {
            kind,
            color,
            intensity,
        }
    }

    pub fn validate(self) -> PortalResult<()> {
        self.color.validate()?;
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            return Err(PortalError::InvalidData(
                "light intensity must be finite and >= 0".to_owned(),
            ));
        }
        if let LightKind::Point { distance, decay } = self.kind {
            if !distance.is_finite() || distance < 0.0 || !decay.is_finite() || decay < 0.0 {
                return Err(PortalError::InvalidData(
                    "point light distance/decay must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
