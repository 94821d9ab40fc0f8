use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
use std::time::Duration;

use glam::DVec3;
use tracing::debug;

use crate::core::{FrameTime, OneShotTimer, SmoothedVec3, SmoothingFactor, Viewport, clamp_unit};
use crate::error::{PortalError, PortalResult};
use crate::interaction::PointerPosition;
use crate::render::{
    CameraPose, Color, Fog, Geometry, Light, LightKind, Material, RenderFrame, SceneNode,
    Transform,
};

use super::camera::CameraRig;
use super::palette::{AMBIENT_PURPLE, ANTIQUE_GOLD, CREAM, GOLD, NIGHT, TEAL, VIOLET};
use super::particles::GoldDust;

pub const FADE_IN_DELAY: Duration = Duration::from_millis(100);
pub const FADE_IN_DURATION: Duration = Duration::from_millis(1000);
pub const LOADING_DURATION: Duration = Duration::from_millis(1500);
pub const WELCOME_TITLE: &str = "WELCOME, ALCHEMIST";

/// Gentle bobbing and tilting around a group's rest pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

impl FloatMotion {
    #[must_use]
    pub const fn new(speed: f64, rotation_intensity: f64, float_intensity: f64) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }

    /// Offset transform at `time` seconds.
    #[must_use]
    pub fn transform(self, time: f64) -> Transform {
        let t = time / 4.0 * self.speed;
        Transform::from_translation(DVec3::new(0.0, t.sin() / 10.0 * self.float_intensity, 0.0))
            .with_rotation(DVec3::new(
                t.cos() / 8.0 * self.rotation_intensity,
                t.sin() / 8.0 * self.rotation_intensity,
                t.sin() / 20.0 * self.rotation_intensity,
            ))
    }
}

/// Floating status card with a hover pulse.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCard {
    pub position: DVec3,
    pub title: &'static str,
    pub value: &'static str,
    pub accent: Color,
    hovered: bool,
    scale: SmoothedVec3,
    sway: f64,
}

const CARD_FLOAT: FloatMotion = FloatMotion::new(2.0, 0.2, 0.5);

impl DashboardCard {
    #[must_use]
    pub fn new(position: DVec3, title: &'static str, value: &'static str, accent: Color) -> Self {
        Self {
            position,
            title,
            value,
            accent,
            hovered: false,
            scale: SmoothedVec3::new(DVec3::ONE, SmoothingFactor::BRISK),
            sway: 0.0,
        }
    }

    /// The four cards of the sanctum overview.
    #[must_use]
    pub fn defaults() -> [Self; 4] {
        [
            Self::new(DVec3::new(-2.8, 0.5, 0.0), "TRANSMUTATION STATUS", "ACTIVE", TEAL),
            Self::new(DVec3::new(2.8, 0.5, 0.0), "ARCANE LEVEL", "ADEPT", VIOLET),
            Self::new(DVec3::new(-2.8, -1.3, 0.0), "PHILOSOPHER STONES", "∞", GOLD),
            Self::new(DVec3::new(2.8, -1.3, 0.0), "ESSENCE PURITY", "99.9%", TEAL),
        ]
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.value().x
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn update(&mut self, time: f64) {
        self.sway = (time * 0.5).sin() * 0.1;
        let target = if self.hovered { 1.1 } else { 1.0 };
        self.scale.step(DVec3::splat(target));
    }

    #[must_use]
    pub fn node(&self, time: f64) -> SceneNode {
        let (glow, frame_glow) = if self.hovered { (0.3, 0.6) } else { (0.1, 0.3) };
        let card = SceneNode::group("dashboard-card")
            .with_transform(
                Transform::from_translation(self.position)
                    .with_rotation(DVec3::new(0.0, self.sway, 0.0))
                    .with_scale(self.scale.value()),
            )
            .with_child(SceneNode::mesh(
                "card-panel",
                Geometry::Cuboid {
                    width: 2.2,
                    height: 1.4,
                    depth: 0.08,
                },
                Material::standard(NIGHT)
                    .with_emissive(self.accent, glow)
                    .with_surface(0.95, 0.1)
                    .with_opacity(0.95),
            ))
            .with_child(
                SceneNode::mesh(
                    "card-frame",
                    Geometry::Cuboid {
                        width: 2.3,
                        height: 1.5,
                        depth: 0.02,
                    },
                    Material::standard(ANTIQUE_GOLD)
                        .with_emissive(ANTIQUE_GOLD, frame_glow)
                        .with_opacity(0.4)
                        .wireframe(),
                )
                .at(DVec3::new(0.0, 0.0, 0.05)),
            )
            .with_child(text_node("card-title", self.title, 0.1, ANTIQUE_GOLD, 0.35, 0.1))
            .with_child(text_node("card-value", self.value, 0.28, CREAM, -0.1, 0.1));
        SceneNode::group("card-float")
            .with_transform(CARD_FLOAT.transform(time))
            .with_child(card)
    }
}

fn text_node(
    name: &'static str,
    content: &str,
    font_size: f64,
    color: Color,
    y: f64,
    z: f64,
) -> SceneNode {
    SceneNode::mesh(
        name,
        Geometry::Text {
            content: content.to_owned(),
            font_size,
        },
        Material::standard(color),
    )
    .at(DVec3::new(0.0, y, z))
}

/// Central wireframe orb with two counter-rotating rings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlchemicalOrb {
    time: f64,
}

const ORB_FLOAT: FloatMotion = FloatMotion::new(3.0, 0.3, 0.6);

impl AlchemicalOrb {
    pub fn update(&mut self, time: f64) {
        self.time = time;
    }

    #[must_use]
    pub fn node(&self) -> SceneNode {
        let t = self.time;
        let orb = SceneNode::group("alchemical-orb")
            .with_transform(
                Transform::from_translation(DVec3::new(0.0, 0.0, 1.5))
                    .with_rotation(DVec3::new(0.0, t * 0.3, 0.0)),
            )
            .with_child(SceneNode::mesh(
                "orb-shell",
                Geometry::Icosahedron {
                    radius: 0.6,
                    detail: 1,
                },
                Material::standard(ANTIQUE_GOLD)
                    .with_emissive(ANTIQUE_GOLD, 0.4)
                    .wireframe(),
            ))
            .with_child(SceneNode::mesh(
                "orb-core",
                Geometry::Sphere { radius: 0.35 },
                Material::standard(CREAM)
                    .with_emissive(GOLD, 1.0)
                    .with_opacity(0.8),
            ))
            .with_child(
                SceneNode::mesh(
                    "orb-ring",
                    Geometry::Torus {
                        radius: 0.5,
                        tube: 0.015,
                    },
                    Material::standard(TEAL).with_emissive(TEAL, 0.6),
                )
                .with_transform(
                    Transform::IDENTITY.with_rotation(DVec3::new(FRAC_PI_3, 0.0, t * 0.5)),
                ),
            )
            .with_child(
                SceneNode::mesh(
                    "orb-ring",
                    Geometry::Torus {
                        radius: 0.55,
                        tube: 0.01,
                    },
                    Material::standard(VIOLET).with_emissive(VIOLET, 0.5),
                )
                .with_transform(
                    Transform::IDENTITY.with_rotation(DVec3::new(FRAC_PI_2, FRAC_PI_4, -t * 0.7)),
                ),
            )
            .with_child(SceneNode::light(
                "orb-light",
                Light::new(
                    LightKind::Point {
                        distance: 5.0,
                        decay: 2.0,
                    },
                    GOLD,
                    2.0,
                ),
            ));
        SceneNode::group("orb-float")
            .with_transform(ORB_FLOAT.transform(t))
            .with_child(orb)
    }
}

/// Post-login sanctum: welcome banner, status cards and the orb.
#[derive(Debug, Clone)]
pub struct DashboardScene {
    username: String,
    cards: [DashboardCard; 4],
    orb: AlchemicalOrb,
    particles: GoldDust,
    camera: CameraRig,
    fade_in: OneShotTimer,
    loading: OneShotTimer,
    faded_for: Option<Duration>,
    time: f64,
}

const BANNER_FLOAT: FloatMotion = FloatMotion::new(1.0, 0.1, 0.3);

impl DashboardScene {
    #[must_use]
    pub fn new(username: &str, particle_count: usize, seed: u64) -> Self {
        let mut fade_in = OneShotTimer::default();
        fade_in.arm(FADE_IN_DELAY);
        let mut loading = OneShotTimer::default();
        loading.arm(LOADING_DURATION);
        debug!(username, "dashboard mounted");
        Self {
            username: username.to_owned(),
            cards: DashboardCard::defaults(),
            orb: AlchemicalOrb::default(),
            particles: GoldDust::new(particle_count, seed),
            camera: CameraRig::dashboard(),
            fade_in,
            loading,
            faded_for: None,
            time: 0.0,
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn cards(&self) -> &[DashboardCard; 4] {
        &self.cards
    }

    #[must_use]
    pub fn particles(&self) -> &GoldDust {
        &self.particles
    }

    #[must_use]
    pub fn camera(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Whether the "Entering the Sanctum" overlay is still shown.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_armed()
    }

    /// Scene opacity, ramping from 0 to 1 once the fade-in delay passed.
    #[must_use]
    pub fn fade(&self) -> f64 {
        self.faded_for.map_or(0.0, |elapsed| {
            clamp_unit(elapsed.as_secs_f64() / FADE_IN_DURATION.as_secs_f64())
        })
    }

    /// Hovers exactly one card, or none.
    pub fn set_hovered(&mut self, index: Option<usize>) -> PortalResult<()> {
        if let Some(index) = index {
            if index >= self.cards.len() {
                return Err(PortalError::InvalidData(format!(
                    "card index {index} out of range 0..{}",
                    self.cards.len()
                )));
            }
        }
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.set_hovered(index == Some(i));
        }
        Ok(())
    }

    pub fn update(&mut self, time: FrameTime) {
        if let Some(elapsed) = self.faded_for.as_mut() {
            *elapsed = elapsed.saturating_add(time.delta);
        } else if let Some(overshoot) = self.fade_in.advance_past(time.delta) {
            self.faded_for = Some(overshoot);
            debug!("dashboard fade-in started");
        }
        if self.loading.advance(time.delta) {
            debug!("dashboard loading overlay dismissed");
        }

        self.time = time.elapsed_seconds();
        for card in &mut self.cards {
            card.update(self.time);
        }
        self.orb.update(self.time);
        self.particles.update(self.time, PointerPosition::default());
        self.camera.update_orbit(time.delta_seconds());
    }

    fn banner(&self) -> SceneNode {
        SceneNode::group("welcome-banner")
            .with_transform(BANNER_FLOAT.transform(self.time))
            .with_child(text_node("welcome-title", WELCOME_TITLE, 0.25, ANTIQUE_GOLD, 2.8, 0.0))
            .with_child(text_node(
                "welcome-name",
                &self.username.to_uppercase(),
                0.5,
                CREAM,
                2.4,
                0.0,
            ))
    }

    #[must_use]
    pub fn build_frame(&self, viewport: Viewport) -> RenderFrame {
        let lights = [
            SceneNode::light("ambient", Light::new(LightKind::Ambient, AMBIENT_PURPLE, 0.15)),
            point_light(DVec3::new(10.0, 10.0, 10.0), TEAL, 0.4),
            point_light(DVec3::new(-10.0, -10.0, -10.0), VIOLET, 0.3),
            point_light(DVec3::new(0.0, 5.0, 0.0), GOLD, 0.5),
        ];
        let scene = SceneNode::group("dashboard")
            .with_opacity(self.fade())
            .with_children(lights)
            .with_child(self.particles.node())
            .with_child(self.banner())
            .with_children(self.cards.iter().map(|card| card.node(self.time)))
            .with_child(self.orb.node());
        RenderFrame::new(viewport, NIGHT, self.camera.pose())
            .with_fog(Fog {
                color: NIGHT,
                near: 5.0,
                far: 25.0,
            })
            .with_node(scene)
    }
}

fn point_light(position: DVec3, color: Color, intensity: f64) -> SceneNode {
    SceneNode::light(
        "point-light",
        Light::new(
            LightKind::Point {
                distance: 0.0,
                decay: 2.0,
            },
            color,
            intensity,
        ),
    )
    .at(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_motion_is_rest_pose_at_time_zero() {
        let transform = CARD_FLOAT.transform(0.0);
        assert_eq!(transform.translation, DVec3::ZERO);
        assert!((transform.rotation.x - 0.2 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn fade_counts_time_past_the_fade_in_delay() {
        let mut scene = DashboardScene::new("adept", 0, 1);
        let step = Duration::from_millis(150);
        scene.update(FrameTime::new(step, step));
        assert!((scene.fade() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn huge_frame_gaps_saturate_instead_of_overflowing() {
        let mut scene = DashboardScene::new("adept", 0, 1);
        scene.update(FrameTime::new(Duration::MAX, Duration::MAX));
        scene.update(FrameTime::new(Duration::MAX, Duration::MAX));
        assert_eq!(scene.fade(), 1.0);
        assert!(!scene.is_loading());
    }

    #[test]
    fn hover_rejects_out_of_range_card() {
        let mut scene = DashboardScene::new("adept", 8, 1);
        assert!(scene.set_hovered(Some(4)).is_err());
        assert!(scene.set_hovered(Some(3)).is_ok());
        assert!(scene.cards()[3].is_hovered());
        assert!(!scene.cards()[0].is_hovered());
    }
}
