use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{AssemblyConfig, ShakeConfig, TypingPulseConfig};
use crate::core::{FragmentLayout, Viewport};
use crate::error::{PortalError, PortalResult};
use crate::scene::{RingConfig, SphereConfig};

/// Number of gold dust particles per stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleCounts {
    pub login: usize,
    pub dashboard: usize,
}

impl Default for ParticleCounts {
    fn default() -> Self {
        Self {
            login: 600,
            dashboard: 400,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist or ship tuned timings as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub sphere: SphereConfig,
    #[serde(default)]
    pub particles: ParticleCounts,
    #[serde(default = "default_error_hold_ms")]
    pub error_hold_ms: u64,
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    /// Seed for particle layout and shake jitter.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl PortalConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            sphere: SphereConfig::default(),
            particles: ParticleCounts::default(),
            error_hold_ms: default_error_hold_ms(),
            login_delay_ms: default_login_delay_ms(),
            seed: default_seed(),
        }
    }

    #[must_use]
    pub fn with_assembly(mut self, assembly: AssemblyConfig) -> Self {
        self.sphere.assembly = assembly;
        self
    }

    #[must_use]
    pub fn with_shake(mut self, shake: ShakeConfig) -> Self {
        self.sphere.shake = shake;
        self
    }

    #[must_use]
    pub fn with_typing(mut self, typing: TypingPulseConfig) -> Self {
        self.sphere.typing = typing;
        self
    }

    #[must_use]
    pub fn with_ring(mut self, ring: RingConfig) -> Self {
        self.sphere.ring = ring;
        self
    }

    #[must_use]
    pub fn with_fragments(mut self, fragments: FragmentLayout) -> Self {
        self.sphere.fragments = fragments;
        self
    }

    /// Switches assembly, typing and layout to the slower cylinder timings.
    #[must_use]
    pub fn with_cylinder_timing(mut self) -> Self {
        let cylinder = SphereConfig::cylinder();
        self.sphere.assembly = cylinder.assembly;
        self.sphere.typing = cylinder.typing;
        self.sphere.fragments = cylinder.fragments;
        self
    }

    #[must_use]
    pub fn with_particles(mut self, login: usize, dashboard: usize) -> Self {
        self.particles = ParticleCounts { login, dashboard };
        self
    }

    #[must_use]
    pub fn with_error_hold_ms(mut self, error_hold_ms: u64) -> Self {
        self.error_hold_ms = error_hold_ms;
        self
    }

    #[must_use]
    pub fn with_login_delay_ms(mut self, login_delay_ms: u64) -> Self {
        self.login_delay_ms = login_delay_ms;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn error_hold(self) -> Duration {
        Duration::from_millis(self.error_hold_ms)
    }

    #[must_use]
    pub fn login_delay(self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> PortalResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PortalError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PortalResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PortalError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_error_hold_ms() -> u64 {
    500
}

fn default_login_delay_ms() -> u64 {
    2000
}

fn default_seed() -> u64 {
    0x6b79_726f_73
}
