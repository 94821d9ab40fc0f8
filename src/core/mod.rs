pub mod clock;
pub mod easing;
pub mod fragment;
pub mod smoothing;
pub mod ticker;
pub mod types;

pub use clock::FrameTime;
pub use easing::{Easing, clamp_unit, ease_out_cubic, smoothstep};
pub use fragment::{
    FragmentLayout, FragmentTransform, STRUT_REVEAL_PROGRESS, layout, strut_opacity,
};
pub use smoothing::{Smoothed, SmoothedVec3, SmoothingFactor, lerp, smooth_toward};
pub use ticker::{IntervalTicker, OneShotTimer, TimerSet};
pub use types::Viewport;
