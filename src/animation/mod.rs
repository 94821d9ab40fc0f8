//! Timer-driven animation state machines.
//!
//! Every driver owns its tickers. Reaching a terminal state cancels them and
//! dropping the driver drops them, so no background work can outlive it.

pub mod assembly;
pub mod shake;
pub mod typing;

pub use assembly::{AssemblyConfig, AssemblyDriver, AssemblyPhase, AssemblyStep};
pub use shake::{ErrorShake, ShakeConfig, ShakeJitter};
pub use typing::{TypingPulse, TypingPulseConfig, TypingPulsePolicy};
