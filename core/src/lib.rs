#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod constants;
pub mod effects;
pub mod prompt;
pub mod rng;
pub mod sampler;
pub mod types;

pub use constants::*;
pub use effects::{EffectSink, NoopEffects, RecordedEffects};
pub use prompt::{Answer, PromptSession, Reply};
pub use rng::{fold_seed, LcgRng};
pub use sampler::{compute_teleport_position, sample_in, sampling_bounds, teleport_with_effects};
pub use types::*;
