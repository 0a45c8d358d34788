//! Browser and native bindings for the Valentine effects.
//!
//! Two calling conventions expose the same functions:
//!
//! - wasm-bindgen, with the JS names the page script calls:
//!   `computeTeleportPosition(width, height, seed) -> { x, y }` and
//!   `triggerParticleBurst(x, y)`.
//! - A plain C ABI for any other host:
//!
//! ```c
//! typedef struct { double x; double y; } TeleportResult;
//! uint32_t valentine_effects_api_version(void);
//! TeleportResult valentine_compute_teleport_position(double width, double height, double seed);
//! void valentine_trigger_particle_burst(double x, double y);
//! ```
//!
//! No export keeps state between calls, so all of them are reentrant.

use valentine_core::{EffectSink, Point};
use wasm_bindgen::prelude::*;

pub const API_VERSION: u32 = 1;

#[wasm_bindgen]
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeleportResult {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for TeleportResult {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Sink behind the exported burst trigger. Drawing happens on the host side,
/// so this only emits a trace event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracedBurst;

impl EffectSink for TracedBurst {
    fn burst(&mut self, at: Point) {
        tracing::trace!(x = at.x, y = at.y, "particle burst requested");
    }
}

/// Forward a burst at `(x, y)` to `sink`
pub fn burst_into<S: EffectSink + ?Sized>(sink: &mut S, x: f64, y: f64) {
    sink.burst(Point::new(x, y));
}

#[wasm_bindgen(js_name = computeTeleportPosition)]
pub fn compute_teleport_position(width: f64, height: f64, seed: f64) -> TeleportResult {
    valentine_core::compute_teleport_position(width, height, seed).into()
}

#[wasm_bindgen(js_name = triggerParticleBurst)]
pub fn trigger_particle_burst(x: f64, y: f64) {
    burst_into(&mut TracedBurst, x, y);
}

#[no_mangle]
pub extern "C" fn valentine_effects_api_version() -> u32 {
    API_VERSION
}

#[no_mangle]
pub extern "C" fn valentine_compute_teleport_position(
    width: f64,
    height: f64,
    seed: f64,
) -> TeleportResult {
    compute_teleport_position(width, height, seed)
}

#[no_mangle]
pub extern "C" fn valentine_trigger_particle_burst(x: f64, y: f64) {
    trigger_particle_burst(x, y);
}
