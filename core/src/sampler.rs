use crate::constants::{DEGENERATE_SPAN, TELEPORT_MARGIN};
use crate::effects::EffectSink;
use crate::rng::LcgRng;
use crate::types::{Bounds, Point, Rect, Span};

fn inset_span(extent: f64) -> Span {
    let min = TELEPORT_MARGIN;
    let mut max = extent - TELEPORT_MARGIN;
    if max <= min {
        max = min + DEGENERATE_SPAN;
    }
    Span { min, max }
}

/// Margin-inset sampling box for a viewport.
///
/// Each axis is `[60, extent - 60)`. When that interval is empty the axis
/// falls back to `[60, 61)`, so sampling never works on an empty range.
pub fn sampling_bounds(rect: Rect) -> Bounds {
    Bounds {
        x: inset_span(rect.width),
        y: inset_span(rect.height),
    }
}

/// Sample a point inside `rect` using the caller's generator.
///
/// Draws exactly twice, X first then Y. The generator is not reseeded, so
/// consecutive calls walk the same sequence.
pub fn sample_in(rng: &mut LcgRng, rect: Rect) -> Point {
    let bounds = sampling_bounds(rect);
    let x = bounds.x.lerp(rng.next_unit());
    let y = bounds.y.lerp(rng.next_unit());
    Point { x, y }
}

/// Deterministic teleport position for a `width` x `height` viewport.
///
/// Every call starts from a fresh generator seeded with `seed`, so the result
/// depends only on the three arguments. Never fails: degenerate or
/// non-finite inputs still produce a number.
pub fn compute_teleport_position(width: f64, height: f64, seed: f64) -> Point {
    let mut rng = LcgRng::from_seed(seed);
    sample_in(&mut rng, Rect::new(width, height))
}

/// Sample a teleport position and report a burst at it
pub fn teleport_with_effects<S: EffectSink + ?Sized>(rect: Rect, seed: f64, sink: &mut S) -> Point {
    let point = compute_teleport_position(rect.width, rect.height, seed);
    sink.burst(point);
    point
}
