use alloc::vec::Vec;

use crate::types::Point;

/// Receiver for cosmetic particle bursts.
///
/// The core never draws. It only reports where a burst should happen and a
/// host-side renderer decides what that looks like.
pub trait EffectSink {
    fn burst(&mut self, at: Point);
}

/// Sink that accepts and discards every burst
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEffects;

impl EffectSink for NoopEffects {
    fn burst(&mut self, _at: Point) {}
}

/// Sink that keeps every burst in order, for renderers that replay them later
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedEffects {
    bursts: Vec<Point>,
}

impl RecordedEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bursts(&self) -> &[Point] {
        &self.bursts
    }

    pub fn take(&mut self) -> Vec<Point> {
        core::mem::take(&mut self.bursts)
    }
}

impl EffectSink for RecordedEffects {
    fn burst(&mut self, at: Point) {
        self.bursts.push(at);
    }
}

impl<S: EffectSink + ?Sized> EffectSink for &mut S {
    fn burst(&mut self, at: Point) {
        (**self).burst(at);
    }
}
