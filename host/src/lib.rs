//! Console front end for the Valentine prompt.
//!
//! Drives a [`PromptSession`] over any line reader and writer, and exposes
//! the teleport sampler to the command line.

pub mod config;

use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use valentine_core::{
    compute_teleport_position, teleport_with_effects, Answer, EffectSink, Point, PromptSession,
    Rect,
};

pub use config::PromptConfig;

/// Effect sink that only reports bursts through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEffects;

impl EffectSink for TracingEffects {
    fn burst(&mut self, at: Point) {
        tracing::debug!(x = at.x, y = at.y, "particle burst");
    }
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptOutcome {
    /// `false` when input ran out before a "yes"
    pub accepted: bool,
    pub refusals: u32,
    pub unrecognized: u32,
    /// Where the "No" button went after each refusal, in order
    pub teleports: Vec<Point>,
}

/// Run the question loop until a "yes" or end of input.
///
/// Replies go to `output`; diagnostics go through `tracing`. Unrecognized
/// lines re-prompt and never end the session.
pub fn run_prompt<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &PromptConfig,
) -> Result<PromptOutcome> {
    let mut session = PromptSession::new(config.banner_cap);
    let mut effects = TracingEffects;
    let mut outcome = PromptOutcome {
        accepted: false,
        refusals: 0,
        unrecognized: 0,
        teleports: Vec::new(),
    };

    writeln!(output, "{}", PromptSession::question()).context("failed to write question")?;
    output.flush().context("failed to flush output")?;

    for line in input.lines() {
        let line = line.context("failed to read answer")?;
        let answer = Answer::parse(&line);
        tracing::trace!(?answer, raw = line.as_str(), "answer received");

        let reply = session.respond(answer);
        match answer {
            Answer::No => {
                outcome.refusals = session.refusals();
                let seed = f64::from(session.refusals());
                let point = teleport_with_effects(config.viewport, seed, &mut effects);
                tracing::debug!(
                    refusal = session.refusals(),
                    x = point.x,
                    y = point.y,
                    "no button teleported"
                );
                outcome.teleports.push(point);
            }
            Answer::Unrecognized => outcome.unrecognized += 1,
            Answer::Yes => {}
        }

        for text in &reply.lines {
            writeln!(output, "{text}").context("failed to write reply")?;
        }
        output.flush().context("failed to flush output")?;

        if reply.finished {
            outcome.accepted = true;
            break;
        }
    }

    tracing::info!(
        accepted = outcome.accepted,
        refusals = outcome.refusals,
        unrecognized = outcome.unrecognized,
        "prompt finished"
    );
    Ok(outcome)
}

/// Sample one position per seed inside `viewport`
pub fn teleport_batch(viewport: Rect, seeds: &[f64]) -> Vec<Point> {
    seeds
        .iter()
        .map(|seed| compute_teleport_position(viewport.width, viewport.height, *seed))
        .collect()
}

/// Render sampled positions for the terminal.
///
/// Plain text is one `x=<x> y=<y>` line per point. JSON is a single object
/// for one point and an array otherwise.
pub fn format_points(points: &[Point], json: bool) -> Result<String> {
    if json {
        let text = match points {
            [single] => serde_json::to_string(single),
            many => serde_json::to_string(many),
        }
        .context("failed to serialize teleport positions")?;
        return Ok(text);
    }

    let lines: Vec<String> = points
        .iter()
        .map(|point| format!("x={} y={}", point.x, point.y))
        .collect();
    Ok(lines.join("\n"))
}

/// Parse a seed. Accepts decimal floats and `0x` hex u32 values.
pub fn parse_seed(seed: &str) -> Result<f64> {
    let s = seed.trim();
    if s.is_empty() {
        return Err(anyhow!("empty seed"));
    }
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
            .map(f64::from)
            .with_context(|| format!("invalid hex seed: {s}"))
    } else {
        s.parse::<f64>()
            .with_context(|| format!("invalid decimal seed: {s}"))
    }
}

pub fn parse_seed_csv(input: &str) -> Result<Vec<f64>> {
    let mut seeds = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        seeds.push(parse_seed(token)?);
    }
    if seeds.is_empty() {
        return Err(anyhow!("no seeds parsed from --seeds"));
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_hex_and_negative_seeds() {
        assert_eq!(parse_seed("42").unwrap(), 42.0);
        assert_eq!(parse_seed(" 0x10 ").unwrap(), 16.0);
        assert_eq!(parse_seed("-3.5").unwrap(), -3.5);
        assert!(parse_seed("").is_err());
        assert!(parse_seed("0xzz").is_err());
    }

    #[test]
    fn hex_seeds_are_exact_u32() {
        let seed = parse_seed("0xFFFFFFFF").unwrap();
        assert_eq!(seed, 4_294_967_295.0);
        assert_eq!(valentine_core::fold_seed(seed), 0x7FFF_FFFF);

        // wider than the generator state; rejected instead of rounded
        assert!(parse_seed("0xFFFFFFFFFFFFFFFF").is_err());
    }

    #[test]
    fn parses_seed_lists() {
        assert_eq!(parse_seed_csv("0, 1,,2").unwrap(), vec![0.0, 1.0, 2.0]);
        assert!(parse_seed_csv(" , ").is_err());
        assert!(parse_seed_csv("1,two").is_err());
    }

    #[test]
    fn batch_matches_single_calls() {
        let viewport = Rect::new(400.0, 300.0);
        let points = teleport_batch(viewport, &[0.0, 1.0]);
        assert_eq!(
            points,
            vec![
                Point::new(60.0, 177.92724609375),
                Point::new(203.87939453125, 91.629638671875),
            ]
        );
    }
}
