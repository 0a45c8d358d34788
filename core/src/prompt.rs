//! I/O-free state of the console prompt.
//!
//! The session decides which lines to print; the caller owns reading and
//! writing, so the same session drives a terminal or an in-memory test.

use alloc::vec::Vec;

use crate::constants::{
    BANNER_CAP_DEFAULT, QUESTION, REFUSAL_LINE, THANK_YOU_LINE, UNRECOGNIZED_LINE,
    YES_BANNER_LINE, YES_SCALE_START,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Unrecognized,
}

impl Answer {
    /// Case-insensitive match after trimming surrounding whitespace
    pub fn parse(line: &str) -> Self {
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y") {
            Answer::Yes
        } else if answer.eq_ignore_ascii_case("no") || answer.eq_ignore_ascii_case("n") {
            Answer::No
        } else {
            Answer::Unrecognized
        }
    }
}

/// Lines to print in response to one answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<&'static str>,
    pub finished: bool,
}

/// Number of banner lines for a scale: at least 1, at most `cap`
pub fn banner_lines(scale: u32, cap: u32) -> usize {
    scale.min(cap).max(1) as usize
}

pub fn yes_banner(scale: u32, cap: u32) -> impl Iterator<Item = &'static str> {
    core::iter::repeat(YES_BANNER_LINE).take(banner_lines(scale, cap))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromptSession {
    yes_scale: u32,
    banner_cap: u32,
    refusals: u32,
}

impl Default for PromptSession {
    fn default() -> Self {
        Self::new(BANNER_CAP_DEFAULT)
    }
}

impl PromptSession {
    pub fn new(banner_cap: u32) -> Self {
        Self {
            yes_scale: YES_SCALE_START,
            banner_cap,
            refusals: 0,
        }
    }

    pub fn question() -> &'static str {
        QUESTION
    }

    pub fn yes_scale(&self) -> u32 {
        self.yes_scale
    }

    pub fn refusals(&self) -> u32 {
        self.refusals
    }

    pub fn respond(&mut self, answer: Answer) -> Reply {
        let mut lines = Vec::new();
        let finished = match answer {
            Answer::Yes => {
                lines.push("");
                lines.extend(yes_banner(self.yes_scale, self.banner_cap));
                lines.push("");
                lines.push(THANK_YOU_LINE);
                lines.push("");
                true
            }
            Answer::No => {
                self.yes_scale = self.yes_scale.saturating_add(1);
                self.refusals = self.refusals.saturating_add(1);
                lines.push(REFUSAL_LINE);
                lines.extend(yes_banner(self.yes_scale, self.banner_cap));
                lines.push("");
                lines.push(QUESTION);
                false
            }
            Answer::Unrecognized => {
                lines.push(UNRECOGNIZED_LINE);
                false
            }
        };
        Reply { lines, finished }
    }
}
