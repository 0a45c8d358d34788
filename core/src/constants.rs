// Constants for the teleport sampler and the console prompt.
// Values must stay in sync with the browser-side script that consumes the
// exported positions.

// Sampler geometry
pub const TELEPORT_MARGIN: f64 = 60.0;
// Width of the fallback sampling band when the inset box is empty
pub const DEGENERATE_SPAN: f64 = 1.0;

// LCG parameters (glibc-style rand)
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;
pub const LCG_INCREMENT: u32 = 12_345;
pub const LCG_OUTPUT_SHIFT: u32 = 16;
pub const LCG_OUTPUT_MASK: u32 = 0x7FFF;
pub const LCG_OUTPUT_RANGE: f64 = 32_768.0; // 2^15

// Seeds are folded into [0, 2^31) before use
pub const SEED_MODULUS: f64 = 2_147_483_648.0;
pub const SEED_MASK: u32 = 0x7FFF_FFFF;

// Console prompt
pub const QUESTION: &str = "Will you be my Valentine? (yes/no)";
pub const YES_BANNER_LINE: &str = "  ***   Y E S   ***";
pub const REFUSAL_LINE: &str = "No teleported to a new spot! Try again.";
pub const UNRECOGNIZED_LINE: &str = "Please type yes or no.";
pub const THANK_YOU_LINE: &str = "  YAY — you said YES! Thank you! <3";
pub const BANNER_CAP_DEFAULT: u32 = 5;
pub const YES_SCALE_START: u32 = 1;

// Default viewport used when the console samples a teleport position
pub const VIEWPORT_WIDTH_DEFAULT: f64 = 800.0;
pub const VIEWPORT_HEIGHT_DEFAULT: f64 = 600.0;
