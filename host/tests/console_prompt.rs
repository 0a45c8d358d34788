//! Drive the console prompt with in-memory input and check the exact output.

use std::io::Cursor;

use anyhow::Result;
use host::{run_prompt, PromptConfig};
use valentine_core::{Point, Rect};

const QUESTION: &str = "Will you be my Valentine? (yes/no)\n";
const BANNER: &str = "  ***   Y E S   ***\n";
const THANKS: &str = "\n  YAY — you said YES! Thank you! <3\n\n";

fn run(input: &str, config: &PromptConfig) -> Result<(String, host::PromptOutcome)> {
    let mut output = Vec::new();
    let outcome = run_prompt(Cursor::new(input.as_bytes()), &mut output, config)?;
    Ok((String::from_utf8(output)?, outcome))
}

#[test]
fn no_then_yes_grows_banner_and_accepts() -> Result<()> {
    let (output, outcome) = run("no\nYES\n", &PromptConfig::default())?;

    let expected = [
        QUESTION,
        "No teleported to a new spot! Try again.\n",
        BANNER,
        BANNER,
        "\n",
        QUESTION,
        "\n",
        BANNER,
        BANNER,
        THANKS,
    ]
    .concat();
    assert_eq!(output, expected);

    assert!(outcome.accepted);
    assert_eq!(outcome.refusals, 1);
    assert_eq!(outcome.unrecognized, 0);
    assert_eq!(
        outcome.teleports,
        vec![Point::new(409.42138671875, 144.345703125)]
    );
    Ok(())
}

#[test]
fn immediate_yes_prints_one_banner_line() -> Result<()> {
    let (output, outcome) = run("  y  \n", &PromptConfig::default())?;
    assert_eq!(output, [QUESTION, "\n", BANNER, THANKS].concat());
    assert!(outcome.accepted);
    assert!(outcome.teleports.is_empty());
    Ok(())
}

#[test]
fn unrecognized_answers_reprompt() -> Result<()> {
    let (output, outcome) = run("maybe\n\nyes\n", &PromptConfig::default())?;
    assert_eq!(
        output,
        [
            QUESTION,
            "Please type yes or no.\n",
            "Please type yes or no.\n",
            "\n",
            BANNER,
            THANKS,
        ]
        .concat()
    );
    assert_eq!(outcome.unrecognized, 2);
    assert_eq!(outcome.refusals, 0);
    assert!(outcome.teleports.is_empty());
    Ok(())
}

#[test]
fn end_of_input_stops_without_accepting() -> Result<()> {
    let (output, outcome) = run("n\nN\n", &PromptConfig::default())?;
    assert!(!outcome.accepted);
    assert_eq!(outcome.refusals, 2);
    assert_eq!(outcome.teleports.len(), 2);
    assert!(!output.contains("YAY"));
    assert!(output.ends_with(QUESTION));

    let (output, outcome) = run("", &PromptConfig::default())?;
    assert_eq!(output, QUESTION);
    assert!(!outcome.accepted);
    Ok(())
}

#[test]
fn lines_after_yes_are_ignored() -> Result<()> {
    let (output, outcome) = run("yes\nno\n", &PromptConfig::default())?;
    assert_eq!(output, [QUESTION, "\n", BANNER, THANKS].concat());
    assert_eq!(outcome.refusals, 0);
    Ok(())
}

#[test]
fn banner_respects_configured_cap() -> Result<()> {
    let config = PromptConfig {
        banner_cap: 2,
        ..PromptConfig::default()
    };
    let (output, _) = run("no\nno\nno\nno\nyes\n", &config)?;
    let final_reply = output.rsplit(QUESTION).next().unwrap_or_default();
    assert_eq!(final_reply, ["\n", BANNER, BANNER, THANKS].concat());
    Ok(())
}

#[test]
fn refusals_teleport_with_increasing_seeds() -> Result<()> {
    let config = PromptConfig {
        viewport: Rect::new(800.0, 600.0),
        ..PromptConfig::default()
    };
    let (_, outcome) = run("no\nno\n", &config)?;
    assert_eq!(
        outcome.teleports,
        vec![
            Point::new(409.42138671875, 144.345703125),
            Point::new(78.8427734375, 394.2333984375),
        ]
    );
    Ok(())
}
