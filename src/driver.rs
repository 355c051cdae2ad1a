//! The interactive session around the evaluation core.
//!
//! The driver owns all I/O: it prints the banner and prompts, scans the three
//! input tokens, invokes [`evaluate`] and renders the outcome. Streams are
//! passed in as trait objects so a whole session can run against in-memory
//! buffers in tests.

use crate::evaluator::evaluate;
use crate::scanner::Scanner;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Runs one complete interaction: banner, three prompts, one result line.
///
/// Any failure along the way, whether from input or from evaluation, is
/// reported as a single `Error: <message>` line on `stderr` and the session
/// still ends normally. The returned error covers only broken output streams.
pub fn run_session(
    input: &mut dyn BufRead,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    writeln!(stdout, "Welcome to the Student Assignment!")?;
    if let Err(e) = interact(input, stdout) {
        writeln!(stderr, "Error: {}", e)?;
    }
    Ok(())
}

fn interact(input: &mut dyn BufRead, stdout: &mut dyn Write) -> Result<()> {
    let mut scanner = Scanner::new(input);

    // Prompts carry no newline; flush so the cursor sits after the colon-space.
    write!(stdout, "Enter first number: ")?;
    stdout.flush()?;
    let a = scanner.next_number()?;

    write!(stdout, "Enter second number: ")?;
    stdout.flush()?;
    let b = scanner.next_number()?;

    write!(stdout, "Enter operation (+, -, *, /): ")?;
    stdout.flush()?;
    let op = scanner.next_token()?;

    let result = evaluate(a, b, &op)?;
    writeln!(stdout, "Result: {:.2} {} {:.2} = {:.2}", a, op, b, result)?;
    Ok(())
}
