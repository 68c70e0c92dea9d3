use std::io::{BufRead, Write};

use anyhow::bail;
use footy_engine::Answer;

const ANSWER_PROMPT: &str = "Your response (yes/no/probably yes/probably no/i dont know): ";
const ANSWER_REJECT: &str =
    "Invalid response. Please enter 'yes', 'no', 'probably yes', 'probably no', or 'i dont know'.";
const CONFIRM_REJECT: &str = "Invalid response. Please enter 'yes' or 'no'.";

/// Reads one game answer, re-prompting until the input parses.
///
/// Validation lives entirely here; the engine only ever receives the parsed
/// [`Answer`].
pub fn read_answer(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<Answer> {
    loop {
        write!(output, "{ANSWER_PROMPT}")?;
        output.flush()?;
        match read_line(input)?.parse::<Answer>() {
            Ok(answer) => return Ok(answer),
            Err(_) => writeln!(output, "{ANSWER_REJECT}")?,
        }
    }
}

/// Reads a yes/no confirmation, re-prompting until one or the other is given.
pub fn read_confirmation(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> anyhow::Result<bool> {
    loop {
        write!(output, "{question}")?;
        output.flush()?;
        match read_line(input)?.trim().to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => writeln!(output, "{CONFIRM_REJECT}")?,
        }
    }
}

fn read_line(input: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended before an answer was given");
    }
    Ok(line)
}
