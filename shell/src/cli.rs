use std::io::{self, BufRead, Write};

use anyhow::Context;
use liblife::{Life, cell::Cell};
use strum::EnumString;

use crate::{parse, vlog};

const START_PROMPT: &str = "Please enter a list of alive (x,y) integer coordinates, each separated by a line break. Enter an empty line when finished.";
const MENU_PROMPT: &str = "Would you like to go to the next generation (Enter n) or skip generations (Enter s)? (Enter anything else to quit)";
const COUNT_PROMPT: &str = "Enter the number of generations you would like to advance past: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum Command {
    #[strum(serialize = "n")]
    Next,

    #[strum(serialize = "s")]
    Skip,
}

/// Reads the starting cells from `input`, then runs the step menu until the user quits or
/// the input ends. A malformed starting cell aborts before any simulation happens.
pub fn run_cli<R, W>(mut input: R, mut output: W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{START_PROMPT}")?;
    output.flush()?;

    let initial_cells = read_initial_cells(&mut input)?;
    let mut life = Life::new(initial_cells);
    let mut generation: u64 = 0;

    vlog!(
        "generation 0: population {}, frontier {}",
        life.population(),
        life.frontier().len()
    );

    writeln!(
        output,
        "Here are the beginning alive cells. The Game of Life will now begin!:"
    )?;
    if life.population() == 0 {
        writeln!(output, "There are no alive cells!")?;
    }
    write_cells(&mut output, &life)?;

    loop {
        writeln!(output, "{MENU_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let generations = match line.trim().parse::<Command>() {
            Ok(Command::Next) => 1,
            Ok(Command::Skip) => match read_count(&mut input, &mut output)? {
                Some(generations) => generations,
                None => break,
            },
            Err(_) => break,
        };

        life.advance(generations);
        generation = generation.saturating_add(generations);

        vlog!(
            "generation {generation}: population {}, frontier {}",
            life.population(),
            life.frontier().len()
        );
        if life.is_settled() {
            vlog!("settled, further steps change nothing");
        }

        if life.population() == 0 {
            writeln!(output, "There are no alive cells!")?;
        } else {
            writeln!(output, "Here are the alive cells:")?;
        }
        write_cells(&mut output, &life)?;
    }

    writeln!(output, "See ya!")?;
    output.flush()?;

    Ok(())
}

/// Cells up to the first empty line or the end of input.
fn read_initial_cells<B>(input: &mut B) -> anyhow::Result<Vec<Cell>>
where
    B: BufRead,
{
    let mut cells = Vec::new();
    let mut line_number = 0;

    while let Some(line) = read_line(input).context("Couldn't read starting cells")? {
        if line.is_empty() {
            break;
        }

        line_number += 1;
        let cell = parse::parse_cell(&line).with_context(|| {
            format!("Starting cell on line {line_number} is incorrectly formatted")
        })?;
        cells.push(cell);
    }

    vlog!("read {} starting cells", cells.len());
    Ok(cells)
}

/// Prompts until a valid generation count is entered. `None` if the input ends first.
fn read_count<B, W>(input: &mut B, output: &mut W) -> anyhow::Result<Option<u64>>
where
    B: BufRead,
    W: Write,
{
    loop {
        write!(output, "{COUNT_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse::parse_count(&line) {
            Ok(count) => return Ok(Some(count)),
            Err(e) => {
                vlog!("rejected generation count: {e}");
                writeln!(
                    output,
                    "Sorry, you didn't enter a valid number. Please try again."
                )?;
            }
        }
    }
}

/// Next line without its line ending, `None` at end of input. Bytes that aren't UTF-8 are
/// replaced rather than reported, so they reach the parsers as ordinary bad input.
fn read_line<B>(input: &mut B) -> io::Result<Option<String>>
where
    B: BufRead,
{
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}

fn write_cells<W>(output: &mut W, life: &Life) -> anyhow::Result<()>
where
    W: Write,
{
    for cell in life.live_cells_sorted() {
        writeln!(output, "{cell}")?;
    }
    writeln!(output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(input: &str) -> anyhow::Result<String> {
        let mut output = Vec::new();
        run_cli(Cursor::new(input), &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    fn cell_lines(output: &str) -> Vec<&str> {
        output.lines().filter(|line| line.starts_with('(')).collect()
    }

    #[test]
    fn blinker_session() {
        let output = run_session("(1,0)\n(1,1)\n(1,2)\n\nn\nn\nq\n").unwrap();

        assert_eq!(
            cell_lines(&output),
            vec![
                "(1,0)", "(1,1)", "(1,2)", // start
                "(0,1)", "(1,1)", "(2,1)", // after one step
                "(1,0)", "(1,1)", "(1,2)", // and back
            ]
        );
        assert!(output.starts_with(START_PROMPT));
        assert!(output.trim_end().ends_with("See ya!"));
        assert_eq!(output.matches(MENU_PROMPT).count(), 3);
    }

    #[test]
    fn skip_reprompts_until_the_count_is_valid() {
        let output = run_session("(0,0)\n(0,1)\n(0,2)\n\ns\nlots\n-2\n3\nx\n").unwrap();

        assert_eq!(
            output
                .matches("Sorry, you didn't enter a valid number. Please try again.")
                .count(),
            2
        );
        assert_eq!(output.matches(COUNT_PROMPT).count(), 3);
        assert_eq!(
            cell_lines(&output),
            vec!["(0,0)", "(0,1)", "(0,2)", "(-1,1)", "(0,1)", "(1,1)"]
        );
    }

    #[test]
    fn non_utf8_count_is_rejected_and_reprompted() {
        let mut input = b"(0,0)\n(0,1)\n(0,2)\n\ns\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"1\nq\n");

        let mut output = Vec::new();
        run_cli(Cursor::new(input), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(
            output
                .matches("Sorry, you didn't enter a valid number. Please try again.")
                .count(),
            1
        );
        assert_eq!(
            cell_lines(&output),
            vec!["(0,0)", "(0,1)", "(0,2)", "(-1,1)", "(0,1)", "(1,1)"]
        );
        assert!(output.trim_end().ends_with("See ya!"));
    }

    #[test]
    fn non_utf8_menu_input_quits_normally() {
        let mut output = Vec::new();
        run_cli(Cursor::new(b"(0,0)\n\n\xff\n".to_vec()), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(cell_lines(&output), vec!["(0,0)"]);
        assert!(output.trim_end().ends_with("See ya!"));
    }

    #[test]
    fn huge_skip_on_a_still_life_returns() {
        let output =
            run_session("(0,0)\n(0,1)\n(1,0)\n(1,1)\n\ns\n18446744073709551615\nq\n").unwrap();

        assert_eq!(cell_lines(&output).len(), 8);
        assert!(output.trim_end().ends_with("See ya!"));
    }

    #[test]
    fn extinction_is_announced() {
        let output = run_session("(5,5)\n\nn\n").unwrap();

        assert!(output.contains("There are no alive cells!"));
        assert!(output.trim_end().ends_with("See ya!"));
    }

    #[test]
    fn zero_generation_skip_keeps_the_world() {
        let output = run_session("(0,0)\n\ns\n0\n").unwrap();

        assert_eq!(cell_lines(&output), vec!["(0,0)", "(0,0)"]);
    }

    #[test]
    fn end_of_input_before_menu_quits_quietly() {
        let output = run_session("(2,3)").unwrap();

        assert_eq!(cell_lines(&output), vec!["(2,3)"]);
        assert!(output.trim_end().ends_with("See ya!"));
    }

    #[test]
    fn empty_start_is_allowed() {
        let output = run_session("\nn\n").unwrap();

        assert!(cell_lines(&output).is_empty());
        // Once after the start, once after the step.
        assert_eq!(output.matches("There are no alive cells!").count(), 2);
    }

    #[test]
    fn malformed_start_aborts_before_simulating() {
        let mut output = Vec::new();
        let error = run_cli(Cursor::new("(1,1)\n(2;2)\n\nn\n"), &mut output).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Starting cell on line 2 is incorrectly formatted"
        );
        assert!(
            error
                .downcast_ref::<parse::CoordinateError>()
                .is_some()
        );

        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains(MENU_PROMPT));
    }
}
