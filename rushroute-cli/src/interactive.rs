use crate::comparison::{compare, print_comparison};
use rushroute::{NodeId, PathFinder};
use std::io::{self, BufRead, Write};

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt loop: reads origin, destination and hour, then prints the comparison of all cost modes.
/// Entering 0 as the origin or closing the input ends the loop.
pub fn run<R: BufRead, W: Write>(
    finder: &PathFinder,
    samples: &[NodeId],
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(64))?;
    writeln!(out, "INTERACTIVE MODE")?;
    writeln!(out, "{}\n", "=".repeat(64))?;

    if !samples.is_empty() {
        writeln!(out, "Sample node IDs you can try:")?;
        for (i, id) in samples.iter().take(5).enumerate() {
            writeln!(out, "  {}. Node {}", i + 1, id)?;
        }
    }

    loop {
        let start = match prompt(&mut input, out, "\nEnter start node ID (or 0 to quit): ")? {
            Some(line) => line,
            None => break,
        };
        let start: NodeId = match start.parse() {
            Ok(0) => break,
            Ok(id) => id,
            Err(_) => {
                writeln!(out, "Not a node ID: '{}'", start)?;
                continue;
            }
        };

        let end = match prompt(&mut input, out, "Enter end node ID: ")? {
            Some(line) => line,
            None => break,
        };
        let hour = match prompt(&mut input, out, "Enter hour of day (0-23, or 12 for noon): ")? {
            Some(line) => line,
            None => break,
        };

        let end: NodeId = match end.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(out, "Not a node ID: '{}'", end)?;
                continue;
            }
        };
        let hour: u8 = match hour.parse() {
            Ok(hour) => hour,
            Err(_) => {
                writeln!(out, "Invalid hour: '{}'", hour)?;
                continue;
            }
        };

        let network = finder.network();
        if network.get_node(start).is_none() || network.get_node(end).is_none() {
            writeln!(out, "Invalid node IDs!")?;
            continue;
        }

        writeln!(out, "\nCalculating routes...")?;
        match compare(finder, start, end, hour) {
            Ok(routes) => print_comparison(&routes, out)?,
            Err(err) => writeln!(out, "{}", err)?,
        }
    }

    writeln!(out, "\nThanks for exploring Evidence-Based Routing!\n")
}
