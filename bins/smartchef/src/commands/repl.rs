//! Repl command - interactive ingredient session
//!
//! One command per line:
//!
//! ```text
//! add <ingredient>     add to the working set
//! remove <ingredient>  remove every matching entry
//! list                 show the working set
//! search               rank the catalog against the working set
//! clear                drop ingredients and results
//! help                 show commands
//! quit                 leave (also: exit, end of input)
//! ```

use smartchef_cli::output::format_results;
use smartchef_search::{Recipe, SearchLimits, Session};
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: add <ingredient>, remove <ingredient>, list, search, clear, help, quit";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Add(&'a str),
    Remove(&'a str),
    List,
    Search,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(v, r)| (v, r.trim()))
        .unwrap_or((line, ""));

    let command = match verb.to_lowercase().as_str() {
        "add" => Command::Add(rest),
        "remove" | "rm" => Command::Remove(rest),
        "list" | "ls" => Command::List,
        "search" => Command::Search,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(verb),
    };
    Some(command)
}

/// Run an interactive session over `input`, writing to `out`.
pub fn run<R, W>(catalog: &[Recipe], limits: SearchLimits, input: R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(limits);
    writeln!(out, "{} recipes loaded. {}", catalog.len(), HELP)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse(&line) else {
            continue;
        };

        match command {
            Command::Add(raw) => match session.add(raw) {
                Ok(next) => {
                    session = next;
                    writeln!(
                        out,
                        "Added. Ingredients ({}/{}): {}",
                        session.ingredients().len(),
                        limits.max_ingredients,
                        session.ingredients().as_slice().join(", ")
                    )?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Remove(name) => {
                let before = session.ingredients().len();
                session = session.remove(&name.to_lowercase());
                let removed = before - session.ingredients().len();
                writeln!(out, "Removed {} entr{}", removed, if removed == 1 { "y" } else { "ies" })?;
            }
            Command::List => {
                if session.ingredients().is_empty() {
                    writeln!(out, "No ingredients yet")?;
                } else {
                    writeln!(out, "{}", session.ingredients().as_slice().join(", "))?;
                }
            }
            Command::Search => {
                session = session.search(catalog);
                match session.results() {
                    Some(results) if !results.is_empty() => write!(out, "{}", format_results(results))?,
                    _ => writeln!(out, "No recipe uses at least {} of your ingredients", limits.min_match)?,
                }
            }
            Command::Clear => {
                session = session.clear();
                writeln!(out, "Cleared")?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
            Command::Unknown(verb) => writeln!(out, "Unknown command {:?}. {}", verb, HELP)?,
        }
        out.flush()?;
    }

    Ok(())
}
