//! Line-oriented command loop standing in for the device's buttons.
//!
//! Each input line holds one or more whitespace-separated commands:
//! `up/down/left/right` (or `w/s/a/d`), `ok`, `del`, `reset`, `accept N`,
//! `status`, `quit`. A frame is printed after every line.

use crate::display::render_frame;
use anyhow::Result;
use std::io::{BufRead, Write};
use typeaid_core::{InputEvent, PredictiveSession};

/// A parsed user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(InputEvent),
    Accept(usize),
    /// Print the word count of every tier
    Status,
    Quit,
}

/// Parse one input line into commands.
pub fn parse_line(line: &str) -> Result<Vec<Command>, String> {
    let mut commands = Vec::new();
    let mut tokens = line.split_whitespace();
    while let Some(token) = tokens.next() {
        let command = match token.to_ascii_lowercase().as_str() {
            "up" | "w" => Command::Event(InputEvent::Up),
            "down" | "s" => Command::Event(InputEvent::Down),
            "left" | "a" => Command::Event(InputEvent::Left),
            "right" | "d" => Command::Event(InputEvent::Right),
            "ok" | "enter" | "e" => Command::Event(InputEvent::Ok),
            "del" | "delete" | "backspace" | "x" => Command::Event(InputEvent::Delete),
            "reset" | "r" => Command::Event(InputEvent::Reset),
            "accept" | "pick" => {
                let index = tokens
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .ok_or_else(|| "accept needs a suggestion number".to_string())?;
                Command::Accept(index)
            }
            "status" | "stats" => Command::Status,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {}", other)),
        };
        commands.push(command);
    }
    Ok(commands)
}

/// Run the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut PredictiveSession,
    input: R,
    mut output: W,
    json: bool,
) -> Result<()> {
    print_frame(session, &mut output, json)?;
    for line in input.lines() {
        let line = line?;
        let commands = match parse_line(&line) {
            Ok(commands) => commands,
            Err(msg) => {
                writeln!(output, "? {}", msg)?;
                continue;
            }
        };
        for command in commands {
            match command {
                Command::Event(event) => {
                    session.handle(event);
                }
                Command::Accept(index) => {
                    if session.accept_suggestion(index).is_none() {
                        writeln!(output, "? no suggestion {}", index)?;
                    }
                }
                Command::Status => print_status(session, &mut output)?,
                Command::Quit => return Ok(()),
            }
        }
        print_frame(session, &mut output, json)?;
    }
    Ok(())
}

fn print_status<W: Write>(session: &PredictiveSession, output: &mut W) -> Result<()> {
    let store = session.store();
    if let Some(msg) = store.status_message() {
        writeln!(output, "! {}", msg)?;
    }
    for tier in store.tiers() {
        writeln!(output, "# {}: {}/{}", tier.kind(), tier.len(), tier.capacity())?;
    }
    Ok(())
}

fn print_frame<W: Write>(session: &PredictiveSession, output: &mut W, json: bool) -> Result<()> {
    let state = session.render_state();
    if json {
        writeln!(output, "{}", serde_json::to_string(&state)?)?;
    } else {
        write!(output, "{}", render_frame(session.keyboard(), &state))?;
    }
    output.flush()?;
    Ok(())
}
