//! Text command parsing
//!
//! A command script is a header line `width height` followed by one command
//! per line: `P x y` queries the tile containing a point, and
//! `<id> x y w h` inserts a block with bottom-left corner `(x, y)` and the
//! given extent. Blank lines are skipped; anything else is an error naming
//! the offending line.

use crate::geometry::{Point, Rect};
use crate::io::error::{Result, invalid_command};

/// One parsed script command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `P x y`: report the bottom-left corner of the containing tile
    Query(Point),
    /// `<id> x y w h`: insert a block
    Insert {
        /// Block id, non-negative
        id: u32,
        /// Region to occupy
        rect: Rect,
    },
}

/// A parsed script: plane extent plus the command sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandScript {
    /// Plane width from the header line
    pub width: i32,
    /// Plane height from the header line
    pub height: i32,
    /// Commands in input order
    pub commands: Vec<Command>,
}

/// Parse a full command script
///
/// # Errors
///
/// Returns [`crate::PlaneError::InvalidCommand`] for a malformed header or
/// command line, with the one-based line number.
pub fn parse_script(input: &str) -> Result<CommandScript> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| invalid_command(1, &"expected `width height` header"))?;
    let (width, height) = parse_header(header_line, header)?;

    let mut commands = Vec::new();
    for (number, line) in lines {
        commands.push(parse_command(number, line)?);
    }

    Ok(CommandScript {
        width,
        height,
        commands,
    })
}

fn parse_header(number: usize, line: &str) -> Result<(i32, i32)> {
    let mut tokens = line.split_whitespace();
    let width = parse_int(number, tokens.next(), "width")?;
    let height = parse_int(number, tokens.next(), "height")?;
    if tokens.next().is_some() {
        return Err(invalid_command(
            number,
            &"expected exactly `width height` on the header line",
        ));
    }
    Ok((width, height))
}

fn parse_command(number: usize, line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(invalid_command(number, &"empty command"));
    };

    if first == "P" {
        let x = parse_int(number, tokens.next(), "x")?;
        let y = parse_int(number, tokens.next(), "y")?;
        if tokens.next().is_some() {
            return Err(invalid_command(number, &"expected exactly `P x y`"));
        }
        return Ok(Command::Query(Point::new(x, y)));
    }

    let id: u32 = first.parse().map_err(|_parse_error| {
        invalid_command(
            number,
            &format!("block id must be a non-negative integer, got `{first}`"),
        )
    })?;
    let x = parse_int(number, tokens.next(), "x")?;
    let y = parse_int(number, tokens.next(), "y")?;
    let w = parse_int(number, tokens.next(), "w")?;
    let h = parse_int(number, tokens.next(), "h")?;
    if tokens.next().is_some() {
        return Err(invalid_command(number, &"expected exactly `id x y w h`"));
    }

    Ok(Command::Insert {
        id,
        rect: Rect::from_origin_size(x, y, w, h),
    })
}

fn parse_int(number: usize, token: Option<&str>, name: &str) -> Result<i32> {
    let token = token.ok_or_else(|| invalid_command(number, &format!("missing `{name}`")))?;
    token.parse().map_err(|_parse_error| {
        invalid_command(
            number,
            &format!("`{name}` must be an integer, got `{token}`"),
        )
    })
}
