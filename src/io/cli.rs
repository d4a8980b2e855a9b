//! Command-line interface for processing command scripts

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::geometry::Point;
use crate::io::commands::{Command, parse_script};
use crate::io::drawing::{render_ascii, write_drawing};
use crate::io::error::{PlaneError, Result};
use crate::io::report::write_report;
use crate::plane::plane::Plane;

#[derive(Parser)]
#[command(name = "tileplane")]
#[command(
    author,
    version,
    about = "Process corner-stitched tile plane command scripts"
)]
/// Command-line arguments for the tile plane processor
pub struct Cli {
    /// Input command script (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file for the report (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a drawing dump of every live tile to this path
    #[arg(short, long)]
    pub drawing: Option<PathBuf>,

    /// Append an ASCII rendering of the plane to the drawing dump
    #[arg(short, long)]
    pub ascii: bool,
}

/// Runs one script: parse, execute, report, optionally dump
pub struct CommandProcessor {
    cli: Cli,
}

impl CommandProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the script and write all requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error for unreadable input, a malformed script, an
    /// out-of-bounds query or insertion, or an unwritable output.
    pub fn process(&self) -> Result<()> {
        let script_text = self.read_input()?;
        let script = parse_script(&script_text)?;

        let mut plane = Plane::new(script.width, script.height)?;
        let mut answers: Vec<Point> = Vec::new();

        for command in &script.commands {
            match *command {
                Command::Query(point) => {
                    let handle = plane.locate(plane.start(), point)?;
                    answers.push(plane.get(handle)?.rect.bottom_left);
                }
                Command::Insert { id, rect } => {
                    plane.insert_block(rect, id)?;
                }
            }
        }

        self.write_outputs(&plane, &answers)
    }

    fn read_input(&self) -> Result<String> {
        match &self.cli.input {
            Some(path) => fs::read_to_string(path).map_err(|source| PlaneError::FileSystem {
                path: path.clone(),
                operation: "read",
                source,
            }),
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }

    fn write_outputs(&self, plane: &Plane, answers: &[Point]) -> Result<()> {
        match &self.cli.output {
            Some(path) => {
                let mut file = create_file(path)?;
                write_report(plane, answers, &mut file)?;
            }
            None => {
                let stdout = std::io::stdout();
                write_report(plane, answers, &mut stdout.lock())?;
            }
        }

        if let Some(path) = &self.cli.drawing {
            let mut file = create_file(path)?;
            write_drawing(plane, &mut file)?;
            if self.cli.ascii
                && let Some(rendering) = render_ascii(plane)
            {
                write!(file, "{rendering}").map_err(|source| PlaneError::FileSystem {
                    path: path.clone(),
                    operation: "write",
                    source,
                })?;
            }
        }

        Ok(())
    }
}

fn create_file(path: &Path) -> Result<fs::File> {
    fs::File::create(path).map_err(|source| PlaneError::FileSystem {
        path: path.to_path_buf(),
        operation: "create",
        source,
    })
}
