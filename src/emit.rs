//! Line oriented output of discovered perfect numbers

use crate::error::Result;
use crate::generator::PerfectNumber;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// the perfect number in decimal, one per line
    #[default]
    Plain,
    /// one JSON object per line, `{"p":5,"perfect":"496"}`
    Json,
}

/// JSON record of a discovery, the value is a decimal string since it exceeds every JSON number
#[derive(Serialize)]
struct Record {
    p: u64,
    perfect: String,
}

/// Writes each perfect number as one line and flushes it immediately
pub struct Emitter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn emit(&mut self, perfect: &PerfectNumber) -> Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{}", perfect)?,
            OutputFormat::Json => {
                let record = Record {
                    p: perfect.exponent(),
                    perfect: perfect.value().to_string(),
                };
                serde_json::to_writer(&mut self.out, &record)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
