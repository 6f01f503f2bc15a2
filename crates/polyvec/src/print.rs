use std::{
    fmt::{self, Write as _},
    io::{self, Write},
};

use log::warn;

use crate::Result;

/// Line written before and after the elements: exactly 80 dashes.
pub const DELIMITER: &str =
    "--------------------------------------------------------------------------------";

/// Delimited text output shared by [`PolyVec`](crate::PolyVec) and [`TaggedVec`](crate::TaggedVec).
///
/// Output format, when there is something to print:
///
/// ```text
/// <DELIMITER>
/// <element 1>
/// ...
/// <DELIMITER>
///
/// ```
///
/// An empty vector, or one without a declared kind, prints nothing at all.
pub trait PrintableVec {
    /// Returns false when printing must produce no output.
    fn has_printable(&self) -> bool;

    /// Writes one line per element, in insertion order, each followed by `\n`.
    fn fmt_lines(&self, out: &mut String) -> fmt::Result;

    /// Renders the full output into a string (empty if nothing is printable).
    fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        if !self.has_printable() {
            return Ok(out);
        }
        writeln!(out, "{DELIMITER}")?;
        self.fmt_lines(&mut out)?;
        writeln!(out, "{DELIMITER}")?;
        out.push('\n');
        Ok(out)
    }

    /// Prints to `sink`, reporting write failures.
    fn try_print_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        let rendered = self.render()?;
        if rendered.is_empty() {
            return Ok(());
        }
        sink.write_all(rendered.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Prints to `sink`. Write failures are logged and otherwise ignored.
    fn print_to<W: Write>(&self, sink: &mut W) {
        if let Err(e) = self.try_print_to(sink) {
            warn!("Failed to print vector: {e}");
        }
    }

    /// Prints to standard output.
    fn print(&self) {
        self.print_to(&mut io::stdout().lock());
    }
}
