use std::fmt::Display;
use std::io::{self, Write};

/// Write the scan outcome as line-oriented text.
///
/// Success prints one URL per line (nothing for an empty list). Failure
/// prints a single `Error: <message>` line and no URLs.
pub fn write_report<E: Display>(
    result: &Result<Vec<String>, E>,
    out: &mut dyn Write,
) -> io::Result<()> {
    match result {
        Ok(urls) => {
            for url in urls {
                writeln!(out, "{url}")?;
            }
        }
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    out.flush()
}
