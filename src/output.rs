use std::io::{self, Write};

use serde::Serialize;

use crate::error::{MagnetError, Result};

/// Pretty-print a value as JSON (two-space indent) on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, value)?;
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(MagnetError::Encode)?;
    writeln!(out)?;
    Ok(())
}
