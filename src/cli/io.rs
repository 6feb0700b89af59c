//! JSON output for CLI commands
//!
//! One JSON object per line on stdout, UTF-8.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a single JSON object followed by a newline
pub fn write_json<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a JSON object to stdout
pub fn write_response(value: &Value) -> CliResult<()> {
    write_json(&mut io::stdout().lock(), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_line_per_object() {
        let mut buf = Vec::new();
        write_json(&mut buf, &json!({"valid": true, "records": 3})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        let parsed: Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed["records"], 3);
    }
}
