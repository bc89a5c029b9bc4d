//! CSV export for augmented tables

use crate::error::{Error, Result};
use crate::table::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a table as CSV: header row, then every row in order.
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_err = |e: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_table(table, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)
}

/// Render a table as a CSV string
pub fn to_csv_string(table: &Table) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write_table(table, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_table<W: Write>(table: &Table, writer: &mut W) -> std::io::Result<()> {
    let header: Vec<String> = table.columns.iter().map(|c| escape_csv(&c.name)).collect();
    writeln!(writer, "{}", header.join(","))?;

    for row in &table.rows {
        let escaped: Vec<String> = row.cells.iter().map(|c| escape_csv(c)).collect();
        writeln!(writer, "{}", escaped.join(","))?;
    }

    Ok(())
}

/// Escape a value for CSV output
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv_str;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv("with\nnewline"), "\"with\nnewline\"");
    }

    #[test]
    fn test_to_csv_string_quotes_where_needed() {
        let input = "name,city\n\"Smith, Jane\",Oslo\nBob,\"He said \"\"hi\"\"\"\n";
        let table = parse_csv_str(input, "test.csv").unwrap();

        assert_eq!(to_csv_string(&table).unwrap(), input);
    }

    #[test]
    fn test_write_csv_to_missing_dir() {
        let table = parse_csv_str("a\n1\n", "test.csv").unwrap();
        let err = write_csv(&table, "no/such/dir/out.csv").unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
    }
}
