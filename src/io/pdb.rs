// src/io/pdb.rs

use std::fs::File;
use std::io::{self, BufRead};
use std::ops::Range;
use std::path::Path;

use super::error::{Error, Format, Result};
use crate::model::{Point3, Structure};

/// Record name field, columns 1-6.
pub const RECORD_COLUMNS: Range<usize> = 0..6;
/// x, y and z, columns 31-55.
pub const COORD_COLUMNS: Range<usize> = 30..55;
/// Element symbol, columns 77-79.
pub const ELEMENT_COLUMNS: Range<usize> = 76..79;

/// Reads every `ATOM`/`HETATM` record of a PDB file.
///
/// A file with no atom records gives an empty structure.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Structure> {
    let file = File::open(path.as_ref())?;
    let structure = parse_reader(io::BufReader::new(file))?;
    log::debug!(
        "Read {} atoms from {}",
        structure.len(),
        path.as_ref().display()
    );
    Ok(structure)
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<Structure> {
    let mut structure = Structure::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;

        if !is_atom_record(&line) {
            continue;
        }

        let symbol = column(&line, ELEMENT_COLUMNS).trim();
        if symbol.is_empty() {
            log::warn!("Line {}: atom record has no element symbol", line_no);
        }
        let position = parse_coordinates(column(&line, COORD_COLUMNS), line_no)?;

        structure.push(symbol, position);
    }

    Ok(structure)
}

fn is_atom_record(line: &str) -> bool {
    let record = column(line, RECORD_COLUMNS);
    record.contains("ATOM") || record.contains("HETATM")
}

fn parse_coordinates(field: &str, line_no: usize) -> Result<Point3> {
    let parts: Vec<&str> = field.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::parse(
            Format::Pdb,
            line_no,
            format!("expected 3 coordinates, found {} in '{}'", parts.len(), field.trim()),
        ));
    }

    let mut position = [0.0; 3];
    for (slot, token) in position.iter_mut().zip(&parts) {
        *slot = token.parse().map_err(|_| {
            Error::parse(Format::Pdb, line_no, format!("invalid coordinate '{}'", token))
        })?;
    }
    Ok(position)
}

/// Fixed-width slice that tolerates short lines, like a padded column.
///
/// Columns count characters, so non-ASCII text before a field does not
/// shift it.
fn column(line: &str, range: Range<usize>) -> &str {
    if line.is_ascii() {
        let end = range.end.min(line.len());
        let start = range.start.min(end);
        return &line[start..end];
    }

    let byte_at = |n: usize| line.char_indices().nth(n).map_or(line.len(), |(i, _)| i);
    &line[byte_at(range.start)..byte_at(range.end)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ALA_N: &str =
        "ATOM      1  N   ALA A   1      11.104   6.134  -6.504  1.00  0.00           N";

    #[test]
    fn test_single_atom_record() {
        let s = parse_reader(Cursor::new(ALA_N)).unwrap();
        assert_eq!(s.symbols(), ["N".to_string()]);

        let p = s.coordinates()[0];
        assert!((p[0] - 11.104).abs() < 1e-9);
        assert!((p[1] - 6.134).abs() < 1e-9);
        assert!((p[2] + 6.504).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let s = parse_reader(Cursor::new("")).unwrap();
        assert!(s.is_empty());
        assert!(s.coordinates().is_empty());
    }

    #[test]
    fn test_skips_non_atom_records() {
        let text = format!(
            "HEADER    TEST\nREMARK   1 nothing here\n{}\n\
             HETATM    2 NA    NA B 101       1.000   2.000   3.000  1.00  0.00          NA\n\
             TER\nEND\n",
            ALA_N
        );
        let s = parse_reader(Cursor::new(text)).unwrap();
        assert_eq!(s.symbols(), ["N".to_string(), "NA".to_string()]);
        assert_eq!(s.coordinates()[1], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_bad_coordinate_token() {
        let line =
            "ATOM      1  N   ALA A   1      11.104   abcde  -6.504  1.00  0.00           N";
        let err = parse_reader(Cursor::new(line)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn test_missing_coordinate() {
        let line = "ATOM      1  N   ALA A   1      11.104   6.134";
        let err = parse_reader(Cursor::new(line)).unwrap_err();
        assert!(matches!(err, Error::Parse { format: Format::Pdb, .. }));
    }

    #[test]
    fn test_short_line_without_element() {
        let line = "ATOM      1  N   ALA A   1      11.104   6.134  -6.504";
        let s = parse_reader(Cursor::new(line)).unwrap();
        assert_eq!(s.symbols(), [String::new()]);
    }

    #[test]
    fn test_non_ascii_counts_characters() {
        let line =
            "HETATM    1  Å   LIG A   1      11.104   6.134  -6.504  1.00  0.00           N";
        let s = parse_reader(Cursor::new(line)).unwrap();
        assert_eq!(s.symbols(), ["N".to_string()]);
        assert_eq!(s.coordinates()[0], [11.104, 6.134, -6.504]);

        assert_eq!(column("ÅÅÅ", 1..2), "Å");
        assert_eq!(column("Å", 2..5), "");
    }

    #[test]
    fn test_missing_file() {
        let err = parse("/nonexistent/dir/none.pdb").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
