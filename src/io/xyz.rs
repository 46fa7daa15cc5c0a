use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use super::error::{Error, Format, Result};
use crate::model::{Point3, Structure};

/// Comment written on the second line.
pub const XYZ_COMMENT: &str = "XYZ file";

/// How coordinates are rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct WriteOptions {
    pub comment: String,
    /// Digits after the decimal point; `None` prints the shortest
    /// representation that parses back to the same `f64`.
    pub precision: Option<usize>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            comment: XYZ_COMMENT.to_string(),
            precision: None,
        }
    }
}

/// Writes `symbols` and `coordinates` as an XYZ file.
///
/// The two slices must have the same length, and neither the comment nor a
/// symbol may contain a line break (symbols also no tab). The checks happen
/// before the file is opened, so a rejected call never creates or
/// truncates anything.
pub fn write<P: AsRef<Path>>(path: P, symbols: &[String], coordinates: &[Point3]) -> Result<()> {
    write_with(path, symbols, coordinates, &WriteOptions::default())
}

pub fn write_structure<P: AsRef<Path>>(path: P, structure: &Structure) -> Result<()> {
    let (symbols, coordinates) = structure.parts();
    write(path, symbols, coordinates)
}

pub fn write_with<P: AsRef<Path>>(
    path: P,
    symbols: &[String],
    coordinates: &[Point3],
    options: &WriteOptions,
) -> Result<()> {
    validate(symbols, coordinates, options)?;

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, symbols, coordinates, options)?;
    writer.flush()?;

    log::debug!(
        "Wrote {} atoms to {}",
        symbols.len(),
        path.as_ref().display()
    );
    Ok(())
}

pub fn write_to<W: Write>(
    mut out: W,
    symbols: &[String],
    coordinates: &[Point3],
    options: &WriteOptions,
) -> Result<()> {
    validate(symbols, coordinates, options)?;

    writeln!(out, "{}", symbols.len())?;
    writeln!(out, "{}", options.comment)?;

    for (symbol, p) in symbols.iter().zip(coordinates) {
        match options.precision {
            Some(digits) => writeln!(
                out,
                "{}\t{:.*}\t{:.*}\t{:.*}",
                symbol, digits, p[0], digits, p[1], digits, p[2]
            )?,
            None => writeln!(out, "{}\t{}\t{}\t{}", symbol, p[0], p[1], p[2])?,
        }
    }

    Ok(())
}

/// Everything that would desynchronize the count line from the body.
fn validate(symbols: &[String], coordinates: &[Point3], options: &WriteOptions) -> Result<()> {
    if symbols.len() != coordinates.len() {
        return Err(Error::Validation {
            symbols: symbols.len(),
            coordinates: coordinates.len(),
        });
    }
    if has_line_break(&options.comment) {
        return Err(Error::InvalidText {
            field: "comment",
            value: options.comment.clone(),
        });
    }
    if let Some(bad) = symbols.iter().find(|s| has_line_break(s) || s.contains('\t')) {
        return Err(Error::InvalidText {
            field: "symbol",
            value: bad.clone(),
        });
    }
    Ok(())
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

/// Body fields: tab-separated as written by this module, otherwise any
/// whitespace. Tab splitting keeps empty symbols and inner spaces intact.
fn split_fields(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        let mut parts: Vec<&str> = line.split('\t').collect();
        for part in parts.iter_mut().skip(1) {
            *part = part.trim();
        }
        parts
    } else {
        line.split_whitespace().collect()
    }
}

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
    let mut lines = reader.lines();

    // 1. Number of atoms
    let count_line = lines
        .next()
        .ok_or_else(|| Error::parse(Format::Xyz, 1, "empty file"))??;
    let n_atoms: usize = count_line
        .trim()
        .parse()
        .map_err(|_| {
            Error::parse(Format::Xyz, 1, format!("invalid atom count '{}'", count_line.trim()))
        })?;

    // 2. Comment line
    lines
        .next()
        .ok_or_else(|| Error::parse(Format::Xyz, 2, "missing comment line"))??;

    // 3. Atoms
    let mut structure = Structure::with_capacity(n_atoms);
    for (i, line) in lines.enumerate() {
        let line = line?;
        let line_no = i + 3;
        if line.trim().is_empty() {
            continue;
        }
        let parts = split_fields(&line);
        if parts.len() != 4 {
            return Err(Error::parse(
                Format::Xyz,
                line_no,
                format!("expected symbol and 3 coordinates, found {} fields", parts.len()),
            ));
        }

        let mut position = [0.0; 3];
        for (slot, token) in position.iter_mut().zip(&parts[1..]) {
            *slot = token.parse().map_err(|_| {
                Error::parse(Format::Xyz, line_no, format!("invalid coordinate '{}'", token))
            })?;
        }
        structure.push(parts[0], position);
    }

    if structure.len() != n_atoms {
        return Err(Error::parse(
            Format::Xyz,
            1,
            format!("expected {} atoms, but found {}", n_atoms, structure.len()),
        ));
    }

    Ok(structure)
}
