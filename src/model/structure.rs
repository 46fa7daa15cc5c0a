use crate::io::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Cartesian coordinate, no unit attached.
pub type Point3 = [f64; 3];

/// Borrowed view of one atom record: a symbol and its position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atom<'a> {
    pub element: &'a str,
    pub position: Point3,
}

/// Element symbols and coordinates kept as two parallel sequences.
///
/// Both vectors always have the same length; the only ways in are
/// [`Structure::new`], which checks, and [`Structure::push`], which grows
/// both sides together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStructure")]
pub struct Structure {
    symbols: Vec<String>,
    coordinates: Vec<Point3>,
}

// Deserialization goes through the same length check as `new`.
#[derive(Deserialize)]
struct RawStructure {
    symbols: Vec<String>,
    coordinates: Vec<Point3>,
}

impl TryFrom<RawStructure> for Structure {
    type Error = Error;

    fn try_from(raw: RawStructure) -> Result<Self> {
        Structure::new(raw.symbols, raw.coordinates)
    }
}

impl Structure {
    pub fn new(symbols: Vec<String>, coordinates: Vec<Point3>) -> Result<Self> {
        if symbols.len() != coordinates.len() {
            return Err(Error::Validation {
                symbols: symbols.len(),
                coordinates: coordinates.len(),
            });
        }
        Ok(Self { symbols, coordinates })
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
            coordinates: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, symbol: impl Into<String>, position: Point3) {
        self.symbols.push(symbol.into());
        self.coordinates.push(position);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn coordinates(&self) -> &[Point3] {
        &self.coordinates
    }

    pub fn parts(&self) -> (&[String], &[Point3]) {
        (&self.symbols, &self.coordinates)
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Point3>) {
        (self.symbols, self.coordinates)
    }

    /// Atoms in file order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom<'_>> + '_ {
        self.symbols
            .iter()
            .zip(self.coordinates.iter())
            .map(|(element, &position)| Atom {
                element: element.as_str(),
                position,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let err = Structure::new(vec!["C".into(), "O".into()], vec![[0.0; 3]; 3]).unwrap_err();
        match err {
            Error::Validation { symbols, coordinates } => {
                assert_eq!(symbols, 2);
                assert_eq!(coordinates, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_push_keeps_sequences_aligned() {
        let mut s = Structure::default();
        s.push("Na", [1.0, 2.0, 3.0]);
        s.push("Cl", [4.0, 5.0, 6.0]);

        assert_eq!(s.len(), 2);
        let atoms: Vec<_> = s.atoms().collect();
        assert_eq!(atoms[1].element, "Cl");
        assert_eq!(atoms[1].position, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_deserialize_checks_lengths() {
        let ok: Structure =
            serde_json::from_str(r#"{"symbols":["H"],"coordinates":[[0.0,0.0,0.74]]}"#).unwrap();
        assert_eq!(ok.symbols(), ["H".to_string()]);

        let bad = serde_json::from_str::<Structure>(r#"{"symbols":["H","H"],"coordinates":[]}"#);
        assert!(bad.is_err());
    }
}
