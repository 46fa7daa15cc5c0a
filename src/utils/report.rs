// src/utils/report.rs

use crate::model::Structure;
use std::collections::BTreeMap;
use std::fmt::Write;

const TABLE_ROWS: usize = 20;
const RULE: &str = "--------------------------------------------------";

/// Element counts in symbol order, e.g. `C2 H6 O1`.
pub fn formula(structure: &Structure) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for atom in structure.atoms() {
        *counts.entry(atom.element).or_default() += 1;
    }

    counts
        .iter()
        .map(|(el, n)| format!("{}{}", el, n))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formula plus a coordinate table of the first atoms, for console output
/// after a load.
pub fn structure_summary(structure: &Structure, filename: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "File: {}\nFormula: {}", filename, formula(structure));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{:<8} {:<8} {:<10} {:<10} {:<10}",
        "Index", "Element", "X", "Y", "Z"
    );
    let _ = writeln!(out, "{RULE}");

    for (i, atom) in structure.atoms().take(TABLE_ROWS).enumerate() {
        let [x, y, z] = atom.position;
        let _ = writeln!(
            out,
            "{:<8} {:<8} {:<10.4} {:<10.4} {:<10.4}",
            i, atom.element, x, y, z
        );
    }

    if let Some(rest) = structure.len().checked_sub(TABLE_ROWS).filter(|&n| n > 0) {
        let _ = writeln!(out, "... and {} more atoms.", rest);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_sorted_by_symbol() {
        let mut s = Structure::default();
        s.push("O", [0.0, 0.0, 0.0]);
        s.push("H", [0.96, 0.0, 0.0]);
        s.push("H", [-0.24, 0.93, 0.0]);

        let text = structure_summary(&s, "water.xyz");
        assert!(text.starts_with("File: water.xyz\nFormula: H2 O1\n"));
        assert!(text.contains("0        O        0.0000"));
        assert!(!text.contains("more atoms"));
    }

    #[test]
    fn test_long_structures_truncated() {
        let mut s = Structure::default();
        for i in 0..25 {
            s.push("C", [i as f64, 0.0, 0.0]);
        }
        let text = structure_summary(&s, "chain.pdb");
        assert!(text.contains("Formula: C25"));
        assert_eq!(formula(&s), "C25");
        assert!(text.ends_with("... and 5 more atoms.\n"));
    }
}
