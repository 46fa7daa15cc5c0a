// src/io/mod.rs
pub mod error;
pub mod pdb;
pub mod xyz;

use std::path::Path;

use crate::model::Structure;
use error::{Error, Result};

pub fn load_structure<P: AsRef<Path>>(path: P) -> Result<Structure> {
    let path = path.as_ref();
    let p = path.to_string_lossy().to_lowercase();

    if p.ends_with(".pdb") || p.ends_with(".ent") {
        pdb::parse(path)
    } else if p.ends_with(".xyz") {
        xyz::parse(path)
    } else {
        Err(Error::UnsupportedFormat(path.display().to_string()))
    }
}

/// Only XYZ output exists; anything else is rejected before touching disk.
pub fn save_structure<P: AsRef<Path>>(path: P, structure: &Structure) -> Result<()> {
    let path = path.as_ref();
    let p = path.to_string_lossy().to_lowercase();

    if p.ends_with(".xyz") {
        xyz::write_structure(path, structure)
    } else {
        Err(Error::UnsupportedFormat(path.display().to_string()))
    }
}
