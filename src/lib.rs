// src/lib.rs

//! Small utilities for molecular geometry: read atoms out of PDB-style
//! structure files, write them as XYZ coordinate files, and measure
//! distances between points.
//!
//! ```no_run
//! use molecool::io::{pdb, xyz};
//! use molecool::utils::geometry::calculate_distance;
//!
//! let structure = pdb::parse("protein.pdb")?;
//! let (symbols, coords) = structure.parts();
//! xyz::write("protein.xyz", symbols, coords)?;
//!
//! if coords.len() > 1 {
//!     println!("{:.3}", calculate_distance(coords[0], coords[1]));
//! }
//! # Ok::<(), molecool::Error>(())
//! ```

pub mod config;
pub mod io;
pub mod model;
pub mod utils;

pub use config::Config;
pub use io::error::{Error, Result};
pub use model::{Atom, Point3, Structure};
