// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::io::error::Result;
use crate::io::xyz::{WriteOptions, XYZ_COMMENT};
use crate::utils::text;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  /// Second line of written XYZ files.
  pub xyz_comment: String,
  /// Fixed decimals for XYZ coordinates; unset means shortest round-trip.
  pub precision: Option<usize>,
  /// Append the attribution line to `canvas` / `zen` quotes.
  pub with_attribution: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      xyz_comment: XYZ_COMMENT.to_string(),
      precision: None,
      with_attribution: true,
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/molecool/settings.json)
  ///
  /// Any problem falls back to the defaults; the reason is logged.
  pub fn load() -> Self {
    let path = Self::get_path();
    if !path.exists() {
      log::info!("No config found. Using defaults.");
      return Self::default();
    }

    match Self::load_from(&path) {
      Ok(cfg) => {
        log::info!("Config loaded from {:?}", path);
        cfg
      }
      Err(e) => {
        log::warn!("Error loading config {:?}: {}", path, e);
        Self::default()
      }
    }
  }

  pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> Result<PathBuf> {
    let path = Self::get_path();
    self.save_to(&path)?;
    log::info!("Config saved to {:?}", path);
    Ok(path)
  }

  pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
      fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, self)?;
    writer.flush()?;
    Ok(())
  }

  pub fn write_options(&self) -> WriteOptions {
    WriteOptions {
      comment: self.xyz_comment.clone(),
      precision: self.precision,
    }
  }

  pub fn canvas(&self) -> String {
    text::canvas(self.with_attribution)
  }

  pub fn zen(&self) -> String {
    text::zen(self.with_attribution)
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "molssi", "molecool") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
