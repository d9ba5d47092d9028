//! Trait with default implementations for converting a ray-trace output
//! into a json string, writing itself, and saving itself in a json file.
//!
//! Mirrors the teacher's `write_json::WriteJson` trait: the output types
//! ([`crate::output::NavPoint`], [`crate::output::PlanarTrace`]) opt in
//! with an empty `impl WriteJson for ... {}`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// Default implementations for converting an object that is `Serialize`
/// into a json string, writing itself, and saving itself in a json file.
pub trait WriteJson: Serialize {
    /// Convert `Self` to a json string.
    fn as_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }

    /// Write `Self` to a writer, as a json string.
    ///
    /// # Returns
    /// `Ok(usize)` : the number of bytes written.
    fn write<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        let json = self.as_json();
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(json.as_bytes().len())
    }

    /// Save `Self` as a json string to a file at the given path.
    ///
    /// # Returns
    /// `Ok(usize)` : the number of bytes written.
    fn save_file(&self, path: &Path) -> io::Result<usize> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer)
    }
}

impl WriteJson for crate::output::NavPoint {}
impl WriteJson for crate::output::PlanarTrace {}
