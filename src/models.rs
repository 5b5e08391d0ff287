use serde::{Deserialize, Serialize};

/// Longest mode tag kept from the model output, in bytes.
pub const MODE_MAX_BYTES: usize = 8;

/// Line of sight and dispersion measure handed to the model.
///
/// No range checks are applied; values reach the external tool as given.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Galactic longitude [deg]
    pub gl: f64,
    /// Galactic latitude [deg]
    pub gb: f64,
    /// Dispersion measure [pc/cm^3]
    pub dm: f64,
}

impl Query {
    pub fn new(gl: f64, gb: f64, dm: f64) -> Self {
        Self { gl, gb, dm }
    }
}

/// One parsed model answer with distance in kpc and a linear scattering time.
///
/// Field order matches the semicolon-separated line printed by the tool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub mode: String,
    pub gl: f64,
    pub gb: f64,
    pub dm: f64,
    pub dm_gal: f64,
    /// Distance [kpc]
    pub dist: f64,
    /// Scattering time, linear (the tool reports log10)
    pub taus: f64,
}

/// A single record value, used when listing fields in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl ModelRecord {
    pub const FIELD_NAMES: [&'static str; 7] = ["mode", "gl", "gb", "dm", "dm_gal", "dist", "taus"];

    /// `(name, value)` pairs in wire order.
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); 7] {
        let n = Self::FIELD_NAMES;
        [
            (n[0], FieldValue::Text(&self.mode)),
            (n[1], FieldValue::Number(self.gl)),
            (n[2], FieldValue::Number(self.gb)),
            (n[3], FieldValue::Number(self.dm)),
            (n[4], FieldValue::Number(self.dm_gal)),
            (n[5], FieldValue::Number(self.dist)),
            (n[6], FieldValue::Number(self.taus)),
        ]
    }
}

/// Cuts `mode` down to at most [`MODE_MAX_BYTES`] bytes without splitting a char.
pub fn truncate_mode(mode: &str) -> &str {
    if mode.len() <= MODE_MAX_BYTES {
        return mode;
    }
    let mut end = MODE_MAX_BYTES;
    while !mode.is_char_boundary(end) {
        end -= 1;
    }
    &mode[..end]
}
