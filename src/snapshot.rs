//! This module guards against the conversions drifting between versions. A snapshot records, for a
//! fixed set of hex colors, the result of every step of the `RGB -> XYZ -> LUV -> LCH -> HSLuv`
//! chain. The reference snapshot lives in `data/hsluv-snapshot.csv`; comparing it against a freshly
//! computed one catches any change to a formula or constant, however small.
//!
//! The samples are the 4096 colors `#rrggbb` where each channel is a doubled hex digit, from
//! `#000000` to `#ffffff`.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use color::{Color, ColorError, Hex};
use coord::Coord;
use csv;

/// The largest difference allowed in any channel before a snapshot counts as changed.
pub const SNAPSHOT_TOLERANCE: f64 = 0.000000001;

/// The hex colors a snapshot covers, in order.
///
/// # Example
/// ```
/// # use chromaluv::snapshot::hex_samples;
/// let samples = hex_samples();
/// assert_eq!(samples.len(), 4096);
/// assert_eq!(samples[1], "#000011");
/// assert_eq!(samples[4095], "#ffffff");
/// ```
pub fn hex_samples() -> Vec<String> {
    let digits: Vec<char> = "0123456789abcdef".chars().collect();
    let mut samples = Vec::with_capacity(4096);
    for &r in &digits {
        for &g in &digits {
            for &b in &digits {
                samples.push(format!("#{}{}{}{}{}{}", r, r, g, g, b, b));
            }
        }
    }
    samples
}

/// Every step of the conversion chain for one hex color. The fields are flat so that each record is
/// one CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// The sample, as `#rrggbb`.
    pub hex: String,
    /// Red channel.
    pub rgb_r: f64,
    /// Green channel.
    pub rgb_g: f64,
    /// Blue channel.
    pub rgb_b: f64,
    /// XYZ X.
    pub xyz_x: f64,
    /// XYZ Y.
    pub xyz_y: f64,
    /// XYZ Z.
    pub xyz_z: f64,
    /// CIELUV lightness.
    pub luv_l: f64,
    /// CIELUV u.
    pub luv_u: f64,
    /// CIELUV v.
    pub luv_v: f64,
    /// LCH lightness.
    pub lch_l: f64,
    /// LCH chroma.
    pub lch_c: f64,
    /// LCH hue.
    pub lch_h: f64,
    /// HSLuv hue.
    pub hsluv_h: f64,
    /// HSLuv saturation.
    pub hsluv_s: f64,
    /// HSLuv lightness.
    pub hsluv_l: f64,
}

impl SnapshotRecord {
    /// Runs the conversion chain on a hex color.
    /// # Errors
    /// Returns [`ColorError::InvalidEncoding`] if `hex` isn't a valid hex color.
    pub fn compute(hex: &str) -> Result<SnapshotRecord, ColorError> {
        let rgb = Hex::new(hex).to_rgb()?;
        let xyz = rgb.to_xyz();
        let luv = xyz.to_luv();
        let lch = luv.to_lch();
        let hsluv = lch.to_hsluv();
        Ok(SnapshotRecord {
            hex: hex.to_string(),
            rgb_r: rgb.r,
            rgb_g: rgb.g,
            rgb_b: rgb.b,
            xyz_x: xyz.x,
            xyz_y: xyz.y,
            xyz_z: xyz.z,
            luv_l: luv.l,
            luv_u: luv.u,
            luv_v: luv.v,
            lch_l: lch.l,
            lch_c: lch.c,
            lch_h: lch.h,
            hsluv_h: hsluv.h,
            hsluv_s: hsluv.s,
            hsluv_l: hsluv.l,
        })
    }

    /// The five channel triples, each tagged with the name of its color space.
    pub fn tuples(&self) -> [(&'static str, Coord); 5] {
        [
            ("rgb", Coord::new(self.rgb_r, self.rgb_g, self.rgb_b)),
            ("xyz", Coord::new(self.xyz_x, self.xyz_y, self.xyz_z)),
            ("luv", Coord::new(self.luv_l, self.luv_u, self.luv_v)),
            ("lch", Coord::new(self.lch_l, self.lch_c, self.lch_h)),
            ("hsluv", Coord::new(self.hsluv_h, self.hsluv_s, self.hsluv_l)),
        ]
    }
}

/// Computes a snapshot of every sample in [`hex_samples`] with the current conversions.
pub fn current() -> Vec<SnapshotRecord> {
    hex_samples()
        .iter()
        .filter_map(|hex| SnapshotRecord::compute(hex).ok())
        .collect()
}

/// Reads a snapshot written by [`write_snapshot`].
pub fn read_snapshot<R: io::Read>(reader: R) -> Result<Vec<SnapshotRecord>, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    rdr.deserialize().collect()
}

/// Reads a snapshot from a CSV file.
pub fn read_snapshot_file<P: AsRef<Path>>(path: P) -> Result<Vec<SnapshotRecord>, csv::Error> {
    let file = File::open(path)?;
    read_snapshot(file)
}

/// Writes a snapshot as CSV, one record per row with a header row.
pub fn write_snapshot<W: io::Write>(writer: W, records: &[SnapshotRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// A difference between a reference snapshot and a newer one.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotDrift {
    /// A sample in the reference has no counterpart in the newer snapshot.
    Missing {
        /// The sample.
        hex: String,
    },
    /// A channel of some color space moved by at least the tolerance.
    Changed {
        /// The sample.
        hex: String,
        /// The color space: one of `rgb`, `xyz`, `luv`, `lch`, or `hsluv`.
        tag: &'static str,
        /// The reference value.
        stable: Coord,
        /// The newer value.
        current: Coord,
    },
}

/// Compares every sample of `stable` against the matching sample of `current`, returning every
/// difference of `tolerance` or more. An empty result means the snapshots agree.
pub fn compare(
    stable: &[SnapshotRecord],
    current: &[SnapshotRecord],
    tolerance: f64,
) -> Vec<SnapshotDrift> {
    let by_hex: HashMap<&str, &SnapshotRecord> =
        current.iter().map(|r| (r.hex.as_str(), r)).collect();
    let mut drift = vec![];
    for record in stable {
        let newer = match by_hex.get(record.hex.as_str()) {
            Some(newer) => newer,
            None => {
                drift.push(SnapshotDrift::Missing {
                    hex: record.hex.clone(),
                });
                continue;
            }
        };
        for (&(tag, old), &(_, new)) in record.tuples().iter().zip(newer.tuples().iter()) {
            let moved = old
                .to_array()
                .iter()
                .zip(new.to_array().iter())
                .any(|(a, b)| !((a - b).abs() < tolerance));
            if moved {
                drift.push(SnapshotDrift::Changed {
                    hex: record.hex.clone(),
                    tag,
                    stable: old,
                    current: new,
                });
            }
        }
    }
    if !drift.is_empty() {
        debug!("snapshot drifted in {} places", drift.len());
    }
    drift
}
