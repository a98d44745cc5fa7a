//! # Solution Module
//!
//! This module defines the flat set of scalar fields a UM982 decoder exposes
//! after each decode call: position, velocity and attitude, together with
//! their standard deviations.

/// Snapshot of the decoder's current navigation solution.
///
/// Every field is `None` until the decoder has produced a value for it; the
/// monitor never writes these fields, it only reads them after each decode
/// call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    /// Best-position latitude, degrees.
    pub bestpos_lat: Option<f64>,
    /// Best-position longitude, degrees.
    pub bestpos_lon: Option<f64>,
    /// Best-position height above sea level, metres.
    pub bestpos_hgt: Option<f64>,
    /// Latitude standard deviation, metres. Also usable as the UTM x STD.
    pub bestpos_lat_std: Option<f64>,
    /// Longitude standard deviation, metres. Also usable as the UTM y STD.
    pub bestpos_lon_std: Option<f64>,
    /// Height standard deviation, metres.
    pub bestpos_hgt_std: Option<f64>,
    /// UTM easting as computed by the decoder, metres.
    pub utm_x: Option<f64>,
    /// UTM northing as computed by the decoder, metres.
    pub utm_y: Option<f64>,
    /// Velocity east, m/s.
    pub vel_east: Option<f64>,
    /// Velocity north, m/s.
    pub vel_north: Option<f64>,
    /// Velocity up, m/s.
    pub vel_up: Option<f64>,
    /// Velocity east standard deviation, m/s.
    pub vel_east_std: Option<f64>,
    /// Velocity north standard deviation, m/s.
    pub vel_north_std: Option<f64>,
    /// Velocity up standard deviation, m/s.
    pub vel_up_std: Option<f64>,
    /// Heading, degrees.
    pub heading: Option<f64>,
    /// Pitch, degrees.
    pub pitch: Option<f64>,
    /// Roll, degrees.
    pub roll: Option<f64>,
}

impl Solution {
    /// Returns `true` while no field has been populated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Solution::default()
    }
}
