//! # Report Module
//!
//! This module renders the per-iteration console block: position, UTM
//! coordinates, uncertainties, velocity and attitude, grouped the way the
//! receiver demo output has always been grouped.

use std::fmt::Write;

use crate::solution::Solution;

const RULE: &str = "####################################################";

/// Renders one report block for the given solution snapshot.
///
/// Fields the decoder has not populated yet render as `n/a`.
#[must_use]
pub fn render(solution: &Solution) -> String {
    let time = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S.%3f")
        .to_string();
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "[{time}]");
    let _ = writeln!(out, "The GPS location is:");
    let _ = writeln!(
        out,
        "Latitude and Longitude is: {}, {}",
        field(solution.bestpos_lat),
        field(solution.bestpos_lon)
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "UTM x and y is: {}, {}",
        field(solution.utm_x),
        field(solution.utm_y)
    );
    let _ = writeln!(out, "Height is: {}", field(solution.bestpos_hgt));
    let _ = writeln!(out);
    let _ = writeln!(out, "UTM x STD is: {}", field(solution.bestpos_lat_std));
    let _ = writeln!(out, "UTM y STD is: {}", field(solution.bestpos_lon_std));
    let _ = writeln!(out, "UTM h STD is: {}", field(solution.bestpos_hgt_std));
    let _ = writeln!(out);
    let _ = writeln!(out, "UTM x velocity is: {}", field(solution.vel_east));
    let _ = writeln!(out, "UTM y velocity is: {}", field(solution.vel_north));
    let _ = writeln!(out, "UTM h velocity is: {}", field(solution.vel_up));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "UTM x velocity STD is: {}",
        field(solution.vel_east_std)
    );
    let _ = writeln!(
        out,
        "UTM y velocity STD is: {}",
        field(solution.vel_north_std)
    );
    let _ = writeln!(out, "UTM h velocity STD is: {}", field(solution.vel_up_std));
    let _ = writeln!(out);
    let _ = writeln!(out, "heading is: {}", field(solution.heading));
    let _ = writeln!(out, "pitch is: {}", field(solution.pitch));
    let _ = writeln!(out, "roll is: {}", field(solution.roll));
    let _ = writeln!(out, "{RULE}");
    out
}

fn field(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => String::from("n/a"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_solution_renders_na() {
        let out = render(&Solution::default());
        assert!(out.contains("Latitude and Longitude is: n/a, n/a"));
        assert!(out.contains("heading is: n/a"));
    }

    #[test]
    fn test_populated_fields_render_values() {
        let solution = Solution {
            bestpos_lat: Some(31.2304),
            bestpos_lon: Some(121.4737),
            bestpos_hgt: Some(4.5),
            vel_up: Some(-0.02),
            heading: Some(182.4),
            ..Solution::default()
        };
        let out = render(&solution);
        assert!(out.contains("Latitude and Longitude is: 31.2304, 121.4737"));
        assert!(out.contains("Height is: 4.5"));
        assert!(out.contains("UTM h velocity is: -0.02"));
        assert!(out.contains("heading is: 182.4"));
    }

    #[test]
    fn test_report_contains_every_group() {
        let out = render(&Solution::default());
        for needle in [
            "UTM x and y is:",
            "UTM x STD is:",
            "UTM y STD is:",
            "UTM h STD is:",
            "UTM x velocity is:",
            "UTM y velocity is:",
            "UTM h velocity is:",
            "UTM x velocity STD is:",
            "UTM y velocity STD is:",
            "UTM h velocity STD is:",
            "pitch is:",
            "roll is:",
        ] {
            assert!(out.contains(needle), "missing group: {needle}");
        }
    }

    #[test]
    fn test_report_is_fenced() {
        let out = render(&Solution::default());
        assert!(out.starts_with(RULE));
        assert!(out.trim_end().ends_with(RULE));
    }
}
