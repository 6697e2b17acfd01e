//! Polar projection for the radar chart.
//! Axis 0 points straight up and axes advance clockwise, so both renderers
//! lay the subjects out identically.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Maps `(axis index, value)` onto the unit disc.
#[derive(Debug, Clone, Copy)]
pub struct RadarGeometry {
    pub axes: usize,
    pub max: f64,
}

impl RadarGeometry {
    pub fn new(axes: usize, max: f64) -> Self {
        Self { axes, max }
    }

    /// Angle of an axis in radians, counter-clockwise from +x.
    pub fn axis_angle(&self, axis: usize) -> f64 {
        if self.axes == 0 {
            return FRAC_PI_2;
        }
        FRAC_PI_2 - TAU * axis as f64 / self.axes as f64
    }

    /// Point for `value` on `axis`. `max` lands on the unit circle.
    pub fn project(&self, axis: usize, value: f64) -> [f64; 2] {
        let r = if self.max > 0.0 { value / self.max } else { 0.0 };
        let angle = self.axis_angle(axis);
        [r * angle.cos(), r * angle.sin()]
    }

    /// Closed polygon through one value per axis.
    pub fn polygon(&self, values: &[f64]) -> Vec<[f64; 2]> {
        values
            .iter()
            .enumerate()
            .map(|(axis, &v)| self.project(axis, v))
            .collect()
    }

    /// Grid ring at `value`, one vertex per axis.
    pub fn ring(&self, value: f64) -> Vec<[f64; 2]> {
        (0..self.axes).map(|axis| self.project(axis, value)).collect()
    }

    /// Evenly spaced grid values from 0 (exclusive) to `max`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        (1..=count)
            .map(|i| self.max * i as f64 / count as f64)
            .collect()
    }

    /// Position of a radius label drawn along a fixed angle in degrees.
    pub fn radius_label_position(&self, value: f64, angle_deg: f64) -> [f64; 2] {
        let r = if self.max > 0.0 { value / self.max } else { 0.0 };
        let angle = angle_deg.to_radians();
        [r * angle.cos(), r * angle.sin()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn full_mark_reaches_unit_circle_pointing_up() {
        let geo = RadarGeometry::new(4, 140.0);
        let [x, y] = geo.project(0, 140.0);
        assert!(x.abs() < EPS);
        assert!((y - 1.0).abs() < EPS);
    }

    #[test]
    fn axes_advance_clockwise() {
        let geo = RadarGeometry::new(4, 140.0);
        // second axis is to the right, third at the bottom
        let [x1, y1] = geo.project(1, 140.0);
        assert!((x1 - 1.0).abs() < EPS && y1.abs() < EPS);
        let [x2, y2] = geo.project(2, 70.0);
        assert!(x2.abs() < EPS && (y2 + 0.5).abs() < EPS);
    }

    #[test]
    fn ring_and_ticks() {
        let geo = RadarGeometry::new(4, 140.0);
        assert_eq!(geo.ring(140.0).len(), 4);
        assert_eq!(geo.ticks(4), vec![35.0, 70.0, 105.0, 140.0]);
        assert!(geo.ticks(0).is_empty());
    }

    #[test]
    fn zero_max_collapses_to_origin() {
        let geo = RadarGeometry::new(3, 0.0);
        assert_eq!(geo.project(1, 50.0), [0.0, 0.0]);
    }
}
