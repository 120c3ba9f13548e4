// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Band and linear scales.
//!
//! Scales come in two halves: a *spec* (domain + options, fixed when a chart
//! is constructed) and an *instance* (spec + pixel range, re-derived on every
//! resize). This keeps the resize path honest: only ranges ever change, and
//! mapping is a deterministic function of `(spec, range)`.

/// Fixed inter-band padding fraction for category bands.
pub const BAND_PADDING: f64 = 0.05;

/// A discrete band scale for categorical charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

/// Specification for a band scale (count + padding, no range yet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBandSpec {
    /// Number of bands.
    pub count: usize,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`, with
    /// the default [`BAND_PADDING`] on both sides of each band.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: BAND_PADDING,
            padding_outer: BAND_PADDING,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        self.band_width() * (1.0 + self.padding_inner)
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the start position for the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + self.step() * index as f64
    }

    /// Returns the center position for the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }
}

impl ScaleBandSpec {
    /// Creates a new band scale spec with the default [`BAND_PADDING`].
    pub fn new(count: usize) -> Self {
        Self {
            count,
            padding_inner: BAND_PADDING,
            padding_outer: BAND_PADDING,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(range, self.count).with_padding(self.padding_inner, self.padding_outer)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain only, no range yet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate (zero-width) domain maps everything to the start of the
    /// range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    ///
    /// Vertical chart axes pass an inverted range `(extent, 0.0)` so larger
    /// values map to smaller pixel y.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn band_positions_increase_without_overlap() {
        let scale = ScaleBandSpec::new(5).instantiate((0.0, 200.0));
        let bw = scale.band_width();
        assert!(bw > 0.0, "bands must have positive width");
        for i in 0..4 {
            let gap = scale.x(i + 1) - (scale.x(i) + bw);
            assert!(scale.x(i + 1) > scale.x(i), "band starts must increase");
            assert!(gap > 0.0, "bands {i} and {} overlap", i + 1);
        }
        // Last band stays inside the range, with the outer padding to spare.
        assert!(scale.x(4) + bw <= 200.0);
    }

    #[test]
    fn band_padding_gap_matches_step_fraction() {
        let scale = ScaleBandSpec::new(4).instantiate((0.0, 100.0));
        let gap = scale.x(1) - (scale.x(0) + scale.band_width());
        assert!((gap - BAND_PADDING * scale.band_width()).abs() < 1e-9);
    }

    #[test]
    fn linear_maps_endpoints_and_is_monotonic() {
        let s = ScaleLinearSpec::new((0.0, 30.0)).instantiate((0.0, 300.0));
        assert!((s.map(0.0) - 0.0).abs() < 1e-9);
        assert!((s.map(30.0) - 300.0).abs() < 1e-9);
        assert!(s.map(10.0) < s.map(20.0));
    }

    #[test]
    fn inverted_range_flips_direction() {
        let s = ScaleLinearSpec::new((0.0, 30.0)).instantiate((300.0, 0.0));
        assert!((s.map(0.0) - 300.0).abs() < 1e-9);
        assert!((s.map(30.0) - 0.0).abs() < 1e-9);
        assert!(s.map(10.0) > s.map(20.0));
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.map(5.0), 0.0);
        assert_eq!(s.map(7.0), 0.0);
    }
}
