// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive tick planning ("smart ticks").
//!
//! Given only the maximum data value, pick an axis step from the sequence
//! …, 1, 2, 5, 10, 20, 50, 100, … so that the topmost tick strictly exceeds
//! the maximum, then cap the tick count for label density.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// The maximum number of tick slices rendered on a value axis.
pub const MAX_TICKS: usize = 10;

/// An adaptive tick plan for a `[0, max]` value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlan {
    /// The axis upper bound: the value of the topmost tick. Always strictly
    /// greater than the maximum the plan was derived from.
    pub bound: f64,
    /// The number of tick slices, capped at [`MAX_TICKS`].
    pub count: usize,
}

impl TickPlan {
    /// Derives a tick plan from the maximum data value.
    ///
    /// The step is the maximum's decade magnitude, divided by 5 when
    /// `max / magnitude < 2` and by 2 when `< 5`, which draws steps from
    /// 1, 2, 5, 10, 20, 50, …. The slice count is `ceil((max + 1) / step)`;
    /// the `+ 1` guarantees the last tick clears the maximum so the tallest
    /// bar is never flush with it.
    ///
    /// A zero (or non-finite) maximum is defined, not an error: it yields
    /// the minimal plan `{ bound: 1.0, count: 1 }`.
    pub fn for_max(max_value: f64) -> Self {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Self {
                bound: 1.0,
                count: 1,
            };
        }

        // Decade magnitude of the integer part, by division rather than
        // log10/string length so exact powers of ten cannot round astray.
        let mut magnitude = 1.0;
        let mut n = max_value;
        while n >= 10.0 {
            n /= 10.0;
            magnitude *= 10.0;
        }

        let mut step = magnitude;
        if max_value / magnitude < 2.0 {
            step = magnitude / 5.0;
        } else if max_value / magnitude < 5.0 {
            step = magnitude / 2.0;
        }

        let slices = ((max_value + 1.0) / step).ceil();
        let bound = slices * step;
        let count = if slices >= MAX_TICKS as f64 {
            MAX_TICKS
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "slices is a positive ceil result below MAX_TICKS"
            )]
            {
                slices as usize
            }
        };

        Self { bound, count }
    }

    /// The value distance between adjacent rendered ticks.
    ///
    /// Equal to the raw step until the [`MAX_TICKS`] cap engages, after
    /// which rendered ticks are spaced more widely.
    pub fn step(&self) -> f64 {
        self.bound / self.count as f64
    }

    /// The `count + 1` tick values `0, step, …, bound`.
    ///
    /// Each value is computed as `i * bound / count` (multiply first) so the
    /// last tick lands exactly on `bound` without accumulation error.
    pub fn values(&self) -> SmallVec<[f64; MAX_TICKS + 1]> {
        (0..=self.count)
            .map(|i| self.bound * i as f64 / self.count as f64)
            .collect()
    }
}

/// Formats a tick value using just enough decimals for the plan's step.
///
/// Sub-unit steps carry fractional tick values whose binary representation
/// would otherwise leak into labels (`1.4000000000000001`).
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = decimals_for_step(step);
    format!("{value:.decimals$}")
}

fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}
