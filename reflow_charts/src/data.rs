// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Datasets and chart configuration.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

/// One category/series entry. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// The data value. Must be finite and non-negative.
    pub value: f64,
    /// The category label.
    pub text: String,
    /// Optional explicit fill color for this point's shape.
    pub color: Option<Color>,
    /// Optional explicit color for this point's value label.
    pub font_color: Option<Color>,
}

impl DataPoint {
    /// Creates a data point with no explicit colors.
    pub fn new(value: f64, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
            color: None,
            font_color: None,
        }
    }

    /// Sets an explicit shape fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets an explicit value-label color.
    pub fn with_font_color(mut self, font_color: Color) -> Self {
        self.font_color = Some(font_color);
        self
    }
}

/// A single fill/font color pair applied to every element, overriding
/// per-point colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorOverride {
    /// Fill color for every shape.
    pub fill: Color,
    /// Color for every value label.
    pub font: Color,
}

/// Construction-time chart parameters. Immutable for the lifetime of a chart
/// instance; datasets are owned, never shared between instances.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// The dataset, in display order.
    pub points: Vec<DataPoint>,
    /// Optional chart title.
    pub title: Option<String>,
    /// Optional x-axis title.
    pub x_title: Option<String>,
    /// Optional y-axis title.
    pub y_title: Option<String>,
    /// Optional group color override.
    pub color_override: Option<ColorOverride>,
    /// Stroke/marker color for line charts.
    pub line_color: Color,
}

impl ChartConfig {
    /// Creates a configuration for the given dataset with no annotations.
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            title: None,
            x_title: None,
            y_title: None,
            color_override: None,
            line_color: css::BLACK,
        }
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis title.
    pub fn with_x_title(mut self, x_title: impl Into<String>) -> Self {
        self.x_title = Some(x_title.into());
        self
    }

    /// Sets the y-axis title.
    pub fn with_y_title(mut self, y_title: impl Into<String>) -> Self {
        self.y_title = Some(y_title.into());
        self
    }

    /// Applies one fill/font color pair to every element.
    pub fn with_color_override(mut self, color_override: ColorOverride) -> Self {
        self.color_override = Some(color_override);
        self
    }

    /// Sets the line chart stroke/marker color.
    pub fn with_line_color(mut self, line_color: Color) -> Self {
        self.line_color = line_color;
        self
    }

    /// Validates the dataset.
    ///
    /// Charts call this once at construction and refuse to build on failure;
    /// a partial render is never attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.points.is_empty() {
            return Err(ConfigError::EmptyDataset);
        }
        for (index, point) in self.points.iter().enumerate() {
            if !point.value.is_finite() {
                return Err(ConfigError::NonFiniteValue { index });
            }
            if point.value < 0.0 {
                return Err(ConfigError::NegativeValue { index });
            }
        }
        Ok(())
    }

    /// The maximum data value, used as the linear scale's domain top.
    ///
    /// Zero for an all-zero dataset (a defined degenerate case, see
    /// [`crate::TickPlan::for_max`]).
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

/// Dataset/configuration errors reported at chart construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The dataset contains no points; there is nothing to scale against.
    EmptyDataset,
    /// A point's value is NaN or infinite.
    NonFiniteValue {
        /// Index of the offending point.
        index: usize,
    },
    /// A point's value is negative.
    NegativeValue {
        /// Index of the offending point.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn empty_dataset_is_rejected() {
        let config = ChartConfig::new(vec![]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyDataset));
    }

    #[test]
    fn bad_values_are_rejected_with_their_index() {
        let config = ChartConfig::new(vec![
            DataPoint::new(1.0, "a"),
            DataPoint::new(f64::NAN, "b"),
        ]);
        assert_eq!(config.validate(), Err(ConfigError::NonFiniteValue {
            index: 1
        }));

        let config = ChartConfig::new(vec![DataPoint::new(-2.0, "a")]);
        assert_eq!(config.validate(), Err(ConfigError::NegativeValue {
            index: 0
        }));
    }

    #[test]
    fn max_value_over_display_order() {
        let config = ChartConfig::new(vec![
            DataPoint::new(10.0, "A"),
            DataPoint::new(30.0, "B"),
            DataPoint::new(5.0, "C"),
        ]);
        assert!(config.validate().is_ok());
        assert_eq!(config.max_value(), 30.0);
    }
}
