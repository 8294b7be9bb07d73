use std::time::Duration;

use crate::error::ConfigError;
use crate::math::polygon_2d::ConvexityRule;
use crate::math::Vector;

/// Size of the drawing surface in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if `p` lies within the canvas, edges included.
    #[must_use]
    pub fn contains(&self, p: Vector) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Tunables for hit-testing, gesture detection, timing and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Radius of a vertex marker and its mouse hit circle.
    pub vertex_radius: f64,
    /// Extra hit radius added for the mouse.
    pub mouse_hit_extra: f64,
    /// Extra hit radius added for touches, which are less precise.
    pub touch_hit_extra: f64,
    /// Maximum per-axis travel between press and release for a click.
    pub click_tolerance: f64,
    pub render_rate_hz: u32,
    pub simulation_rate_hz: u32,
    pub resize_debounce: Duration,
    pub convexity_rule: ConvexityRule,
    /// Seed for display-name draws; `None` seeds from the OS.
    pub name_seed: Option<u64>,
    pub canvas: CanvasSize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            vertex_radius: 7.0,
            mouse_hit_extra: 0.0,
            touch_hit_extra: 10.0,
            click_tolerance: 5.0,
            render_rate_hz: 30,
            simulation_rate_hz: 30,
            resize_debounce: Duration::from_millis(300),
            convexity_rule: ConvexityRule::default(),
            name_seed: None,
            canvas: CanvasSize::default(),
        }
    }
}

impl EditorConfig {
    #[must_use]
    pub fn with_convexity_rule(mut self, rule: ConvexityRule) -> Self {
        self.convexity_rule = rule;
        self
    }

    #[must_use]
    pub fn with_name_seed(mut self, seed: u64) -> Self {
        self.name_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    #[must_use]
    pub fn with_vertex_radius(mut self, radius: f64) -> Self {
        self.vertex_radius = radius;
        self
    }

    #[must_use]
    pub fn with_click_tolerance(mut self, tolerance: f64) -> Self {
        self.click_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_rates(mut self, render_hz: u32, simulation_hz: u32) -> Self {
        self.render_rate_hz = render_hz;
        self.simulation_rate_hz = simulation_hz;
        self
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidParameter {
                    name,
                    reason: "must be positive and finite",
                })
            }
        };
        let non_negative = |name, v: f64| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidParameter {
                    name,
                    reason: "must be non-negative and finite",
                })
            }
        };
        positive("vertex_radius", self.vertex_radius)?;
        non_negative("mouse_hit_extra", self.mouse_hit_extra)?;
        non_negative("touch_hit_extra", self.touch_hit_extra)?;
        non_negative("click_tolerance", self.click_tolerance)?;
        non_negative("canvas width", self.canvas.width)?;
        non_negative("canvas height", self.canvas.height)?;
        if self.render_rate_hz == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "render_rate_hz",
                reason: "must be non-zero",
            });
        }
        if self.simulation_rate_hz == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "simulation_rate_hz",
                reason: "must be non-zero",
            });
        }
        Ok(())
    }
}
