use thiserror::Error;

pub const BASELINE_WIDTH: f64 = 900.0;
pub const HEIGHT_RATIO: f64 = 0.55;
pub const MIN_HEIGHT: f64 = 450.0;
pub const TICK_COUNT: usize = 6;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("chart surface unavailable: container width {0}")]
    NoSurface(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Pixel sizes for one render pass, scaled linearly against a 900px baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub inner_width: f64,
    pub inner_height: f64,

    pub dot_radius: f64,
    pub dot_radius_hover: f64,
    pub dot_radius_dim: f64,
    pub stroke_width: f64,

    pub tick_font: f64,
    pub axis_label_font: f64,
    pub dot_label_font: f64,
    pub dot_label_x: f64,
    pub axis_label_y: f64,
    pub x_label_offset: f64,
    pub tooltip_font: f64,
    pub tooltip_title_font: f64,
    pub legend_font: f64,
    pub legend_swatch: f64,
}

pub fn compute_geometry(container_width: f64) -> Result<Geometry, RenderError> {
    if !container_width.is_finite() || container_width <= 0.0 {
        return Err(RenderError::NoSurface(container_width));
    }
    let width = container_width;
    let height = (width * HEIGHT_RATIO).max(MIN_HEIGHT);
    let s = width / BASELINE_WIDTH;

    let margin = Margin {
        top: round_half_up(40.0 * s),
        right: round_half_up(30.0 * s),
        bottom: round_half_up(60.0 * s),
        left: round_half_up(70.0 * s),
    };

    Ok(Geometry {
        width,
        height,
        margin,
        inner_width: width - margin.left - margin.right,
        inner_height: height - margin.top - margin.bottom,

        dot_radius: scaled(7.0, s, 5.0),
        dot_radius_hover: scaled(10.0, s, 7.0),
        dot_radius_dim: scaled(5.0, s, 3.0),
        stroke_width: scaled(2.0, s, 1.0),

        tick_font: scaled(11.0, s, 9.0),
        axis_label_font: scaled(13.0, s, 11.0),
        dot_label_font: scaled(10.0, s, 8.0),
        dot_label_x: scaled(10.0, s, 7.0),
        axis_label_y: scaled(18.0, s, 14.0),
        x_label_offset: round_half_up(10.0 * s),
        tooltip_font: scaled(12.0, s, 11.0),
        tooltip_title_font: scaled(13.0, s, 12.0),
        legend_font: scaled(12.0, s, 11.0),
        legend_swatch: scaled(10.0, s, 8.0),
    })
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn scaled(base: f64, s: f64, min: f64) -> f64 {
    round_half_up(base * s).max(min)
}

/// Upper domain bound: smallest multiple of 10 at or above `max_observed + 5`.
pub fn domain_ceiling(max_observed: f64) -> f64 {
    let ceiling = ((max_observed + 5.0) / 10.0).ceil() * 10.0;
    if ceiling > 0.0 { ceiling } else { 10.0 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Round tick values covering `[start, stop]` with a step of 1, 2 or 5 times
/// a power of ten, chosen so the tick count lands near `count`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() || stop <= start {
        return Vec::new();
    }
    let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| {
            if inc < 0.0 {
                i as f64 / -inc
            } else {
                i as f64 * inc
            }
        })
        .collect()
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round() as i64;
        i2 = (stop * inv).round() as i64;
        if (i1 as f64) / inv < start {
            i1 += 1;
        }
        if (i2 as f64) / inv > stop {
            i2 -= 1;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round() as i64;
        i2 = (stop / step).round() as i64;
        if (i1 as f64) * step < start {
            i1 += 1;
        }
        if (i2 as f64) * step > stop {
            i2 -= 1;
        }
        inc = step;
    }
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

pub fn format_tick(v: f64) -> String {
    format!("{}%", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_layout.rs"]
mod tests;
