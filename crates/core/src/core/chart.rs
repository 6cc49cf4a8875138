//! PAS convergence chart geometry.
//!
//! All coordinates are CSS pixels. The browser side re-measures the canvas on
//! every draw, sizes the backing store by the device pixel ratio, scales the
//! context, and then strokes exactly what [`PasChart`] describes.

pub const MARGIN_LEFT: f64 = 40.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 40.0;

pub const GRID_DIVISIONS: u32 = 5;
pub const THRESHOLDS: [f64; 4] = [0.3, 0.5, 0.7, 0.9];
pub const EMPHASIZED_THRESHOLD: f64 = 0.7;

pub const TIME_LABEL: &str = "Time →";

/// Y-axis labels, top grid line first.
const Y_LABELS: [&str; GRID_DIVISIONS as usize + 1] = ["1.0", "0.8", "0.6", "0.4", "0.2", "0.0"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            css_width: sanitize_len(css_width),
            css_height: sanitize_len(css_height),
            device_pixel_ratio: dpr,
        }
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.device_pixel_ratio).round();
        let h = (self.css_height * self.device_pixel_ratio).round();
        (w.min(u32::MAX as f64) as u32, h.min(u32::MAX as f64) as u32)
    }

    fn plot_width(&self) -> f64 {
        self.css_width - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> f64 {
        self.css_height - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn baseline(&self) -> f64 {
        self.css_height - MARGIN_BOTTOM
    }

    /// Map a value in `[0,1]` to a y coordinate.
    pub fn value_to_y(&self, v: f64) -> f64 {
        self.baseline() - self.plot_height() * v
    }
}

fn sanitize_len(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HLine {
    pub y: f64,
    pub x0: f64,
    pub x1: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdMarker {
    pub value: f64,
    pub line: HLine,
    pub emphasized: bool,
}

impl ThresholdMarker {
    pub fn line_width(&self) -> f64 {
        if self.emphasized {
            2.0
        } else {
            1.0
        }
    }

    /// Canvas dash pattern; empty means solid.
    pub fn dash(&self) -> &'static [f64] {
        if self.emphasized {
            &[]
        } else {
            &[5.0, 5.0]
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PasChart {
    pub viewport: Viewport,
    pub grid: Vec<HLine>,
    pub thresholds: Vec<ThresholdMarker>,
    /// Stroked PAS polyline; empty unless there are at least two samples.
    pub line: Vec<(f64, f64)>,
    /// Closed polygon under the line for the gradient fill.
    pub fill: Vec<(f64, f64)>,
    /// Gradient runs top-to-bottom over this span.
    pub fill_gradient_y: (f64, f64),
    pub y_labels: Vec<AxisLabel>,
    pub time_label: AxisLabel,
}

impl PasChart {
    pub fn layout(viewport: Viewport, pas: &[f64]) -> Self {
        let w = viewport.css_width;
        let h = viewport.css_height;
        let x0 = MARGIN_LEFT;
        let x1 = w - MARGIN_RIGHT;
        let divisions = f64::from(GRID_DIVISIONS);

        let grid: Vec<HLine> = (0..=GRID_DIVISIONS)
            .map(|i| HLine {
                y: (h - MARGIN_BOTTOM) * (f64::from(i) / divisions) + MARGIN_TOP,
                x0,
                x1,
            })
            .collect();

        let thresholds = THRESHOLDS
            .iter()
            .map(|&value| ThresholdMarker {
                value,
                line: HLine {
                    y: viewport.value_to_y(value),
                    x0,
                    x1,
                },
                emphasized: value == EMPHASIZED_THRESHOLD,
            })
            .collect();

        let (line, fill) = if pas.len() > 1 {
            let last = (pas.len() - 1).max(1) as f64;
            let plot_w = viewport.plot_width();
            let line: Vec<(f64, f64)> = pas
                .iter()
                .enumerate()
                .map(|(i, &v)| (x0 + plot_w * (i as f64 / last), viewport.value_to_y(v)))
                .collect();

            let mut fill = line.clone();
            fill.push((x0 + plot_w, viewport.baseline()));
            fill.push((x0, viewport.baseline()));
            (line, fill)
        } else {
            (Vec::new(), Vec::new())
        };

        let y_labels = Y_LABELS
            .iter()
            .zip(&grid)
            .map(|(text, line)| AxisLabel {
                text: text.to_string(),
                x: MARGIN_LEFT - 5.0,
                y: line.y + 5.0,
            })
            .collect();

        let time_label = AxisLabel {
            text: TIME_LABEL.to_string(),
            x: w / 2.0 + MARGIN_LEFT / 2.0,
            y: h - 5.0,
        };

        Self {
            viewport,
            grid,
            thresholds,
            line,
            fill,
            fill_gradient_y: (MARGIN_TOP, viewport.baseline()),
            y_labels,
            time_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn viewport_sanitizes_ratio() {
        assert_eq!(Viewport::new(100.0, 50.0, 0.0).device_pixel_ratio, 1.0);
        assert_eq!(Viewport::new(100.0, 50.0, f64::NAN).device_pixel_ratio, 1.0);
        assert_eq!(Viewport::new(100.0, 50.0, 2.0).backing_size(), (200, 100));
        assert_eq!(Viewport::new(101.0, 51.0, 1.5).backing_size(), (152, 77));
    }

    #[test]
    fn grid_and_thresholds() {
        let vp = Viewport::new(400.0, 260.0, 1.0);
        let chart = PasChart::layout(vp, &[]);

        assert_eq!(chart.grid.len(), 6);
        assert!(approx(chart.grid[0].y, 20.0));
        assert!(approx(chart.grid[5].y, 240.0));
        assert!(approx(chart.grid[0].x0, 40.0));
        assert!(approx(chart.grid[0].x1, 380.0));

        assert_eq!(chart.thresholds.len(), 4);
        let emphasized: Vec<f64> = chart
            .thresholds
            .iter()
            .filter(|t| t.emphasized)
            .map(|t| t.value)
            .collect();
        assert_eq!(emphasized, vec![0.7]);

        // y = h - 40 - (h - 60) * v
        let t07 = chart.thresholds[2];
        assert!(approx(t07.line.y, 260.0 - 40.0 - 200.0 * 0.7));
        assert_eq!(t07.line_width(), 2.0);
        assert!(t07.dash().is_empty());
        assert_eq!(chart.thresholds[0].dash(), &[5.0, 5.0]);
    }

    #[test]
    fn single_sample_draws_no_line() {
        let chart = PasChart::layout(Viewport::new(300.0, 200.0, 1.0), &[0.5]);
        assert!(chart.line.is_empty());
        assert!(chart.fill.is_empty());
    }

    #[test]
    fn line_spans_plot_width() {
        let vp = Viewport::new(300.0, 200.0, 2.0);
        let chart = PasChart::layout(vp, &[0.0, 0.5, 1.0]);
        assert_eq!(chart.line.len(), 3);
        assert!(approx(chart.line[0].0, 40.0));
        assert!(approx(chart.line[1].0, 40.0 + 240.0 * 0.5));
        assert!(approx(chart.line[2].0, 280.0));
        assert!(approx(chart.line[0].1, 160.0));
        assert!(approx(chart.line[2].1, 20.0));

        assert_eq!(chart.fill.len(), 5);
        assert_eq!(chart.fill[3], (280.0, 160.0));
        assert_eq!(chart.fill[4], (40.0, 160.0));
        assert_eq!(chart.fill_gradient_y, (20.0, 160.0));
    }

    #[test]
    fn labels() {
        let chart = PasChart::layout(Viewport::new(300.0, 200.0, 1.0), &[]);
        let texts: Vec<&str> = chart.y_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["1.0", "0.8", "0.6", "0.4", "0.2", "0.0"]);
        assert!(approx(chart.y_labels[0].x, 35.0));
        assert!(approx(chart.y_labels[0].y, 25.0));
        assert_eq!(chart.time_label.text, "Time →");
        assert!(approx(chart.time_label.x, 170.0));
        assert!(approx(chart.time_label.y, 195.0));
    }
}
