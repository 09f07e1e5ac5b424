//! Line chart rendering (plotters)

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::{Error, Result};

const FONT_FAMILY: &str = "sans-serif";

/// Upper bound on x axis labels, whatever the epoch span.
const MAX_X_LABELS: usize = 20;

/// One line on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    label: String,
    points: Vec<(u64, f64)>,
}

impl Curve {
    /// Create a curve from `(epoch, value)` points in drawing order.
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<(u64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Legend and end-of-line label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Points in drawing order.
    #[must_use]
    pub fn points(&self) -> &[(u64, f64)] {
        &self.points
    }
}

/// Output image format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Raster image; the encoder follows the extension (PNG by default).
    Bitmap,
    /// Scalable vector graphics.
    Svg,
}

impl ImageFormat {
    /// `.svg` (any case) is SVG, everything else is a bitmap.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Bitmap,
        }
    }
}

/// Chart geometry and labelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Canvas size in pixels
    pub size: (u32, u32),
    /// Dots per inch; font sizes are given in points and scaled by this
    pub dpi: u32,
    /// Metric name shown on the Y axis and in the title
    pub column: String,
}

impl ChartStyle {
    /// Convert a size in points to pixels at this DPI.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn px(&self, points: f64) -> u32 {
        (points * f64::from(self.dpi) / 72.0).round().max(1.0) as u32
    }
}

/// Axis bounds covering every point of every curve. The x axis gets extra
/// room on the right for the end-of-line labels.
fn axis_bounds(curves: &[Curve]) -> Option<((u64, u64), (f64, f64))> {
    let mut points = curves.iter().flat_map(|c| c.points.iter().copied());
    let (x0, y0) = points.next()?;
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
    for (x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    x_max = x_max.saturating_add((x_max - x_min) / 10 + 1);
    if x_min == x_max {
        x_min -= 1;
    }
    let pad = if (y_max - y_min).abs() < f64::EPSILON {
        0.5
    } else {
        (y_max - y_min) * 0.05
    };
    Some(((x_min, x_max), (y_min - pad, y_max + pad)))
}

/// Number of x axis labels: about one per 10 epochs, between 2 and
/// [`MAX_X_LABELS`].
fn x_label_count(x_min: u64, x_max: u64) -> usize {
    let wanted = x_max.saturating_sub(x_min) / 10 + 1;
    usize::try_from(wanted)
        .unwrap_or(MAX_X_LABELS)
        .clamp(2, MAX_X_LABELS)
}

/// Draw the curves onto any plotters drawing area.
///
/// # Errors
///
/// Returns [`Error::Render`] if `curves` has no points or the backend
/// fails to draw.
pub fn draw_curves<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    style: &ChartStyle,
    curves: &[Curve],
) -> Result<()> {
    let render = |e: DrawingAreaErrorKind<DB::ErrorType>| Error::Render(e.to_string());
    let ((x_min, x_max), (y_min, y_max)) =
        axis_bounds(curves).ok_or_else(|| Error::Render("no points to plot".to_string()))?;

    root.fill(&WHITE).map_err(render)?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Training Curves for {}", style.column),
            (FONT_FAMILY, style.px(14.0)),
        )
        .margin(style.px(12.0))
        .x_label_area_size(style.px(36.0))
        .y_label_area_size(style.px(54.0))
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render)?;

    chart
        .configure_mesh()
        .x_desc("Epoch")
        .y_desc(style.column.as_str())
        .x_labels(x_label_count(x_min, x_max))
        .label_style((FONT_FAMILY, style.px(9.0)))
        .axis_desc_style((FONT_FAMILY, style.px(11.0)))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(render)?;

    let line_width = style.px(1.5);
    for (i, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        chart
            .draw_series(LineSeries::new(
                curve.points.iter().copied(),
                color.stroke_width(line_width),
            ))
            .map_err(render)?
            .label(curve.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });

        if let Some(&last) = curve.points.last() {
            chart
                .draw_series(std::iter::once(Text::new(
                    curve.label.clone(),
                    last,
                    (FONT_FAMILY, style.px(8.0)).into_font().color(&color),
                )))
                .map_err(render)?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT_FAMILY, style.px(9.0)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render)?;

    root.present().map_err(render)?;
    Ok(())
}

/// Render the chart to `path`, picking the backend from the extension.
///
/// # Errors
///
/// Returns [`Error::Render`] if drawing or encoding fails.
pub fn render_to_file(path: &Path, style: &ChartStyle, curves: &[Curve]) -> Result<()> {
    match ImageFormat::from_path(path) {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, style.size).into_drawing_area();
            draw_curves(&root, style, curves)
        }
        ImageFormat::Bitmap => {
            let root = BitMapBackend::new(path, style.size).into_drawing_area();
            draw_curves(&root, style, curves)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_format_from_path() {
        assert_eq!(ImageFormat::from_path(Path::new("a/b.svg")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("a/b.SVG")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("a/b.png")), ImageFormat::Bitmap);
        assert_eq!(ImageFormat::from_path(Path::new("a/b")), ImageFormat::Bitmap);
    }

    #[test]
    fn test_axis_bounds() {
        let curves = vec![
            Curve::new("a", vec![(1, 0.2), (2, 0.4)]),
            Curve::new("b", vec![(1, 0.0), (5, 1.0)]),
        ];
        let ((x0, x1), (y0, y1)) = axis_bounds(&curves).unwrap();
        assert_eq!((x0, x1), (1, 6));
        assert!((y0 - -0.05).abs() < 1e-12);
        assert!((y1 - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_axis_bounds_single_point() {
        let curves = vec![Curve::new("a", vec![(3, 0.7)])];
        let ((x0, x1), (y0, y1)) = axis_bounds(&curves).unwrap();
        assert_eq!((x0, x1), (3, 4));
        assert!(y0 < 0.7 && y1 > 0.7);
    }

    #[test]
    fn test_axis_bounds_saturate_at_max_epoch() {
        let curves = vec![Curve::new("a", vec![(1, 0.1), (u64::MAX, 0.2)])];
        let ((x0, x1), _) = axis_bounds(&curves).unwrap();
        assert_eq!((x0, x1), (1, u64::MAX));

        let curves = vec![Curve::new("a", vec![(u64::MAX, 0.2)])];
        let ((x0, x1), _) = axis_bounds(&curves).unwrap();
        assert_eq!((x0, x1), (u64::MAX - 1, u64::MAX));
    }

    #[test]
    fn test_x_label_count() {
        assert_eq!(x_label_count(1, 2), 2);
        assert_eq!(x_label_count(0, 100), 11);
        assert_eq!(x_label_count(1, 100_000_001), MAX_X_LABELS);
        assert_eq!(x_label_count(0, u64::MAX), MAX_X_LABELS);
    }

    #[test]
    fn test_axis_bounds_empty() {
        assert!(axis_bounds(&[]).is_none());
        assert!(axis_bounds(&[Curve::new("a", Vec::new())]).is_none());
    }

    #[test]
    fn test_point_scaling() {
        let style = ChartStyle {
            size: (1000, 600),
            dpi: 100,
            column: "loss".into(),
        };
        assert_eq!(style.px(72.0), 100);
        assert_eq!(style.px(0.0), 1);
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn test_render_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let style = ChartStyle {
            size: (1000, 600),
            dpi: 100,
            column: "mei_mAP50".into(),
        };
        let curves = vec![Curve::new("run", vec![(1, 0.1), (2, 0.3), (3, 0.2)])];
        render_to_file(&path, &style, &curves).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }
}
