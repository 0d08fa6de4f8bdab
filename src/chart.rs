//! Chart rendering (a schedule in, a Gantt figure out)

use std::cmp;
use std::error::Error;
use std::path::Path;

use bitflags::bitflags;
use chrono::{Duration, NaiveDate};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::Task;

bitflags! {
    /// Optional chart decorations
    pub struct Decorations: u8 {
        /// Vertical grid lines marking the date labels
        const GRID = 1;
        /// A thin dark outline around each task bar
        const OUTLINES = 2;
    }
}

impl Default for Decorations {
    fn default() -> Self {
        Decorations::GRID
    }
}


/// Display options for a Gantt chart, and the rendering entry points.
///
/// Every task of the rendered schedule occupies one horizontal row (the first task of the list is the top row), with a bar spanning its start-to-end date range on a date axis shared by all tasks. \
/// Rendering is a single pass over the list: tasks are neither sorted nor laid out to avoid overlaps.
#[derive(Clone, Debug)]
pub struct GanttChart {
    /// Explicit origin of the time axis. When `None`, the earliest task start date is used
    begin_date: Option<NaiveDate>,
    /// Output dimensions, in pixels
    size: (u32, u32),
    /// An optional caption displayed above the chart
    title: Option<String>,
    decorations: Decorations,
}

impl Default for GanttChart {
    fn default() -> Self {
        Self {
            begin_date: None,
            size: (1000, 500),
            title: None,
            decorations: Decorations::default(),
        }
    }
}

impl GanttChart {
    /// Create a chart with the default display options
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `date` as the origin of the time axis, instead of the earliest task start date.
    /// Tasks that start earlier than this date will have their bars extend left of the axis.
    pub fn set_begin_date(&mut self, date: NaiveDate) {
        self.begin_date = Some(date);
    }

    /// Set the output dimensions, in pixels
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Set a caption, displayed above the chart
    pub fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    /// Choose which [`Decorations`] to draw
    pub fn set_decorations(&mut self, decorations: Decorations) {
        self.decorations = decorations;
    }

    /// Render `tasks` to an image file.
    ///
    /// The backend is picked from the file extension: `.svg` files get a vector chart,
    /// anything else is rasterized to a bitmap.
    pub fn save<P: AsRef<Path>>(&self, tasks: &[Task], path: P) -> Result<(), Box<dyn Error>> {
        let path = path.as_ref();
        let is_svg = path.extension()
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);

        if is_svg {
            let area = SVGBackend::new(path, self.size).into_drawing_area();
            self.draw(tasks, &area)?;
            area.present()?;
        } else {
            let area = BitMapBackend::new(path, self.size).into_drawing_area();
            self.draw(tasks, &area)?;
            area.present()?;
        }

        log::info!("Saved a Gantt chart of {} tasks to {:?}", tasks.len(), path);
        Ok(())
    }

    /// Draw the chart onto a caller-supplied `plotters` drawing area.
    ///
    /// This is the routine [`save`](GanttChart::save) is built on. Use it directly to compose
    /// a Gantt chart with other plots, or to target a backend this crate does not know about
    /// (e.g. an in-memory SVG string, or a GUI canvas).
    ///
    /// The schedule must not be empty: with no row to lay out there is nothing to draw,
    /// and an error is returned.
    pub fn draw<DB>(&self, tasks: &[Task], area: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        if tasks.is_empty() {
            return Err("Unable to render an empty schedule".into());
        }

        let begin = match self.begin_date {
            Some(date) => date,
            None => tasks.iter().map(Task::start).min().unwrap(/* this cannot panic since the schedule is not empty */),
        };
        if tasks.iter().any(|task| task.start() < begin) {
            log::warn!("Some tasks start before the chart begin date ({}). Their bars will extend left of the axis", begin);
        }

        // Make sure the axis spans at least one day, so that the date-to-pixel mapping
        // stays well-defined even for a schedule of zero-duration tasks
        let last_end = tasks.iter().map(Task::end).max().unwrap(/* this cannot panic since the schedule is not empty */);
        let axis_end = cmp::max(last_end, begin + Duration::days(1));

        let n_rows = tasks.len();

        area.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(area);
        builder
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(120);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 24));
        }

        // The y axis has one segment per task, plus a spare one on top so the top bar
        // does not touch the chart edge. Segment 0 is the bottom row, so task `i` of the
        // list goes to segment `n_rows - 1 - i`.
        let mut chart = builder.build_cartesian_2d(begin..axis_end, (0..n_rows).into_segmented())?;

        let row_label = |segment: &SegmentValue<usize>| -> String {
            match segment {
                SegmentValue::CenterOf(row) => n_rows
                    .checked_sub(row + 1)
                    .and_then(|i| tasks.get(i))
                    .map(|task| task.name().to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            }
        };
        let date_label = |date: &NaiveDate| date.format("%Y-%m-%d").to_string();

        let mut mesh = chart.configure_mesh();
        mesh.disable_y_mesh()
            .y_labels(n_rows + 1)
            .y_label_formatter(&row_label)
            .x_labels(8)
            .x_label_formatter(&date_label);
        if !self.decorations.contains(Decorations::GRID) {
            mesh.disable_x_mesh();
        }
        mesh.draw()?;

        let (_, pixel_height) = area.dim_in_pixel();
        let bar_margin = cmp::max(1, pixel_height / (n_rows as u32 + 1) / 10);

        chart.draw_series(tasks.iter().enumerate().map(|(position, task)| {
            let row = n_rows - 1 - position;
            let mut bar = Rectangle::new(
                [(task.start(), SegmentValue::Exact(row)), (task.end(), SegmentValue::Exact(row + 1))],
                plot_color(task.color()).filled(),
            );
            bar.set_margin(bar_margin, bar_margin, 0, 0);
            bar
        }))?;

        if self.decorations.contains(Decorations::OUTLINES) {
            chart.draw_series(tasks.iter().enumerate().map(|(position, task)| {
                let row = n_rows - 1 - position;
                let mut frame = Rectangle::new(
                    [(task.start(), SegmentValue::Exact(row)), (task.end(), SegmentValue::Exact(row + 1))],
                    BLACK.stroke_width(1),
                );
                frame.set_margin(bar_margin, bar_margin, 0, 0);
                frame
            }))?;
        }

        Ok(())
    }
}


/// Render `tasks` into an image file, with all-default display options.
///
/// This is the one-liner for the common case; build a [`GanttChart`] to customize the output.
pub fn gantt<P: AsRef<Path>>(tasks: &[Task], path: P) -> Result<(), Box<dyn Error>> {
    GanttChart::new().save(tasks, path)
}


/// Convert a CSS color into its `plotters` equivalent
fn plot_color(color: &csscolorparser::Color) -> RGBAColor {
    let [r, g, b, a] = color.to_rgba8();
    RGBAColor(r, g, b, f64::from(a) / 255.0)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_colors_convert_to_plot_colors() {
        let opaque = csscolorparser::parse("#1f77b4").unwrap();
        assert_eq!(plot_color(&opaque), RGBAColor(0x1f, 0x77, 0xb4, 1.0));

        let translucent = csscolorparser::parse("rgba(255, 0, 0, 0.5)").unwrap();
        let RGBAColor(r, g, b, a) = plot_color(&translucent);
        assert_eq!((r, g, b), (255, 0, 0));
        assert!((a - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_default_decorations_have_grid_but_no_outlines() {
        let decorations = Decorations::default();
        assert!(decorations.contains(Decorations::GRID));
        assert!(!decorations.contains(Decorations::OUTLINES));
    }
}
