//! This crate renders schedules as Gantt charts.
//!
//! A schedule is an ordered list of [`Task`]s, each made of a name, a range of calendar dates, and a display color.
//!
//! The [`GanttChart`] renderer maps every task to one horizontal bar on a shared date axis: the bar starts at the task start date, its length is proportional to the task duration, and tasks are stacked top to bottom in the order they appear in the list. \
//! Charts can be saved to an image file (see [`GanttChart::save`], or the [`gantt`] one-liner), or drawn onto any `plotters` drawing area the caller provides (see [`GanttChart::draw`]).
//!
//! Library-wide defaults (e.g. the color given to tasks that do not specify one) can be overridden, see the [`settings`] module.

pub mod chart;
pub use chart::gantt;
pub use chart::Decorations;
pub use chart::GanttChart;
mod task;
pub use task::Task;

pub mod settings;
pub mod utils;
