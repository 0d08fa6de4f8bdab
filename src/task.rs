//! Schedule items (the rows of a Gantt chart)

use chrono::{Duration, NaiveDate};
use csscolorparser::Color;
use serde::{Deserialize, Serialize};

use crate::settings;

/// A single schedule item.
///
/// A task spans a range of calendar dates (day resolution, no time-of-day), and carries the color its bar will be drawn with.
/// Tasks are read-only once built: create them, collect them in a list, and hand the list to a [`GanttChart`](crate::GanttChart).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The display name of the task. This is also its row label in rendered charts
    name: String,

    /// The first day of the task
    start: NaiveDate,
    /// The last day of the task.
    /// This is expected not to be before `start`. An inverted range is not rejected, it merely renders as a degenerate bar
    end: NaiveDate,

    /// The color of the task bar
    color: Color,
}

impl Task {
    /// Create a task spanning `start` to `end`, with the default color.
    ///
    /// See [`crate::settings::DEFAULT_COLOR`] to override what "the default color" means.
    pub fn new(name: String, start: NaiveDate, end: NaiveDate) -> Self {
        Self::new_with_color(name, start, end, settings::default_color())
    }

    /// Create a task that lasts `days` days from `start`, with the default color.
    ///
    /// This is a convenience for schedules expressed as durations rather than end dates:
    /// the end date is computed as `start + days`.
    pub fn with_duration(name: String, start: NaiveDate, days: i64) -> Self {
        let end = start + Duration::days(days);
        Self::new(name, start, end)
    }

    /// Create a task with an explicit bar color
    pub fn new_with_color(name: String, start: NaiveDate, end: NaiveDate, color: Color) -> Self {
        if end < start {
            log::warn!("Task {:?} ends before it starts ({} < {}). It will render as a degenerate bar", name, end, start);
        }
        Self { name, start, end, color }
    }

    pub fn name(&self) -> &str       { &self.name  }
    pub fn start(&self) -> NaiveDate { self.start  }
    pub fn end(&self) -> NaiveDate   { self.end    }
    pub fn color(&self) -> &Color    { &self.color }

    /// How long this task lasts.
    ///
    /// This is `end - start`, so a task that starts and ends on the same day has a zero duration
    /// (and renders as a zero-width bar).
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Change the bar color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Change the bar color, from any CSS color specification (e.g. `"#1f77b4"`, `"tomato"`, `"rgb(255, 99, 71)"`)
    pub fn set_color_spec(&mut self, spec: &str) -> Result<(), csscolorparser::ParseColorError> {
        self.color = csscolorparser::parse(spec)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_duration_from_dates() {
        let task = Task::new(String::from("Code review"), day(2024, 3, 1), day(2024, 3, 15));
        assert_eq!(task.duration(), Duration::days(14));
    }

    #[test]
    fn test_with_duration_matches_explicit_end() {
        let by_end = Task::new(String::from("Build"), day(2024, 3, 1), day(2024, 3, 15));
        let by_days = Task::with_duration(String::from("Build"), day(2024, 3, 1), 14);
        assert_eq!(by_end, by_days);
    }

    #[test]
    fn test_zero_duration_task_is_allowed() {
        let task = Task::new(String::from("Kick-off"), day(2024, 3, 1), day(2024, 3, 1));
        assert_eq!(task.duration(), Duration::days(0));
    }

    #[test]
    fn test_default_color_is_applied() {
        let task = Task::new(String::from("Design"), day(2024, 3, 1), day(2024, 3, 8));
        assert_eq!(task.color().to_hex_string(), "#1f77b4");
    }

    #[test]
    fn test_color_spec_parsing() {
        let mut task = Task::new(String::from("Design"), day(2024, 3, 1), day(2024, 3, 8));

        task.set_color_spec("tomato").unwrap();
        assert_eq!(task.color().to_rgba8(), [255, 99, 71, 255]);

        assert!(task.set_color_spec("not-a-color").is_err());
    }

    #[test]
    fn test_tasks_serialize_to_json_and_back() {
        let task = Task::new_with_color(
            String::from("Ünicode name"),
            day(2024, 3, 1),
            day(2024, 3, 8),
            csscolorparser::parse("#336699").unwrap(),
        );

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
