//! Same schedule as the `basic` demo, but with customized rendering:
//! an overridden default color, per-task colors, a title, bar outlines,
//! and a time axis that starts a week before the first task.

use chrono::NaiveDate;

use gantt_chart::{settings, Decorations, GanttChart, Task};

const OUTPUT_FILE: &str = "schedule-themed.svg";


fn main() {
    env_logger::init();

    // Tasks built from here on will be slate gray unless they say otherwise
    *settings::DEFAULT_COLOR.lock().unwrap() = csscolorparser::parse("slategray").unwrap();

    let mut launch = Task::new(String::from("Launch"), date(2024, 2, 19), date(2024, 2, 23));
    launch.set_color_spec("gold").unwrap();

    let tasks = vec![
        Task::new_with_color(
            String::from("Research"),
            date(2024, 1, 8),
            date(2024, 1, 19),
            csscolorparser::parse("#2ca02c").unwrap(),
        ),
        Task::new(String::from("Design"), date(2024, 1, 15), date(2024, 1, 26)),
        Task::with_duration(String::from("Prototype"), date(2024, 1, 22), 18),
        launch,
    ];

    let mut chart = GanttChart::new();
    chart.set_title(String::from("Project roadmap"));
    chart.set_size(1200, 400);
    chart.set_begin_date(date(2024, 1, 1));
    chart.set_decorations(Decorations::GRID | Decorations::OUTLINES);

    if let Err(err) = chart.save(&tasks, OUTPUT_FILE) {
        log::error!("Unable to render the chart: {}", err);
        return;
    }
    println!("Chart saved to {}", OUTPUT_FILE);
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
