use chrono::NaiveDate;

use gantt_chart::Task;

const OUTPUT_FILE: &str = "schedule.svg";


fn main() {
    env_logger::init();

    let tasks = vec![
        Task::new(String::from("Research"), date(2024, 1, 8), date(2024, 1, 19)),
        Task::new(String::from("Design"), date(2024, 1, 15), date(2024, 1, 26)),
        Task::with_duration(String::from("Prototype"), date(2024, 1, 22), 18),
        Task::with_duration(String::from("User testing"), date(2024, 2, 12), 5),
        Task::new(String::from("Launch"), date(2024, 2, 19), date(2024, 2, 19)),
    ];

    println!("---- the schedule ----");
    gantt_chart::utils::print_schedule(&tasks);

    if let Err(err) = gantt_chart::gantt(&tasks, OUTPUT_FILE) {
        log::error!("Unable to render the chart: {}", err);
        return;
    }
    println!("Chart saved to {}", OUTPUT_FILE);
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
