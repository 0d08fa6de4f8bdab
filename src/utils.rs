//! Some utility functions

use crate::Task;

/// A debug utility that pretty-prints a schedule
pub fn print_schedule(tasks: &[Task]) {
    for task in tasks {
        print_task(task);
    }
}

pub fn print_task(task: &Task) {
    println!("    {}..{} ({:>3} days)  {}\t{}",
        task.start(),
        task.end(),
        task.duration().num_days(),
        task.color().to_hex_string(),
        task.name(),
    );
}
