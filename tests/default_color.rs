//! Checks that overriding the library-wide default color is taken into account.
//!
//! This lives in its own test binary (so, its own process): it mutates the
//! global default, which would race with the other tests' default-color
//! expectations if they shared an address space.

use chrono::NaiveDate;

use gantt_chart::{settings, Task};


#[test]
fn test_default_color_override() {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

    let before = Task::new(String::from("Before"), start, end);
    assert_eq!(before.color().to_hex_string(), "#1f77b4");

    *settings::DEFAULT_COLOR.lock().unwrap() = csscolorparser::parse("rebeccapurple").unwrap();

    let after = Task::new(String::from("After"), start, end);
    assert_eq!(after.color().to_hex_string(), "#663399");

    // Explicit colors are not affected by the default
    let explicit = Task::new_with_color(
        String::from("Explicit"),
        start,
        end,
        csscolorparser::parse("tomato").unwrap(),
    );
    assert_eq!(explicit.color().to_rgba8(), [255, 99, 71, 255]);
}
