//! Month-grid calendar rendering with marked workout dates.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};

use crate::workouts::store::WorkoutStore;

/// Print a month grid; dates with at least one workout are marked `*`.
pub fn render(store: &WorkoutStore, month: Option<&str>) -> Result<()> {
    let (year, month) = match month {
        Some(spec) => parse_month(spec)?,
        None => {
            let today = Local::now().date_naive();
            (today.year(), today.month())
        }
    };

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("invalid month {year}-{month:02}"))?;

    let title = format!("{}", first.format("%B %Y"));
    println!("{title:^28}");
    println!("{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}", "Mo", "Tu", "We", "Th", "Fr", "Sa", "Su");

    // Leading blanks up to the first weekday
    let mut column = first.weekday().num_days_from_monday();
    print!("{}", "    ".repeat(column as usize));

    let mut day = first;
    loop {
        let cell = if store.is_marked(day) {
            format!("{:>3}*", day.day())
        } else {
            format!("{:>4}", day.day())
        };
        print!("{cell}");

        column += 1;
        if column == 7 {
            println!();
            column = 0;
        }

        day = match day.succ_opt() {
            Some(next) if next.month() == month => next,
            _ => break,
        };
    }
    if column != 0 {
        println!();
    }

    // Summary list below the grid, like the calendar screen's day list
    let mut any = false;
    for date in store.dates() {
        if date.year() == year && date.month() == month {
            let splits: Vec<&str> = store
                .workouts_on(date)
                .iter()
                .map(|w| w.split.as_str())
                .collect();
            println!("{date}  {}", splits.join(", "));
            any = true;
        }
    }
    if !any {
        println!("(no workouts this month)");
    }

    Ok(())
}

/// Parse a YYYY-MM month spec.
fn parse_month(spec: &str) -> Result<(i32, u32)> {
    let parsed = NaiveDate::parse_from_str(&format!("{spec}-01"), "%Y-%m-%d")
        .with_context(|| format!("invalid month '{spec}', expected YYYY-MM"))?;
    Ok((parsed.year(), parsed.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-06").unwrap(), (2024, 6));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("june").is_err());
    }
}
