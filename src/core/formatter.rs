use crate::core::{DrawResult, FormattedResult, Mark, Period};
use crate::domain::tables::MONTHS;
use crate::utils::error::{PlayWheError, Result};
use chrono::{Datelike, NaiveDate};

pub fn spirit_name(mark: i64) -> Result<&'static str> {
    Ok(Mark::new(mark)?.spirit())
}

/// Clock time (`"10:30 AM"`) when `as_clock_time`, otherwise the
/// period's name (`"Morning"`).
pub fn period_label(code: &str, as_clock_time: bool) -> Result<&'static str> {
    let period: Period = code.parse()?;
    Ok(time_text(period, as_clock_time))
}

fn time_text(period: Period, as_clock_time: bool) -> &'static str {
    if as_clock_time {
        period.clock_time()
    } else {
        period.label()
    }
}

/// `"2024-01-05"` becomes `"Jan 5, 2024"`.
///
/// The year is kept as written and the day loses its leading zeros. Only
/// the month is range-checked.
pub fn pretty_date(iso_date: &str) -> Result<String> {
    let malformed = |reason: &str| PlayWheError::MalformedDate {
        input: iso_date.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = iso_date.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(malformed("expected YYYY-MM-DD"));
    }
    if parts
        .iter()
        .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(malformed("date segments must be numeric"));
    }

    let year = parts[0];
    let month: usize = parts[1]
        .parse()
        .map_err(|_| malformed("month is not a number"))?;
    let day: u32 = parts[2]
        .parse()
        .map_err(|_| malformed("day is not a number"))?;

    if !(1..MONTHS.len()).contains(&month) {
        return Err(malformed("month must be between 1 and 12"));
    }

    Ok(format!("{} {}, {}", MONTHS[month], day, year))
}

/// Same layout as [`pretty_date`] for an already-decoded date.
pub fn pretty_calendar_date(date: NaiveDate) -> String {
    format!("{} {}, {}", MONTHS[date.month() as usize], date.day(), date.year())
}

pub fn format_result(result: &DrawResult, as_clock_time: bool) -> Result<FormattedResult> {
    Ok(FormattedResult {
        draw: result.draw,
        date: pretty_calendar_date(result.date),
        time: time_text(result.period, as_clock_time).to_string(),
        mark: result.mark.number(),
        spirit: result.mark.spirit().to_string(),
    })
}

pub fn format_results(results: &[DrawResult], as_clock_time: bool) -> Result<Vec<FormattedResult>> {
    results
        .iter()
        .map(|result| format_result(result, as_clock_time))
        .collect()
}
