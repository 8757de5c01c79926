use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Timelike, Utc};

use crate::schedule::Weekday;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_SHORT_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Monday of the calendar week containing `date`.
///
/// Day-of-week is taken Sunday=0..Saturday=6 and converted to a Monday-origin
/// offset with `(day + 6) % 7`, so the week always starts on Monday no matter
/// what the locale considers the first day.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let day = date.weekday().num_days_from_sunday();
    let diff_to_monday = (day + 6) % 7;
    date - Duration::days(diff_to_monday as i64)
}

/// One displayed calendar week: Monday start, Sunday end, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Week containing `today + week_offset * 7 days`.
    pub fn containing(today: NaiveDate, week_offset: u32) -> Self {
        let start = start_of_week(today + Duration::days(week_offset as i64 * 7));
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Concrete date of the column at `index` (0 = Monday .. 6 = Sunday).
    pub fn day(&self, index: usize) -> NaiveDate {
        self.start + Duration::days(index as i64)
    }

    /// Human-readable range, e.g. "Noviembre 10 - 16, 2025". Both months are
    /// named when the week spans a month boundary, both years when it spans a
    /// year boundary.
    pub fn label(&self) -> String {
        let start_month = capitalize(MONTHS_ES[self.start.month0() as usize]);
        let end_month = capitalize(MONTHS_ES[self.end.month0() as usize]);
        let (start_day, end_day) = (self.start.day(), self.end.day());
        let (start_year, end_year) = (self.start.year(), self.end.year());

        if start_year != end_year {
            format!("{start_month} {start_day}, {start_year} - {end_month} {end_day}, {end_year}")
        } else if self.start.month() != self.end.month() {
            format!("{start_month} {start_day} - {end_month} {end_day}, {end_year}")
        } else {
            format!("{start_month} {start_day} - {end_day}, {end_year}")
        }
    }
}

/// Short column sub-label, e.g. "10 nov".
pub fn short_date_es(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_SHORT_ES[date.month0() as usize])
}

/// Full Spanish rendering of a slot timestamp in local time, e.g.
/// "Lunes, 10 de noviembre de 2025, 09:00". Used by the form's read-only
/// date field.
pub fn long_datetime_es(date_hour: &DateTime<Utc>) -> String {
    let local = date_hour.with_timezone(&Local);
    let weekday = Weekday::from_chrono(local.weekday()).label_es();
    format!(
        "{}, {} de {} de {}, {:02}:{:02}",
        weekday,
        local.day(),
        MONTHS_ES[local.month0() as usize],
        local.year(),
        local.hour(),
        local.minute()
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday as ChronoWeekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_is_always_a_monday() {
        // One reference per weekday, including a Sunday.
        for day in 3..=9 {
            let start = start_of_week(date(2025, 8, day));
            assert_eq!(start.weekday(), ChronoWeekday::Mon, "for 2025-08-{day:02}");
        }
    }

    #[test]
    fn sunday_belongs_to_the_week_started_six_days_earlier() {
        // 2025-08-03 is a Sunday; its Monday is 2025-07-28.
        assert_eq!(start_of_week(date(2025, 8, 3)), date(2025, 7, 28));
    }

    #[test]
    fn monday_is_its_own_week_start() {
        assert_eq!(start_of_week(date(2025, 8, 4)), date(2025, 8, 4));
    }

    #[test]
    fn window_spans_exactly_six_days() {
        for offset in 0..3 {
            let window = WeekWindow::containing(date(2025, 8, 6), offset);
            assert_eq!(window.end - window.start, Duration::days(6));
            assert_eq!(window.start.weekday(), ChronoWeekday::Mon);
        }
    }

    #[test]
    fn offset_shifts_by_whole_weeks() {
        let current = WeekWindow::containing(date(2025, 8, 6), 0);
        let next = WeekWindow::containing(date(2025, 8, 6), 1);
        assert_eq!(next.start - current.start, Duration::days(7));
    }

    #[test]
    fn year_boundary_still_starts_on_monday() {
        // 2026-01-01 is a Thursday; its week starts on Monday 2025-12-29.
        let window = WeekWindow::containing(date(2026, 1, 1), 0);
        assert_eq!(window.start, date(2025, 12, 29));
        assert_eq!(window.end, date(2026, 1, 4));
    }

    #[test]
    fn label_within_one_month() {
        let window = WeekWindow {
            start: date(2025, 11, 10),
            end: date(2025, 11, 16),
        };
        assert_eq!(window.label(), "Noviembre 10 - 16, 2025");
    }

    #[test]
    fn label_across_months() {
        let window = WeekWindow {
            start: date(2025, 9, 29),
            end: date(2025, 10, 5),
        };
        assert_eq!(window.label(), "Septiembre 29 - Octubre 5, 2025");
    }

    #[test]
    fn label_across_years() {
        let window = WeekWindow {
            start: date(2025, 12, 29),
            end: date(2026, 1, 4),
        };
        assert_eq!(window.label(), "Diciembre 29, 2025 - Enero 4, 2026");
    }

    #[test]
    fn short_date_uses_short_month() {
        assert_eq!(short_date_es(date(2025, 11, 10)), "10 nov");
        assert_eq!(short_date_es(date(2025, 1, 3)), "3 ene");
    }

    #[test]
    fn window_day_walks_monday_to_sunday() {
        let window = WeekWindow::containing(date(2025, 8, 6), 0);
        assert_eq!(window.day(0), window.start);
        assert_eq!(window.day(6), window.end);
    }
}
