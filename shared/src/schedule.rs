use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
    Weekday as ChronoWeekday,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::week::start_of_week;

/// Canonical weekday, always Monday-first regardless of locale or payload
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Column index, 0 = Monday .. 6 = Sunday.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column header label.
    pub fn label_es(self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }

    /// Lookup from the day names the flat payload carries. Case-insensitive
    /// and tolerant of missing accents ("miercoles", "sabado").
    pub fn from_spanish(name: &str) -> Option<Weekday> {
        match name.trim().to_lowercase().as_str() {
            "lunes" => Some(Weekday::Monday),
            "martes" => Some(Weekday::Tuesday),
            "miércoles" | "miercoles" => Some(Weekday::Wednesday),
            "jueves" => Some(Weekday::Thursday),
            "viernes" => Some(Weekday::Friday),
            "sábado" | "sabado" => Some(Weekday::Saturday),
            "domingo" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    pub fn from_chrono(weekday: ChronoWeekday) -> Weekday {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

/// One bookable time unit. Identity is the timestamp; the whole set is
/// replaced on every refresh, never patched in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub date_hour: DateTime<Utc>,
    pub available: bool,
}

/// RFC 3339 form of the slot timestamp, used as the shared selection value
/// and as `dateHourRequest` on the wire.
pub fn slot_iso(slot: &Slot) -> String {
    slot.date_hour.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Local wall-clock display of a slot, zero-padded "HH:MM".
pub fn hour_label(slot: &Slot) -> String {
    slot.date_hour
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string()
}

/// Nested-shape slot: `{"dateHour": "...", "status": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDto {
    #[serde(rename = "dateHour")]
    pub date_hour: String,
    pub status: bool,
}

/// Nested-shape week: one key per weekday, absent keys mean "no slots that
/// day" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekDaysDto {
    pub monday: Vec<SlotDto>,
    pub tuesday: Vec<SlotDto>,
    pub wednesday: Vec<SlotDto>,
    pub thursday: Vec<SlotDto>,
    pub friday: Vec<SlotDto>,
    pub saturday: Vec<SlotDto>,
    pub sunday: Vec<SlotDto>,
}

impl WeekDaysDto {
    fn slots_for(&self, weekday: Weekday) -> &[SlotDto] {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }
}

/// Nested ingestion shape: both held weeks in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyScheduleDto {
    #[serde(rename = "currentWeek")]
    pub current_week: WeekDaysDto,
    #[serde(rename = "nextWeek", default)]
    pub next_week: WeekDaysDto,
}

/// Flat ingestion shape: recurring per-weekday shifts, grouped client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    pub day: String,
    pub hour: String,
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("invalid slot timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("invalid shift hour: {0}")]
    InvalidHour(String),
}

/// Seven ordered slot lists for one calendar week, Monday-first. Per-day
/// lists are sorted by timestamp no matter how the payload ordered them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyAvailability {
    days: [Vec<Slot>; 7],
}

impl WeeklyAvailability {
    pub fn slots_for(&self, weekday: Weekday) -> &[Slot] {
        &self.days[weekday.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Normalize one week of the nested shape. Any malformed timestamp fails
    /// the whole week; partial data is never surfaced.
    pub fn from_dto(dto: &WeekDaysDto) -> Result<Self, ScheduleError> {
        let mut week = Self::default();
        for weekday in Weekday::ALL {
            let column = &mut week.days[weekday.index()];
            for slot in dto.slots_for(weekday) {
                let date_hour = DateTime::parse_from_rfc3339(&slot.date_hour)
                    .map_err(|_| ScheduleError::InvalidTimestamp(slot.date_hour.clone()))?
                    .with_timezone(&Utc);
                column.push(Slot {
                    date_hour,
                    available: slot.status,
                });
            }
        }
        week.sort();
        Ok(week)
    }

    /// Materialize the flat recurring shifts onto the concrete dates of the
    /// week starting at `week_start` (a Monday). Records with an unknown day
    /// name are ignored, matching how the original grouping filter never
    /// picked them up; an unparseable hour fails the whole week.
    pub fn from_shifts(records: &[ShiftRecord], week_start: NaiveDate) -> Result<Self, ScheduleError> {
        let mut week = Self::default();
        for record in records {
            let Some(weekday) = Weekday::from_spanish(&record.day) else {
                continue;
            };
            let (hour, minute) = parse_hour_label(&record.hour)
                .ok_or_else(|| ScheduleError::InvalidHour(record.hour.clone()))?;
            let date = week_start + chrono::Duration::days(weekday.index() as i64);
            let naive = date
                .and_hms_opt(hour, minute, 0)
                .ok_or_else(|| ScheduleError::InvalidHour(record.hour.clone()))?;
            week.days[weekday.index()].push(Slot {
                date_hour: local_to_utc(naive),
                available: record.status,
            });
        }
        week.sort();
        Ok(week)
    }

    fn sort(&mut self) {
        for column in &mut self.days {
            column.sort_by_key(|slot| slot.date_hour);
        }
    }
}

/// The two concurrently-held weeks of availability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule {
    pub current: WeeklyAvailability,
    pub next: WeeklyAvailability,
}

impl WeeklySchedule {
    /// Week selected by the navigation offset: 0 = current, anything past
    /// that = next.
    pub fn for_offset(&self, week_offset: u32) -> &WeeklyAvailability {
        if week_offset == 0 {
            &self.current
        } else {
            &self.next
        }
    }

    pub fn from_dto(dto: &WeeklyScheduleDto) -> Result<Self, ScheduleError> {
        Ok(Self {
            current: WeeklyAvailability::from_dto(&dto.current_week)?,
            next: WeeklyAvailability::from_dto(&dto.next_week)?,
        })
    }

    pub fn from_shifts(records: &[ShiftRecord], today: NaiveDate) -> Result<Self, ScheduleError> {
        let monday = start_of_week(today);
        Ok(Self {
            current: WeeklyAvailability::from_shifts(records, monday)?,
            next: WeeklyAvailability::from_shifts(records, monday + chrono::Duration::days(7))?,
        })
    }
}

/// Parse the hour labels the flat payload carries: "09:00", "9:00", "9",
/// "9:00 AM", "12 PM". 12 AM maps to 0, PM below noon adds 12. Seconds, if
/// present, are ignored.
pub fn parse_hour_label(raw: &str) -> Option<(u32, u32)> {
    let lower = raw.trim().to_ascii_lowercase();
    let (time_part, is_am, is_pm) = if let Some(stripped) = lower.strip_suffix("am") {
        (stripped.trim_end(), true, false)
    } else if let Some(stripped) = lower.strip_suffix("pm") {
        (stripped.trim_end(), false, true)
    } else {
        (lower.as_str(), false, false)
    };

    let mut parts = time_part.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };

    let hour = if is_pm && hour < 12 {
        hour + 12
    } else if is_am && hour == 12 {
        0
    } else {
        hour
    };

    (hour <= 23 && minute <= 59).then_some((hour, minute))
}

/// Interpret a naive wall-clock time in the local timezone. An ambiguous
/// local time (clocks rolled back) takes the earlier instant; a skipped one
/// (clocks rolled forward) falls back to reading the wall clock as UTC.
fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&naive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
    }

    fn shift(day: &str, hour: &str, status: bool) -> ShiftRecord {
        ShiftRecord {
            id: 1,
            day: day.to_string(),
            hour: hour.to_string(),
            status,
        }
    }

    #[test]
    fn weekdays_are_monday_first() {
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[6], Weekday::Sunday);
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun).index(), 6);
    }

    #[test]
    fn spanish_day_lookup_ignores_case_and_accents() {
        assert_eq!(Weekday::from_spanish("Lunes"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_spanish("MIÉRCOLES"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_spanish("miercoles"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_spanish("sabado"), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_spanish("feriado"), None);
    }

    #[test]
    fn parse_hour_label_variants() {
        assert_eq!(parse_hour_label("09:00"), Some((9, 0)));
        assert_eq!(parse_hour_label("9:30"), Some((9, 30)));
        assert_eq!(parse_hour_label("9"), Some((9, 0)));
        assert_eq!(parse_hour_label("9:00 AM"), Some((9, 0)));
        assert_eq!(parse_hour_label("3:15 pm"), Some((15, 15)));
        assert_eq!(parse_hour_label("12 PM"), Some((12, 0)));
        assert_eq!(parse_hour_label("12 AM"), Some((0, 0)));
        assert_eq!(parse_hour_label("09:00:00"), Some((9, 0)));
        assert_eq!(parse_hour_label("25:00"), None);
        assert_eq!(parse_hour_label("mediodía"), None);
    }

    #[test]
    fn nested_shape_single_monday_slot() {
        let payload = r#"{"currentWeek": {"monday": [{"dateHour": "2024-01-01T09:00:00Z", "status": true}]}}"#;
        let dto: WeeklyScheduleDto = serde_json::from_str(payload).unwrap();
        let schedule = WeeklySchedule::from_dto(&dto).unwrap();

        let slots = schedule.for_offset(0).slots_for(Weekday::Monday);
        assert_eq!(slots.len(), 1);
        assert!(slots[0].available);
        assert_eq!(
            slots[0].date_hour,
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
        );
        // Every other column renders empty, not as an error.
        for weekday in &Weekday::ALL[1..] {
            assert!(schedule.for_offset(0).slots_for(*weekday).is_empty());
        }
        assert!(schedule.for_offset(1).is_empty());
    }

    #[test]
    fn nested_shape_sorts_slots_within_a_day() {
        let dto = WeekDaysDto {
            tuesday: vec![
                SlotDto {
                    date_hour: "2024-01-02T15:00:00Z".into(),
                    status: true,
                },
                SlotDto {
                    date_hour: "2024-01-02T09:00:00Z".into(),
                    status: false,
                },
            ],
            ..WeekDaysDto::default()
        };
        let week = WeeklyAvailability::from_dto(&dto).unwrap();
        let slots = week.slots_for(Weekday::Tuesday);
        assert!(slots[0].date_hour < slots[1].date_hour);
    }

    #[test]
    fn nested_shape_rejects_malformed_timestamp() {
        let dto = WeekDaysDto {
            friday: vec![SlotDto {
                date_hour: "not-a-date".into(),
                status: true,
            }],
            ..WeekDaysDto::default()
        };
        assert_eq!(
            WeeklyAvailability::from_dto(&dto),
            Err(ScheduleError::InvalidTimestamp("not-a-date".into()))
        );
    }

    #[test]
    fn flat_shape_groups_by_day_case_insensitively() {
        let records = vec![
            shift("lunes", "10:00", true),
            shift("Lunes", "09:00", false),
            shift("Domingo", "16:00", true),
        ];
        let week = WeeklyAvailability::from_shifts(&records, monday()).unwrap();

        let monday_slots = week.slots_for(Weekday::Monday);
        assert_eq!(monday_slots.len(), 2);
        // Sorted by hour even though the payload listed 10:00 first.
        assert_eq!(hour_label(&monday_slots[0]), "09:00");
        assert_eq!(hour_label(&monday_slots[1]), "10:00");
        assert!(!monday_slots[0].available);

        assert_eq!(week.slots_for(Weekday::Sunday).len(), 1);
        assert!(week.slots_for(Weekday::Wednesday).is_empty());
    }

    #[test]
    fn flat_shape_lands_on_the_requested_week_dates() {
        let records = vec![shift("Martes", "09:00", true)];
        let week = WeeklyAvailability::from_shifts(&records, monday()).unwrap();
        let slot = &week.slots_for(Weekday::Tuesday)[0];

        let local = slot.date_hour.with_timezone(&Local);
        assert_eq!(local.date_naive(), monday() + chrono::Duration::days(1));
        assert_eq!(local.hour(), 9);
        assert_eq!(local.minute(), 0);
    }

    #[test]
    fn flat_shape_ignores_unknown_day_names() {
        let records = vec![shift("feriado", "09:00", true)];
        let week = WeeklyAvailability::from_shifts(&records, monday()).unwrap();
        assert!(week.is_empty());
    }

    #[test]
    fn flat_shape_rejects_unparseable_hour() {
        let records = vec![shift("Lunes", "mediodía", true)];
        assert_eq!(
            WeeklyAvailability::from_shifts(&records, monday()),
            Err(ScheduleError::InvalidHour("mediodía".into()))
        );
    }

    #[test]
    fn flat_schedule_covers_both_weeks() {
        let records = vec![shift("Lunes", "09:00", true)];
        // Thursday reference date; the shift lands on both surrounding Mondays.
        let today = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        let schedule = WeeklySchedule::from_shifts(&records, today).unwrap();

        let current = schedule.for_offset(0).slots_for(Weekday::Monday)[0];
        let next = schedule.for_offset(1).slots_for(Weekday::Monday)[0];
        assert_eq!(
            next.date_hour - current.date_hour,
            chrono::Duration::days(7)
        );
        assert_eq!(
            current.date_hour.with_timezone(&Local).date_naive(),
            monday()
        );
    }

    #[test]
    fn hour_label_is_zero_padded_local_time() {
        let naive = monday().and_hms_opt(9, 5, 0).unwrap();
        let slot = Slot {
            date_hour: local_to_utc(naive),
            available: true,
        };
        assert_eq!(hour_label(&slot), "09:05");
    }

    #[test]
    fn slot_iso_round_trips_through_rfc3339() {
        let slot = Slot {
            date_hour: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            available: true,
        };
        let iso = slot_iso(&slot);
        assert_eq!(
            DateTime::parse_from_rfc3339(&iso).unwrap().with_timezone(&Utc),
            slot.date_hour
        );
    }

    #[test]
    fn week_selection_clamps_to_the_next_week() {
        let schedule = WeeklySchedule::default();
        assert!(std::ptr::eq(schedule.for_offset(1), schedule.for_offset(2)));
    }
}
