//! Types and pure logic shared by the booking front end: the wire shapes the
//! clinic backend speaks, week/date arithmetic for the calendar, and the
//! booking request/outcome model.

pub mod booking;
pub mod schedule;
pub mod week;

pub use booking::{ApiErrorBody, AppointmentRequest, BookingAck, SubmitError, MIN_PHONE_LEN};
pub use schedule::{
    hour_label, parse_hour_label, slot_iso, ScheduleError, ShiftRecord, Slot, SlotDto, WeekDaysDto,
    Weekday, WeeklyAvailability, WeeklySchedule, WeeklyScheduleDto,
};
pub use week::{long_datetime_es, short_date_es, start_of_week, WeekWindow};
