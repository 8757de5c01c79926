use chrono::{Local, NaiveDate};
use gloo::net::http::Request;
use shared::{AppointmentRequest, ShiftRecord, SubmitError, WeeklySchedule, WeeklyScheduleDto};

use crate::config;

/// API client for the clinic backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client against the configured API origin.
    pub fn new() -> Self {
        Self {
            base_url: config::api_origin(),
        }
    }

    /// Create a client against a custom origin.
    pub fn with_origin(origin: &str) -> Self {
        Self {
            base_url: config::normalize_origin(origin),
        }
    }

    /// Fetch the weekly availability and normalize it. Network failure,
    /// a non-2xx status, or an unrecognized payload all fail the fetch as a
    /// whole; stale or partial data is never returned.
    pub async fn fetch_weekly_schedule(&self) -> Result<WeeklySchedule, String> {
        let url = format!("{}/shifts", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch shifts: {e}"))?;
        if !response.ok() {
            return Err(format!("Shifts request failed with status {}", response.status()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read shifts payload: {e}"))?;
        parse_schedule(&body, Local::now().date_naive())
    }

    /// Fetch the doctor's contact phone number. An empty body means the
    /// number is not configured, which the contact UI degrades on.
    pub async fn fetch_doctor_phone(&self) -> Result<Option<String>, String> {
        let url = format!("{}/appointment-requests/doctor-phoneNumber", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch phone number: {e}"))?;
        if !response.ok() {
            return Err(format!(
                "Phone number request failed with status {}",
                response.status()
            ));
        }
        let text = response
            .text()
            .await
            .map_err(|e| format!("Failed to read phone number: {e}"))?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    /// HTTP strategy of the reservation submitter: POST the booking payload
    /// and interpret a 409 body as one of the known conflict reasons.
    pub async fn request_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<(), SubmitError> {
        let url = format!("{}/appointment-requests", self.base_url);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        if response.status() == 409 {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::conflict_from_body(&body));
        }
        Err(SubmitError::Server(response.status()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Single normalization step for both ingestion shapes the availability
/// endpoint is known to serve: the nested per-week map, and the flat list of
/// recurring shift records grouped client-side.
fn parse_schedule(body: &str, today: NaiveDate) -> Result<WeeklySchedule, String> {
    if let Ok(dto) = serde_json::from_str::<WeeklyScheduleDto>(body) {
        return WeeklySchedule::from_dto(&dto).map_err(|e| e.to_string());
    }
    match serde_json::from_str::<Vec<ShiftRecord>>(body) {
        Ok(records) => WeeklySchedule::from_shifts(&records, today).map_err(|e| e.to_string()),
        Err(e) => Err(format!("Unrecognized shifts payload: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Weekday;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn parse_schedule_accepts_the_nested_shape() {
        let body = r#"{"currentWeek": {"monday": [{"dateHour": "2024-01-01T09:00:00Z", "status": true}]}, "nextWeek": {}}"#;
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let schedule = parse_schedule(body, today).unwrap();
        assert_eq!(schedule.for_offset(0).slots_for(Weekday::Monday).len(), 1);
    }

    #[wasm_bindgen_test]
    fn parse_schedule_accepts_the_flat_shape() {
        let body = r#"[{"Id": 1, "day": "Lunes", "hour": "09:00", "status": true}]"#;
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let schedule = parse_schedule(body, today).unwrap();
        assert_eq!(schedule.for_offset(0).slots_for(Weekday::Monday).len(), 1);
        assert_eq!(schedule.for_offset(1).slots_for(Weekday::Monday).len(), 1);
    }

    #[wasm_bindgen_test]
    fn parse_schedule_rejects_anything_else() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(parse_schedule("<html>not json</html>", today).is_err());
        assert!(parse_schedule(r#"{"weeks": []}"#, today).is_err());
    }
}
