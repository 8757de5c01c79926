use gloo::timers::future::TimeoutFuture;
use shared::WeeklySchedule;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Fixed interval at which availability is re-fetched while the calendar is
/// mounted.
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

pub struct UseAvailabilityResult {
    /// True only until the first response, success or failure, arrives.
    pub loading: bool,
    /// `None` when nothing has loaded or the last fetch failed; prior data is
    /// cleared on failure rather than shown stale.
    pub schedule: Option<WeeklySchedule>,
}

/// Fetch the weekly schedule on mount and keep polling on a fixed interval.
/// The loop is released on unmount: the mounted flag is checked before every
/// fetch and before every state write, so nothing updates after teardown.
#[hook]
pub fn use_availability(api_client: &ApiClient) -> UseAvailabilityResult {
    let loading = use_state(|| true);
    let schedule = use_state(|| Option::<WeeklySchedule>::None);
    let is_mounted = use_mut_ref(|| true);

    {
        let api_client = api_client.clone();
        let loading = loading.clone();
        let schedule = schedule.clone();
        let is_mounted = is_mounted.clone();

        use_effect_with((), move |_| {
            let mounted = is_mounted.clone();
            spawn_local(async move {
                loop {
                    if !*mounted.borrow() {
                        break;
                    }
                    let fetched = api_client.fetch_weekly_schedule().await;
                    if !*mounted.borrow() {
                        break;
                    }
                    match fetched {
                        Ok(data) => schedule.set(Some(data)),
                        Err(e) => {
                            gloo::console::error!("Failed to fetch weekly availability:", e);
                            schedule.set(None);
                        }
                    }
                    loading.set(false);
                    TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
                }
            });

            move || {
                *is_mounted.borrow_mut() = false;
            }
        });
    }

    UseAvailabilityResult {
        loading: *loading,
        schedule: (*schedule).clone(),
    }
}
