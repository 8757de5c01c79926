use chrono::Local;
use shared::{hour_label, short_date_es, slot_iso, Slot, WeekWindow, Weekday};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_availability::use_availability;
use crate::services::api::ApiClient;

/// Highest reachable week offset; the schedule holds current + next week.
pub const WEEK_OFFSET_MAX: u32 = 1;

/// Saturating one-step decrement, never below zero.
pub fn clamped_prev(offset: u32) -> u32 {
    offset.saturating_sub(1)
}

/// Saturating one-step increment, never past [`WEEK_OFFSET_MAX`].
pub fn clamped_next(offset: u32) -> u32 {
    (offset + 1).min(WEEK_OFFSET_MAX)
}

#[derive(Properties, PartialEq)]
pub struct WeeklyCalendarProps {
    /// The shared selection, RFC 3339. Written here on slot click, read by
    /// the form.
    #[prop_or_default]
    pub selected_date: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(WeeklyCalendar)]
pub fn weekly_calendar(props: &WeeklyCalendarProps) -> Html {
    let api_client = ApiClient::new();
    let availability = use_availability(&api_client);
    let week_offset = use_state(|| 0u32);

    let today = Local::now().date_naive();
    let window = WeekWindow::containing(today, *week_offset);

    let go_prev = {
        let week_offset = week_offset.clone();
        Callback::from(move |_: MouseEvent| week_offset.set(clamped_prev(*week_offset)))
    };
    let go_next = {
        let week_offset = week_offset.clone();
        Callback::from(move |_: MouseEvent| week_offset.set(clamped_next(*week_offset)))
    };

    // Pure derivation of the grid from (data, offset): seven Monday-first
    // columns, recomputed rather than mutated.
    let columns = use_memo(
        (availability.schedule.clone(), *week_offset),
        |(schedule, offset)| {
            schedule.as_ref().map(|schedule| {
                let week = schedule.for_offset(*offset);
                Weekday::ALL
                    .iter()
                    .map(|weekday| (*weekday, week.slots_for(*weekday).to_vec()))
                    .collect::<Vec<(Weekday, Vec<Slot>)>>()
            })
        },
    );

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button
                    type="button"
                    class="calendar-nav-btn"
                    onclick={go_prev}
                    disabled={*week_offset == 0}
                    aria-label="Semana anterior"
                >
                    {"‹"}
                </button>
                <p class="calendar-title">{window.label()}</p>
                <button
                    type="button"
                    class="calendar-nav-btn"
                    onclick={go_next}
                    disabled={*week_offset >= WEEK_OFFSET_MAX}
                    aria-label="Siguiente semana"
                >
                    {"›"}
                </button>
            </div>

            {if availability.loading {
                html! { <div class="calendar-loading">{"Cargando horarios..."}</div> }
            } else if let Some(columns) = columns.as_ref() {
                html! {
                    <div class="calendar-grid">
                        {for columns.iter().enumerate().map(|(index, (weekday, slots))| {
                            html! {
                                <div class="calendar-day" key={weekday.label_es()}>
                                    <p class="calendar-day-name">
                                        {weekday.label_es()}
                                        <br />
                                        <span class="calendar-day-date">{short_date_es(window.day(index))}</span>
                                    </p>
                                    {for slots.iter().map(|slot| {
                                        render_slot(slot, &props.selected_date, &props.on_select)
                                    })}
                                </div>
                            }
                        })}
                    </div>
                }
            } else {
                html! { <div class="calendar-empty">{"No hay horarios disponibles por el momento."}</div> }
            }}
        </div>
    }
}

/// One slot button. Unavailable slots render disabled, so they can never
/// reach the selection callback; the selected slot is only visually
/// distinguished, there is no extra state behind it.
fn render_slot(slot: &Slot, selected_date: &Option<String>, on_select: &Callback<String>) -> Html {
    let iso = slot_iso(slot);
    let is_selected = selected_date.as_deref() == Some(iso.as_str());
    let class = if !slot.available {
        "slot unavailable"
    } else if is_selected {
        "slot selected"
    } else {
        "slot available"
    };
    let onclick = {
        let on_select = on_select.clone();
        let iso = iso.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(iso.clone()))
    };

    html! {
        <button
            type="button"
            key={iso.clone()}
            class={class}
            disabled={!slot.available}
            onclick={onclick}
        >
            {hour_label(slot)}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn navigation_saturates_at_both_bounds() {
        assert_eq!(clamped_prev(0), 0);
        assert_eq!(clamped_prev(1), 0);
        assert_eq!(clamped_next(WEEK_OFFSET_MAX), WEEK_OFFSET_MAX);
        assert_eq!(clamped_next(0), 1);
    }
}
