use yew::prelude::*;

use crate::components::calendar::WeeklyCalendar;
use crate::components::request_form::RequestForm;

/// Owner of the shared slot selection: the calendar writes it on click, the
/// form reads it and clears it after a successful submission.
#[function_component(BookingWidget)]
pub fn booking_widget() -> Html {
    let selected_date = use_state(|| Option::<String>::None);

    let on_select = {
        let selected_date = selected_date.clone();
        Callback::from(move |iso: String| selected_date.set(Some(iso)))
    };
    let on_clear_selected = {
        let selected_date = selected_date.clone();
        Callback::from(move |_| selected_date.set(None))
    };

    html! {
        <>
            <WeeklyCalendar
                selected_date={(*selected_date).clone()}
                on_select={on_select}
            />
            <RequestForm
                selected_date={(*selected_date).clone()}
                on_clear_selected={on_clear_selected}
            />
        </>
    }
}
