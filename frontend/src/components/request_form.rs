use chrono::{DateTime, Utc};
use shared::{long_datetime_es, AppointmentRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::{ModalConfig, OutcomeModal};
use crate::services::transport::BookingTransport;

#[derive(Properties, PartialEq)]
pub struct RequestFormProps {
    /// The shared selection written by the calendar, RFC 3339.
    #[prop_or_default]
    pub selected_date: Option<String>,
    /// Clears the shared selection after a successful submission.
    pub on_clear_selected: Callback<()>,
}

#[function_component(RequestForm)]
pub fn request_form(props: &RequestFormProps) -> Html {
    let patient_full_name = use_state(String::new);
    let phone_number = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let validation_notice = use_state(|| false);
    let modal = use_state(|| Option::<ModalConfig>::None);

    // Readable rendering of the selected slot; empty until one is picked.
    let formatted_date = props
        .selected_date
        .as_deref()
        .and_then(|iso| DateTime::parse_from_rfc3339(iso).ok())
        .map(|dt| long_datetime_es(&dt.with_timezone(&Utc)))
        .unwrap_or_default();

    let on_name_change = {
        let patient_full_name = patient_full_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            patient_full_name.set(input.value());
        })
    };

    let on_phone_change = {
        let phone_number = phone_number.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone_number.set(input.value());
        })
    };

    let on_message_change = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_submit = {
        let patient_full_name = patient_full_name.clone();
        let phone_number = phone_number.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let validation_notice = validation_notice.clone();
        let modal = modal.clone();
        let selected_date = props.selected_date.clone();
        let on_clear_selected = props.on_clear_selected.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = AppointmentRequest {
                patient_full_name: (*patient_full_name).clone(),
                date_hour_request: selected_date.clone().unwrap_or_default(),
                phone_number: (*phone_number).clone(),
                message: (*message).clone(),
            };

            // Validation strictly precedes transmission; an incomplete form
            // never reaches the network.
            if !request.is_complete() {
                validation_notice.set(true);
                return;
            }
            validation_notice.set(false);
            submitting.set(true);

            let patient_full_name = patient_full_name.clone();
            let phone_number = phone_number.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let modal = modal.clone();
            let on_clear_selected = on_clear_selected.clone();

            spawn_local(async move {
                let transport = BookingTransport::from_config();
                match transport.submit(&request).await {
                    Ok(()) => {
                        patient_full_name.set(String::new());
                        phone_number.set(String::new());
                        message.set(String::new());
                        on_clear_selected.emit(());
                        modal.set(Some(ModalConfig::success()));
                    }
                    Err(err) => {
                        gloo::console::error!(
                            "Failed to submit appointment request:",
                            err.to_string()
                        );
                        modal.set(Some(ModalConfig::error(err.user_message())));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_modal_close = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(None))
    };

    html! {
        <>
            <form class="request-form" onsubmit={on_submit}>
                <h3 class="request-form-title">{"Llena tus Datos"}</h3>

                <label class="form-field">
                    {"Nombre Completo del Paciente"}
                    <input
                        type="text"
                        placeholder="Ej. Juan Perez"
                        value={(*patient_full_name).clone()}
                        onchange={on_name_change}
                        disabled={*submitting}
                    />
                </label>

                <label class="form-field">
                    {"Número de celular (con Whatsapp)"}
                    <div class="phone-field">
                        <p class="phone-prefix">{"+591"}</p>
                        <input
                            type="text"
                            placeholder="Ej. 1234567"
                            maxlength="8"
                            value={(*phone_number).clone()}
                            onchange={on_phone_change}
                            disabled={*submitting}
                        />
                    </div>
                </label>

                <label class="form-field">
                    {"Explica tus síntomas"}
                    <textarea
                        placeholder="Describe brevemente el motivo de tu consulta..."
                        value={(*message).clone()}
                        onchange={on_message_change}
                        disabled={*submitting}
                    />
                </label>

                <label class="form-field">
                    {"Fecha/Hora deseada de consulta"}
                    <input
                        readonly=true
                        type="text"
                        placeholder="Seleccione una hora en el calendario"
                        value={formatted_date}
                        aria-label="Fecha y hora seleccionada"
                    />
                </label>

                {if *validation_notice {
                    html! {
                        <span class="form-validation-notice">
                            {"Por favor llene todos los campos antes de continuar"}
                        </span>
                    }
                } else {
                    html! {}
                }}

                <button type="submit" class="btn submit-btn" disabled={*submitting}>
                    {if *submitting { "Reservando..." } else { "Reservar Cita" }}
                </button>
            </form>

            {if let Some(config) = (*modal).clone() {
                html! { <OutcomeModal config={config} on_close={on_modal_close} /> }
            } else {
                html! {}
            }}
        </>
    }
}
