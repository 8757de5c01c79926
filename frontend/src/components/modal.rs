use web_sys::MouseEvent;
use yew::prelude::*;

/// Visual mode of the outcome modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutcomeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalConfig {
    pub title: String,
    pub message: String,
    pub button_text: String,
    pub kind: OutcomeKind,
}

impl ModalConfig {
    pub fn success() -> Self {
        Self {
            title: "Éxito".into(),
            message: "Su cita ha sido reservada! Si existiera algún cambio, el doctor se pondrá \
                      en contacto con usted mediante WhatsApp. Gracias por su preferencia!"
                .into(),
            button_text: "Aceptar".into(),
            kind: OutcomeKind::Success,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            title: "No se pudo reservar".into(),
            message,
            button_text: "Entendido".into(),
            kind: OutcomeKind::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OutcomeModalProps {
    pub config: ModalConfig,
    pub on_close: Callback<()>,
}

/// Modal summarizing a submission outcome. It never auto-dismisses; both the
/// header cross and the footer button route through `on_close`, and the
/// owner clears its modal state there.
#[function_component(OutcomeModal)]
pub fn outcome_modal(props: &OutcomeModalProps) -> Html {
    // Suspend page scroll while the modal is open; the effect cleanup
    // restores it no matter how the modal goes away.
    use_effect_with((), |_| {
        set_body_overflow("hidden");
        || set_body_overflow("auto")
    });

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let kind_class = match props.config.kind {
        OutcomeKind::Success => "success",
        OutcomeKind::Error => "error",
    };

    html! {
        <div class="modal-backdrop">
            <div class={format!("modal {kind_class}")}>
                <div class="modal-header">
                    <h2 class="modal-title">{&props.config.title}</h2>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Cerrar"
                        onclick={on_close.clone()}
                    >
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    <div class={format!("modal-icon {kind_class}")}>
                        {match props.config.kind {
                            OutcomeKind::Success => "✓",
                            OutcomeKind::Error => "!",
                        }}
                    </div>
                    <p class="modal-message">{&props.config.message}</p>
                </div>
                <div class="modal-footer">
                    <button
                        type="button"
                        class={format!("btn modal-action {kind_class}")}
                        onclick={on_close}
                    >
                        {&props.config.button_text}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}
