use yew::prelude::*;

use crate::hooks::use_phone_number::use_phone_number;
use crate::services::api::ApiClient;

/// Country calling prefix templated into every contact link.
const COUNTRY_PREFIX: &str = "591";
const WHATSAPP_GREETING: &str = "Buenos días doctor, vengo de su página web";

fn whatsapp_link(phone_number: &str) -> String {
    format!(
        "https://wa.me/{}{}?text={}",
        COUNTRY_PREFIX,
        phone_number,
        String::from(js_sys::encode_uri_component(WHATSAPP_GREETING))
    )
}

fn tel_link(phone_number: &str) -> String {
    format!("tel:+{COUNTRY_PREFIX}{phone_number}")
}

/// WhatsApp action in the page header. Disabled while the number loads and
/// when no number is configured.
#[function_component(HeaderWhatsapp)]
pub fn header_whatsapp() -> Html {
    let api_client = ApiClient::new();
    let phone = use_phone_number(&api_client);

    if phone.is_loading {
        return html! {
            <button type="button" disabled=true class="whatsapp-btn disabled" title="Cargando WhatsApp...">
                {"WhatsApp"}
            </button>
        };
    }
    let Some(number) = phone.phone_number else {
        return html! {
            <button type="button" disabled=true class="whatsapp-btn disabled" title="WhatsApp no disponible">
                {"WhatsApp"}
            </button>
        };
    };

    html! {
        <a
            class="whatsapp-btn"
            target="_blank"
            rel="noopener noreferrer"
            title="Contactar por WhatsApp"
            href={whatsapp_link(&number)}
        >
            {"WhatsApp"}
        </a>
    }
}

/// Contact card in the location section, linking to WhatsApp.
#[function_component(LocationPhone)]
pub fn location_phone() -> Html {
    let api_client = ApiClient::new();
    let phone = use_phone_number(&api_client);

    if phone.is_loading {
        return html! {
            <div class="contact-card disabled">
                <span class="contact-title">{"Contáctanos"}</span>
                <span class="contact-detail">{"Cargando..."}</span>
            </div>
        };
    }
    let Some(number) = phone.phone_number else {
        return html! {
            <div class="contact-card disabled">
                <span class="contact-title">{"Contáctanos"}</span>
                <span class="contact-detail">{"No disponible"}</span>
            </div>
        };
    };

    html! {
        <a
            class="contact-card"
            target="_blank"
            rel="noopener noreferrer"
            href={whatsapp_link(&number)}
        >
            <span class="contact-title">{"Contáctanos"}</span>
            <span class="contact-detail">{format!("+{COUNTRY_PREFIX} {number}")}</span>
        </a>
    }
}

/// Plain telephone link in the footer.
#[function_component(FooterPhone)]
pub fn footer_phone() -> Html {
    let api_client = ApiClient::new();
    let phone = use_phone_number(&api_client);

    if phone.is_loading {
        return html! { <p class="footer-phone disabled">{"Cargando..."}</p> };
    }
    let Some(number) = phone.phone_number else {
        return html! { <p class="footer-phone disabled">{"No disponible"}</p> };
    };

    html! {
        <p class="footer-phone">
            <a href={tel_link(&number)}>{format!("+{COUNTRY_PREFIX} {number}")}</a>
        </p>
    }
}
