use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UsePhoneNumberResult {
    /// `None` while loading, after a fetch failure, or when the backend has
    /// no number configured.
    pub phone_number: Option<String>,
    pub is_loading: bool,
}

/// One fetch of the doctor's contact number on mount. Loading resolves on
/// the first response in every path; failure leaves the number absent so the
/// contact UI degrades instead of breaking.
#[hook]
pub fn use_phone_number(api_client: &ApiClient) -> UsePhoneNumberResult {
    let phone_number = use_state(|| Option::<String>::None);
    let is_loading = use_state(|| true);

    {
        let api_client = api_client.clone();
        let phone_number = phone_number.clone();
        let is_loading = is_loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.fetch_doctor_phone().await {
                    Ok(number) => phone_number.set(number),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch doctor phone number:", e);
                    }
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    UsePhoneNumberResult {
        phone_number: (*phone_number).clone(),
        is_loading: *is_loading,
    }
}
