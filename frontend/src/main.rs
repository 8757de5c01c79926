mod components;
mod config;
mod hooks;
mod services;

use yew::prelude::*;

use components::booking_widget::BookingWidget;
use components::contact::{FooterPhone, HeaderWhatsapp, LocationPhone};

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Clínica Dental"}</h1>
                    <HeaderWhatsapp />
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <section class="booking-section">
                        <h2>{"Reserva tu Cita"}</h2>
                        <div class="booking-grid">
                            <BookingWidget />
                        </div>
                    </section>

                    <section class="contact-section">
                        <LocationPhone />
                    </section>
                </div>
            </main>

            <footer class="footer">
                <div class="container">
                    <FooterPhone />
                </div>
            </footer>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
