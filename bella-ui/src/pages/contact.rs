use bella_common::content::{CONTACT_BLOCKS, OPENING_HOURS, SOCIAL_LINKS};
use bella_common::reservation::GUEST_OPTIONS;
use bella_common::{FormField, ReservationForm, SubmitOutcome};
use leptos::*;

use crate::components::StatusMessage;
use crate::timer::{schedule_status_clear, status_clear_slot};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <section class="contact-hero">
                <div class="container">
                    <h1 class="contact-hero-title">"Contáctanos"</h1>
                    <p class="contact-hero-subtitle">"Estamos aquí para servirte"</p>
                </div>
            </section>

            <section class="contact-section">
                <div class="container">
                    <div class="contact-grid">
                        <ContactInfo/>
                        <ReservationPanel/>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-info">
            <h2>"Información de Contacto"</h2>

            {CONTACT_BLOCKS
                .into_iter()
                .map(|block| view! {
                    <div class="info-item">
                        <h3>{block.title}</h3>
                        {block.lines.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    </div>
                })
                .collect_view()}

            <div class="info-item">
                <h3>"Horarios"</h3>
                {OPENING_HOURS
                    .into_iter()
                    .map(|slot| view! {
                        <p><strong>{slot.days}</strong></p>
                        <p>{slot.hours}</p>
                    })
                    .collect_view()}
            </div>

            <div class="info-item">
                <h3>"Síguenos"</h3>
                <div class="social-links">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|name| view! { <a href="#" class="social-link">{name}</a> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Reservation form; submission is simulated and only logged
#[component]
fn ReservationPanel() -> impl IntoView {
    let form = create_rw_signal(ReservationForm::new());
    let status = move || form.with(|f| f.status().clone());
    let value = move |field: FormField| form.with(|f| f.value(field).to_owned());

    let pending_clear = status_clear_slot();
    on_cleanup({
        let pending_clear = pending_clear.clone();
        move || pending_clear.borrow_mut().release()
    });

    // every control carries its field in the `name` attribute
    let on_field_input = move |ev: ev::Event| {
        let name = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .unwrap_or_default();
        let value = event_target_value(&ev);

        if let Some(Err(e)) = form.try_update(|f| f.update_named(&name, value)) {
            logging::warn!("Ignoring input: {}", e);
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(outcome) = form.try_update(|f| f.submit()) else {
            return;
        };

        if let SubmitOutcome::Accepted { reservation, clear_after } = outcome {
            match serde_json::to_string(&reservation) {
                Ok(json) => logging::log!("Datos del formulario: {}", json),
                Err(e) => logging::warn!("Failed to serialize reservation: {}", e),
            }
            schedule_status_clear(form, &pending_clear, clear_after);
        }
    };

    view! {
        <div class="contact-form-container">
            <h2>"Reserva tu Mesa"</h2>
            <p class="form-description">
                "Completa el formulario y te confirmaremos tu reserva lo antes posible"
            </p>

            {move || view! { <StatusMessage status=status()/> }}

            <form on:submit=on_submit class="contact-form">
                <div class="form-group">
                    <label for="name">{FormField::Name.label()}</label>
                    <input
                        type="text"
                        id="name"
                        name=FormField::Name.name()
                        placeholder="Tu nombre completo"
                        required=FormField::Name.is_required()
                        prop:value=move || value(FormField::Name)
                        on:input=on_field_input
                    />
                </div>

                <div class="form-group">
                    <label for="email">{FormField::Email.label()}</label>
                    <input
                        type="email"
                        id="email"
                        name=FormField::Email.name()
                        placeholder="tu@email.com"
                        required=FormField::Email.is_required()
                        prop:value=move || value(FormField::Email)
                        on:input=on_field_input
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{FormField::Phone.label()}</label>
                    <input
                        type="tel"
                        id="phone"
                        name=FormField::Phone.name()
                        placeholder="+34 600 00 00 00"
                        required=FormField::Phone.is_required()
                        prop:value=move || value(FormField::Phone)
                        on:input=on_field_input
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="date">{FormField::Date.label()}</label>
                        <input
                            type="date"
                            id="date"
                            name=FormField::Date.name()
                            required=FormField::Date.is_required()
                            prop:value=move || value(FormField::Date)
                            on:input=on_field_input
                        />
                    </div>

                    <div class="form-group">
                        <label for="time">{FormField::Time.label()}</label>
                        <input
                            type="time"
                            id="time"
                            name=FormField::Time.name()
                            required=FormField::Time.is_required()
                            prop:value=move || value(FormField::Time)
                            on:input=on_field_input
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="guests">{FormField::Guests.label()}</label>
                    <select
                        id="guests"
                        name=FormField::Guests.name()
                        prop:value=move || value(FormField::Guests)
                        on:change=on_field_input
                    >
                        {GUEST_OPTIONS
                            .into_iter()
                            .map(|(option, label)| view! {
                                <option
                                    value=option
                                    selected=move || form.with(|f| f.value(FormField::Guests) == option)
                                >
                                    {label}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="message">{FormField::Message.label()}</label>
                    <textarea
                        id="message"
                        name=FormField::Message.name()
                        placeholder="Alergias, ocasión especial, preferencias..."
                        rows="4"
                        prop:value=move || value(FormField::Message)
                        on:input=on_field_input
                    ></textarea>
                </div>

                <button type="submit" class="btn btn-primary btn-block">
                    "Enviar Reserva"
                </button>
            </form>
        </div>
    }
}
