//! Consultation booking card: schedule a slot or request a call back.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stageready::form::{BookingField, BookingForm, BookingMode};
use stageready::{Endpoint, FormController, SimulatedEndpoint};

use super::Toaster;
use crate::browser::{TimeoutDelay, today_iso};
use crate::content::SITE;

#[component]
pub fn BookingCard() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let form = RwSignal::new(FormController::new(BookingForm::new(BookingMode::Schedule)));
    let endpoint = SimulatedEndpoint::new(SITE.booking.submit_delay(), TimeoutDelay);

    let mode = move || form.with(|f| f.model().mode());
    let submitting = move || form.with(|f| f.is_submitting());
    let value = move |field: BookingField| form.with(|f| f.model().field(field).to_string());
    let set_value = move |field: BookingField, value: String| {
        form.update(|f| f.model_mut().set_field(field, value));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(request)) = form.try_update(|f| f.begin_submit(&toaster)) else {
            return;
        };
        let endpoint = endpoint.clone();
        spawn_local(async move {
            let outcome = endpoint.submit(&request).await;
            form.update(|f| {
                let _ = f.finish_submit(outcome, &toaster);
            });
        });
    };

    let booking = &SITE.booking;

    view! {
        <div class="card booking-card">
            <div class="card-header">
                <h2>"Schedule or request a call"</h2>
                <p class="muted">
                    "Choose a time that works for you or request a call back. We'll confirm details within one business day."
                </p>
            </div>

            <div class="mode-tabs" role="tablist">
                {BookingMode::ALL
                    .into_iter()
                    .map(|m| view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || if mode() == m { "mode-tab active" } else { "mode-tab" }
                            aria-selected=move || (mode() == m).to_string()
                            disabled=submitting
                            on:click=move |_| form.update(|f| f.model_mut().set_mode(m))
                        >
                            {m.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <form class="form" on:submit=on_submit>
                <fieldset class="form-fields" disabled=submitting>
                    <div class="form-grid">
                        <label class="field">
                            <span>"Full name"</span>
                            <input
                                autocomplete="name"
                                placeholder="Alex Agent"
                                required
                                prop:value=move || value(BookingField::Name)
                                on:input=move |ev| set_value(BookingField::Name, event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Phone"</span>
                            <input
                                type="tel"
                                autocomplete="tel"
                                placeholder="0447 856 645"
                                prop:value=move || value(BookingField::Phone)
                                on:input=move |ev| set_value(BookingField::Phone, event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <Show when=move || mode() == BookingMode::Schedule>
                        <div class="form-grid">
                            <label class="field">
                                <span>"Email"</span>
                                <input
                                    type="email"
                                    autocomplete="email"
                                    placeholder="alex@example.com"
                                    prop:value=move || value(BookingField::Email)
                                    on:input=move |ev| set_value(BookingField::Email, event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span>"Agent licence (optional)"</span>
                                <input
                                    placeholder="VIC LIC #01234567"
                                    prop:value=move || value(BookingField::AgentLicense)
                                    on:input=move |ev| set_value(BookingField::AgentLicense, event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span>"Preferred date"</span>
                                <input
                                    type="date"
                                    min=today_iso()
                                    prop:value=move || value(BookingField::Date)
                                    on:input=move |ev| set_value(BookingField::Date, event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span>"Preferred time"</span>
                                <select
                                    aria-label="Preferred time"
                                    prop:value=move || value(BookingField::Time)
                                    on:change=move |ev| set_value(BookingField::Time, event_target_value(&ev))
                                >
                                    <option value="">"Select a time"</option>
                                    {booking
                                        .time_slots
                                        .iter()
                                        .map(|slot| view! { <option value=slot.clone()>{slot.clone()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                        </div>
                        <label class="field">
                            <span>"Consultation type"</span>
                            <select
                                aria-label="Consultation type"
                                prop:value=move || value(BookingField::Service)
                                on:change=move |ev| set_value(BookingField::Service, event_target_value(&ev))
                            >
                                <option value="">"Choose a consultation type"</option>
                                {booking
                                    .services
                                    .iter()
                                    .map(|s| view! { <option value=s.key.clone()>{s.label.clone()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </Show>

                    <label class="field">
                        <span>
                            {move || match mode() {
                                BookingMode::Schedule => "Property address or notes",
                                BookingMode::Callback => "How can we help?",
                            }}
                        </span>
                        <textarea
                            placeholder=move || match mode() {
                                BookingMode::Schedule => "123 Maple St, City · 3 bed / 2 bath. Target list date in 2 weeks.",
                                BookingMode::Callback => "Tell us a bit about the property and your goals.",
                            }
                            prop:value=move || value(BookingField::Notes)
                            on:input=move |ev| set_value(BookingField::Notes, event_target_value(&ev))
                        ></textarea>
                    </label>
                </fieldset>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || mode().submit_label(submitting())}
                    </button>
                    <p class="muted small">
                        {move || match mode() {
                            BookingMode::Schedule => "By submitting, you agree to be contacted about your request.",
                            BookingMode::Callback => "We typically call back within 1 business day.",
                        }}
                    </p>
                </div>
            </form>
        </div>
    }
}
