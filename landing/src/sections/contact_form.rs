use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stageready::form::{ContactField, ContactForm};
use stageready::{Endpoint, FormController, SimulatedEndpoint};

use super::Toaster;
use crate::browser::TimeoutDelay;
use crate::content::SITE;

#[component]
pub fn ContactCard() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let form = RwSignal::new(FormController::new(ContactForm::new()));
    let endpoint = SimulatedEndpoint::new(SITE.contact.submit_delay(), TimeoutDelay);

    let submitting = move || form.with(|f| f.is_submitting());
    let value = move |field: ContactField| form.with(|f| f.model().field(field).to_string());
    let set_value = move |field: ContactField, value: String| {
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

    view! {
        <div class="card contact-card">
            <div class="card-header">
                <h2>"Send us a message"</h2>
                <p class="muted">"Share a few details and we'll get back to you within one business day."</p>
            </div>
            <form class="form" on:submit=on_submit>
                <fieldset class="form-fields" disabled=submitting>
                    <div class="form-grid">
                        <label class="field">
                            <span>"Name"</span>
                            <input
                                autocomplete="name"
                                prop:value=move || value(ContactField::Name)
                                on:input=move |ev| set_value(ContactField::Name, event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                autocomplete="email"
                                prop:value=move || value(ContactField::Email)
                                on:input=move |ev| set_value(ContactField::Email, event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Phone (optional)"</span>
                            <input
                                type="tel"
                                autocomplete="tel"
                                prop:value=move || value(ContactField::Phone)
                                on:input=move |ev| set_value(ContactField::Phone, event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Service"</span>
                            <select
                                aria-label="Service"
                                prop:value=move || value(ContactField::Service)
                                on:change=move |ev| set_value(ContactField::Service, event_target_value(&ev))
                            >
                                <option value="">"Select a service"</option>
                                {SITE
                                    .contact
                                    .services
                                    .iter()
                                    .map(|s| view! { <option value=s.key.clone()>{s.label.clone()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <label class="field">
                        <span>"Message"</span>
                        <textarea
                            placeholder="Tell us about the property, timing and goals."
                            prop:value=move || value(ContactField::Message)
                            on:input=move |ev| set_value(ContactField::Message, event_target_value(&ev))
                        ></textarea>
                    </label>
                </fieldset>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send message" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
