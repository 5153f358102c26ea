//! Card for a single capability: details, consultant roster, and the
//! registration form.
//!
//! DESIGN
//! ======
//! The card owns only its email input. Actions go up through callbacks that
//! carry the capability name (and the input signal for registration), so the
//! board always answers in this card's status slot.

use leptos::prelude::*;

use crate::components::status_message::StatusMessageView;
use crate::state::status::StatusMessage;
use crate::view::{CardView, ConsultantView, EMAIL_PLACEHOLDER, NO_CONSULTANTS_TEXT};

/// Arguments of a registration request: capability name and the card's email input.
pub type RegisterRequest = (String, RwSignal<String>);

/// Arguments of an unregistration request: capability name and consultant email.
pub type UnregisterRequest = (String, String);

#[component]
pub fn CapabilityCard(
    card: CardView,
    #[prop(into)] status: Signal<Option<StatusMessage>>,
    on_register: Callback<RegisterRequest>,
    on_unregister: Callback<UnregisterRequest>,
) -> impl IntoView {
    let CardView {
        name,
        description,
        practice_area,
        industry_verticals,
        capacity,
        team_size,
        consultants,
        email_input_id,
    } = card;

    let email = RwSignal::new(String::new());
    let form_capability = name.clone();
    let on_submit = {
        let name = name.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            on_register.run((name.clone(), email));
        }
    };

    let roster = if consultants.is_empty() {
        view! {
            <p>
                <em>{NO_CONSULTANTS_TEXT}</em>
            </p>
        }
        .into_any()
    } else {
        view! {
            <div class="consultants-section">
                <h5>"Registered Consultants:"</h5>
                <ul class="consultants-list">
                    {consultants
                        .into_iter()
                        .map(|consultant| view! { <ConsultantItem consultant on_unregister/> })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any()
    };

    let label_for = email_input_id.clone();

    view! {
        <div class="capability-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p>
                <strong>"Practice Area:"</strong>
                " "
                {practice_area}
            </p>
            <p>
                <strong>"Industry Verticals:"</strong>
                " "
                {industry_verticals}
            </p>
            <p>
                <strong>"Capacity:"</strong>
                " "
                {capacity}
            </p>
            <p>
                <strong>"Current Team:"</strong>
                " "
                {team_size}
            </p>
            <div class="consultants-container">{roster}</div>
            <div class="register-container">
                <form class="register-form" data-capability=form_capability on:submit=on_submit>
                    <div class="form-group">
                        <label for=label_for>"Consultant Email:"</label>
                        <input
                            type="email"
                            id=email_input_id
                            required=true
                            placeholder=EMAIL_PLACEHOLDER
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit">"Register Expertise"</button>
                    <StatusMessageView status/>
                </form>
            </div>
        </div>
    }
}

/// One roster entry with its delete control.
#[component]
fn ConsultantItem(consultant: ConsultantView, on_unregister: Callback<UnregisterRequest>) -> impl IntoView {
    let ConsultantView { capability, email } = consultant;
    let label = format!("Unregister {email}");
    let title = label.clone();
    let data_capability = capability.clone();
    let data_email = email.clone();
    let shown_email = email.clone();

    view! {
        <li>
            <span class="consultant-email">{shown_email}</span>
            <button
                class="delete-btn"
                type="button"
                data-capability=data_capability
                data-email=data_email
                title=title
                aria-label=label
                on:click=move |_| on_unregister.run((capability.clone(), email.clone()))
            >
                "❌"
            </button>
        </li>
    }
}
