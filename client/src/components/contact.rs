//! Contact section: details, social links and the message form.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::contact::{ContactForm, Field, SubmitPhase};
use crate::state::reveal::CONTACT_THRESHOLD;
use crate::util::viewport::use_entrance;

const CONTACT_INFO: &[(&str, &str, &str, &str)] = &[
    ("✉", "Email", "adam@example.com", "mailto:adam@example.com"),
    ("☎", "Phone", "+1 (555) 123-4567", "tel:+15551234567"),
    ("📍", "Location", "San Francisco, CA", "#"),
];

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("LinkedIn", "https://linkedin.com", "in"),
    ("GitHub", "https://github.com", "GH"),
    ("Twitter", "https://twitter.com", "𝕏"),
];

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: Field,
    name: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));

    view! {
        <div class="form-group">
            {if field == Field::Message {
                view! {
                    <textarea
                        name=name
                        rows="6"
                        placeholder=placeholder
                        required=true
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        type=kind
                        name=name
                        placeholder=placeholder
                        required=true
                        prop:value=value
                        on:input=on_input
                    />
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, CONTACT_THRESHOLD);
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(payload)) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_contact(&payload).await;
            if let Err(e) = &outcome {
                log::warn!("contact submit failed: {e}");
            }
            form.update(|f| f.finish(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let sent = move || form.with(|f| f.phase == SubmitPhase::Sent);
    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <section id="contact" class="contact" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading title="Get In Touch"/>
                <p class="contact-subtitle reveal" style="transition-delay: 200ms;">
                    "Have a project in mind or want to discuss opportunities? Let's connect!"
                </p>

                <div class="contact-content">
                    <div class="contact-info reveal slide-x left" style="transition-delay: 300ms;">
                        <h3>"Let's Talk"</h3>
                        <p>
                            "I'm always open to discussing new projects, creative ideas, \
                             or opportunities to be part of your vision."
                        </p>
                        <div class="info-cards">
                            {CONTACT_INFO
                                .iter()
                                .map(|(icon, title, value, href)| {
                                    view! {
                                        <a href=*href class="info-card">
                                            <div class="info-icon">{*icon}</div>
                                            <div>
                                                <span class="info-title">{*title}</span>
                                                <span class="info-value">{*value}</span>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="contact-socials">
                            <h4>"Connect with me"</h4>
                            <div class="social-links">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|(label, href, glyph)| {
                                        view! {
                                            <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*label>
                                                {*glyph}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="contact-form-wrapper reveal slide-x right" style="transition-delay: 400ms;">
                        <Show
                            when=sent
                            fallback=move || {
                                view! {
                                    <form class="contact-form" on:submit=on_submit>
                                        <FormInput form=form field=Field::Name name="name" kind="text" placeholder="Your Name"/>
                                        <FormInput form=form field=Field::Email name="email" kind="email" placeholder="Your Email"/>
                                        <FormInput form=form field=Field::Subject name="subject" kind="text" placeholder="Subject"/>
                                        <FormInput form=form field=Field::Message name="message" kind="text" placeholder="Your Message"/>
                                        {move || {
                                            form.with(|f| f.error.clone())
                                                .map(|msg| view! { <p class="error-message">{msg}</p> })
                                        }}
                                        <button type="submit" class="btn-primary submit-btn" disabled=submitting>
                                            {move || {
                                                if submitting() {
                                                    view! { <span class="loading">"Sending..."</span> }.into_any()
                                                } else {
                                                    view! { "Send Message ➤" }.into_any()
                                                }
                                            }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="success-message">
                                <span class="success-icon">"✓"</span>
                                <h3>"Message Sent!"</h3>
                                <p>"Thank you for reaching out. I'll get back to you soon."</p>
                                <button class="btn-primary" on:click=move |_| form.update(ContactForm::reset)>
                                    "Send Another Message"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
