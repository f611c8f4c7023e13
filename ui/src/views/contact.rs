use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::footer::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::config::SiteConfig;
use crate::contact::{deliver, ContactDraft, ContactForm, SiteMailer};
use crate::core::platform;
use crate::core::theme::use_theme;
use crate::i18n::use_locale;
use crate::t;
use crate::Hero;

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3329.123456789!2d-3.654321!3d36.432198!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0xd72f8f123456789%3A0xabcdef123456789!2sUrbanizaci%C3%B3n%20Riviera%20del%20Sol!5e0!3m2!1ses!2ses!4v1699999999999!5m2!1ses!2ses";

/// Move the form into `Sending` and return the draft to deliver. A rejected
/// submit leaves its reason on the form for the view to show.
fn start_submit(mut form: Signal<ContactForm>) -> Option<ContactDraft> {
    match form.with_mut(|f| f.begin_submit()) {
        Ok(draft) => Some(draft),
        Err(reason) => {
            debug!("contact submit ignored: {reason}");
            None
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let _lang = use_locale().current();
    let palette = use_theme().palette();
    let config = use_context::<SiteConfig>();
    let mut form = use_signal(ContactForm::default);

    let mailer = use_hook(|| SiteMailer::from_config(config.email.clone()));
    let sender = use_coroutine(move |mut rx: UnboundedReceiver<ContactDraft>| {
        let mailer = mailer.clone();
        async move {
            while let Some(draft) = rx.next().await {
                let outcome = deliver(&mailer, &draft, platform::alert).await;
                form.with_mut(|f| f.complete(outcome));
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(draft) = start_submit(form) {
            sender.send(draft);
        }
    };

    let field_style = format!(
        "background-color: {}; color: {}; border-color: {};",
        palette.input_bg, palette.text, palette.border
    );
    let state = form.read().clone();

    rsx! {
        main { id: "contact", class: "page page-contact",
            Hero {
                video: "/videos/contact-bg.mp4",
                title: t!("contact-title"),
                subtitle: t!("contact-subtitle"),
            }

            section { class: "page-contact__body",
                div { class: "split split--top",
                    div { class: "page-contact__info",
                        div { class: "map",
                            iframe {
                                src: MAP_EMBED,
                                class: "map__frame",
                                "allowfullscreen": "true",
                                "loading": "lazy",
                                title: t!("contact-map-title"),
                            }
                        }

                        div { class: "info-card", style: "{palette.surface_style()}",
                            h3 { {t!("contact-info-title")} }
                            p { {t!("contact-info-email")} ": {CONTACT_EMAIL}" }
                            p { {t!("contact-info-phone")} ": {CONTACT_PHONE}" }

                            h3 { {t!("contact-hours-title")} }
                            p { {t!("contact-hours-week")} ": 8:00 AM - 6:00 PM" }
                            p { {t!("contact-hours-saturday")} ": 10:00 AM - 1:00 PM" }
                            p { {t!("contact-hours-sunday")} }
                        }
                    }

                    div { class: "page-contact__form",
                        if state.is_submitted() {
                            div { class: "notice notice--success", role: "status",
                                h3 { {t!("contact-success-title")} }
                                p { {t!("contact-success-body")} }
                            }
                        } else {
                            form { class: "contact-form", onsubmit: on_submit,
                                input {
                                    r#type: "text",
                                    name: "name",
                                    class: "contact-form__field",
                                    style: "{field_style}",
                                    placeholder: t!("contact-form-name"),
                                    required: true,
                                    value: "{state.draft.name}",
                                    oninput: move |evt| form.with_mut(|f| f.draft.name = evt.value()),
                                }
                                input {
                                    r#type: "email",
                                    name: "email",
                                    class: "contact-form__field",
                                    style: "{field_style}",
                                    placeholder: t!("contact-form-email"),
                                    required: true,
                                    value: "{state.draft.email}",
                                    oninput: move |evt| form.with_mut(|f| f.draft.email = evt.value()),
                                }
                                textarea {
                                    name: "message",
                                    class: "contact-form__field contact-form__message",
                                    style: "{field_style}",
                                    placeholder: t!("contact-form-message"),
                                    required: true,
                                    rows: "12",
                                    value: "{state.draft.message}",
                                    oninput: move |evt| form.with_mut(|f| f.draft.message = evt.value()),
                                }
                                if let Some(issue) = state.last_error() {
                                    p { class: "contact-form__error", role: "alert", {issue.message()} }
                                }
                                button {
                                    r#type: "submit",
                                    class: "button button--primary button--pill",
                                    disabled: state.is_sending(),
                                    if state.is_sending() {
                                        {t!("contact-form-sending")}
                                    } else {
                                        {t!("contact-form-button")}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
