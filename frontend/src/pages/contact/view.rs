use common::contact::{Field, FormPhase};
use common::content::profile::{EMAIL, LOCATION, PHONE, SOCIAL_LINKS};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::Contact;

pub fn view(contact: &Contact, ctx: &Context<Contact>) -> Html {
    let link = ctx.link();

    html! {
        <section class="container page">
            <div class="page-header">
                <h1 class="page-title underlined">{"Get in Touch"}</h1>
                <p class="muted page-lead">
                    {"Have a project in mind or want to learn more about my services? I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."}
                </p>
            </div>

            <div class="two-columns wide-gap">
                <div class="stack">
                    { build_contact_info() }
                    { build_social() }
                </div>
                <div class="card form-card">
                    <div class="card-header">
                        <h2>{"Send a Message"}</h2>
                        if let Some(service) = &contact.service {
                            <p class="muted small">{ format!("Regarding: {}", service) }</p>
                        }
                    </div>
                    if contact.form.phase() == FormPhase::Submitted {
                        { build_success() }
                    } else {
                        { build_form(contact, link) }
                    }
                </div>
            </div>

            <div class="card cta centered">
                <h2>{"Let's Build Something Amazing Together"}</h2>
                <p class="muted">
                    {"Whether you need a new website, a web application, or help with an existing project, I'm here to help turn your ideas into reality."}
                </p>
            </div>
        </section>
    }
}

fn build_contact_info() -> Html {
    let phone_href = format!(
        "tel:{}",
        PHONE.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect::<String>()
    );

    html! {
        <div class="card">
            <div class="card-header"><h2>{"Contact Info"}</h2></div>
            <div class="info-list">
                { info_row("mail", "Email", html! { <a href={format!("mailto:{}", EMAIL)}>{ EMAIL }</a> }) }
                { info_row("phone", "Phone", html! { <a href={phone_href}>{ PHONE }</a> }) }
                { info_row("place", "Location", html! { <span>{ LOCATION }</span> }) }
            </div>
        </div>
    }
}

fn info_row(icon: &'static str, label: &'static str, value: Html) -> Html {
    html! {
        <div class="info-row">
            <span class="icon-bubble"><i class="material-icons">{ icon }</i></span>
            <div>
                <p class="muted small">{ label }</p>
                { value }
            </div>
        </div>
    }
}

fn build_social() -> Html {
    html! {
        <div class="card">
            <h3 class="bar-title">{"Connect with me"}</h3>
            <div class="social-row">
                { for SOCIAL_LINKS.iter().map(|social| html! {
                    <a class="icon-bubble" href={social.url} target="_blank" rel="noopener noreferrer" title={social.name}>
                        <i class="material-icons">{ social.icon }</i>
                    </a>
                }) }
            </div>
        </div>
    }
}

fn build_success() -> Html {
    html! {
        <div class="success-panel">
            <i class="material-icons huge success">{"check_circle"}</i>
            <h3>{"Message Sent!"}</h3>
            <p class="muted">{"Thank you for your message. I'll get back to you as soon as possible!"}</p>
        </div>
    }
}

fn build_form(contact: &Contact, link: &Scope<Contact>) -> Html {
    let submitting = contact.form.phase() == FormPhase::Submitting;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="contact-form" {onsubmit} novalidate={true}>
            { input_field(contact, link, Field::Name, "Name", "text", "Your name") }
            { input_field(contact, link, Field::Email, "Email", "email", "your.email@example.com") }
            { input_field(contact, link, Field::Subject, "Subject (optional)", "text", "What's this regarding?") }

            <div class="form-field">
                <label for={Field::Message.id()}>{"Message"}</label>
                <textarea
                    id={Field::Message.id()}
                    rows="5"
                    placeholder="Your message here..."
                    class={classes!(contact.form.error(Field::Message).is_some().then_some("invalid"))}
                    value={contact.form.value(Field::Message).to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Edit(Field::Message, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
                { field_error(contact, Field::Message) }
                <div class="counter muted small">{ format!("{} characters", contact.form.message_length()) }</div>
            </div>

            <button type="submit" class="btn primary block" disabled={submitting}>
                if submitting {
                    <span class="spinner"></span>
                    <span>{"Sending..."}</span>
                } else {
                    <i class="material-icons small">{"send"}</i>
                    <span>{"Send Message"}</span>
                }
            </button>
        </form>
    }
}

fn input_field(
    contact: &Contact,
    link: &Scope<Contact>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> Html {
    html! {
        <div class="form-field">
            <label for={field.id()}>{ label }</label>
            <input
                id={field.id()}
                type={kind}
                {placeholder}
                class={classes!(contact.form.error(field).is_some().then_some("invalid"))}
                value={contact.form.value(field).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            { field_error(contact, field) }
        </div>
    }
}

fn field_error(contact: &Contact, field: Field) -> Html {
    match contact.form.error(field) {
        Some(error) => html! {
            <p class="field-error small">
                <i class="material-icons small">{"error_outline"}</i>
                { error.to_string() }
            </p>
        },
        None => Html::default(),
    }
}
