use common::contact::SubmitError;
use common::timer::{delayed, DelayGuard};
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::Contact;
use crate::browser::GlooClock;

pub fn update(contact: &mut Contact, ctx: &Context<Contact>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            contact.form.edit(field, value);
            true
        }
        Msg::ServiceChanged(service) => {
            if service == contact.service {
                return false;
            }
            contact
                .form
                .retarget(contact.service.as_deref(), service.as_deref());
            contact.service = service;
            true
        }
        Msg::Submit => match contact.form.submit() {
            Ok(draft) => {
                match serde_json::to_string(&draft) {
                    Ok(json) => gloo_console::log!("contact message:", json),
                    Err(e) => gloo_console::error!(format!("could not serialize contact message: {}", e)),
                }
                contact.pending = Some(schedule(ctx.link(), contact.timing.submit_delay, Msg::Delivered));
                true
            }
            Err(SubmitError::Invalid(_)) => true,
            Err(e) => {
                gloo_console::warn!(e.to_string());
                false
            }
        },
        Msg::Delivered => {
            if !contact.form.delivered() {
                return false;
            }
            contact.pending = Some(schedule(
                ctx.link(),
                contact.timing.success_display,
                Msg::ResetAfterSuccess,
            ));
            true
        }
        Msg::ResetAfterSuccess => {
            contact.pending = None;
            contact.form.reset_after_success()
        }
    }
}

/// Sends `msg` to the page after `delay`, unless the returned guard is
/// dropped first.
fn schedule(link: &Scope<Contact>, delay: Duration, msg: Msg) -> DelayGuard {
    let (task, guard) = delayed(&GlooClock, delay, || msg);
    let link = link.clone();
    spawn_local(async move {
        if let Some(msg) = task.await {
            link.send_message(msg);
        }
    });
    guard
}
