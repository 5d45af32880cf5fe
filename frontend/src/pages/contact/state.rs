use common::contact::{ContactForm, ContactTiming};
use common::timer::DelayGuard;
use yew_router::prelude::LocationHandle;

pub struct Contact {
    /// Service title from `?service=`, shown above the form.
    pub service: Option<String>,
    pub form: ContactForm,
    pub timing: ContactTiming,
    /// Pending delivery or reset step. Dropped with the page, which cancels it.
    pub pending: Option<DelayGuard>,
    pub location: Option<LocationHandle>,
}

impl Contact {
    pub fn new(service: Option<String>) -> Self {
        Self {
            form: ContactForm::new(service.as_deref()),
            service,
            timing: ContactTiming::default(),
            pending: None,
            location: None,
        }
    }
}
