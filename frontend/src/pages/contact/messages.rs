use common::contact::Field;

pub enum Msg {
    Edit(Field, String),
    /// The `?service=` query changed while the page stayed mounted.
    ServiceChanged(Option<String>),
    Submit,
    /// The simulated delivery finished.
    Delivered,
    /// The success panel has been shown long enough.
    ResetAfterSuccess,
}
