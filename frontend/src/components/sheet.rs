//! Slide-in sheet used by the mobile navigation.
//!
//! The sheet is always mounted; visibility is the `show` class on its root,
//! toggled with [`open_sheet`] and [`close_sheet`] so the CSS transition can
//! run.

use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct Sheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: Option<String>,
}

impl Component for Sheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <aside class="side-sheet" ref={props.node_ref.clone()}>
                if let Some(title) = &props.title {
                    <h2 class="side-sheet-title">{ title.clone() }</h2>
                }
                { props.children.clone() }
            </aside>
        }
    }
}

pub fn open_sheet(sheet_ref: &NodeRef) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let _ = sheet.class_list().add_1("show");
    }
}

pub fn close_sheet(sheet_ref: &NodeRef) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let _ = sheet.class_list().remove_1("show");
    }
}
