use common::model::theme::Theme;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Dropdown listing every theme. Selecting one reports it through
/// `on_change`; the store itself lives in the root component.
pub struct ThemeSwitcher {
    open: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub theme: Theme,
    pub on_change: Callback<Theme>,
}

pub enum Msg {
    Toggle,
    Select(Theme),
}

impl Component for ThemeSwitcher {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.open = !self.open;
            }
            Msg::Select(theme) => {
                self.open = false;
                ctx.props().on_change.emit(theme);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = ctx.props().theme;
        let link = ctx.link();

        html! {
            <div class="theme-switcher">
                <button class="btn outline" onclick={link.callback(|_| Msg::Toggle)}>
                    <i class="material-icons">{ current.icon() }</i>
                    <span class="hide-sm">{ current.label() }</span>
                </button>
                if self.open {
                    <ul class="dropdown-menu">
                        { for Theme::ALL.iter().map(|&theme| html! {
                            <li
                                class={classes!("dropdown-item", (theme == current).then_some("active"))}
                                onclick={link.callback(move |_| Msg::Select(theme))}
                            >
                                <i class="material-icons">{ theme.icon() }</i>
                                <span>{ theme.label() }</span>
                            </li>
                        }) }
                    </ul>
                }
            </div>
        }
    }
}
