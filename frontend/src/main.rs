use crate::app::App;

mod app;
mod browser;
mod components;
mod pages;
mod route;
mod theme;

fn main() {
    yew::Renderer::<App>::new().render();
}
