use crate::app::App;

mod app;
mod components;
mod config;
mod service;
mod session;

fn main() {
    yew::Renderer::<App>::new().render();
}
