use crate::app::App;

mod app;
mod components;
mod validation;

fn main() {
    yew::Renderer::<App>::new().render();
}
