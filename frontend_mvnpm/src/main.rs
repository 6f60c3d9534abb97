mod api;
mod components;
mod config_file;
mod pages;
mod router;

use crate::router::AppRouter;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <AppRouter />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
