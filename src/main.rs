use yew::prelude::*;
use log::{info, Level};

mod config;
mod interaction {
    pub mod form;
    pub mod nav;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod contact_form;
    pub mod header;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! { <Home /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
