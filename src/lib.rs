//! Client-side interactivity for the support arm landing page: header and
//! scroll behavior, modal dialogs, FAQ, gallery lightbox, model viewers and
//! analytics wiring.

pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

use yew::prelude::*;

use crate::pages::landing::Landing;
use crate::state::UiProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <UiProvider>
            <Landing />
        </UiProvider>
    }
}
