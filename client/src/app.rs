//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_widget::ChatWidget;
use crate::config::ClientConfig;

/// Root application component.
///
/// Reads the build-time endpoint once and hands it to the widget.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();

    view! {
        <Title text="Chatbot"/>
        <main class="app">
            <ChatWidget endpoint=config.endpoint/>
        </main>
    }
}
