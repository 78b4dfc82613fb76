//! List Header Component

use leptos::prelude::*;

/// Page title and intro text
#[component]
pub fn ListHeader(title: &'static str, intro: &'static str) -> impl IntoView {
    view! {
        <h1 class="title">{title}</h1>
        <p class="text">{intro}</p>
    }
}
