//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Let the server answer with a real 404 status
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found - Neoverse" />

        <div class="min-h-screen bg-black text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 rounded-full border border-purple-500/30 flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold mb-4 gradient-text-hero">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-base btn-primary btn-lg">
                    "Back to Home"
                </A>
            </div>
        </div>
    }
}
