//! Waitlist call-to-action section
//!
//! Drives a [`SubmissionFlow`] from the signup form. The signup itself is a
//! [`WaitlistAction`] injected by the caller; without one, a simulated
//! request with the server-configured delay is used.

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use crate::core::{
    EntranceTrigger, SubmissionFlow, SubmissionStatus, WaitlistAction, WaitlistSettings,
};
use crate::ui::common::{Button, ButtonSize, FormField};
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::{InViewOptions, use_entrance};

/// Shared handle to an injected waitlist action
pub type WaitlistHandle = Arc<dyn WaitlistAction + Send + Sync>;

/// Call-to-action section with the waitlist signup form
#[component]
pub fn WaitlistSection(
    /// Signup action; defaults to a simulated request
    #[prop(optional)]
    action: Option<WaitlistHandle>,
) -> impl IntoView {
    let flow = RwSignal::new(SubmissionFlow::new());
    let settings = RwSignal::new(WaitlistSettings::default());
    let injected = StoredValue::new(action);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_waitlist_settings().await {
                Ok(loaded) => settings.set(loaded),
                Err(e) => tracing::warn!("Using default waitlist settings: {}", e),
            }
        });
    });

    let container = NodeRef::<html::Div>::new();
    let shown = use_entrance(
        container,
        InViewOptions::default(),
        EntranceTrigger::fire_once(),
    );

    // Status drives which panel is mounted; field edits must not remount the form
    let status = Memo::new(move |_| flow.with(|f| f.status()));
    let submitting = Signal::derive(move || status.get() == SubmissionStatus::Submitting);
    let value = Signal::derive(move || flow.with(|f| f.field_value().to_string()));
    let field_error = Signal::derive(move || {
        flow.with(|f| f.validation_error().map(|e| e.to_string()))
    });

    let on_input = Callback::new(move |text: String| {
        flow.update(|f| {
            f.set_field_value(text);
        });
    });

    let on_reset = Callback::new(move |_| {
        flow.update(|f| {
            f.reset();
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(Ok(accepted)) = flow.try_update(|f| f.begin_submit()) else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::resolve_with_timeout;
            use gloo_timers::future::TimeoutFuture;

            let current = settings.get_untracked();
            let action: WaitlistHandle = injected.get_value().unwrap_or_else(|| {
                Arc::new(SimulatedWaitlist::new(current.simulated_delay_ms))
            });

            spawn_local(async move {
                let attempt = accepted.attempt();
                let timer = current.submit_timeout_ms.map(TimeoutFuture::new);
                let outcome = resolve_with_timeout(
                    action.submit(accepted.into_email()),
                    timer,
                    current.submit_timeout_ms.unwrap_or(0),
                )
                .await;
                flow.update(|f| {
                    f.complete(attempt, outcome);
                });
            });
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (accepted, injected, settings);
        }
    };

    view! {
        <section class="relative py-24 overflow-hidden">
            <div class="absolute inset-0 bg-radial-cyan-top" aria-hidden="true"></div>

            <div class="container relative z-10 px-4 md:px-6 mx-auto">
                <div class="max-w-3xl mx-auto" node_ref=container>
                    <div class="entrance text-center mb-10" class:entrance-visible=move || shown.get()>
                        <h2 class="text-3xl md:text-4xl font-bold mb-4 inline-block gradient-text-pink-cyan">
                            "Ready to Join the Revolution?"
                        </h2>
                        <p class="text-gray-400 max-w-2xl mx-auto">
                            "Sign up now to be among the first to experience our groundbreaking technology. Early adopters will receive exclusive benefits and priority access."
                        </p>
                    </div>

                    <div
                        class="entrance entrance-delay-200 waitlist-card"
                        class:entrance-visible=move || shown.get()
                    >
                        <div class="absolute top-0 right-0 -mt-10 -mr-10 w-40 h-40 glow-cyan-purple rounded-full blur-xl" aria-hidden="true"></div>
                        <div class="absolute bottom-0 left-0 -mb-10 -ml-10 w-40 h-40 glow-pink-purple rounded-full blur-xl" aria-hidden="true"></div>

                        {move || match status.get() {
                            SubmissionStatus::Success => view! {
                                <ResultPanel
                                    success=true
                                    title="Thank You for Joining!"
                                    message="We've received your email. Get ready to experience the future of technology. We'll be in touch soon with exclusive updates."
                                    button_text="Sign Up Another Email"
                                    on_reset=on_reset
                                />
                            }.into_any(),
                            SubmissionStatus::Error => view! {
                                <ResultPanel
                                    success=false
                                    title="Something Went Wrong"
                                    message="We couldn't process your request. Please try again or contact support if the problem persists."
                                    button_text="Try Again"
                                    on_reset=on_reset
                                />
                            }.into_any(),
                            SubmissionStatus::Idle | SubmissionStatus::Submitting => view! {
                                <div class="relative z-10">
                                    <h3 class="text-xl font-bold text-white mb-6">"Join the Waitlist"</h3>
                                    <form on:submit=on_submit class="space-y-6" novalidate=true>
                                        <FormField
                                            label="Email Address"
                                            name="email"
                                            input_type="email"
                                            autocomplete="email"
                                            placeholder="Enter your email"
                                            value=value
                                            on_input=on_input
                                            disabled=submitting
                                            error=field_error
                                        />
                                        <Button
                                            button_type="submit"
                                            size=ButtonSize::Large
                                            class="w-full".to_string()
                                            disabled=submitting
                                            loading=submitting
                                            loading_text="Processing..."
                                        >
                                            "Get Early Access"
                                        </Button>
                                        <p class="text-xs text-gray-500 text-center">
                                            "By signing up, you agree to our "
                                            <a href="#" class="link-accent">"Terms of Service"</a>
                                            " and "
                                            <a href="#" class="link-accent">"Privacy Policy"</a>
                                        </p>
                                    </form>
                                </div>
                            }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Terminal panel for Success and Error with a reset button
#[component]
fn ResultPanel(
    success: bool,
    title: &'static str,
    message: &'static str,
    button_text: &'static str,
    on_reset: Callback<()>,
) -> impl IntoView {
    let (badge_class, icon, icon_class) = if success {
        ("bg-green-500/20", icons::CHECK_CIRCLE, "h-8 w-8 text-green-500")
    } else {
        ("bg-red-500/20", icons::ALERT_CIRCLE, "h-8 w-8 text-red-500")
    };

    view! {
        <div class="result-panel flex flex-col items-center justify-center py-8 text-center" role="status">
            <div class=format!("w-16 h-16 rounded-full flex items-center justify-center mb-4 {}", badge_class)>
                <Icon name=icon class=icon_class />
            </div>
            <h3 class="text-xl font-bold text-white mb-2">{title}</h3>
            <p class="text-gray-400 max-w-md">{message}</p>
            <Button on_click=on_reset class="mt-6".to_string()>
                {button_text}
            </Button>
        </div>
    }
}

/// Stand-in signup request: waits, then succeeds
#[cfg(not(feature = "ssr"))]
struct SimulatedWaitlist {
    delay_ms: u32,
}

#[cfg(not(feature = "ssr"))]
impl SimulatedWaitlist {
    fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[cfg(not(feature = "ssr"))]
impl WaitlistAction for SimulatedWaitlist {
    fn submit(
        &self,
        email: String,
    ) -> futures::future::LocalBoxFuture<'static, Result<(), crate::core::SubmissionError>> {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            tracing::debug!("Simulated waitlist signup for {}", email);
            Ok(())
        })
    }
}

#[cfg(not(feature = "ssr"))]
async fn fetch_waitlist_settings() -> Result<WaitlistSettings, String> {
    let response = gloo_net::http::Request::get("/api/waitlist/settings")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("settings request failed with {}", response.status()));
    }

    response
        .json::<WaitlistSettings>()
        .await
        .map_err(|e| e.to_string())
}
