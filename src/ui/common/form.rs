use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Form field component with label, input and field-level error
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// `id`/`name` of the input, also links the label
    name: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Error message to display under the input
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let error_id = format!("{}-error", name);
    let described_by = error_id.clone();

    view! {
        <div class="space-y-2">
            <label for=name class="block text-sm font-medium text-gray-300">
                {label}
            </label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
                aria-invalid=move || error.get().is_some().to_string()
                aria-describedby=described_by
            />
            {move || {
                error.get().map(|err| view! {
                    <p id=error_id.clone() class="flex items-center text-sm text-red-400" role="alert">
                        <Icon name=icons::ALERT_CIRCLE class="mr-1 h-4 w-4"/>
                        <span>{err}</span>
                    </p>
                })
            }}
        </div>
    }
}
