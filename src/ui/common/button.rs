use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Cyan-to-purple gradient with glow
    Primary,
    /// Purple outline
    Outline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// HTML button type (`button` or `submit`)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler, not needed for submit buttons
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Text shown instead of the children while loading
    #[prop(optional)]
    loading_text: Option<&'static str>,
    /// Button content (text or elements)
    children: ChildrenFn,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if !loading.get_untracked() {
                    if let Some(callback) = on_click.as_ref() {
                        callback.run(());
                    }
                }
            }
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get()
        >
            {move || {
                if loading.get() {
                    view! {
                        <span class="flex items-center justify-center">
                            <Icon name=icons::LOADER class="animate-spin -ml-1 mr-3 h-5 w-5" />
                            {loading_text}
                        </span>
                    }
                    .into_any()
                } else {
                    view! {
                        <span class="flex items-center justify-center">
                            {icon.map(|name| view! { <Icon name=name class="mr-2 h-4 w-4" /> })}
                            {children()}
                        </span>
                    }
                    .into_any()
                }
            }}
        </button>
    }
}

/// Round icon-only button component
#[component]
pub fn IconButton(
    /// Icon name to display
    icon: &'static str,
    /// Click handler
    on_click: Callback<()>,
    /// Accessible label, also used as tooltip
    label: &'static str,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn-icon".to_string()
    } else {
        format!("btn-icon {}", class)
    };

    view! {
        <button
            type="button"
            class=full_classes
            on:click=move |_| on_click.run(())
            title=label
            aria-label=label
        >
            <Icon name=icon class="h-5 w-5" />
        </button>
    }
}
