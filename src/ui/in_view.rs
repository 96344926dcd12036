//! Viewport visibility hook backed by `IntersectionObserver`
//!
//! Reports whether an element crosses the configured visibility threshold.
//! [`use_in_view`] only reports; [`use_entrance`] feeds the reports into a
//! [`EntranceTrigger`] that decides whether the animation fires once or repeats.

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::EntranceTrigger;

/// Observer settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element (0.0 - 1.0) that must be visible
    pub amount: f64,
    /// Stop observing after the first entry
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            amount: 0.1,
            once: true,
        }
    }
}

/// Track whether `target` is in the viewport.
///
/// Always `false` during server rendering.
pub fn use_in_view<E>(target: NodeRef<E>, options: InViewOptions) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (in_view, set_in_view) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::JsValue;
        use leptos::wasm_bindgen::prelude::Closure;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

        let handle = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if handle.with_value(|h| h.is_some()) {
                return;
            }

            let callback: ObserverCallback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let visible = entry.is_intersecting();
                        set_in_view.set(visible);
                        if visible && options.once {
                            observer.disconnect();
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.amount));

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                Ok(observer) => {
                    observer.observe(element.unchecked_ref::<web_sys::Element>());
                    handle.set_value(Some((observer, callback)));
                }
                Err(e) => {
                    // Without an observer, show content instead of hiding it forever
                    tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                    set_in_view.set(true);
                }
            }
        });

        on_cleanup(move || {
            handle.update_value(|h| {
                if let Some((observer, _callback)) = h.take() {
                    observer.disconnect();
                }
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, options, set_in_view);
    }

    in_view
}

/// Entrance animation state for `target`.
///
/// Returns `true` while the element should be in its visible pose, as
/// decided by `trigger`. Stays `false` during server rendering so the
/// animation can play after hydration.
pub fn use_entrance<E>(
    target: NodeRef<E>,
    options: InViewOptions,
    trigger: EntranceTrigger,
) -> Memo<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let in_view = use_in_view(target, options);
    let trigger = RwSignal::new(trigger);

    Effect::new(move |_| {
        let visible = in_view.get();
        trigger.update(|t| {
            t.on_visibility_change(visible);
        });
    });

    Memo::new(move |_| trigger.with(|t| t.is_visible()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_fire_once() {
        let options = InViewOptions::default();
        assert!(options.once);
        assert_eq!(options.amount, 0.1);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_entrance_hidden_on_server() {
        let owner = Owner::new();
        owner.with(|| {
            let target = NodeRef::<leptos::html::Section>::new();
            let shown = use_entrance(
                target,
                InViewOptions::default(),
                EntranceTrigger::fire_once(),
            );
            assert!(!shown.get_untracked());
        });
    }
}
