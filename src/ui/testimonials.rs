//! Testimonials carousel section
//!
//! Renders a [`Rotator`] of customer quotes. The active card slides in from
//! the side matching the navigation direction while the previous card slides
//! out the other way; the section header fades in whenever the carousel
//! scrolls into view.

use leptos::html;
use leptos::prelude::*;

use crate::core::{EntrancePolicy, Rotator};
use crate::ui::common::IconButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::{InViewOptions, use_in_view};

/// Highest star rating shown on a card
pub const MAX_RATING: u8 = 5;

/// One customer quote
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    /// Avatar image; initials are shown when absent
    pub avatar: Option<&'static str>,
    pub content: &'static str,
    /// 0 to [`MAX_RATING`] stars, larger values are clamped
    pub rating: u8,
}

impl Testimonial {
    /// First letter of each word of the name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// `true` for each filled star, `MAX_RATING` entries
    pub fn stars(&self) -> impl Iterator<Item = bool> {
        let filled = self.rating.min(MAX_RATING);
        (0..MAX_RATING).map(move |i| i < filled)
    }
}

/// Quotes shown on the landing page
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Alex Chen",
            role: "CTO",
            company: "NeoTech Industries",
            avatar: None,
            content: "This platform has completely transformed how we approach digital innovation. The neural interface technology is unlike anything I've experienced before, allowing for seamless integration between thought and action.",
            rating: 5,
        },
        Testimonial {
            name: "Sophia Rodriguez",
            role: "Security Analyst",
            company: "Quantum Shield",
            avatar: None,
            content: "As someone who works in cybersecurity, I'm extremely impressed by the quantum encryption capabilities. It's provided us with a level of security that was previously thought impossible.",
            rating: 5,
        },
        Testimonial {
            name: "Marcus Kim",
            role: "Lead Developer",
            company: "Synapse Systems",
            avatar: None,
            content: "The hyper processing feature has cut our rendering times by 90%. What used to take hours now happens in minutes. This is a game-changer for our development workflow.",
            rating: 4,
        },
    ]
}

/// Testimonials section with carousel navigation
#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let rotator = match Rotator::new(testimonials(), EntrancePolicy::Repeat) {
        Ok(rotator) => RwSignal::new(rotator),
        Err(e) => {
            tracing::warn!("Testimonials section hidden: {}", e);
            return ().into_any();
        }
    };

    let container = NodeRef::<html::Section>::new();
    let in_view = use_in_view(
        container,
        InViewOptions {
            amount: 0.3,
            once: false,
        },
    );

    Effect::new(move |_| {
        let visible = in_view.get();
        rotator.update(|r| {
            r.on_visibility_change(visible);
        });
    });

    // Memos keep cards from re-rendering (and re-animating) on unrelated updates
    let visible = Memo::new(move |_| rotator.with(|r| r.is_visible()));
    let transition = Memo::new(move |_| rotator.with(|r| r.transition()));
    let active_index = Memo::new(move |_| rotator.with(|r| r.active_index()));

    let on_previous = Callback::new(move |_| rotator.update(|r| r.previous()));
    let on_next = Callback::new(move |_| rotator.update(|r| r.next()));

    view! {
        <section class="relative py-24 overflow-hidden bg-black" node_ref=container>
            <div class="absolute inset-0 bg-radial-purple" aria-hidden="true"></div>

            <div class="container relative z-10 px-4 md:px-6 mx-auto">
                <div class="text-center mb-16">
                    <h2
                        class="entrance text-3xl md:text-4xl font-bold mb-4 inline-block gradient-text-cyan-pink"
                        class:entrance-visible=move || visible.get()
                    >
                        "What Our Users Say"
                    </h2>
                    <p
                        class="entrance entrance-delay-200 max-w-2xl mx-auto text-gray-400"
                        class:entrance-visible=move || visible.get()
                    >
                        "Hear from the pioneers who are already experiencing the future of technology."
                    </p>
                </div>

                <div class="relative max-w-4xl mx-auto">
                    <div class="testimonial-viewport" aria-live="polite">
                        {move || {
                            let t = transition.get();
                            let incoming = rotator.with_untracked(|r| r.active().clone());
                            let outgoing = t
                                .outgoing
                                .and_then(|index| rotator.with_untracked(|r| r.get(index).cloned()));
                            let enter_style = format!("--slide-from: {}px", t.enter_offset());
                            let exit_style = format!("--slide-to: {}px", t.exit_offset());

                            view! {
                                {outgoing.map(|testimonial| view! {
                                    <div class="testimonial-slide testimonial-exit" style=exit_style aria-hidden="true">
                                        <TestimonialCard testimonial=testimonial />
                                    </div>
                                })}
                                <div class="testimonial-slide testimonial-enter" style=enter_style>
                                    <TestimonialCard testimonial=incoming />
                                </div>
                            }
                        }}
                    </div>

                    <div class="flex justify-center items-center mt-8 gap-4">
                        <IconButton icon=icons::CHEVRON_LEFT on_click=on_previous label="Previous" />

                        <div class="flex items-center gap-2">
                            {move || {
                                let current = active_index.get();
                                (0..rotator.with_untracked(|r| r.len()))
                                    .map(|index| {
                                        let is_active = index == current;
                                        view! {
                                            <button
                                                type="button"
                                                class="testimonial-dot"
                                                class:testimonial-dot-active=is_active
                                                on:click=move |_| {
                                                    if let Some(Err(e)) = rotator.try_update(|r| r.jump_to(index)) {
                                                        tracing::warn!("Indicator jump failed: {}", e);
                                                    }
                                                }
                                                aria-label=format!("Go to testimonial {}", index + 1)
                                                aria-current=is_active.then_some("true")
                                            ></button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>

                        <IconButton icon=icons::CHEVRON_RIGHT on_click=on_next label="Next" />
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

/// Single quote card
#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initials = testimonial.initials();
    let stars: Vec<bool> = testimonial.stars().collect();

    view! {
        <div class="testimonial-card">
            <div class="absolute top-0 right-0 -mt-4 -mr-4 w-24 h-24 glow-purple-cyan rounded-full blur-xl" aria-hidden="true"></div>
            <div class="absolute bottom-0 left-0 -mb-4 -ml-4 w-32 h-32 glow-pink-purple rounded-full blur-xl" aria-hidden="true"></div>

            <div class="flex flex-col md:flex-row gap-6 items-start md:items-center relative z-10">
                <div class="w-16 h-16 rounded-full border-2 border-purple-500/50 overflow-hidden flex-shrink-0 flex items-center justify-center bg-purple-900 text-white font-semibold">
                    {match testimonial.avatar {
                        Some(src) => view! {
                            <img src=src alt=testimonial.name class="w-full h-full object-cover" />
                        }.into_any(),
                        None => view! { <span>{initials}</span> }.into_any(),
                    }}
                </div>

                <div class="flex-1">
                    <div class="flex items-center mb-2" aria-label=format!("Rated {} out of {}", testimonial.rating.min(MAX_RATING), MAX_RATING)>
                        {stars.into_iter().map(|filled| {
                            if filled {
                                view! { <Icon name=icons::STAR_FILLED class="h-4 w-4 text-yellow-500" /> }
                            } else {
                                view! { <Icon name=icons::STAR class="h-4 w-4 text-gray-600" /> }
                            }
                        }).collect_view()}
                    </div>
                    <p class="text-lg md:text-xl text-gray-200 italic mb-4">
                        "\u{201C}"{testimonial.content}"\u{201D}"
                    </p>
                    <div>
                        <h4 class="font-bold text-white">{testimonial.name}</h4>
                        <p class="text-sm text-gray-400">
                            {format!("{}, {}", testimonial.role, testimonial.company)}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let t = &testimonials()[1];
        assert_eq!(t.initials(), "SR");
    }

    #[test]
    fn test_stars_clamped() {
        let mut t = testimonials()[2].clone();
        assert_eq!(t.stars().filter(|s| *s).count(), 4);
        assert_eq!(t.stars().count(), MAX_RATING as usize);

        t.rating = 9;
        assert!(t.stars().all(|s| s));
    }

    #[test]
    fn test_testimonials_not_empty() {
        assert!(Rotator::new(testimonials(), EntrancePolicy::Repeat).is_ok());
    }
}
