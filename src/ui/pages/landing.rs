//! Landing page component
//!
//! A single-page marketing site for Neoverse featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with call-to-action buttons
//! - Features section with technology cards
//! - Testimonials carousel
//! - Waitlist signup section
//! - Footer with links and social icons

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::EntranceTrigger;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::{InViewOptions, use_entrance};
use crate::ui::testimonials::TestimonialsSection;
use crate::ui::waitlist_form::WaitlistSection;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <main class="min-h-screen bg-black text-white overflow-hidden">
            <HeroSection />
            <FeaturesSection />
            <TestimonialsSection />
            <WaitlistSection />
            <Footer />
        </main>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-radial-purple" aria-hidden="true"></div>

            <div class="container relative z-10 px-4 md:px-6 max-w-5xl mx-auto">
                <div class="flex flex-col items-center text-center space-y-8">
                    <div class="landing-fade-in-up inline-block rounded-lg bg-black/50 px-3 py-1 text-sm border border-purple-500/30">
                        <span class="gradient-text-cyan-pink">"WELCOME TO THE FUTURE"</span>
                    </div>

                    <h1 class="landing-fade-in-up landing-delay-200 text-4xl md:text-6xl lg:text-7xl font-bold tracking-tighter relative">
                        <span class="gradient-text-hero">"ENTER THE NEOVERSE"</span>
                        <span class="hero-underline" aria-hidden="true"></span>
                    </h1>

                    <p class="landing-fade-in-up landing-delay-400 max-w-[700px] text-gray-400 md:text-xl">
                        "A revolutionary digital experience where technology meets imagination. Dive into a world of endless possibilities."
                    </p>

                    <div class="landing-fade-in-up landing-delay-400 flex flex-col sm:flex-row gap-4 mt-8">
                        <Button size=ButtonSize::Large icon=icons::CHEVRON_RIGHT>
                            "Get Started"
                        </Button>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Large icon=icons::ZAP>
                            "Learn More"
                        </Button>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 w-full h-24 fade-to-black" aria-hidden="true"></div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    let container = NodeRef::<html::Section>::new();
    let shown = use_entrance(
        container,
        InViewOptions::default(),
        EntranceTrigger::fire_once(),
    );

    view! {
        <section class="relative py-24 overflow-hidden" node_ref=container>
            <div class="absolute inset-0 bg-radial-purple" aria-hidden="true"></div>

            <div class="container relative z-10 px-4 md:px-6 mx-auto">
                <div class="entrance text-center mb-16" class:entrance-visible=move || shown.get()>
                    <h2 class="text-3xl md:text-4xl font-bold mb-4 inline-block gradient-text-cyan-purple">
                        "Cutting-Edge Features"
                    </h2>
                    <p class="max-w-2xl mx-auto text-gray-400">
                        "Explore the technologies that power the next generation of digital experiences."
                    </p>
                </div>

                <div
                    class="entrance entrance-delay-200 grid grid-cols-1 md:grid-cols-3 gap-8"
                    class:entrance-visible=move || shown.get()
                >
                    <FeatureCard
                        icon=icons::BRAIN
                        accent="feature-accent-purple"
                        title="Neural Interface"
                        description="Connect directly to your neural pathways"
                        details="Advanced non-invasive sensors interpret neural signals with 99.7% accuracy, enabling thought-based control of digital environments."
                    />
                    <FeatureCard
                        icon=icons::SHIELD
                        accent="feature-accent-green"
                        title="Quantum Encryption"
                        description="Unbreakable security for your digital assets"
                        details="Keys generated from quantum entanglement cannot be intercepted or duplicated, keeping your data secure even against quantum computers."
                    />
                    <FeatureCard
                        icon=icons::CPU
                        accent="feature-accent-pink"
                        title="Hyper Processing"
                        description="Lightning-fast computation for complex tasks"
                        details="Parallel architectures combined with quantum acceleration deliver real-time rendering and instantaneous data analysis."
                    />
                </div>
            </div>
        </section>
    }
}

/// Feature card with expandable details
#[component]
fn FeatureCard(
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    description: &'static str,
    details: &'static str,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <div class="feature-card">
            <div class=format!("w-12 h-12 rounded-lg flex items-center justify-center mb-4 {}", accent)>
                <Icon name=icon class="h-6 w-6" />
            </div>
            <h3 class="text-xl font-bold mb-2">{title}</h3>
            <p class="text-gray-400 mb-4">{description}</p>
            <Show when=move || expanded.get()>
                <p class="text-sm text-gray-300 mb-4">{details}</p>
            </Show>
            <button
                type="button"
                class="link-accent text-sm"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                {move || if expanded.get() { "Show Less" } else { "Learn More" }}
            </button>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Neoverse - Enter the Future" />

        <Meta name="description" content="A revolutionary digital experience where technology meets imagination. Join the waitlist for early access." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Neoverse - Enter the Future" />
        <Meta property="og:description" content="Neural interfaces, quantum encryption and hyper processing. Join the waitlist for early access." />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="Neoverse - Enter the Future" />

        <Link rel="canonical" href="/" />
    }
}

const COMPANY_LINKS: [&str; 3] = ["About", "Features", "Pricing"];
const RESOURCE_LINKS: [&str; 2] = ["Blog", "Contact"];
const LEGAL_LINKS: [&str; 2] = ["Terms", "Privacy"];

const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    (icons::GITHUB, "https://github.com", "GitHub"),
    (icons::TWITTER, "https://twitter.com", "Twitter"),
    (icons::LINKEDIN, "https://linkedin.com", "LinkedIn"),
    (icons::MAIL, "mailto:info@example.com", "Email"),
];

#[component]
fn FooterLinks(heading: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-white font-bold mb-4">{heading}</h4>
            <ul class="space-y-2">
                {links
                    .iter()
                    .map(|name| view! {
                        <li>
                            <a href="#" class="text-gray-400 hover:text-cyan-400 transition-colors">{*name}</a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative border-t border-gray-800 overflow-hidden">
            <div class="container relative z-10 px-4 py-12 md:py-16 md:px-6 mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    // Brand
                    <div class="space-y-4">
                        <div class="flex items-center">
                            <div class="w-10 h-10 rounded-lg brand-mark flex items-center justify-center mr-3">
                                <span class="text-white font-bold">"N"</span>
                            </div>
                            <span class="text-xl font-bold text-white">"Neoverse"</span>
                        </div>
                        <p class="text-gray-400 max-w-xs">
                            "Pushing the boundaries of what's possible with cutting-edge technology and immersive digital experiences."
                        </p>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(icon, href, label)| view! {
                                    <a
                                        href=*href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link"
                                        aria-label=*label
                                    >
                                        <Icon name=*icon />
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid grid-cols-3 gap-8 md:col-span-2">
                        <FooterLinks heading="Company" links=&COMPANY_LINKS />
                        <FooterLinks heading="Resources" links=&RESOURCE_LINKS />
                        <FooterLinks heading="Legal" links=&LEGAL_LINKS />
                    </div>
                </div>

                // Bottom bar
                <div class="mt-12 pt-8 border-t border-gray-800 flex flex-col sm:flex-row justify-between items-center">
                    <p class="text-gray-500 text-sm">"© 2025 Neoverse Technologies. All rights reserved."</p>
                    <div class="mt-4 sm:mt-0 inline-block px-3 py-1 rounded-full text-xs text-gray-400 border border-purple-500/30">
                        "Powered by Rust + Leptos"
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// CSS for entrance and carousel animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Buttons */
            .btn-base {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                height: 2.5rem;
                padding: 0 1.25rem;
                font-weight: 500;
                border-radius: 0.5rem;
                transition: all 0.3s;
                cursor: pointer;
            }
            .btn-base:disabled {
                opacity: 0.7;
                cursor: not-allowed;
            }
            .btn-primary {
                color: white;
                background-image: linear-gradient(to right, #06b6d4, #9333ea);
                box-shadow: 0 0 15px rgba(124, 58, 237, 0.5);
            }
            .btn-primary:hover:not(:disabled) {
                box-shadow: 0 0 25px rgba(124, 58, 237, 0.7);
                transform: scale(1.05);
            }
            .btn-outline {
                color: #a855f7;
                border: 1px solid #a855f7;
                background: transparent;
            }
            .btn-outline:hover:not(:disabled) {
                color: #c084fc;
                background-color: rgba(59, 7, 100, 0.3);
            }
            .btn-lg {
                height: 3rem;
                padding: 0 2rem;
                font-size: 1rem;
            }
            .btn-icon {
                width: 2.5rem;
                height: 2.5rem;
                border-radius: 9999px;
                border: 1px solid rgba(168, 85, 247, 0.5);
                color: #a855f7;
                display: inline-flex;
                align-items: center;
                justify-content: center;
                transition: background-color 0.3s;
            }
            .btn-icon:hover {
                background-color: rgba(59, 7, 100, 0.3);
            }

            /* Inputs */
            .input-base {
                width: 100%;
                height: 2.75rem;
                padding: 0 0.75rem;
                color: white;
                background-color: rgba(0, 0, 0, 0.5);
                border: 1px solid #1f2937;
                border-radius: 0.5rem;
                transition: border-color 0.2s;
            }
            .input-base:focus {
                outline: none;
                border-color: #06b6d4;
            }
            .link-accent {
                color: #22d3ee;
            }
            .link-accent:hover {
                text-decoration: underline;
            }

            /* Gradients */
            .gradient-text-hero,
            .gradient-text-cyan-pink,
            .gradient-text-cyan-purple,
            .gradient-text-pink-cyan {
                color: transparent;
                background-clip: text;
                -webkit-background-clip: text;
            }
            .gradient-text-hero { background-image: linear-gradient(to right, #22d3ee, #a855f7, #db2777); }
            .gradient-text-cyan-pink { background-image: linear-gradient(to right, #22d3ee, #db2777); }
            .gradient-text-cyan-purple { background-image: linear-gradient(to right, #22d3ee, #9333ea); }
            .gradient-text-pink-cyan { background-image: linear-gradient(to right, #ec4899, #06b6d4); }
            .hero-underline {
                position: absolute;
                left: 0;
                bottom: -0.25rem;
                width: 100%;
                height: 2px;
                background-image: linear-gradient(to right, #22d3ee, #a855f7, #db2777);
            }
            .bg-radial-purple { background: radial-gradient(ellipse at center, rgba(88, 28, 135, 0.2), black 70%); }
            .bg-radial-cyan-top { background: radial-gradient(ellipse at top, rgba(22, 78, 99, 0.2), black 70%); }
            .fade-to-black { background: linear-gradient(to top, black, transparent); }
            .brand-mark { background-image: linear-gradient(to bottom right, #9333ea, #0891b2); }
            .glow-purple-cyan { background-image: linear-gradient(to bottom right, rgba(168, 85, 247, 0.2), rgba(6, 182, 212, 0.2)); }
            .glow-pink-purple { background-image: linear-gradient(to top right, rgba(236, 72, 153, 0.2), rgba(168, 85, 247, 0.2)); }
            .glow-cyan-purple { background-image: linear-gradient(to bottom right, rgba(6, 182, 212, 0.3), rgba(168, 85, 247, 0.3)); }
            .feature-accent-purple { background-image: linear-gradient(to right, #9333ea, #2563eb); }
            .feature-accent-green { background-image: linear-gradient(to right, #16a34a, #0891b2); }
            .feature-accent-pink { background-image: linear-gradient(to right, #db2777, #ea580c); }

            /* Cards */
            .feature-card,
            .testimonial-card,
            .waitlist-card {
                position: relative;
                overflow: hidden;
                padding: 2rem;
                border-radius: 0.75rem;
                background-color: rgba(0, 0, 0, 0.6);
                border: 1px solid #1f2937;
            }
            .feature-card:hover {
                border-color: #374151;
            }
            .testimonial-card {
                border-color: rgba(168, 85, 247, 0.3);
            }
            .waitlist-card {
                border-color: rgba(6, 182, 212, 0.3);
            }
            .social-link {
                color: #9ca3af;
                transition: color 0.2s, transform 0.2s;
            }
            .social-link:hover {
                color: #22d3ee;
                transform: translateY(-3px);
            }

            /* Hero fade in */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up {
                animation: landing-fade-in-up 0.8s ease-out both;
            }
            .landing-delay-200 { animation-delay: 0.2s; }
            .landing-delay-400 { animation-delay: 0.4s; }

            /* Viewport entrance, toggled by .entrance-visible */
            .entrance {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .entrance.entrance-visible {
                opacity: 1;
                transform: translateY(0);
            }
            .entrance-delay-200 { transition-delay: 0.2s; }

            /* Carousel: offsets come from --slide-from / --slide-to */
            .testimonial-viewport {
                position: relative;
                display: grid;
                overflow: hidden;
            }
            .testimonial-slide {
                grid-area: 1 / 1;
            }
            @keyframes testimonial-in {
                from { opacity: 0; transform: translateX(var(--slide-from, 0px)); }
                to { opacity: 1; transform: translateX(0); }
            }
            @keyframes testimonial-out {
                from { opacity: 1; transform: translateX(0); }
                to { opacity: 0; transform: translateX(var(--slide-to, 0px)); }
            }
            .testimonial-enter {
                animation: testimonial-in 0.5s ease-out both;
            }
            .testimonial-exit {
                animation: testimonial-out 0.5s ease-in both;
                pointer-events: none;
            }
            .testimonial-dot {
                width: 0.5rem;
                height: 0.5rem;
                border-radius: 9999px;
                background-color: #4b5563;
                transition: all 0.3s;
            }
            .testimonial-dot:hover {
                background-color: #6b7280;
            }
            .testimonial-dot-active {
                width: 1.5rem;
                background-image: linear-gradient(to right, #a855f7, #06b6d4);
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-fade-in-up,
                .testimonial-enter,
                .testimonial-exit {
                    animation: none;
                }
                .entrance {
                    transition: none;
                }
            }
            "#
        </style>
    }
}
