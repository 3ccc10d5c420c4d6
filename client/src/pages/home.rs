//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

struct Plan {
    name: &'static str,
    price: u32,
    featured: bool,
    features: [&'static str; 5],
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Basic",
        price: 9,
        featured: false,
        features: ["Up to 500 photos", "Facial recognition", "7-day access", "Basic sharing", "Email support"],
    },
    Plan {
        name: "Premium",
        price: 19,
        featured: true,
        features: [
            "Up to 2,000 photos",
            "Enhanced recognition",
            "30-day access",
            "Advanced sharing",
            "Priority support",
        ],
    },
    Plan {
        name: "Professional",
        price: 49,
        featured: false,
        features: ["Unlimited photos", "Premium recognition", "Lifetime access", "Custom branding", "24/7 support"],
    },
];

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "fa-face-smile",
        "Facial Recognition",
        "Automatically identify people across thousands of photos with advanced AI",
    ),
    ("fa-share-nodes", "Smart Sharing", "Share photos with guests containing only the images they appear in"),
    ("fa-calendar-days", "Event Organization", "Group photos by events to keep everything organized and accessible"),
    ("fa-lock", "Privacy Protection", "Control who can access your photos with customizable privacy settings"),
];

const STEPS: [(&str, &str); 3] = [
    ("Upload Your Photos", "Upload photos from your device or import directly from Google Drive"),
    ("AI Processing", "Our system automatically detects and groups faces across all photos"),
    ("Organize & Share", "Create personalized links for guests to view and download their photos"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let logged_in = move || auth.with(AuthState::is_logged_in);

    view! {
        <div class="home-container">
            <section class="hero">
                <div class="container">
                    <div class="hero-content">
                        <h1>"Organize Your Photos with Facial Recognition"</h1>
                        <p>
                            "Easily sort, search, and share your event photos with our powerful facial recognition \
                             technology. Perfect for weddings, parties, and gatherings."
                        </p>
                        <div class="hero-buttons">
                            <Show
                                when=logged_in
                                fallback=|| view! { <A href="/auth/register" attr:class="btn btn-primary">"Get Started"</A> }
                            >
                                <A href="/events" attr:class="btn btn-primary">"My Events"</A>
                            </Show>
                            <a href="#how-it-works" class="btn btn-outline">"Learn More"</a>
                        </div>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="container">
                    <div class="section-header">
                        <h2>"Features Designed for Event Photos"</h2>
                        <p>"Our platform makes it easy to organize and share event photos"</p>
                    </div>
                    <div class="feature-grid">
                        {FEATURES
                            .iter()
                            .map(|(icon, title, text)| {
                                view! {
                                    <div class="feature-card">
                                        <div class="feature-icon">
                                            <i class=format!("fas {icon}")></i>
                                        </div>
                                        <h3>{*title}</h3>
                                        <p>{*text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <div class="container">
                    <div class="section-header">
                        <h2>"How It Works"</h2>
                        <p>"Get started in just a few simple steps"</p>
                    </div>
                    <div class="steps">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, text))| {
                                view! {
                                    <div class="step-item">
                                        <div class="step-number">{i + 1}</div>
                                        <h3>{*title}</h3>
                                        <p>{*text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="pricing">
                <div class="container">
                    <div class="section-header">
                        <h2>"Choose Your Plan"</h2>
                        <p>"Flexible options for every need"</p>
                    </div>
                    <div class="pricing-grid">
                        {PLANS
                            .iter()
                            .map(|plan| {
                                let button_class = if plan.featured { "btn btn-primary" } else { "btn btn-outline-primary" };
                                view! {
                                    <div class="pricing-card" class:featured=plan.featured>
                                        {plan.featured.then(|| view! { <div class="plan-badge">"Most Popular"</div> })}
                                        <div class="plan-name">{plan.name}</div>
                                        <div class="plan-price">
                                            <span class="currency">"$"</span>
                                            <span class="amount">{plan.price}</span>
                                            <span class="period">"/event"</span>
                                        </div>
                                        <ul class="plan-features">
                                            {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                        </ul>
                                        <A href="/auth/register" attr:class=button_class>"Choose Plan"</A>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <div class="cta-content">
                        <h2>"Ready to Organize Your Event Photos?"</h2>
                        <p>"Get started today and make photo sharing easier than ever"</p>
                        <A href="/auth/register" attr:class="btn btn-primary btn-lg">"Create Your Account"</A>
                    </div>
                </div>
            </section>
        </div>
    }
}
