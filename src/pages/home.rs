// =============================================================================
// Gravity Web - Home Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{BackToTop, ContactSection, Footer, SiteHeader};

/// One entry in the services grid.
struct Service {
    title: &'static str,
    icon: &'static str,
    hue: &'static str,
}

const SERVICES: [Service; 8] = [
    Service { title: "Website Development", icon: "services-svg-1.svg", hue: "174, 77%, 50%" },
    Service { title: "Website Maintenance", icon: "services-svg-3.svg", hue: "17, 100%, 68%" },
    Service { title: "SEO Optimization", icon: "services-svg-2.svg", hue: "267, 76%, 57%" },
    Service { title: "UI/UX Design", icon: "services-svg-4.svg", hue: "343, 98%, 60%" },
    Service { title: "Performance Optimization", icon: "services-svg-8.svg", hue: "241, 77%, 63%" },
    Service { title: "Business Consultation", icon: "services-svg-6.svg", hue: "157, 89%, 44%" },
    Service { title: "Content Management", icon: "services-svg-7.svg", hue: "60, 90%, 50%" },
    Service { title: "Digital Marketing", icon: "services-svg-5.svg", hue: "210, 100%, 53%" },
];

/// One entry in the feature list.
struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    hue: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "rocket.svg",
        title: "Fast Working Process",
        text: "At Gravity, we plan, design, and deliver projects quickly — without \
               compromising quality.",
        hue: "174, 77%, 50%",
    },
    Feature {
        icon: "users.svg",
        title: "Dedicated Team",
        text: "Our skilled professionals work with passion and precision to bring your \
               digital vision to life.",
        hue: "241, 77%, 63%",
    },
    Feature {
        icon: "call.svg",
        title: "24/7 Support",
        text: "We're always available to assist, update, and support you — anytime you \
               need us.",
        hue: "343, 98%, 60%",
    },
];

/// The single marketing page: hero, services, features, contact.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-home">
            <Title text="Gravity - Web Development & Digital Solutions" />

            <SiteHeader />

            <main>
                <article>
                    // ---------- HERO ----------
                    <section class="section hero" id="home" aria-label="hero">
                        <div class="hero-section">
                            <div class="hero-content">
                                <h1 class="h1 hero-title">
                                    "Building "
                                    <span class="has-before">"Digital Excellence"</span>
                                    " with Gravity"
                                </h1>
                                <p class="hero-text">
                                    "We design intelligent websites and mobile apps that don't just \
                                     look good — they perform. At "
                                    <strong>"Gravity"</strong>
                                    ", we blend creativity, technology, and precision to transform \
                                     your brand into a powerful digital experience."
                                </p>
                                <div class="wrapper">
                                    <a href="#contact" class="btn btn-primary">"Contact Us"</a>
                                </div>
                                <ul class="social-list">
                                    <li>
                                        <a href="https://x.com/_GServices_" class="social-link">
                                            <img src="/assets/icons/twitter-x.svg" alt="" />
                                            <span class="span">"Twitter"</span>
                                        </a>
                                    </li>
                                    <li>
                                        <a href="https://www.instagram.com/gravityservices.info/" class="social-link">
                                            <img src="/assets/icons/instagram.svg" alt="" />
                                            <span class="span">"Instagram"</span>
                                        </a>
                                    </li>
                                    <li>
                                        <a href="https://www.facebook.com/share/1FTLGL7Cgv/" class="social-link">
                                            <img src="/assets/icons/facebook.svg" alt="" />
                                            <span class="span">"Facebook"</span>
                                        </a>
                                    </li>
                                </ul>
                            </div>
                            <figure class="hero-banner">
                                <img src="/assets/images/hero-banner.png" alt="hero banner" />
                            </figure>
                        </div>
                    </section>

                    // ---------- SERVICES ----------
                    <section class="section service" id="our-services" aria-label="service">
                        <div class="container">
                            <p class="section-subtitle has-before text-center">"Our Services"</p>
                            <h2 class="h2 section-title text-center">
                                "Managing you business with our "
                                <span class="has-before">"best service"</span>
                            </h2>
                            <ul class="grid-list">
                                {SERVICES
                                    .iter()
                                    .map(|service| {
                                        view! {
                                            <li>
                                                <div
                                                    class="service-card"
                                                    style=format!("--color: {}", service.hue)
                                                >
                                                    <div class="card-icon">
                                                        <img
                                                            src=format!("/assets/icons/{}", service.icon)
                                                            width="60"
                                                            height="60"
                                                            loading="lazy"
                                                            alt="service icon"
                                                        />
                                                    </div>
                                                    <h3 class="h3">
                                                        <a href="#contact" class="card-title">
                                                            {service.title}
                                                        </a>
                                                    </h3>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </section>

                    // ---------- FEATURES ----------
                    <section class="section feature" id="features" aria-label="feature">
                        <div class="container">
                            <figure class="feature-banner">
                                <img
                                    src="/assets/images/feature-banner.png"
                                    width="582"
                                    height="585"
                                    loading="lazy"
                                    alt="feature banner"
                                    class="w-100"
                                />
                            </figure>
                            <div class="feature-content">
                                <p class="section-subtitle has-before">"Why Choose Gravity"</p>
                                <h2 class="h2 section-title">
                                    "We combine creativity, technology, and strategy to deliver \
                                     fast, reliable, and high-quality digital solutions."
                                </h2>
                                <ul class="feature-list">
                                    {FEATURES
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <li>
                                                    <div class="feature-card">
                                                        <div
                                                            class="card-icon"
                                                            style=format!("--color: {}", feature.hue)
                                                        >
                                                            <img
                                                                src=format!("/assets/icons/{}", feature.icon)
                                                                alt=""
                                                            />
                                                        </div>
                                                        <div>
                                                            <h3 class="h3 card-title">{feature.title}</h3>
                                                            <p class="card-text">{feature.text}</p>
                                                        </div>
                                                    </div>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>
                    </section>

                    // ---------- CONTACT ----------
                    <ContactSection />
                </article>
            </main>

            <Footer />
            <BackToTop />
        </div>
    }
}
