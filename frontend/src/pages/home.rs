use chrono::Datelike;
use yew::prelude::*;

use crate::behavior::anchor::stagger_delay;
use crate::components::contact_form::ContactForm;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::reveal::{use_lazy_images, use_scroll_reveal};
use crate::components::stat_counter::StatCounter;
use crate::controller::use_controller;

/// Served by trunk from `assets/`.
const HERO_IMAGE: &str = "/assets/hero.svg";

const SERVICES: [(&str, &str); 4] = [
    ("Fleet safety training", "Hands-on programs that cut incident rates for delivery and logistics fleets."),
    ("Defensive driving", "Practical courses for new and experienced drivers, on track and on the road."),
    ("Road risk audits", "We review routes, vehicles and schedules and hand you a prioritised action plan."),
    ("Consulting", "Policy, telematics and compliance advice tailored to your operation."),
];

const FEATURES: [(&str, &str); 3] = [
    ("Certified instructors", "Every trainer is licensed and re-assessed each year."),
    ("Measurable results", "Before-and-after reporting on every engagement."),
    ("Flexible scheduling", "Sessions on site, online or at our training centre."),
];

const STATS: [(&str, &str); 4] = [
    ("1,250+", "Drivers trained"),
    ("98%", "Client satisfaction"),
    ("35%", "Fewer incidents"),
    ("15+", "Years on the road"),
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How long does a course take?",
            answer: "Most courses run over one or two days. Fleet programs are planned with you and usually span a few weeks.",
        },
        FaqEntry {
            question: "Do you train on our own vehicles?",
            answer: "Yes. We can work with your vehicles on site, or provide ours at the training centre.",
        },
        FaqEntry {
            question: "Is there a certificate?",
            answer: "Every participant who completes a course receives a certificate they can show insurers and employers.",
        },
        FaqEntry {
            question: "How do I get a quote?",
            answer: "Send us the contact form below and we will reply within one working day.",
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let controller = use_controller();
    use_scroll_reveal(controller.clone());
    use_lazy_images(controller.clone());

    let year = chrono::Local::now().year();

    html! {
        <main class="home">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Safer roads start with better drivers"}</h1>
                    <p>{"Training, audits and consulting for drivers and fleets of every size."}</p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary">{"Get a quote"}</a>
                        <a href="#services" class="btn btn-secondary">{"Our services"}</a>
                    </div>
                </div>
                <div class="hero-image">
                    <img class="lazy" data-src={HERO_IMAGE} alt="Instructor with a driver in a training car" />
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, (title, text))| html! {
                        <article class="service-card" style={stagger_delay(index)}>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="features" class="features">
                <h2>{"Why ROADSAFE"}</h2>
                { for FEATURES.iter().map(|(title, text)| html! {
                    <div class="feature-item">
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>

            <section id="stats" class="stats">
                { for STATS.iter().map(|(value, label)| html! {
                    <div class="stat-item">
                        <StatCounter value={*value} />
                        <span class="stat-label">{*label}</span>
                    </div>
                }) }
            </section>

            <section id="faq" class="faq">
                <h2>{"Frequently asked questions"}</h2>
                <FaqList entries={faq_entries()} />
            </section>

            <section id="contact" class="contact">
                <h2>{"Contact us"}</h2>
                <div class="contact-details">
                    <div class="contact-item">{"📞 +34 900 123 456"}</div>
                    <div class="contact-item">{"✉️ info@roadsafe.example"}</div>
                    <div class="contact-item">{"📍 Calle Mayor 1, Madrid"}</div>
                </div>
                <ContactForm controller={controller.clone()} />
            </section>

            <footer class="footer">
                <p>{format!("© {} ROADSAFE. All rights reserved.", year)}</p>
            </footer>

            <style>
                {r#"
                .fade-in {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .service-card {
                    animation: cardIn 0.6s ease both;
                }
                @keyframes cardIn {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 400px;
                }
                .contact-form.loading {
                    opacity: 0.7;
                    pointer-events: none;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    border: 1px solid #e5e7eb;
                }
                body.keyboard-navigation *:focus {
                    outline: 2px solid #2563eb;
                    outline-offset: 2px;
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn hero_image_ships_with_the_site() {
        let file = Path::new(env!("CARGO_MANIFEST_DIR")).join(HERO_IMAGE.trim_start_matches('/'));
        assert!(file.is_file(), "{} is missing", file.display());
    }
}
