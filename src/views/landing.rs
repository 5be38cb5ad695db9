use crate::routes::{Route, home_route};
use crate::timer::sleep;
use crate::views::shared::{Brand, use_session};
use dioxus::prelude::*;
use std::time::Duration;

const TESTIMONIAL_ROTATION: Duration = Duration::from_secs(5);

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "InsureAI helped me find the perfect policy for my family in minutes, not days!",
        author: "Sarah Johnson",
        role: "Healthcare Professional",
    },
    Testimonial {
        quote: "The AI assistant explained complex insurance terms in a way I could actually understand.",
        author: "Michael Chen",
        role: "Small Business Owner",
    },
    Testimonial {
        quote: "I saved over $400 a year by switching to the policy InsureAI recommended for me.",
        author: "Rebecca Martinez",
        role: "Graphic Designer",
    },
];

const FEATURES: [(&str, &str); 4] = [
    (
        "AI Chat Assistant",
        "Ask questions and get personalized recommendations from our AI assistant.",
    ),
    (
        "Live Call Guidance",
        "Speak directly with agents who have AI assistance to provide better guidance.",
    ),
    (
        "Personalized Recommendations",
        "Get tailored insurance options based on your specific needs and budget.",
    ),
    (
        "Smart Dashboard",
        "Track your policies, claims, and conversations in one intuitive dashboard.",
    ),
];

const STEPS: [(&str, &str); 4] = [
    ("Learn", "Understand your insurance needs with our AI assistant"),
    ("Talk", "Discuss options with AI or human experts"),
    ("Choose", "Select the best policy for your situation"),
    ("Buy", "Secure your policy with a seamless checkout"),
];

#[component]
pub fn Landing() -> Element {
    let session = use_session();
    let mut menu_open = use_signal(|| false);
    let mut active_testimonial = use_signal(|| 0usize);

    use_testimonial_rotation(active_testimonial);

    let signed_in = session.read().is_authenticated();
    let active_index = active_testimonial() % TESTIMONIALS.len();
    let current = &TESTIMONIALS[active_index];

    rsx! {
        div { class: "landing",
            header { class: "landing-header",
                nav { class: "landing-nav",
                    Brand { to: Route::Landing {} }
                    div { class: format_args!("nav-links {}", if menu_open() { "open" } else { "" }),
                        a { href: "#features", onclick: move |_| menu_open.set(false), "Features" }
                        a { href: "#how-it-works", onclick: move |_| menu_open.set(false), "How It Works" }
                        a { href: "#testimonials", onclick: move |_| menu_open.set(false), "Testimonials" }
                        if signed_in {
                            Link { class: "btn btn-primary", to: home_route(), "Dashboard" }
                        } else {
                            Link { class: "btn btn-outline", to: Route::Login {}, "Login" }
                            Link { class: "btn btn-primary", to: Route::Signup {}, "Sign Up" }
                        }
                    }
                    button {
                        class: "btn btn-ghost menu-toggle",
                        r#type: "button",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            section { class: "hero",
                h1 {
                    "Secure Your Future with "
                    span { class: "accent", "AI-Powered" }
                    " Insurance Guidance"
                }
                p { class: "text-muted",
                    "Navigate the complex world of insurance with personalized AI assistance that helps you find, understand, and purchase the right coverage for your needs."
                }
                div { class: "hstack",
                    Link { class: "btn btn-primary", to: Route::Signup {}, "Get Started →" }
                    a { class: "btn btn-outline", href: "#features", "Learn More" }
                }
            }

            section { id: "how-it-works", class: "steps",
                h2 { "How It Works" }
                div { class: "grid",
                    for (i, (title, description)) in STEPS.iter().enumerate() {
                        div { key: "{title}", class: "card step",
                            span { class: "step-number", {(i + 1).to_string()} }
                            h3 { "{title}" }
                            p { class: "text-muted", "{description}" }
                        }
                    }
                }
            }

            section { id: "features", class: "features",
                h2 { "Features" }
                div { class: "grid",
                    for (title, description) in FEATURES.iter() {
                        div { key: "{title}", class: "card feature",
                            h3 { "{title}" }
                            p { class: "text-muted", "{description}" }
                        }
                    }
                }
            }

            section { id: "testimonials", class: "testimonials",
                h2 { "What Our Customers Say" }
                blockquote { class: "card testimonial",
                    p { "“{current.quote}”" }
                    footer {
                        strong { "{current.author}" }
                        span { class: "text-muted", " · {current.role}" }
                    }
                }
                div { class: "testimonial-dots",
                    for index in 0..TESTIMONIALS.len() {
                        button {
                            key: "{index}",
                            class: if index == active_index { "dot-button active" } else { "dot-button" },
                            r#type: "button",
                            aria_label: format!("Show testimonial {}", index + 1),
                            onclick: move |_| active_testimonial.set(index),
                        }
                    }
                }
            }

            footer { class: "landing-footer text-muted",
                "© 2025 InsureAI. All rights reserved."
            }
        }
    }
}

/// Advance the testimonial carousel until the page unmounts.
fn use_testimonial_rotation(active: Signal<usize>) {
    use_hook(move || {
        let mut active = active;
        spawn(async move {
            loop {
                sleep(TESTIMONIAL_ROTATION).await;
                active.set(next_testimonial(active()));
            }
        });
    });
}

/// Rotation continues from whichever testimonial is showing, including one
/// picked with the dots.
fn next_testimonial(current: usize) -> usize {
    (current + 1) % TESTIMONIALS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(next_testimonial(0), 1);
        assert_eq!(next_testimonial(TESTIMONIALS.len() - 1), 0);
    }

    #[test]
    fn test_rotation_continues_from_selected_dot() {
        let selected = 2;
        assert_eq!(next_testimonial(selected), 0);
        assert_eq!(next_testimonial(next_testimonial(selected)), 1);
    }
}
