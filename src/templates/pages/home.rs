// templates/pages/home.rs

use crate::domain::content::{
    ANNUAL_DISCOUNT, FAQS, FEATURES, PRICING, PROCESS, STATS, TESTIMONIALS,
};
use crate::templates::{
    components::{book_call_button, card, showcase_grid},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "ViralClips | Short-form video editing that grows your audience",
        html! {
            main {
                section id="hero" class="hero" {
                    h1 { "Turn Long Videos Into " span class="gradient" { "Viral Shorts" } }
                    p class="lead" {
                        "100M+ views. Zero Ad Spend. We'll take your long videos, turn them into viral shorts while you focus on creating."
                    }
                    (book_call_button("Book Your Free Strategy Call"))
                }

                section id="stats" class="stats" {
                    @for stat in STATS {
                        div class="stat" {
                            div class="stat-value" { (stat.value) }
                            div class="stat-label" { (stat.label) }
                        }
                    }
                }

                section id="showcase" {
                    h2 { "Results That Speak" }
                    (showcase_grid(None))
                }

                section id="process" {
                    h2 { "How It Works" }
                    ol class="process" {
                        @for step in PROCESS {
                            li { (card(step.title, html! { p { (step.desc) } })) }
                        }
                    }
                }

                section id="pricing" {
                    h2 { "Choose Your Growth Plan" }
                    p class="lead" { "Transparent pricing, maximum results" }
                    div class="pricing-grid" {
                        @for tier in PRICING {
                            div class=(if tier.featured { "tier featured" } else { "tier" }) {
                                @if tier.featured {
                                    span class="badge" { "Most Popular" }
                                }
                                h3 { (tier.name) }
                                div class="price" {
                                    "$" (tier.monthly_price) span class="per" { "/month" }
                                }
                                p class="annual" {
                                    "$" (tier.annual_price) "/month billed annually · " (ANNUAL_DISCOUNT)
                                }
                                p { (tier.tagline) }
                                ul {
                                    @for feature in tier.features {
                                        li { (feature) }
                                    }
                                }
                                (book_call_button(tier.cta))
                            }
                        }
                    }
                }

                section id="features" {
                    h2 { "Powerful Features" }
                    div class="feature-grid" {
                        @for f in FEATURES {
                            (card(f.title, html! { p { (f.desc) } }))
                        }
                    }
                }

                section id="testimonials" {
                    h2 { "Join 500+ Happy Clients" }
                    div class="testimonial-grid" {
                        @for t in TESTIMONIALS {
                            blockquote class="testimonial" {
                                p { "\u{201c}" (t.quote) "\u{201d}" }
                                footer {
                                    strong { (t.name) } " · " (t.company)
                                    div class="result" { (t.result) }
                                }
                            }
                        }
                    }
                }

                section id="faq" {
                    h2 { "Frequently Asked Questions" }
                    @for faq in FAQS {
                        details class="faq" {
                            summary { (faq.q) }
                            p { (faq.a) }
                        }
                    }
                }

                section id="cta" class="cta" {
                    h2 { "Ready to Go Viral?" }
                    (book_call_button("Book Your Free Strategy Call"))
                }
            }
        },
    )
}
