use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "ViralClips";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {}
            }
            body class="bg-black text-white" {
                header class="site-header flex items-center justify-between px-6 py-3" {
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        ul {
                            li { a href="#showcase" { "Results" } }
                            li { a href="#process" { "How it works" } }
                            li { a href="#pricing" { "Pricing" } }
                            li { a href="#faq" { "FAQ" } }
                        }
                    }
                    button
                        type="button"
                        class="primary"
                        hx-get="/booking/open"
                        hx-target="#booking-modal"
                        hx-swap="innerHTML"
                    { "Book a Call" }
                }

                (content)

                // Modal mount points, filled by partial swaps.
                div id="booking-modal" {}
                div id="video-modal" {}

                footer class="site-footer" {
                    p { "© " (SITE_NAME) ". All rights reserved." }
                }
            }
        }
    }
}
