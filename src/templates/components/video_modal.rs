use crate::domain::video::VideoViewer;
use maud::{html, Markup};

/// Detail view for the selected video. A closed viewer renders nothing.
pub fn video_modal(viewer: &VideoViewer) -> Markup {
    let Some(video) = viewer.selected() else {
        return html! {};
    };

    html! {
        div class="modal-backdrop" {
            div class="modal video" role="dialog" aria-modal="true" data-video-id=(video.id) {
                div class="modal-header" {
                    span class="badge platform" data-platform=(video.platform.as_str()) {
                        (video.platform.as_str())
                    }
                    button
                        type="button"
                        class="icon-button"
                        aria-label="Close"
                        hx-get="/videos/close"
                        hx-target="#video-modal"
                    { "×" }
                }

                div class="video-player" {
                    iframe
                        src=(video.embed_url)
                        title=(video.title)
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; picture-in-picture"
                        allowfullscreen {}
                }

                div class="video-details" {
                    h3 class="video-title" { (video.title) }
                    p { (video.description) }

                    h4 { "Performance Metrics" }
                    dl class="metrics" {
                        dt { "Views" } dd { (video.views) }
                        dt { "Likes" } dd { (video.likes) }
                        dt { "Comments" } dd { (video.comments) }
                        dt { "Engagement" } dd { (video.engagement_rate) }
                    }

                    h4 { "Category" }
                    span class="badge" { (video.category) }

                    h4 { "Client" }
                    p { (video.client) }

                    h4 { "Results" }
                    ul class="results" {
                        @for result in video.results {
                            li { (result) }
                        }
                    }
                }
            }
        }
    }
}
