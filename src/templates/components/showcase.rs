use crate::domain::video::{videos_for, Platform};
use maud::{html, Markup};

fn tab(key: &str, label: &str, active: bool) -> Markup {
    html! {
        button
            type="button"
            class=(if active { "tab active" } else { "tab" })
            hx-get=(format!("/videos?platform={key}"))
            hx-target="#showcase-grid"
            hx-swap="outerHTML"
        { (label) }
    }
}

/// Platform tabs plus the matching video cards; swapped as one unit.
pub fn showcase_grid(platform: Option<Platform>) -> Markup {
    let videos = videos_for(platform);

    html! {
        div id="showcase-grid" {
            div class="tabs" {
                (tab("all", "All", platform.is_none()))
                @for p in Platform::ALL {
                    (tab(p.as_str(), p.label(), platform == Some(p)))
                }
            }

            @if videos.is_empty() {
                p class="empty" {
                    "No videos found for "
                    (platform.map(Platform::label).unwrap_or("All"))
                }
            } @else {
                div class="video-grid" {
                    @for video in videos {
                        button
                            type="button"
                            class="video-card"
                            data-video-id=(video.id)
                            hx-get=(format!("/videos/{}", video.id))
                            hx-target="#video-modal"
                        {
                            img src=(video.thumbnail) alt=(format!("{} video thumbnail", video.category));
                            span class="badge views" { (video.views) " views" }
                            span class="category" { (video.category) }
                        }
                    }
                }
            }
        }
    }
}
