use maud::{html, Markup};

pub mod booking_modal;
pub mod error;
pub mod showcase;
pub mod video_modal;

pub use booking_modal::{booking_confirmation, booking_modal};
pub use error::error_page;
pub use showcase::showcase_grid;
pub use video_modal::video_modal;

/// Any button that opens the booking modal.
pub fn book_call_button(label: &str) -> Markup {
    html! {
        button
            type="button"
            class="btn primary"
            hx-get="/booking/open"
            hx-target="#booking-modal"
            hx-swap="innerHTML"
        { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = message {
            p class="field-error" role="alert" { (msg) }
        }
    }
}
