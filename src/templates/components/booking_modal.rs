// templates/components/booking_modal.rs

use crate::booking::form::{self, carried_fields, encode_errors};
use crate::booking::session::{BookingSession, Step};
use crate::booking::validation::Field;
use crate::domain::lead::SOCIAL_PLATFORMS;
use crate::domain::schedule::{BusinessType, CalendarDay, RevenueRange, TIME_SLOTS};
use crate::leads::Confirmation;
use crate::templates::components::field_error;
use maud::{html, Markup};
use std::time::Duration;

const TARGET: &str = "#booking-modal";

fn modal_shell(body: Markup) -> Markup {
    html! {
        div class="modal-backdrop" {
            div class="modal booking" role="dialog" aria-modal="true" aria-labelledby="booking-title" {
                div class="modal-header" {
                    h2 id="booking-title" { "Book Your Free Strategy Call" }
                    button
                        type="button"
                        class="icon-button"
                        aria-label="Close"
                        hx-post="/booking/close"
                        hx-target=(TARGET)
                    { "×" }
                }
                (body)
            }
        }
    }
}

fn progress(step: Step) -> Markup {
    let on_two = step == Step::Scheduling;
    html! {
        div class="progress" data-step=(step.number()) {
            div.step-dot.active { @if on_two { "✓" } @else { "1" } }
            div.step-bar.active[on_two] {}
            div.step-dot.active[on_two] { "2" }
        }
    }
}

/// The open booking modal for whatever step the session is on.
pub fn booking_modal(session: &BookingSession, days: &[CalendarDay]) -> Markup {
    modal_shell(html! {
        (progress(session.step()))
        @match session.step() {
            Step::ContactInfo => (contact_step(session)),
            Step::Scheduling => (schedule_step(session, days)),
        }
    })
}

fn contact_step(session: &BookingSession) -> Markup {
    let c = session.contact();
    let email_error = session.error(Field::Email);
    let type_error = session.error(Field::BusinessType);
    let invalid = |e: Option<&str>| if e.is_some() { "invalid" } else { "" };

    html! {
        form
            id="booking-form"
            method="post"
            action="/booking/next"
            hx-post="/booking/next"
            hx-target=(TARGET)
            class="booking-step"
        {
            input type="hidden" name=(form::STEP) value="1";
            input type="hidden" name=(form::SHOWN_ERRORS) value=(encode_errors(session));

            div class="step-intro" {
                h3 { "Tell us about yourself" }
                p { "We'll use this information to prepare for your call" }
            }

            div class="form-field" {
                label for="name" { "Your Name" }
                input type="text" id="name" name=(form::NAME) value=(c.name) autocomplete="name";
            }

            div class="form-field" {
                label for="email" { "Email Address *" }
                input
                    type="email"
                    id="email"
                    name=(form::EMAIL)
                    value=(c.email)
                    placeholder="your@email.com"
                    autocomplete="email"
                    class=(invalid(email_error))
                    hx-post="/booking/field"
                    hx-trigger="change"
                    hx-vals=(r#"{"changed":"email"}"#);
                (field_error(email_error))
            }

            div class="form-field" {
                label for="business_type" { "What best describes you? *" }
                select
                    id="business_type"
                    name=(form::BUSINESS_TYPE)
                    class=(invalid(type_error))
                    hx-post="/booking/field"
                    hx-trigger="change"
                    hx-vals=(r#"{"changed":"businessType"}"#)
                {
                    option value="" selected[c.business_type.is_none()] { "Select your business type" }
                    @for t in BusinessType::ALL {
                        option value=(t.label()) selected[c.business_type == Some(t)] { (t.label()) }
                    }
                }
                (field_error(type_error))
            }

            fieldset class="socials" {
                legend { "Social Media Links (Optional)" }
                p class="hint" { "Help us understand your current presence" }
                @for (key, label) in SOCIAL_PLATFORMS {
                    div class="form-field" {
                        label for=(key) { (label) }
                        input
                            type="text"
                            id=(key)
                            name=(key)
                            value=(c.socials.get(key).map(String::as_str).unwrap_or(""))
                            placeholder="@username or full URL";
                    }
                }
            }

            div class="form-field" {
                label for="revenue" { "Monthly revenue range" }
                select id="revenue" name=(form::REVENUE) {
                    option value="" selected[c.revenue.is_none()] { "Select range" }
                    @for r in RevenueRange::ALL {
                        option value=(r.code()) selected[c.revenue == Some(r)] { (r.label()) }
                    }
                }
            }

            div class="form-field" {
                label for="goals" { "What are your main content goals?" }
                textarea id="goals" name=(form::GOALS) rows="3" { (c.goals) }
            }

            div class="modal-actions" {
                button type="button" class="ghost" hx-post="/booking/close" hx-target=(TARGET) { "Cancel" }
                button type="submit" class="primary" { "Next" }
            }
        }
    }
}

fn option_class(base: &str, selected: bool) -> String {
    if selected {
        format!("{base} selected")
    } else {
        base.to_string()
    }
}

fn schedule_step(session: &BookingSession, days: &[CalendarDay]) -> Markup {
    let selected = session.selected_date();
    let has_date = selected.is_some();

    html! {
        form
            id="booking-form"
            method="post"
            action="/booking/submit"
            hx-post="/booking/submit"
            hx-target=(TARGET)
            hx-disabled-elt="find button[type='submit']"
            class="booking-step"
        {
            @for (name, value) in carried_fields(session) {
                input type="hidden" name=(name) value=(value);
            }

            div class="step-intro" {
                h3 { "Choose your preferred time" }
                p { "Select a date and time that works best for you" }
            }

            @if let Some(msg) = session.submission_error() {
                div class="submission-error" role="alert" { (msg) }
            }

            div class="form-field" {
                span class="label" { "Select Date *" }
                div class="date-grid" {
                    @for day in days {
                        button
                            type="button"
                            name="pick_date"
                            value=(day.full_date)
                            hx-post="/booking/date"
                            hx-include="#booking-form"
                            hx-target=(TARGET)
                            class=(option_class("date-option", selected.is_some_and(|d| d.full_date == day.full_date)))
                        {
                            span class="weekday" { (day.weekday) }
                            span class="day" { (day.day) }
                            span class="month" { (day.month) }
                        }
                    }
                }
                (field_error(session.error(Field::Date)))
            }

            div class="form-field" {
                span class="label" { "Select Time (EST) *" }
                div class="time-grid" {
                    @for slot in TIME_SLOTS {
                        button
                            type="button"
                            name="pick_time"
                            value=(slot)
                            disabled[!has_date]
                            hx-post="/booking/time"
                            hx-include="#booking-form"
                            hx-target=(TARGET)
                            class=(option_class("time-option", session.selected_time() == Some(slot)))
                        { (slot) }
                    }
                }
                (field_error(session.error(Field::Time)))
                @if !has_date {
                    p class="hint" { "Please select a date first" }
                }
            }

            @if let (Some(day), Some(time)) = (selected, session.selected_time()) {
                div class="selection-summary" {
                    h4 { "Your Selected Time:" }
                    p { (day.weekday) ", " (day.month) " " (day.day) }
                    p { (time) " EST" }
                }
            }

            div class="modal-actions" {
                button
                    type="button"
                    class="ghost"
                    hx-post="/booking/back"
                    hx-include="#booking-form"
                    hx-target=(TARGET)
                { "Back" }
                button type="submit" class="primary" disabled[!session.can_submit()] { "Book My Call" }
            }
        }
    }
}

/// Shown after a successful booking; asks to be closed once `close_after` runs out.
pub fn booking_confirmation(confirmation: &Confirmation, close_after: Duration) -> Markup {
    let trigger = format!("load delay:{}ms", close_after.as_millis());
    modal_shell(html! {
        div
            class="booking-confirmed"
            data-record-id=(confirmation.id)
            hx-post="/booking/close"
            hx-trigger=(trigger)
            hx-target=(TARGET)
        {
            h3 { "Your call has been booked!" }
            p { "We'll send you a confirmation email shortly." }
        }
    })
}
