// src/handlers/booking.rs
use crate::booking::form::{session_from_form, shown_errors, FormData, CHANGED};
use crate::booking::validation::Field;
use crate::booking::{BookingController, BookingModal, BookingSession, SubmitOutcome};
use crate::domain::schedule::{upcoming_business_days, CalendarDay};
use crate::errors::ResultResp;
use crate::responses::html_response;
use crate::state::AppState;
use crate::templates::components::{booking_confirmation, booking_modal};
use maud::html;

fn render(session: &BookingSession, state: &AppState) -> ResultResp {
    let days = upcoming_business_days(state.now().date_naive());
    html_response(booking_modal(session, &days))
}

fn render_modal(modal: &BookingModal, state: &AppState) -> ResultResp {
    match modal.session() {
        Some(session) => render(session, state),
        None => html_response(html! {}),
    }
}

pub fn open(state: &AppState) -> ResultResp {
    render_modal(&BookingModal::open(), state)
}

/// Whatever the form held is dropped; reopening starts from scratch.
pub fn close(form: &FormData, state: &AppState) -> ResultResp {
    let modal = BookingModal::Open(session_from_form(form)).close();
    render_modal(&modal, state)
}

/// Re-render after an edit: keep the errors the view was showing, except the
/// one for the field that changed.
pub fn field(form: &FormData, state: &AppState) -> ResultResp {
    let mut session = session_from_form(form).revalidate(&shown_errors(form));
    if let Some(changed) = form.get(CHANGED).and_then(|f| Field::parse(f)) {
        session = session.clear_error(changed);
    }
    render(&session, state)
}

pub fn next(form: &FormData, state: &AppState) -> ResultResp {
    render(&session_from_form(form).advance(), state)
}

pub fn back(form: &FormData, state: &AppState) -> ResultResp {
    render(&session_from_form(form).back(), state)
}

pub fn select_date(form: &FormData, state: &AppState) -> ResultResp {
    let session = session_from_form(form);
    let picked = form
        .get("pick_date")
        .and_then(|raw| CalendarDay::parse_iso(raw));

    let session = match picked {
        Some(day) => session.select_date(day),
        None => session.revalidate(&[Field::Date]),
    };
    render(&session, state)
}

pub fn select_time(form: &FormData, state: &AppState) -> ResultResp {
    let picked = form.get("pick_time").map(String::as_str).unwrap_or("");
    render(&session_from_form(form).select_time(picked), state)
}

/// Failures come back as a normal 200 view so the swap shows the error and
/// the user can press submit again.
pub fn submit(form: &FormData, state: &AppState) -> ResultResp {
    let controller = BookingController::new(state.leads.as_ref(), state.confirm_delay);

    match controller.submit(session_from_form(form), state.now()) {
        SubmitOutcome::Confirmed {
            confirmation,
            close_after,
        } => html_response(booking_confirmation(&confirmation, close_after)),
        SubmitOutcome::Incomplete(session) => render(&session, state),
        SubmitOutcome::Failed(session) => render(&session, state),
    }
}
