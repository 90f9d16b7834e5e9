use crate::booking::controller::{BOOKING_UNAVAILABLE, SUBMISSION_FAILED};
use crate::config::AirtableConfig;
use crate::leads::AirtableClient;
use crate::router::handle;
use crate::tests::utils::{body_string, fixed_now, get, post_form, test_state, FakeLeads};
use scraper::{Html, Selector};
use std::sync::Arc;

fn field_errors(html: &str) -> Vec<String> {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse(".field-error").unwrap();
    doc.select(&sel)
        .map(|el| el.text().collect::<String>())
        .collect()
}

fn hidden_value(html: &str, name: &str) -> Option<String> {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse(&format!("input[type=hidden][name={name}]")).unwrap();
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr("value").map(str::to_string))
}

fn step_of(html: &str) -> Option<String> {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse(".progress").unwrap();
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr("data-step").map(str::to_string))
}

fn submit_disabled(html: &str) -> bool {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse("button[type=submit]").unwrap();
    doc.select(&sel)
        .next()
        .map(|el| el.value().attr("disabled").is_some())
        .unwrap_or(true)
}

/// Contact details of a user who already passed step 1.
const STEP_TWO: [(&str, &str); 5] = [
    ("step", "2"),
    ("name", "Jordan"),
    ("email", "jordan@example.com"),
    ("business_type", "Content Creator"),
    ("tiktok", "@jordan"),
];

fn step_two_with<'a>(extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut fields = STEP_TWO.to_vec();
    fields.extend_from_slice(extra);
    fields
}

#[test]
fn open_shows_contact_step() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let resp = handle(get("/booking/open"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(step_of(&body).as_deref(), Some("1"));
    assert!(body.contains("Tell us about yourself"));
    assert!(body.contains("Content Creator"));
    assert!(field_errors(&body).is_empty(), "no errors before any attempt");
}

#[test]
fn next_with_bad_email_and_no_type_stays_on_step_one() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let req = post_form(
        "/booking/next",
        &[("step", "1"), ("email", "not-an-email"), ("business_type", "")],
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(step_of(&body).as_deref(), Some("1"));
    assert_eq!(
        field_errors(&body),
        vec!["Email is invalid", "Please select your business type"]
    );
    assert_eq!(
        hidden_value(&body, "shown_errors").as_deref(),
        Some("email,businessType")
    );
    // What the user typed is kept.
    assert!(body.contains("not-an-email"));
}

#[test]
fn empty_email_reports_required() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let req = post_form(
        "/booking/next",
        &[("step", "1"), ("email", ""), ("business_type", "Podcaster")],
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(field_errors(&body), vec!["Email is required"]);
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let req = post_form(
        "/booking/field",
        &[
            ("step", "1"),
            ("email", "still-wrong"),
            ("business_type", ""),
            ("changed", "email"),
            ("shown_errors", "email,businessType"),
        ],
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(field_errors(&body), vec!["Please select your business type"]);
}

#[test]
fn valid_contact_details_advance_to_scheduling() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let req = post_form(
        "/booking/next",
        &[
            ("step", "1"),
            ("email", "jordan@example.com"),
            ("business_type", "Content Creator"),
        ],
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(step_of(&body).as_deref(), Some("2"));
    assert!(body.contains("Choose your preferred time"));
    assert!(field_errors(&body).is_empty());
    assert!(submit_disabled(&body), "nothing picked yet");
    // Tomorrow (Thursday 6 June) is the first bookable day.
    assert!(body.contains(r#"value="2024-06-06""#));
    assert!(!body.contains(r#"value="2024-06-08""#), "weekends are skipped");
}

#[test]
fn picking_a_time_before_a_date_asks_for_a_date() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let req = post_form("/booking/time", &step_two_with(&[("pick_time", "10:00 AM")]));
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(field_errors(&body), vec!["Please select a date first"]);
    assert_eq!(hidden_value(&body, "selected_time"), None);
}

#[test]
fn picking_date_then_time_enables_submit() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let req = post_form("/booking/date", &step_two_with(&[("pick_date", "2024-06-10")]));
    let body = body_string(handle(req, &state).expect("Handler failed"));
    assert_eq!(
        hidden_value(&body, "selected_date").as_deref(),
        Some("2024-06-10")
    );
    assert!(submit_disabled(&body));

    let req = post_form(
        "/booking/time",
        &step_two_with(&[("selected_date", "2024-06-10"), ("pick_time", "10:00 AM")]),
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(hidden_value(&body, "selected_time").as_deref(), Some("10:00 AM"));
    assert!(body.contains("Mon, Jun 10"));
    assert!(body.contains("10:00 AM EST"));
    assert!(!submit_disabled(&body));
}

#[test]
fn changing_the_date_drops_the_time() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let req = post_form(
        "/booking/date",
        &step_two_with(&[
            ("selected_date", "2024-06-10"),
            ("selected_time", "10:00 AM"),
            ("pick_date", "2024-06-11"),
        ]),
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(
        hidden_value(&body, "selected_date").as_deref(),
        Some("2024-06-11")
    );
    assert_eq!(hidden_value(&body, "selected_time"), None);
}

#[test]
fn back_returns_to_contact_step_with_values() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let req = post_form("/booking/back", &step_two_with(&[("selected_date", "2024-06-10")]));
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(step_of(&body).as_deref(), Some("1"));
    assert!(body.contains(r#"value="jordan@example.com""#));
    assert!(body.contains(r#"value="@jordan""#));
}

#[test]
fn submit_saves_lead_and_confirms() {
    let leads = Arc::new(FakeLeads::default());
    let state = test_state(leads.clone());

    let req = post_form(
        "/booking/submit",
        &step_two_with(&[
            ("revenue", "10k-25k"),
            ("goals", "  More reach  "),
            ("selected_date", "2024-06-10"),
            ("selected_time", "10:00 AM"),
        ]),
    );
    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Your call has been booked!"));
    assert!(body.contains(r#"hx-trigger="load delay:2000ms""#));
    assert!(body.contains("recTEST123"));

    let records = leads.records();
    assert_eq!(records.len(), 1);
    let lead = &records[0];
    assert_eq!(lead.email, "jordan@example.com");
    assert_eq!(lead.business_type, "Content Creator");
    assert_eq!(lead.source, "booking_modal");
    assert_eq!(lead.timestamp, fixed_now());
    assert_eq!(
        lead.selected_date.as_ref().map(|d| d.full_date.as_str()),
        Some("2024-06-10")
    );
    assert_eq!(lead.selected_time.as_deref(), Some("10:00 AM"));
    assert_eq!(lead.revenue.as_deref(), Some("10k-25k"));
    assert_eq!(lead.goals.as_deref(), Some("More reach"));
}

#[test]
fn submit_without_time_makes_no_call() {
    let leads = Arc::new(FakeLeads::default());
    let state = test_state(leads.clone());

    let req = post_form(
        "/booking/submit",
        &step_two_with(&[("selected_date", "2024-06-10")]),
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(field_errors(&body), vec!["Please select a time"]);
    assert!(leads.records().is_empty());
}

#[test]
fn failed_submission_keeps_everything_for_a_retry() {
    let leads = Arc::new(FakeLeads::failing());
    let state = test_state(leads.clone());

    let req = post_form(
        "/booking/submit",
        &step_two_with(&[("selected_date", "2024-06-10"), ("selected_time", "10:00 AM")]),
    );
    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains(SUBMISSION_FAILED));
    assert_eq!(step_of(&body).as_deref(), Some("2"));
    assert_eq!(hidden_value(&body, "email").as_deref(), Some("jordan@example.com"));
    assert_eq!(hidden_value(&body, "selected_time").as_deref(), Some("10:00 AM"));
    assert!(!submit_disabled(&body), "user can press submit again");
    assert_eq!(leads.records().len(), 1);
}

#[test]
fn tampered_contact_details_send_user_back() {
    let leads = Arc::new(FakeLeads::default());
    let state = test_state(leads.clone());

    let req = post_form(
        "/booking/submit",
        &[
            ("step", "2"),
            ("email", "nope"),
            ("business_type", "Podcaster"),
            ("selected_date", "2024-06-10"),
            ("selected_time", "10:00 AM"),
        ],
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert_eq!(step_of(&body).as_deref(), Some("1"));
    assert_eq!(field_errors(&body), vec!["Email is invalid"]);
    assert!(leads.records().is_empty());
}

#[test]
fn close_renders_nothing() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let resp = handle(post_form("/booking/close", &[]), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).trim().is_empty());
}

#[test]
fn oversized_submission_is_refused_whole() {
    let leads = Arc::new(FakeLeads::default());
    let state = test_state(leads.clone());

    let goals = "x".repeat(70_000);
    let req = post_form(
        "/booking/submit",
        &step_two_with(&[
            ("goals", goals.as_str()),
            ("selected_date", "2024-06-10"),
            ("selected_time", "10:00 AM"),
        ]),
    );
    let err = handle(req, &state).err().expect("request should fail");

    assert_eq!(err.status(), 413);
    assert!(leads.records().is_empty(), "nothing truncated reaches the store");
}

#[test]
fn unconfigured_store_shows_unavailable_banner() {
    let client = AirtableClient::new(&AirtableConfig::default()).expect("client builds");
    let state = test_state(Arc::new(client));

    let req = post_form(
        "/booking/submit",
        &step_two_with(&[("selected_date", "2024-06-10"), ("selected_time", "10:00 AM")]),
    );
    let body = body_string(handle(req, &state).expect("Handler failed"));

    assert!(body.contains(BOOKING_UNAVAILABLE));
    assert_eq!(step_of(&body).as_deref(), Some("2"));
}
