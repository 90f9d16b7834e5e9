use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state, FakeLeads};
use scraper::{Html, Selector};
use std::sync::Arc;

#[test]
fn home_page_has_every_section_and_modal_mounts() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_string(resp));
    for id in [
        "hero",
        "stats",
        "showcase",
        "process",
        "pricing",
        "features",
        "testimonials",
        "faq",
        "cta",
        "booking-modal",
        "video-modal",
        "showcase-grid",
    ] {
        let sel = Selector::parse(&format!("#{id}")).unwrap();
        assert!(doc.select(&sel).next().is_some(), "missing #{id}");
    }

    let book = Selector::parse(r#"[hx-get="/booking/open"]"#).unwrap();
    assert!(doc.select(&book).next().is_some());
}

#[test]
fn health_check_answers_ok() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let resp = handle(get("/health"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let err = handle(get("/nope"), &state).err().expect("request should fail");
    assert_eq!(err.status(), 404);
}
