use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state, FakeLeads};
use scraper::{Html, Selector};
use std::sync::Arc;

fn card_ids(html: &str) -> Vec<String> {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse(".video-card").unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr("data-video-id").map(str::to_string))
        .collect()
}

#[test]
fn grid_filters_by_platform() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let all = body_string(handle(get("/videos"), &state).expect("Handler failed"));
    assert_eq!(card_ids(&all).len(), 6);

    let tiktok = body_string(handle(get("/videos?platform=tiktok"), &state).expect("Handler failed"));
    assert_eq!(card_ids(&tiktok), vec!["4"]);

    let insta =
        body_string(handle(get("/videos?platform=instagram"), &state).expect("Handler failed"));
    assert_eq!(card_ids(&insta), vec!["5", "6"]);
}

#[test]
fn unknown_platform_is_a_bad_request() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let err = handle(get("/videos?platform=myspace"), &state).err().expect("request should fail");
    assert_eq!(err.status(), 400);
}

#[test]
fn detail_opens_and_close_clears() {
    let state = test_state(Arc::new(FakeLeads::default()));

    let resp = handle(get("/videos/1"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("The Forgotten Empire Nobody Talks About"));
    assert!(body.contains("https://www.youtube.com/embed/EVwW0h6tzJM"));
    assert!(body.contains("History Unplugged Podcast"));

    let resp = handle(get("/videos/close"), &state).expect("Handler failed");
    assert!(body_string(resp).trim().is_empty());
}

#[test]
fn unknown_video_is_not_found() {
    let state = test_state(Arc::new(FakeLeads::default()));

    assert_eq!(handle(get("/videos/99"), &state).err().expect("request should fail").status(), 404);
    assert_eq!(handle(get("/videos/abc"), &state).err().expect("request should fail").status(), 404);
}
