use cliniq_router::error::RouterError;
use cliniq_router::{ImageUrlPattern, OutboundReply, format_reply};

#[test]
fn image_host_links_become_images() {
    let images = ImageUrlPattern::default();
    for url in [
        "https://i.imgur.com/abc.png",
        "http://imgur.com/gallery/x.jpg",
    ] {
        assert_eq!(
            format_reply(url, &images),
            OutboundReply::Image {
                url: url.to_string()
            }
        );
    }
}

#[test]
fn everything_else_is_text() {
    let images = ImageUrlPattern::default();
    for reply in [
        "https://i.imgur.com/abc.gif",
        "see https://i.imgur.com/abc.png",
        "https://example.org/abc.png",
        "Filters are: 0..120.",
    ] {
        assert!(matches!(format_reply(reply, &images), OutboundReply::Text { .. }));
    }
}

#[test]
fn pattern_is_configurable() {
    let images = ImageUrlPattern::new(r"^https://charts\.example\.org/.*\.md$").unwrap();
    assert!(matches!(
        format_reply("https://charts.example.org/pie-1.md", &images),
        OutboundReply::Image { .. }
    ));
    assert!(matches!(
        format_reply("https://i.imgur.com/abc.png", &images),
        OutboundReply::Text { .. }
    ));
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = ImageUrlPattern::new("(unclosed").unwrap_err();
    assert!(matches!(err, RouterError::InvalidPattern(_)));
}

#[test]
fn replies_serialize_with_type_tag() {
    let image = serde_json::to_value(OutboundReply::Image {
        url: "https://i.imgur.com/a.png".to_string(),
    })
    .unwrap();
    assert_eq!(image["type"], "image");
    assert_eq!(image["url"], "https://i.imgur.com/a.png");

    let text = serde_json::to_value(OutboundReply::Text {
        text: "hi".to_string(),
    })
    .unwrap();
    assert_eq!(text["type"], "text");
    assert_eq!(text["text"], "hi");
}
