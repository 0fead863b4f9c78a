use portfolio_site::dom::{escape_html, Element, Node};

#[test]
fn test_escape_html_covers_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
    assert_eq!(escape_html("★ ünicode"), "★ ünicode");
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let el = Element::new("div")
        .attr("title", "\"><script>")
        .text("<img src=x onerror=alert(1)>");

    assert_eq!(
        el.to_html(),
        "<div title=\"&quot;&gt;&lt;script&gt;\">&lt;img src=x onerror=alert(1)&gt;</div>"
    );
}

#[test]
fn test_void_elements_have_no_closing_tag() {
    let el = Element::new("p")
        .child(Element::new("input").attr("type", "text"))
        .child(Element::new("br"));
    assert_eq!(el.to_html(), "<p><input type=\"text\"><br></p>");
}

#[test]
fn test_raw_markup_is_not_escaped() {
    let el = Element::new("style").raw("a > b { color: red; }");
    assert_eq!(el.to_html(), "<style>a > b { color: red; }</style>");
}

#[test]
fn test_attr_replaces_existing_value() {
    let el = Element::new("div").class("a").class("b");
    assert_eq!(el.get_attr("class"), Some("b"));
    assert_eq!(el.to_html(), "<div class=\"b\"></div>");
}

#[test]
fn test_queries() {
    let el = Element::new("div")
        .class("repo fade-in")
        .child(Element::new("a").text("name"))
        .child(Element::new("div").class("meta").text(" meta"))
        .child(Node::text("!"));

    assert!(el.has_class("repo"));
    assert!(el.has_class("fade-in"));
    assert!(!el.has_class("rep"));
    assert_eq!(el.text_content(), "name meta!");
    assert_eq!(el.find_all(&|e| e.tag() == "div").len(), 1);
    assert!(el.find(&|e| e.tag() == "span").is_none());
}
