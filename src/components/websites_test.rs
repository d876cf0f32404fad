use super::*;

fn site(name: &str, icon: &str) -> Website {
    Website { name: name.to_owned(), icon: icon.to_owned(), ..Website::default() }
}

#[test]
fn icon_view_treats_urls_as_images() {
    assert_eq!(
        icon_view(&site("Docs", "https://example.com/favicon.ico")),
        IconView::Image("https://example.com/favicon.ico".to_owned())
    );
}

#[test]
fn icon_view_keeps_emoji_as_glyph() {
    assert_eq!(icon_view(&site("Docs", " 📘 ")), IconView::Glyph("📘".to_owned()));
}

#[test]
fn icon_view_falls_back_to_uppercase_initial() {
    assert_eq!(icon_view(&site("grafana", "")), IconView::Glyph("G".to_owned()));
    assert_eq!(icon_view(&site("", "")), IconView::Glyph(String::new()));
}
