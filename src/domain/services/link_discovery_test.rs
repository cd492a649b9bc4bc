#[cfg(test)]
mod tests {
    use crate::domain::services::link_discovery::LinkDiscoverer;
    use url::Url;

    #[test]
    fn test_extract_links_in_document_order() {
        let html = r##"
            <html>
                <body>
                    <a href="a">a</a>
                    <a href="b">b</a>
                    <a href="c">c</a>
                </body>
            </html>
        "##;
        let base = Url::parse("http://example.test/dir/").unwrap();

        let links = LinkDiscoverer::extract_links(html, &base).unwrap();

        let urls: Vec<String> = links.iter().map(|l| l.url.to_string()).collect();
        assert_eq!(
            urls,
            vec![
                "http://example.test/dir/a",
                "http://example.test/dir/b",
                "http://example.test/dir/c",
            ]
        );
    }

    #[test]
    fn test_extract_links_skips_non_navigable() {
        let html = r##"
            <html>
                <body>
                    <a href="https://example.com/page1">Page 1</a>
                    <a href="/page2">Page 2</a>
                    <a href="page3.html">Page 3</a>
                    <a href="#fragment">Fragment</a>
                    <a href="mailto:test@example.com">Email</a>
                    <a href="javascript:void(0)">JS</a>
                </body>
            </html>
        "##;
        let base = Url::parse("https://example.com").unwrap();

        let links = LinkDiscoverer::extract_links(html, &base).unwrap();

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].url.as_str(), "https://example.com/page1");
        assert_eq!(links[1].url.as_str(), "https://example.com/page2");
        assert_eq!(links[2].url.as_str(), "https://example.com/page3.html");
    }

    #[test]
    fn test_extract_links_keeps_duplicates() {
        let html = r#"<a href="track.mp3">one</a><a href="track.mp3">two</a>"#;
        let base = Url::parse("http://example.com/dir/").unwrap();

        let links = LinkDiscoverer::extract_links(html, &base).unwrap();

        // The listing mirrors the page, duplicates included
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, links[1].url);
        assert_eq!(links[0].label, "one");
        assert_eq!(links[1].label, "two");
    }

    #[test]
    fn test_extract_links_empty_page() {
        let html = "<html><body><p>No links here</p></body></html>";
        let base = Url::parse("http://example.com/").unwrap();

        let links = LinkDiscoverer::extract_links(html, &base).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_extract_links_malformed_content() {
        // Not HTML at all; the HTML5 parser still produces a linkless document
        let links = LinkDiscoverer::extract_links(
            "\u{0}\u{1}garbage bytes",
            &Url::parse("http://example.com/").unwrap(),
        )
        .unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_extract_links_label_falls_back_to_file_name() {
        let html = r#"<a href="My%20Song.mp3"></a>"#;
        let base = Url::parse("http://example.com/dir/").unwrap();

        let links = LinkDiscoverer::extract_links(html, &base).unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "My Song.mp3");
        assert_eq!(links[0].content_type.as_deref(), Some("audio/mpeg"));
    }

    #[test]
    fn test_browsable_classification() {
        let html = r#"<a href="sub/">sub</a><a href="page.html">page</a><a href="song.ogg">song</a>"#;
        let base = Url::parse("http://example.com/dir/").unwrap();

        let links = LinkDiscoverer::extract_links(html, &base).unwrap();

        assert!(links[0].is_browsable());
        assert!(links[1].is_browsable());
        assert!(!links[2].is_browsable());
    }
}
