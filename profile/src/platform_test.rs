use super::*;

#[test]
fn parse_canonicalizes_known_names() {
    assert_eq!(Platform::parse("GitHub"), Platform::GitHub);
    assert_eq!(Platform::parse("github"), Platform::GitHub);
    assert_eq!(Platform::parse(" LINKEDIN "), Platform::LinkedIn);
    assert_eq!(Platform::parse("website"), Platform::Website);
}

#[test]
fn parse_keeps_unknown_text_verbatim() {
    assert_eq!(Platform::parse("Mastodon"), Platform::Other("Mastodon".to_owned()));
    assert_eq!(Platform::parse(""), Platform::Other(String::new()));
}

#[test]
fn default_platform_is_github() {
    assert_eq!(Platform::default(), Platform::GitHub);
}

#[test]
fn serde_uses_plain_strings() {
    let json = serde_json::to_string(&Platform::LinkedIn).unwrap();
    assert_eq!(json, "\"LinkedIn\"");
    let other: Platform = serde_json::from_str("\"Codeberg\"").unwrap();
    assert_eq!(other, Platform::Other("Codeberg".to_owned()));
    assert_eq!(serde_json::to_string(&other).unwrap(), "\"Codeberg\"");
}

#[test]
fn known_platforms_have_their_own_style() {
    for platform in Platform::KNOWN {
        let style = platform.style();
        assert_eq!(style.name, platform.as_str());
        assert_ne!(style, &DEFAULT_STYLE);
    }
}

#[test]
fn unknown_platforms_resolve_to_default_style() {
    for raw in ["", "Other", "Myspace", "🦀", "gitlab"] {
        let style = Platform::parse(raw).style();
        assert_eq!(style, &DEFAULT_STYLE, "expected default style for {raw:?}");
        assert_eq!(style.icon, Icon::Link);
    }
}

#[test]
fn parsed_platforms_match_case_insensitively() {
    assert_eq!(Platform::parse("twitter").style().icon, Icon::Twitter);
    assert_eq!(Platform::parse("Website").style().icon, Icon::Globe);
}

#[test]
fn icon_slugs_are_unique() {
    let slugs = [Icon::GitHub, Icon::Twitter, Icon::LinkedIn, Icon::Globe, Icon::Link].map(Icon::slug);
    for (i, a) in slugs.iter().enumerate() {
        for b in &slugs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn resolve_href_keeps_absolute_urls() {
    assert_eq!(
        resolve_href(&Platform::GitHub, "https://github.com/octocat"),
        "https://github.com/octocat"
    );
    assert_eq!(resolve_href(&Platform::Website, "HTTP://example.com"), "HTTP://example.com");
}

#[test]
fn resolve_href_expands_handles_on_known_hosts() {
    assert_eq!(resolve_href(&Platform::GitHub, "octocat"), "https://github.com/octocat");
    assert_eq!(resolve_href(&Platform::Twitter, "@rustlang"), "https://twitter.com/rustlang");
}

#[test]
fn resolve_href_prefixes_scheme_otherwise() {
    assert_eq!(resolve_href(&Platform::Website, "example.com"), "https://example.com");
    assert_eq!(resolve_href(&Platform::GitHub, "github.com/octocat"), "https://github.com/octocat");
    assert_eq!(
        resolve_href(&Platform::Other("Blog".to_owned()), "blog.example.com"),
        "https://blog.example.com"
    );
}
