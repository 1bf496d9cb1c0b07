use crate::url::{classify_href, HrefKind};
use url::Url;

/// Rewrites a raw anchor href into a fully-qualified address
///
/// # Resolution Rules
///
/// The source address supplies the resolution context. Each href form
/// collapses to a single canonical absolute form:
///
/// 1. Root-relative (`/x.html`): prefix with `scheme://host[:port]` of the
///    source address
/// 2. Fragment-only (`#frag`): prefix with the full source address,
///    producing `source#frag`
/// 3. Absolute (`http://...`): returned unchanged
/// 4. Path-relative (`c.html`): prefix with `scheme://host[:port]` plus the
///    directory portion of the source path and a `/`
///
/// # Arguments
///
/// * `href` - The raw href text as it appeared in the page
/// * `base` - The address the page was fetched from
///
/// # Examples
///
/// ```
/// use linkstage::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("http://example.com/a/b.html").unwrap();
/// assert_eq!(resolve_href("c.html", &base), "http://example.com/a/c.html");
/// assert_eq!(resolve_href("/x.html", &base), "http://example.com/x.html");
/// ```
pub fn resolve_href(href: &str, base: &Url) -> String {
    match classify_href(href) {
        HrefKind::RootRelative => format!("{}{}", site_root(base), href),
        HrefKind::FragmentOnly => format!("{}{}", base, href),
        HrefKind::Absolute => href.to_string(),
        HrefKind::PathRelative => {
            format!("{}{}/{}", site_root(base), parent_dir(base.path()), href)
        }
    }
}

/// Returns `scheme://host[:port]` for an address, with no trailing slash
fn site_root(base: &Url) -> String {
    base.origin().ascii_serialization()
}

/// Returns the directory portion of a path, with no trailing slash
///
/// `/a/b.html` becomes `/a`; a path at the root (`/b.html` or `/`) becomes
/// the empty string so that joining with `/` does not double the slash.
fn parent_dir(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://example.com/a/b.html").unwrap()
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(resolve_href("/x.html", &base()), "http://example.com/x.html");
    }

    #[test]
    fn test_root_relative_keeps_scheme_and_host() {
        let https = Url::parse("https://data.example.org/reports/2024.html").unwrap();
        assert_eq!(
            resolve_href("/index.html", &https),
            "https://data.example.org/index.html"
        );
    }

    #[test]
    fn test_fragment_only() {
        assert_eq!(
            resolve_href("#frag", &base()),
            "http://example.com/a/b.html#frag"
        );
    }

    #[test]
    fn test_absolute_is_identity() {
        assert_eq!(
            resolve_href("http://other.com/y.html", &base()),
            "http://other.com/y.html"
        );
        assert_eq!(
            resolve_href("https://other.com/y.html", &base()),
            "https://other.com/y.html"
        );
    }

    #[test]
    fn test_path_relative() {
        assert_eq!(resolve_href("c.html", &base()), "http://example.com/a/c.html");
    }

    #[test]
    fn test_path_relative_from_root_page() {
        let root_page = Url::parse("http://example.com/b.html").unwrap();
        assert_eq!(
            resolve_href("c.html", &root_page),
            "http://example.com/c.html"
        );
    }

    #[test]
    fn test_path_relative_deep_directory() {
        let deep = Url::parse("http://example.com/a/b/c/page.html").unwrap();
        assert_eq!(
            resolve_href("next.html", &deep),
            "http://example.com/a/b/c/next.html"
        );
    }

    #[test]
    fn test_port_is_preserved() {
        let with_port = Url::parse("http://127.0.0.1:8080/a/b.html").unwrap();
        assert_eq!(
            resolve_href("/x.html", &with_port),
            "http://127.0.0.1:8080/x.html"
        );
        assert_eq!(
            resolve_href("c.html", &with_port),
            "http://127.0.0.1:8080/a/c.html"
        );
    }

    #[test]
    fn test_site_root_has_no_trailing_slash() {
        assert_eq!(site_root(&base()), "http://example.com");
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("/a/b.html"), "/a");
        assert_eq!(parent_dir("/b.html"), "");
        assert_eq!(parent_dir("/"), "");
        assert_eq!(parent_dir("/a/b/c"), "/a/b");
    }
}
