use url::Url;

/// Returns the authority of a URL used for same-host checks
///
/// This is the lowercase host followed by the port when one is written
/// explicitly, so `http://example.com:8080/` and `http://example.com/` are
/// different hosts, while `http://example.com:80/` collapses to
/// `example.com` because the `url` crate drops default ports.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkrot::url::authority;
///
/// let url = Url::parse("https://EXAMPLE.com/path").unwrap();
/// assert_eq!(authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(authority(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

/// Returns the key a URL is tracked under in the visited set
///
/// Only the path counts: query strings and fragments of the same page do
/// not cause another fetch.
pub fn visit_key(url: &Url) -> &str {
    url.path()
}
