use crate::url::domain::authority;
use crate::LinkError;
use url::{ParseError, Url};

/// Where a link found on a page points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Absolute link with a scheme other than http/https (`mailto:`, `ftp:`...)
    ForeignScheme(String),

    /// http(s) link to another host; carries that host's authority
    ForeignHost(String),

    /// Absolute http(s) link to the host being crawled
    SameHostAbsolute(Url),

    /// Relative link resolved against the page URL
    Relative(Url),
}

/// Resolves an `href` found on `base` and classifies the result
///
/// # Classification
///
/// | href | Result |
/// |------|--------|
/// | absolute, scheme not http/https | `ForeignScheme` |
/// | absolute, other host or port | `ForeignHost` |
/// | absolute, same host | `SameHostAbsolute` |
/// | relative, resolves to same host | `Relative` |
/// | scheme-relative (`//other/x`) to another host | `ForeignHost` |
///
/// Relative references follow RFC 3986 resolution (`.`/`..` segments,
/// query and fragment handling) through [`Url::join`].
///
/// # Errors
///
/// Returns [`LinkError::Malformed`] when the href is neither a valid
/// absolute URL nor a valid relative reference.
///
/// # Example
///
/// ```
/// use linkrot::url::{resolve_link, Resolution};
/// use url::Url;
///
/// let base = Url::parse("http://example.com/a/b").unwrap();
/// let resolved = resolve_link(&base, "../c").unwrap();
/// assert_eq!(
///     resolved,
///     Resolution::Relative(Url::parse("http://example.com/c").unwrap())
/// );
/// ```
pub fn resolve_link(base: &Url, href: &str) -> Result<Resolution, LinkError> {
    let href = href.trim();

    match Url::parse(href) {
        Ok(url) => Ok(classify_absolute(base, url)),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let resolved = base.join(href).map_err(|source| LinkError::Malformed {
                href: href.to_string(),
                source,
            })?;

            // `//other.com/x` is relative by syntax but leaves the host
            if authority(&resolved) != authority(base) {
                return Ok(Resolution::ForeignHost(
                    authority(&resolved).unwrap_or_default(),
                ));
            }

            Ok(Resolution::Relative(resolved))
        }
        Err(source) => Err(LinkError::Malformed {
            href: href.to_string(),
            source,
        }),
    }
}

fn classify_absolute(base: &Url, url: Url) -> Resolution {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Resolution::ForeignScheme(url.scheme().to_string());
    }

    match authority(&url) {
        Some(host) if Some(&host) != authority(base).as_ref() => Resolution::ForeignHost(host),
        _ => Resolution::SameHostAbsolute(url),
    }
}
