//! Input URL classification.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{Error, Result};

/// Domain every accepted link must belong to.
pub const TARGET_DOMAIN: &str = "redgifs.com";

/// Path segments that introduce a single post id.
const POST_SEGMENTS: &[&str] = &["watch", "ifr"];

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+$").unwrap());

/// What a RedGifs link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// `/watch/<id>` or `/ifr/<id>`.
    SinglePost(String),
    /// `/users/<username>`.
    CreatorListing(String),
    /// A RedGifs page with nothing to download.
    Unrecognized,
}

/// Classify a link.
///
/// Fails with [`Error::InvalidUrl`] when the link does not parse, is not on
/// the RedGifs domain, or has a `/users/` path without a valid username.
pub fn classify(input: &str) -> Result<LinkKind> {
    let input = input.trim();
    let url = Url::parse(input).map_err(|e| Error::InvalidUrl(format!("{} ({})", input, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "\"{}\" must use http or https",
            input
        )));
    }

    let host = url.host_str().unwrap_or_default().to_lowercase();
    let on_domain = host == TARGET_DOMAIN || host.ends_with(&format!(".{}", TARGET_DOMAIN));
    if !on_domain {
        return Err(Error::InvalidUrl(format!(
            "\"{}\" is not a valid redgifs URL",
            input
        )));
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        [kind, id, ..] if POST_SEGMENTS.contains(kind) => {
            Ok(LinkKind::SinglePost((*id).to_string()))
        }
        ["users", rest @ ..] => {
            let name = rest
                .first()
                .and_then(|raw| urlencoding::decode(raw).ok())
                .filter(|name| USERNAME_RE.is_match(name));
            match name {
                Some(name) => Ok(LinkKind::CreatorListing(name.into_owned())),
                None => Err(Error::InvalidUrl(format!("Not a valid /users/ URL: {}", input))),
            }
        }
        _ => Ok(LinkKind::Unrecognized),
    }
}

/// Read a newline-delimited list of links, skipping blank lines.
pub fn read_link_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
