//! # URL to Dial Target
//!
//! Converts a URL such as `https://example.com/path` into the `host:port`
//! form expected by `TcpStream::connect`, filling in the scheme's default
//! port when the URL does not carry one.
//!
//! The host part is taken verbatim from the URL's authority, so
//! `http://Example.COM` yields `Example.COM:80`.

use url::Url;

use crate::error::{NetError, Result};

const HTTPS_PORT: u16 = 443;
const HTTP_PORT: u16 = 80;

/// Schemes for which the `url` crate reads `\` as a path separator.
const SPECIAL_SCHEMES: [&str; 6] = ["http", "https", "ws", "wss", "ftp", "file"];

/// Port appended when a URL of the given scheme has none.
pub fn default_port(scheme: &str) -> u16 {
    if scheme == "https" { HTTPS_PORT } else { HTTP_PORT }
}

/// Returns a `host:port` string suitable for dialing, with the port set to
/// the scheme's default if absent.
pub fn host_port(url_str: &str) -> Result<String> {
    // The url crate silently drops these, the raw authority would keep them.
    if url_str.contains(['\t', '\r', '\n']) {
        return Err(NetError::Parse {
            input: url_str.to_string(),
            source: url::ParseError::InvalidDomainCharacter,
        });
    }

    let url = match Url::parse(url_str) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) if is_uri_reference(url_str) => {
            return Err(NetError::MissingScheme { input: url_str.to_string() });
        }
        Err(url::ParseError::EmptyHost) => {
            return Err(NetError::MissingHost { input: url_str.to_string() });
        }
        Err(source) => {
            return Err(NetError::Parse { input: url_str.to_string(), source });
        }
    };

    let special = SPECIAL_SCHEMES.contains(&url.scheme());
    let host_port = authority_host(url_str, special).unwrap_or_default();
    if host_port.is_empty() || host_port.starts_with(':') {
        return Err(NetError::MissingHost { input: url_str.to_string() });
    }

    if has_port(host_port) {
        Ok(host_port.to_string())
    } else {
        Ok(format!("{host_port}:{}", default_port(url.scheme())))
    }
}

/// Whether `host` carries a port. Colons inside a bracketed IPv6 literal are ignored.
fn has_port(host: &str) -> bool {
    let idx = host.find(']').unwrap_or(0);
    host[idx..].contains(':')
}

/// A scheme-less reference only counts as well formed when it has no
/// whitespace or control characters.
fn is_uri_reference(input: &str) -> bool {
    !input.trim().is_empty() && !input.chars().any(|c| c.is_whitespace() || c.is_control())
}

/// Raw `host[:port]` of the authority, without any `userinfo@` prefix.
///
/// Returns `None` when the input has no `//` authority section. For special
/// schemes a `\` ends the authority too.
fn authority_host(input: &str, special: bool) -> Option<&str> {
    let input = input.trim_matches(|c: char| c <= ' ');
    let (_scheme, rest) = input.split_once(':')?;
    let rest = rest.strip_prefix("//")?;
    let end = if special {
        rest.find(['/', '?', '#', '\\'])
    } else {
        rest.find(['/', '?', '#'])
    }
    .unwrap_or(rest.len());
    let authority = &rest[..end];
    Some(match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
