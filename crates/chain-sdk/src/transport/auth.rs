use reqwest::Url;

use crate::error::ClientError;

/// Validate the configured base URL and strip any trailing slash so paths
/// can be appended verbatim.
pub(super) fn parse_base_url(base_url: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(base_url).map_err(|e| {
        ClientError::Config(format!(
            "invalid base URL `{base_url}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(base_url.trim_end_matches('/').to_owned()),
        other => Err(ClientError::Config(format!(
            "unsupported base URL scheme `{other}`; expected http or https"
        ))),
    }
}

/// Split a client token into basic-auth credentials.
///
/// Chain Core issues tokens as `id:secret`, which map onto the basic-auth
/// username and password. A token without a `:` is sent as the username with
/// an empty password; an empty token means unauthenticated access.
pub(super) fn resolve_credentials(token: &str) -> Option<(String, String)> {
    if token.is_empty() {
        return None;
    }
    match token.split_once(':') {
        Some((user, pass)) => Some((user.to_owned(), pass.to_owned())),
        None => Some((token.to_owned(), String::new())),
    }
}
