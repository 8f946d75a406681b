use crate::error::{ComposeDiffError, Result};
use crate::project_identity;

const SECURE_SCHEME: &str = "https";
const INSECURE_SCHEME: &str = "http";

pub(super) fn validate_url(url_str: &str, allow_insecure: bool) -> Result<()> {
    let parsed = reqwest::Url::parse(url_str)
        .map_err(|_| ComposeDiffError::fetch(url_str, "Invalid URL"))?;

    let scheme = parsed.scheme();
    if !is_allowed_scheme(scheme, allow_insecure) {
        let insecure_key = project_identity::env_key("ALLOW_INSECURE_HTTP");
        return Err(ComposeDiffError::fetch(
            url_str,
            format!(
                "URL scheme '{}' is blocked. Allowed by default: https. To allow http explicitly set {}=1.",
                scheme, insecure_key
            ),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(ComposeDiffError::fetch(url_str, "URL must include a valid host"));
    }

    Ok(())
}

fn is_allowed_scheme(scheme: &str, allow_insecure: bool) -> bool {
    scheme == SECURE_SCHEME || (allow_insecure && scheme == INSECURE_SCHEME)
}
