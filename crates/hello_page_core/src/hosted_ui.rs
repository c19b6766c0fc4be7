/// Domain prefix of the Cognito hosted UI, taken from the user pool id.
///
/// Pool ids look like `<region>_<suffix>`; the hosted UI domain wants the
/// suffix between the first and second underscore. A pool id without an
/// underscore yields the empty string.
pub fn domain_prefix(user_pool_id: &str) -> &str {
    user_pool_id.split('_').nth(1).unwrap_or("")
}

/// Base URL of the hosted UI for this pool and region.
///
/// Pure string interpolation. A malformed pool id produces a malformed URL
/// rather than an error; the only consumer is a cosmetic logout redirect.
pub fn hosted_ui_base_url(user_pool_id: &str, aws_region: &str) -> String {
    format!(
        "https://{}.auth.{aws_region}.amazoncognito.com",
        domain_prefix(user_pool_id)
    )
}
