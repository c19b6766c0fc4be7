//! HTML rendering for the two greeter pages.
//!
//! Claim values come from the identity provider and are escaped before they
//! are embedded; configuration values are escaped as JS string literals. The
//! templates otherwise match the pages served by the original deployment.

use crate::claims::AuthorizerClaims;

/// Everything the authenticated page interpolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecuredPageView {
    pub claims: AuthorizerClaims,
    pub user_pool_id: String,
    pub client_id: String,
    pub aws_region: String,
    pub hosted_ui_base_url: String,
}

const HELLO_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Hello World!</title>
    <style>
        body { font-family: sans-serif; text-align: center; margin-top: 50px; }
        h1 { color: #333; }
        p { color: #666; }
    </style>
</head>
<body>
    <h1>Hello World from AWS Lambda!</h1>
    <p>This page was served via API Gateway and Lambda.</p>
    <p>You are successfully authenticated with AWS Cognito.</p>
</body>
</html>
"#;

const SECURED_PAGE_STYLE: &str = r#"
        body { font-family: Arial, sans-serif; text-align: center; margin-top: 50px; background-color: #f4f4f4; color: #333; }
        .container { background-color: #fff; margin: 20px auto; padding: 30px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); max-width: 600px; }
        h1 { color: #0056b3; }
        p { line-height: 1.6; }
        .token-info { background-color: #e9ecef; padding: 15px; border-radius: 5px; margin-top: 25px; text-align: left; }
        .token-info p { margin: 5px 0; }
        button { background-color: #dc3545; color: white; padding: 10px 20px; border: none; border-radius: 5px; cursor: pointer; font-size: 16px; margin-top: 30px; }
        button:hover { background-color: #c82333; }
    "#;

// Runs in the browser. `logout()` bounces through the hosted UI; the onload
// hook captures implicit-flow tokens from the URL fragment and clears it.
const SECURED_PAGE_SCRIPT: &str = r#"
        function logout() {
            const currentOrigin = window.location.origin;
            const logoutUrl = `${COGNITO_HOSTED_UI_BASE_URL}/logout?client_id=${CLIENT_ID}&logout_uri=${currentOrigin}/hello`;
            window.location.href = logoutUrl;
        }

        window.onload = function() {
            const fragment = new URLSearchParams(window.location.hash.substring(1));
            const accessToken = fragment.get('access_token');
            const idToken = fragment.get('id_token');

            if (accessToken && idToken) {
                localStorage.setItem('accessToken', accessToken);
                localStorage.setItem('idToken', idToken);
                window.history.replaceState({}, document.title, window.location.pathname);
            }
        };
    "#;

/// The static unauthenticated page.
pub fn render_hello_page() -> &'static str {
    HELLO_PAGE
}

pub fn render_secured_page(view: &SecuredPageView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Hello World Authenticated</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <h1>Hello World!</h1>
        <p>You have successfully authenticated with AWS Cognito and accessed this secure page.</p>

        <div class="token-info">
            <h2>User Details:</h2>
            <p><strong>User ID (sub):</strong> {sub}</p>
            <p><strong>Email:</strong> {email}</p>
            <p><strong>Username:</strong> {username}</p>
        </div>

        <button onclick="logout()">Logout</button>
    </div>

    <script>
        const USER_POOL_ID = "{user_pool_id}";
        const CLIENT_ID = "{client_id}";
        const AWS_REGION = "{aws_region}";
        const COGNITO_HOSTED_UI_BASE_URL = "{hosted_ui_base_url}";
{script}
    </script>
</body>
</html>
"#,
        style = SECURED_PAGE_STYLE,
        script = SECURED_PAGE_SCRIPT,
        sub = escape_html(&view.claims.sub),
        email = escape_html(&view.claims.email),
        username = escape_html(&view.claims.username),
        user_pool_id = escape_js_string(&view.user_pool_id),
        client_id = escape_js_string(&view.client_id),
        aws_region = escape_js_string(&view.aws_region),
        hosted_ui_base_url = escape_js_string(&view.hosted_ui_base_url),
    )
}

/// Escapes text for embedding into HTML element content or attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// Escapes text for a double-quoted JS string literal inside a <script> block.
// `<` must not appear raw, or a value could close the surrounding tag.
fn escape_js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '<' => escaped.push_str("\\x3c"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
