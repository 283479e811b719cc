//! Back-office Pages
//!
//! Bare HTML so the guard's redirect has somewhere to land. The login form
//! posts JSON to `/api/auth/login`; the dashboard reads the session from the
//! verified cookie.

use auth::CurrentAccount;
use axum::Router;
use axum::response::Html;
use axum::routing::get;

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sign in</title>
</head>
<body>
<h1>Sign in</h1>
<form id="login">
  <label>Email <input name="email" type="email" autocomplete="username" required></label>
  <label>Password <input name="password" type="password" autocomplete="current-password" required></label>
  <button type="submit">Sign in</button>
</form>
<p id="error" role="alert"></p>
<script>
document.getElementById("login").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = new FormData(event.target);
  const res = await fetch("/api/auth/login", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    credentials: "same-origin",
    body: JSON.stringify({ email: form.get("email"), password: form.get("password") }),
  });
  if (res.ok) {
    window.location.assign("/admin");
    return;
  }
  const body = await res.json().catch(() => ({}));
  document.getElementById("error").textContent = body.message || "Sign in failed";
});
</script>
</body>
</html>
"#;

/// GET /admin/login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// GET /admin
pub async fn dashboard(current: CurrentAccount) -> Html<String> {
    let session = current.session();
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Dashboard</title>
</head>
<body>
<h1>Dashboard</h1>
<p>Signed in as <strong>{name}</strong> ({email})</p>
<button id="logout" type="button">Sign out</button>
<script>
document.getElementById("logout").addEventListener("click", async () => {{
  await fetch("/api/auth/logout", {{ method: "POST", credentials: "same-origin" }});
  window.location.assign("/admin/login");
}});
</script>
</body>
</html>
"#,
        name = escape_html(&session.name),
        email = escape_html(&session.email),
    ))
}

pub fn pages_router() -> Router {
    Router::new()
        .route("/admin/login", get(login_page))
        .route("/admin", get(dashboard))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
