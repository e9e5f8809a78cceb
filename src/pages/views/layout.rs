//! Page shell: head, optional navigation bar, content container, footer.
use axum::response::Html;

use crate::extractors::SessionCtx;

use super::escape;

const STYLE: &str = r#"
body{margin:0;font-family:Roboto,Helvetica,Arial,sans-serif;background:#121212;color:#fff}
nav{display:flex;align-items:center;gap:24px;padding:12px 32px;background:#1e1e1e}
nav a{color:#fff;text-decoration:none}
nav .brand{font-weight:700;letter-spacing:.2rem;margin-right:auto}
main{max-width:1536px;margin:32px auto;display:flex;flex-direction:column;align-items:center;padding:0 24px}
.card{background:#1e1e1e;border-radius:4px;padding:16px}
.banner{height:100px;background-image:linear-gradient(to top right,#d10000,#f60439,#b105f4)}
.mrs span{background:linear-gradient(to top right,#d10000,#f60439,#b105f4);-webkit-background-clip:text;color:transparent}
.grid{display:flex;flex-flow:row wrap;justify-content:center;gap:16px}
.movie-card{width:250px}
.movie-card img{width:100%;height:375px;object-fit:cover}
.stars{color:#faaf00;font-size:1.4rem}
.label{font-style:italic;text-align:right}
.alert{background:#5f2120;padding:8px 16px;border-radius:4px}
.muted{color:#9e9e9e}
footer{text-align:center;font-size:13px;color:#9e9e9e;margin:32px 0 16px}
footer a{color:#f60439;text-decoration:none}
"#;

/// Navigation entries shown left of the account menu.
const PAGES: [(&str, &str); 2] = [("Movies", "/movies"), ("Users", "/users")];

pub fn navigation(session: &SessionCtx) -> String {
    let mut links: String = PAGES
        .iter()
        .map(|(title, path)| format!(r#"<a href="{path}">{title}</a>"#))
        .collect();

    links.push_str(&format!(
        r#"<a href="{}">Profile</a><a href="/logout">Logout</a>"#,
        escape(&session.profile_path())
    ));

    format!(r#"<nav><a class="brand" href="/">MRS</a>{links}</nav>"#)
}

pub fn footer() -> &'static str {
    r#"<footer>
<div>Movie Rating System, built for <a href="https://www.thermondo.de/" target="_blank" rel="noopener">thermondo</a></div>
<div>Author: <a href="https://github.com/victorspringer/backend-coding-challenge" target="_blank" rel="noopener">Victor Springer</a></div>
</footer>"#
}

/// Full document. `session` decides whether the navigation bar is shown.
pub fn page(title: &str, session: Option<&SessionCtx>, content: &str) -> Html<String> {
    let nav = session.map(navigation).unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="initial-scale=1, width=device-width">
<title>{title} · Movie Rating System</title>
<style>{STYLE}</style>
</head>
<body>
{nav}
<main>
{content}
</main>
{footer}
</body>
</html>"#,
        title = escape(title),
        footer = footer(),
    ))
}
