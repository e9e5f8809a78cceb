//! Small static page bodies.

pub fn home_content() -> String {
    r#"<h1 class="mrs"><span>Movie</span> <span>Rating</span> <span>System</span></h1>"#.to_string()
}

pub fn placeholder_content(heading: &str) -> String {
    format!(
        r#"<h1>{}</h1><p><a href="/">Go to the home page</a></p>"#,
        super::escape(heading)
    )
}

pub fn signed_out_content() -> String {
    r#"<h1>You have been signed out</h1><p><a href="/signin">Sign in again</a></p>"#.to_string()
}
