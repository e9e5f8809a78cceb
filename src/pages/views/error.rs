//! Error page body (404 and everything else).
use super::escape;

pub fn error_content(code: u16) -> String {
    let message = match code {
        404 => "The page you are trying to access was not found.",
        _ => "Oops... something went wrong. Sorry for the inconvenience.",
    };

    format!(
        r#"<section style="text-align:center">
<h1 class="muted">{code}</h1>
<h2 class="muted">{message}</h2>
<p><a href="/">Click here to go back</a></p>
</section>"#,
        message = escape(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_its_own_message() {
        assert!(error_content(404).contains("was not found"));
        assert!(error_content(500).contains("something went wrong"));
        assert!(error_content(401).contains("something went wrong"));
    }
}
