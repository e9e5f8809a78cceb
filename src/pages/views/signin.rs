//! Sign-in form.
use super::escape;

pub struct SignInForm<'a> {
    pub username: &'a str,
    pub remember_me: bool,
    pub wrong_credentials: bool,
}

impl Default for SignInForm<'_> {
    fn default() -> Self {
        Self {
            username: "",
            remember_me: true,
            wrong_credentials: false,
        }
    }
}

pub fn signin_content(form: &SignInForm<'_>) -> String {
    let alert = if form.wrong_credentials {
        r#"<div class="alert" role="alert">Wrong credentials.</div>"#
    } else {
        ""
    };
    let checked = if form.remember_me { " checked" } else { "" };

    format!(
        r#"{alert}
<div class="card" style="width:20vw;min-width:280px;padding:0">
<div class="banner"><h1 style="margin:0;padding-top:32px;text-align:center;font-size:1.4rem">Sign in to your account</h1></div>
<form method="post" action="/signin" style="display:flex;flex-direction:column;gap:12px;padding:16px">
<label>Username <input name="username" required value="{username}"></label>
<label>Password <input name="password" type="password" required></label>
<label><input name="remember_me" type="checkbox" value="true"{checked}> Remember me</label>
<button type="submit">Sign in</button>
</form>
</div>"#,
        username = escape(form.username),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_only_after_failed_attempt() {
        assert!(!signin_content(&SignInForm::default()).contains("Wrong credentials."));

        let failed = SignInForm {
            username: "<bob>",
            remember_me: false,
            wrong_credentials: true,
        };
        let html = signin_content(&failed);
        assert!(html.contains("Wrong credentials."));
        assert!(html.contains(r#"value="&lt;bob&gt;""#));
        assert!(!html.contains(" checked"));
    }
}
