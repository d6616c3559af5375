//! Login and registration forms.

use super::{layout, notice};
use crate::config::{FORM_ROLES, LOGIN_PATH, REGISTER_PATH};
use crate::domain::user::capitalize;
use crate::utils::escape_html;

/// Login form
#[derive(Debug, Default)]
pub struct LoginPage<'a> {
    pub notice: Option<&'a str>,
}

impl<'a> LoginPage<'a> {
    pub fn with_notice(notice: &'a str) -> Self {
        Self {
            notice: Some(notice),
        }
    }

    pub fn render(&self) -> String {
        let content = format!(
            r#"<h2>Hospital Login</h2>
{notice}<form method="post" action="{login}">
  <input name="username" placeholder="Username" required><br><br>
  <input type="password" name="password" placeholder="Password" required><br><br>
  <button type="submit">Login</button>
</form>
<a href="{register}">Register</a>"#,
            notice = notice(self.notice),
            login = LOGIN_PATH,
            register = REGISTER_PATH,
        );

        layout("Hospital Login", &content)
    }
}

/// Registration form with the role picker
#[derive(Debug, Default)]
pub struct RegisterPage<'a> {
    pub notice: Option<&'a str>,
}

impl<'a> RegisterPage<'a> {
    pub fn with_notice(notice: &'a str) -> Self {
        Self {
            notice: Some(notice),
        }
    }

    pub fn render(&self) -> String {
        let options: String = FORM_ROLES
            .iter()
            .map(|role| {
                format!(
                    "    <option value=\"{value}\">{label}</option>\n",
                    value = escape_html(role),
                    label = escape_html(&capitalize(role)),
                )
            })
            .collect();

        let content = format!(
            r#"<h2>Register</h2>
{notice}<form method="post" action="{register}">
  <input name="username" placeholder="Username" required><br><br>
  <input type="password" name="password" placeholder="Password" required><br><br>
  <select name="role">
{options}  </select><br><br>
  <button type="submit">Register</button>
</form>
<a href="{login}">Back to Login</a>"#,
            notice = notice(self.notice),
            register = REGISTER_PATH,
            login = LOGIN_PATH,
        );

        layout("Register", &content)
    }
}
