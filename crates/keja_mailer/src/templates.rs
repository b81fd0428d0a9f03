//! Message bodies for the transactional emails. Each builder returns
//! (subject, html, text).

static WELCOME_SUBJECT: &str = "Welcome to KejaHunt!";
static PASSWORD_RESET_SUBJECT: &str = "Password Reset Request - KejaHunt";
static PASSWORD_CHANGED_SUBJECT: &str = "Password Reset Successful - KejaHunt";

fn layout(inner: &str, support_email: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
  </head>
  <body style="margin: 0; width: 100%; background-color: #f9fafb; font-family: 'Segoe UI', sans-serif;">
    <table style="width: 100%; max-width: 640px; margin: 0 auto;" cellpadding="0" cellspacing="0" role="presentation">
      <tr>
        <td style="padding: 40px; background-color: #ffffff; border-radius: 8px;">
          {inner}
        </td>
      </tr>
      <tr>
        <td style="padding: 24px; text-align: center; font-size: 13px; color: #9ca3af;">
          Questions? Email us at <a href="mailto:{support_email}">{support_email}</a>
        </td>
      </tr>
    </table>
  </body>
</html>"#
    )
}

pub(crate) fn welcome(name: &str, site_url: &str, support_email: &str) -> (String, String, String) {
    let inner = format!(
        r#"<h1 style="color: #374151;">Karibu, {name}!</h1>
<p>Your KejaHunt account is ready. Browse rentals on the map, save your
favorites, and message landlords directly.</p>
<p><a href="{site_url}" style="padding: 10px 16px; border-radius: 8px; color: #ffffff; background-color: #0ea5e9; text-decoration: none;">Start exploring</a></p>"#
    );
    let text = format!(
        "Karibu, {name}!\n\nYour KejaHunt account is ready. Browse rentals, save your favorites, and message landlords directly.\n\nStart exploring: {site_url}\n\nQuestions? Email us at {support_email}"
    );
    (
        WELCOME_SUBJECT.to_string(),
        layout(&inner, support_email),
        text,
    )
}

pub(crate) fn password_reset(
    name: &str,
    reset_link: &str,
    support_email: &str,
) -> (String, String, String) {
    let inner = format!(
        r#"<h1 style="color: #374151;">Password reset</h1>
<p>Hello {name},</p>
<p>We received a request to reset your KejaHunt password. The link below is
valid for one hour.</p>
<p><a href="{reset_link}" style="padding: 10px 16px; border-radius: 8px; color: #ffffff; background-color: #0ea5e9; text-decoration: none;">Reset your password</a></p>
<p>If you did not request this, you can safely ignore this email.</p>"#
    );
    let text = format!(
        "Hello {name},\n\nWe received a request to reset your KejaHunt password. The link below is valid for one hour.\n\n{reset_link}\n\nIf you did not request this, you can safely ignore this email.\n\nQuestions? Email us at {support_email}"
    );
    (
        PASSWORD_RESET_SUBJECT.to_string(),
        layout(&inner, support_email),
        text,
    )
}

pub(crate) fn password_changed(name: &str, support_email: &str) -> (String, String, String) {
    let inner = format!(
        r#"<h1 style="color: #374151;">Password changed</h1>
<p>Hello {name},</p>
<p>Your password has been successfully reset. If you did not make this
change, contact us immediately at <a href="mailto:{support_email}">{support_email}</a>.</p>"#
    );
    let text = format!(
        "Hello {name},\n\nYour password has been successfully reset. If you did not make this change, contact us immediately at {support_email}.\n\nKejaHunt Team"
    );
    (
        PASSWORD_CHANGED_SUBJECT.to_string(),
        layout(&inner, support_email),
        text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_carries_name_and_site_url() {
        let (subject, html, text) = welcome("Achieng", "https://kejahunt.co.ke", "help@kejahunt.co.ke");
        assert_eq!(subject, WELCOME_SUBJECT);
        assert!(html.contains("Achieng"));
        assert!(html.contains("https://kejahunt.co.ke"));
        assert!(text.contains("https://kejahunt.co.ke"));
    }

    #[test]
    fn reset_link_lands_in_both_bodies() {
        let link = "https://kejahunt.co.ke/reset-password/tok123";
        let (_, html, text) = password_reset("Achieng", link, "help@kejahunt.co.ke");
        assert!(html.contains(link));
        assert!(text.contains(link));
    }

    #[test]
    fn password_changed_mentions_support() {
        let (_, html, text) = password_changed("Achieng", "help@kejahunt.co.ke");
        assert!(html.contains("help@kejahunt.co.ke"));
        assert!(text.contains("help@kejahunt.co.ke"));
    }
}
