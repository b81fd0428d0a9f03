mod send;
mod templates;

use aws_sdk_sesv2 as ses;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockMailerClient as Mailer;
#[cfg(not(test))]
pub use MailerClient as Mailer;

/// Transactional email over SESv2. Every message carries an HTML body plus a
/// plaintext alternative for clients that refuse HTML.
#[derive(Clone, Debug)]
pub struct MailerClient {
    inner: ses::Client,
    from_email: String,
    support_email: String,
}

#[cfg_attr(test, automock)]
impl MailerClient {
    pub fn new(inner: ses::Client, from_email: &str, support_email: &str) -> Self {
        Self {
            inner,
            from_email: from_email.to_string(),
            support_email: support_email.to_string(),
        }
    }

    /// Greets a freshly registered account
    #[tracing::instrument(skip(self))]
    pub async fn send_welcome(
        &self,
        to_email: &str,
        name: &str,
        site_url: &str,
    ) -> anyhow::Result<()> {
        let (subject, html, text) = templates::welcome(name, site_url, &self.support_email);
        send::send_email(&self.inner, &self.from_email, to_email, &subject, &html, &text).await
    }

    /// Delivers the signed password-reset link
    #[tracing::instrument(skip(self, reset_link))]
    pub async fn send_password_reset(
        &self,
        to_email: &str,
        name: &str,
        reset_link: &str,
    ) -> anyhow::Result<()> {
        let (subject, html, text) =
            templates::password_reset(name, reset_link, &self.support_email);
        send::send_email(&self.inner, &self.from_email, to_email, &subject, &html, &text).await
    }

    /// Confirms a completed password reset
    #[tracing::instrument(skip(self))]
    pub async fn send_password_changed(&self, to_email: &str, name: &str) -> anyhow::Result<()> {
        let (subject, html, text) = templates::password_changed(name, &self.support_email);
        send::send_email(&self.inner, &self.from_email, to_email, &subject, &html, &text).await
    }
}
