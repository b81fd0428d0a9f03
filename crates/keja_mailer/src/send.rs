use anyhow::Context;
use aws_sdk_sesv2::{
    self as ses,
    types::{Body, Content, Destination, EmailContent, Message},
};

/// Sends one message with an HTML body and a plaintext alternative
pub(crate) async fn send_email(
    client: &ses::Client,
    from_email: &str,
    to_email: &str,
    subject: &str,
    html: &str,
    text: &str,
) -> anyhow::Result<()> {
    let mut dest: Destination = Destination::builder().build();
    dest.to_addresses = Some(vec![to_email.to_string()]);

    let subject_content = Content::builder()
        .data(subject)
        .charset("UTF-8")
        .build()
        .context("building subject Content")?;

    let html_content = Content::builder()
        .data(html)
        .charset("UTF-8")
        .build()
        .context("building html Content")?;

    let text_content = Content::builder()
        .data(text)
        .charset("UTF-8")
        .build()
        .context("building text Content")?;

    let body = Body::builder().html(html_content).text(text_content).build();

    let msg = Message::builder()
        .subject(subject_content)
        .body(body)
        .build();

    let email_content = EmailContent::builder().simple(msg).build();

    client
        .send_email()
        .from_email_address(from_email)
        .destination(dest)
        .content(email_content)
        .send()
        .await
        .context("sending email via SES")?;

    Ok(())
}
