//! Rendered bodies for the relayed contact email and the optional auto-reply.

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

#[must_use]
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[must_use]
pub fn subject(name: &str) -> String {
    format!("Portfolio contact from {name}")
}

#[must_use]
pub fn text_body(name: &str, email: &str, message: &str) -> String {
    format!("Name: {name}\nEmail: {email}\n\n{message}")
}

#[must_use]
pub fn html_body(name: &str, email: &str, message: &str) -> String {
    let message_html = escape_html(message).replace('\n', "<br />");
    CONTACT_TEMPLATE
        .replace("{{NAME}}", &escape_html(name))
        .replace("{{EMAIL}}", &escape_html(email))
        .replace("{{MESSAGE}}", &message_html)
}

#[must_use]
pub fn auto_reply_subject() -> String {
    "Thanks for reaching out".to_owned()
}

#[must_use]
pub fn auto_reply_text(name: &str) -> String {
    format!("Hi {name},\n\nThanks for your message. I read everything that comes through the site and will get back to you soon.")
}

#[must_use]
pub fn auto_reply_html(name: &str) -> String {
    format!(
        "<p>Hi {},</p>\n<p>Thanks for your message. I read everything that comes through the site and will get back to you soon.</p>",
        escape_html(name)
    )
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
