pub mod contact;
pub mod mailer;
pub mod message;
