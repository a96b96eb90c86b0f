pub mod about;
pub mod blog;
pub mod contact;
pub mod portfolio;
pub mod resume;
