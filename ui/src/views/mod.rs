mod about;
mod contact;
mod home;
mod portfolio;
mod privacy_policy;
mod projects;
mod services;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use portfolio::Portfolio;
pub use privacy_policy::PrivacyPolicy;
pub use projects::Projects;
pub use services::Services;
