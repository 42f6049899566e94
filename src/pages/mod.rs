mod about;
mod careers;
mod contact;
mod home;
mod services;
mod solutions;

pub use about::About;
pub use careers::Careers;
pub use contact::Contact;
pub use home::Home;
pub use services::Services;
pub use solutions::Solutions;
