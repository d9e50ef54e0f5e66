// One component per route

mod about;
mod book;
mod contact;
mod home;
mod not_found;
mod services;
mod terms;
mod work;

pub use about::AboutPage;
pub use book::BookPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;
pub use terms::TermsPage;
pub use work::WorkPage;
