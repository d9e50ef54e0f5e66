// Shared page sections

mod booking_form;
mod contact_form;
mod footer;
mod hero;
mod lightbox;
mod nav;
mod portfolio;
mod toasts;

pub use booking_form::BookingCard;
pub use contact_form::ContactCard;
pub use footer::Footer;
pub use hero::{CtaBanner, Hero, PageHeader};
pub use lightbox::Lightbox;
pub use nav::Nav;
pub use portfolio::PortfolioBrowser;
pub use toasts::{Toaster, Toasts};
