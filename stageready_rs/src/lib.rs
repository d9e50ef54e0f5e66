//! # stageready
//!
//! Interactive state for the Stage Ready home-staging site.
//!
//! The site itself is a Leptos CSR application (see the `landing` crate).
//! Everything that has behaviour worth testing lives here instead, free of
//! any browser dependency:
//!
//! - [`gallery`] - lightbox selection with wraparound navigation
//! - [`portfolio`] - style / property-type filtering over portfolio projects
//! - [`form`] - booking and contact forms: validation and async submission
//! - [`submit`] - the submission endpoint seam (simulated for now)
//! - [`notify`] - success / error notification sink
//! - [`config`] - option lists, business details and projects, loaded from TOML
//! - [`routes`] - page paths and active-link matching
//! - [`brand`] - logo image / text fallback switch
//!
//! ## Quick Start
//!
//! ```rust
//! use stageready::gallery::{Gallery, MediaItem};
//!
//! let mut gallery = Gallery::new(vec![
//!     MediaItem::new("a", "/images/a.jpg"),
//!     MediaItem::new("b", "/images/b.jpg"),
//!     MediaItem::new("c", "/images/c.jpg"),
//! ]);
//!
//! gallery.open(0).unwrap();
//! gallery.previous();
//! assert_eq!(gallery.selection(), Some(2));
//! ```
//!
//! Every controller is an owned value. Pages keep one instance per mounted
//! component, so nothing leaks between pages.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod brand;
pub mod config;
pub mod form;
pub mod gallery;
pub mod notify;
pub mod portfolio;
pub mod routes;
pub mod submit;

pub use config::SiteConfig;
pub use form::{FormController, FormError, FormModel, ValidationError};
pub use gallery::{Gallery, GalleryError, MediaItem};
pub use notify::{NoticeLog, Notifier};
pub use portfolio::{FilterValue, Portfolio, Project};
pub use routes::Page;
pub use submit::{Delay, Endpoint, SimulatedEndpoint, SubmitError};
