//! Josata Technologies site - core library
//!
//! Presentation-independent logic behind the marketing site: the particle
//! field simulation that runs under every page, the carousel rotor, the
//! contact form draft, and the static content catalog. The UI crate renders
//! all of it; nothing in here touches a window, a socket, or a disk.
//!
//! ## Quick start
//!
//! ```
//! use josata_core::{Camera, PlexusConfig, PlexusField};
//!
//! let mut field = PlexusField::new(PlexusConfig::default(), 42).unwrap();
//! let camera = Camera::new(16.0 / 9.0);
//!
//! // One frame: integrate, bounce, link, drift.
//! field.step(0.016, None);
//! for (i, j) in field.links() {
//!     let a = field.project(*i, &camera);
//!     let b = field.project(*j, &camera);
//!     // hand a-b to the renderer
//!     let _ = (a, b);
//! }
//! ```

pub mod contact;
pub mod content;
pub mod error;
pub mod plexus;
pub mod rotor;

// Re-exports
pub use contact::{Acknowledgment, ContactDraft};
pub use error::{SiteError, SiteResult};
pub use plexus::{Camera, PlexusConfig, PlexusField, Point, Projected};
pub use rotor::Rotor;
