pub mod buttons;
pub mod carousel;
pub mod cursor;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod logo;
pub mod navbar;
pub mod plexus_background;
pub mod reveal;
pub mod reveal_card;
pub mod service_card;
pub mod stats;
pub mod tech_stack;
pub mod transition;

pub use buttons::{ButtonVariant, SiteButton};
pub use carousel::CinematicSlider;
pub use cursor::CustomCursor;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use icons::Icon;
pub use logo::Logo;
pub use navbar::NavBar;
pub use plexus_background::PlexusBackground;
pub use reveal::Reveal;
pub use reveal_card::RevealCardView;
pub use service_card::ServiceCard;
pub use stats::StatsBand;
pub use tech_stack::TechStack;
pub use transition::RouteTransition;
