//! Terminal UI components: clock face, layout, and help overlay.

pub mod clock_face;
pub mod help_menu;
pub mod layout;

pub use clock_face::{ClockFace, ClockGeometry};
pub use help_menu::HelpMenuWidget;
pub use layout::{create_screen_layout, ScreenLayout};
