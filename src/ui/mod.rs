//! Panel and button model for the editor chrome
//!
//! Panels are ordered lists of buttons; buttons carry a command binding,
//! an active flag and an opaque SVG label. The registry owns the set and
//! arbitrates flag transitions. Nothing in here draws anything.

mod button;
mod panel;
mod registry;

pub mod icons;

pub use button::Button;
pub use panel::Panel;
pub use registry::PanelRegistry;
