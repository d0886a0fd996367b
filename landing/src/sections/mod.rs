// Storefront sections
// Developed by The GharFresh Team (c)2026

mod footer;
mod hero;
mod inside_box;
mod logo;
mod menu_grid;
mod nav;
mod reviews;
mod why;

pub use footer::Footer;
pub use hero::Hero;
pub use inside_box::InsideTheBox;
pub use logo::{Logo, LogoSize};
pub use menu_grid::MenuGrid;
pub use nav::Nav;
pub use reviews::Reviews;
pub use why::WhyGharFresh;
