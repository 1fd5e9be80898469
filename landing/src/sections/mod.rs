// Landing page sections

mod fallback_image;
mod footer;
mod hero;
mod icons;
mod mobile_nav;
mod nav;

pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;

pub(crate) use fallback_image::FallbackImage;
pub(crate) use mobile_nav::MobileNav;
