pub mod footer;
pub mod gradient_background;
pub mod header;
pub mod icons;
pub mod progress_bar;
pub mod reveal;
pub mod section_heading;
pub mod sections;

pub use footer::Footer;
pub use gradient_background::GradientBackground;
pub use header::Header;
pub use icons::LucideIcon;
pub use progress_bar::ScrollProgressBar;
pub use reveal::Reveal;
pub use section_heading::SectionHeading;
