pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod services;
pub mod skills;
pub mod testimonials;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use services::ServicesSection;
pub use skills::SkillsSection;
pub use testimonials::TestimonialsSection;
