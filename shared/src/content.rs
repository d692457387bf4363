//! Literal display content for both pages. Nothing here changes at runtime.

use crate::sections::SectionId;

/// Glyphs drawn by the frontend as inline SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    Award,
    CheckCircle,
    Clock,
    Code,
    Database,
    ExternalLink,
    Github,
    Globe,
    Instagram,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Moon,
    Palette,
    Phone,
    Rocket,
    Send,
    Smartphone,
    Star,
    Sun,
    Twitter,
    TrendingUp,
    User,
    Users,
    X,
    Zap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: Option<Icon>,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub video: Option<&'static str>,
    pub github: &'static str,
    pub demo: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
}

impl Project {
    pub const PLACEHOLDER_IMAGE: &'static str = "/placeholder.svg?height=250&width=400";
    /// Feature policy for the embedded video player.
    pub const VIDEO_ALLOW: &'static str =
        "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

    pub fn image_or_placeholder(&self) -> &'static str {
        self.image.unwrap_or(Self::PLACEHOLDER_IMAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: &'static str,
}

impl Skill {
    pub fn width_percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

impl Testimonial {
    pub fn stars(&self) -> usize {
        usize::from(self.rating.clamp(1, 5))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactDetail {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: SectionId,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingTier {
    pub title: &'static str,
    pub summary: &'static str,
    pub inr_from: &'static str,
    pub inr_to: &'static str,
    pub usd_range: &'static str,
    pub features: &'static [&'static str],
    pub icon_path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessProfile {
    pub company: &'static str,
    pub owner: &'static str,
    pub tagline: &'static str,
    pub address: &'static [&'static str],
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_type: &'static str,
}

impl SiteMetadata {
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => format!("{} | {}", page, BRAND),
            None => self.title.to_string(),
        }
    }
}

pub const BRAND: &str = "WebCraft Studio";

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "WebCraft Studio - Professional Web Development Services",
    description: "Transform your digital presence with WebCraft Studio. Specializing in modern web development, responsive design, and user-centric experiences that drive business growth.",
    keywords: "web development, MERN stack, React, Node.js, responsive design, UI/UX, Mumbai developer",
    author: "Atul Mishra",
    og_title: "WebCraft Studio - Professional Web Development Services",
    og_description: "Transform your digital presence with cutting-edge web solutions",
    og_type: "website",
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: SectionId::About, label: "About", icon: Some(Icon::User), href: None },
    NavItem { id: SectionId::Services, label: "Services", icon: Some(Icon::Rocket), href: None },
    NavItem { id: SectionId::Projects, label: "Projects", icon: Some(Icon::Code), href: None },
    NavItem { id: SectionId::Skills, label: "Skills", icon: Some(Icon::Zap), href: None },
    NavItem { id: SectionId::Testimonials, label: "Testimonials", icon: Some(Icon::Star), href: None },
    NavItem { id: SectionId::Contact, label: "Contact", icon: Some(Icon::MessageSquare), href: None },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Globe,
        title: "Web Development",
        description: "Custom websites and web applications built with modern technologies like React, Next.js, and Node.js.",
        features: &["Responsive Design", "SEO Optimized", "Fast Loading", "Modern UI/UX"],
    },
    Service {
        icon: Icon::Smartphone,
        title: "Mobile-First Design",
        description: "Mobile-responsive designs that look perfect on all devices and screen sizes.",
        features: &["Cross-Platform", "Touch Optimized", "Progressive Web Apps", "Native Feel"],
    },
    Service {
        icon: Icon::Database,
        title: "Full-Stack Solutions",
        description: "Complete end-to-end solutions including backend development, databases, and API integration.",
        features: &["Database Design", "API Development", "Cloud Deployment", "Security"],
    },
    Service {
        icon: Icon::Palette,
        title: "UI/UX Design",
        description: "Beautiful, intuitive designs that provide exceptional user experiences and drive conversions.",
        features: &["User Research", "Wireframing", "Prototyping", "Brand Identity"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "School Management System",
        description: "A comprehensive school management platform with student tracking, grade management, and parent communication features.",
        image: Some("https://via.placeholder.com/400x250"),
        video: None,
        github: "https://github.com/AtulmishraIT/school-management",
        demo: "https://school-management-atulmishra.vercel.app",
        tags: &["React", "Node.js", "MongoDB", "Express.js", "Tailwind CSS"],
        category: "Full-Stack",
    },
    Project {
        title: "Restaurant Management Platform",
        description: "Modern restaurant website with online ordering, menu management, and customer reviews system.",
        image: Some("https://via.placeholder.com/400x250"),
        video: Some("https://www.youtube.com/embed/5xlAztfMaTg"),
        github: "https://github.com/AtulmishraIT/user-restaurant",
        demo: "#",
        tags: &["React", "Node.js", "MongoDB", "Express.js", "Stripe API"],
        category: "E-commerce",
    },
    Project {
        title: "Interactive Snake Game",
        description: "Classic snake game with modern UI, high scores, and smooth animations built with vanilla JavaScript.",
        image: Some("https://via.placeholder.com/400x250"),
        video: Some("https://www.youtube.com/embed/g_LdkhWYs0k"),
        github: "https://github.com/AtulmishraIT/SnakeGame",
        demo: "https://snakegame-atulmishra.netlify.app/",
        tags: &["HTML5", "CSS3", "JavaScript", "Canvas API"],
        category: "Game",
    },
    Project {
        title: "Currency Converter App",
        description: "Real-time currency converter with live exchange rates and historical data visualization.",
        image: Some("https://via.placeholder.com/400x250"),
        video: Some("https://www.youtube.com/embed/iFdsrdmazAk"),
        github: "https://github.com/AtulmishraIT/Currency-Converter",
        demo: "https://currency-converter-atulmishra.netlify.app/",
        tags: &["JavaScript", "API Integration", "Chart.js", "Responsive Design"],
        category: "Utility",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", level: 95, icon: "🟨" },
    Skill { name: "React.js", level: 90, icon: "⚛️" },
    Skill { name: "Node.js", level: 85, icon: "🟢" },
    Skill { name: "HTML/CSS", level: 98, icon: "🎨" },
    Skill { name: "Tailwind CSS", level: 88, icon: "💨" },
    Skill { name: "Next.js", level: 85, icon: "▲" },
    Skill { name: "MongoDB", level: 80, icon: "🍃" },
    Skill { name: "Express.js", level: 82, icon: "🚀" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart Inc.",
        content: "Atul delivered an exceptional website that exceeded our expectations. His attention to detail and technical expertise is outstanding.",
        rating: 5,
        avatar: "/placeholder.svg?height=60&width=60",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Founder, Digital Solutions",
        content: "Working with Atul was a game-changer for our business. The website he built increased our conversions by 40%.",
        rating: 5,
        avatar: "/placeholder.svg?height=60&width=60",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Marketing Director",
        content: "Professional, reliable, and incredibly talented. Atul transformed our vision into a beautiful, functional website.",
        rating: 5,
        avatar: "/placeholder.svg?height=60&width=60",
    },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { number: "10+", label: "Projects Completed", icon: Icon::CheckCircle },
    Stat { number: "3+", label: "Happy Clients", icon: Icon::Users },
    Stat { number: "1+", label: "Years Experience", icon: Icon::Award },
    Stat { number: "99%", label: "Client Satisfaction", icon: Icon::TrendingUp },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { number: "2+", label: "Years of Experience", icon: Icon::Award },
    Stat { number: "50+", label: "Projects Completed", icon: Icon::CheckCircle },
    Stat { number: "30+", label: "Happy Clients", icon: Icon::Users },
    Stat { number: "99%", label: "Success Rate", icon: Icon::TrendingUp },
];

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight { label: "Custom Development", icon: Icon::Code },
    Highlight { label: "Responsive Design", icon: Icon::Smartphone },
    Highlight { label: "SEO Optimization", icon: Icon::TrendingUp },
    Highlight { label: "Fast Delivery", icon: Icon::Clock },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "As the founder of WebCraft Studio, I specialize in creating cutting-edge web solutions that help businesses thrive in the digital landscape. With expertise in the MERN stack and modern development practices, I deliver websites and applications that are not just visually stunning, but also highly functional and scalable.",
    "My approach combines technical excellence with business strategy, ensuring every project delivers measurable results. From startups to established enterprises, I help clients achieve their digital goals through innovative web solutions.",
];

/// Emoji badges orbiting the hero portrait: glyph, reveal delay and CSS placement.
pub const HERO_BADGES: &[(&str, u32, &str)] = &[
    ("⚛️", 0, "top: 10%; right: -10%;"),
    ("🟨", 500, "bottom: 20%; left: -15%;"),
    ("🟢", 1000, "top: 30%; left: -10%;"),
    ("💨", 1500, "bottom: 10%; right: -5%;"),
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: Icon::Mail, label: "Email", value: "theatulmishra7@gmail.com" },
    ContactDetail { icon: Icon::Phone, label: "Phone", value: "+91 7756054570" },
    ContactDetail { icon: Icon::MapPin, label: "Location", value: "Mumbai, India" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: Icon::Github, label: "GitHub", href: "https://github.com/AtulMishraIT" },
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn", href: "https://www.linkedin.com/in/atul-mishra-b05668308/" },
    SocialLink { icon: Icon::Twitter, label: "Twitter", href: "https://twitter.com" },
    SocialLink { icon: Icon::Instagram, label: "Instagram", href: "https://instagram.com/atulmish.co" },
];

pub const FOOTER_SERVICE_LINKS: &[FooterLink] = &[
    FooterLink { label: "Web Development", target: SectionId::Services },
    FooterLink { label: "Mobile Apps", target: SectionId::Services },
    FooterLink { label: "UI/UX Design", target: SectionId::Services },
    FooterLink { label: "Consultation", target: SectionId::Services },
];

pub const FOOTER_QUICK_LINKS: &[FooterLink] = &[
    FooterLink { label: "About", target: SectionId::About },
    FooterLink { label: "Projects", target: SectionId::Projects },
    FooterLink { label: "Skills", target: SectionId::Skills },
    FooterLink { label: "Contact", target: SectionId::Contact },
];

pub const BUSINESS: BusinessProfile = BusinessProfile {
    company: "WebCraft Studio",
    owner: "Atul Mishra",
    tagline: "Crafting high-impact websites & web applications that grow businesses.",
    address: &["Melvin Niwas,", "Opp BK No.1618,", "Near Bagade Decorators,", "Ulhasnagar 421004"],
    phone: "+91 7756054570",
    phone_href: "tel:+917756054570",
    email: "officialwebcraftstudio@gmail.com",
    website: "https://webcraft-atulmishra.vercel.app",
};

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        title: "Basic Static Website",
        summary: "3–5 pages (Home, About, Contact, etc.). No backend. Ideal for personal or small businesses.",
        inr_from: "₹5,000",
        inr_to: "₹20,000",
        usd_range: "(≈ $100 – $300)",
        features: &["3–5 pages", "No CMS or backend", "Responsive & fast", "Good for portfolios/basic presence"],
        icon_path: "M4 4h16v2H4V4zm0 4h10v2H4V8zm0 4h16v2H4v-2zm0 4h10v2H4v-2zm0 4h16v2H4v-2z",
    },
    PricingTier {
        title: "Business Website (Dynamic)",
        summary: "Pages + blog/CMS, contact forms, lead generation tools. Great for startups and professionals.",
        inr_from: "₹15,000",
        inr_to: "₹50,000",
        usd_range: "(≈ $300 – $1,000)",
        features: &["CMS / admin panel", "Lead generation & forms", "Responsive & SEO-friendly"],
        icon_path: "M3 5h18v2H3V5zm0 4h14v2H3V9zm0 4h18v2H3v-2zm0 4h14v2H3v-2z",
    },
    PricingTier {
        title: "E-commerce Website",
        summary: "Product listings, cart, payment gateway, admin dashboard. Example stacks: custom React+Express, WooCommerce.",
        inr_from: "₹30,000",
        inr_to: "₹1,50,000+",
        usd_range: "(≈ $500 – $3,000+)",
        features: &["Product catalog & cart", "Payment integration", "Order management dashboard"],
        icon_path: "M3 3h18v2H3V3zm2 4h14v2H5V7zm-2 4h18v2H3v-2zm2 4h14v2H5v-2z",
    },
    PricingTier {
        title: "Web App / SaaS Platform",
        summary: "Custom dashboards, user login, real-time features. Tech stack: React, Next.js, Tailwind CSS. Examples: CRM, project management.",
        inr_from: "₹50,000",
        inr_to: "₹5,00,000+",
        usd_range: "(≈ $1,000 – $10,000+)",
        features: &["Custom user systems", "Real-time/interactive features", "Scalable architecture"],
        icon_path: "M4 4h16v2H4V4zm0 4h10v2H4V8zm0 4h16v2H4v-2zm0 4h10v2H4v-2z",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_ids_are_unique_sections() {
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
        assert!(!ids.contains(&SectionId::Hero));
    }

    #[test]
    fn test_footer_links_point_at_nav_sections() {
        let nav: HashSet<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        for link in FOOTER_SERVICE_LINKS.iter().chain(FOOTER_QUICK_LINKS) {
            assert!(nav.contains(&link.target), "{} has no nav entry", link.label);
        }
    }

    #[test]
    fn test_skill_levels_fit_the_bar() {
        assert!(SKILLS.iter().all(|skill| skill.level <= 100));
        let overfull = Skill { name: "Rust", level: 140, icon: "🦀" };
        assert_eq!(overfull.width_percent(), 100);
    }

    #[test]
    fn test_ratings_render_between_one_and_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
        let zero = Testimonial { rating: 0, ..TESTIMONIALS[0] };
        assert_eq!(zero.stars(), 1);
    }

    #[test]
    fn test_four_pricing_tiers() {
        assert_eq!(PRICING_TIERS.len(), 4);
        assert!(PRICING_TIERS.iter().all(|tier| !tier.features.is_empty()));
    }

    #[test]
    fn test_page_title() {
        assert_eq!(SITE_METADATA.page_title(Some("Pricing")), "Pricing | WebCraft Studio");
        assert_eq!(SITE_METADATA.page_title(None), SITE_METADATA.title);
    }

    #[test]
    fn test_projects_without_image_use_placeholder() {
        let bare = Project { image: None, ..PROJECTS[0] };
        assert_eq!(bare.image_or_placeholder(), Project::PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_project_videos_are_embeddable_player_pages() {
        let videos: Vec<&str> = PROJECTS.iter().filter_map(|project| project.video).collect();
        assert_eq!(videos.len(), 3);
        assert!(videos.iter().all(|url| url.starts_with("https://www.youtube.com/embed/")));
    }
}
