use rand::Rng;

pub const EASE_OUT_BACK: &str = "cubic-bezier(0.6, -0.05, 0.01, 0.99)";

/// Entrance animations. Each maps onto a keyframe class in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    FadeInUp,
    ScaleIn,
    SlideInLeft,
    SlideInRight,
}

impl Motion {
    pub fn class(&self) -> &'static str {
        match self {
            Self::FadeInUp => "motion-fade-in-up",
            Self::ScaleIn => "motion-scale-in",
            Self::SlideInLeft => "motion-slide-in-left",
            Self::SlideInRight => "motion-slide-in-right",
        }
    }

    pub fn duration_ms(&self) -> u32 {
        match self {
            Self::ScaleIn => 600,
            Self::FadeInUp | Self::SlideInLeft | Self::SlideInRight => 800,
        }
    }

    pub fn style(&self, delay_ms: u32) -> String {
        format!(
            "animation-duration: {}ms; animation-delay: {}ms; animation-timing-function: {};",
            self.duration_ms(),
            delay_ms,
            EASE_OUT_BACK
        )
    }
}

/// Staggered children: the first child waits `delay_children_ms`, each later one
/// `step_ms` more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const CONTAINER: Stagger = Stagger { delay_children_ms: 100, step_ms: 200 };
    pub const NAV: Stagger = Stagger { delay_children_ms: 0, step_ms: 100 };
    pub const MOBILE_NAV: Stagger = Stagger { delay_children_ms: 0, step_ms: 80 };
    pub const LIST: Stagger = Stagger { delay_children_ms: 0, step_ms: 100 };

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(self.step_ms.saturating_mul(index))
    }
}

/// A floating dot in the hero background, positioned in percent of the hero box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {}ms; animation-delay: {}ms;",
            self.left_pct, self.top_pct, self.duration_ms, self.delay_ms
        )
    }
}

pub fn scatter_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            duration_ms: rng.gen_range(4_000..6_000),
            delay_ms: rng.gen_range(0..2_000),
        })
        .collect()
}

/// Fraction of the document scrolled, in `0.0..=1.0`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Stagger::CONTAINER.delay_for(0), 100);
        assert_eq!(Stagger::CONTAINER.delay_for(3), 700);
        assert_eq!(Stagger::LIST.delay_for(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_motion_style_carries_timing() {
        let style = Motion::ScaleIn.style(200);
        assert!(style.contains("animation-duration: 600ms"));
        assert!(style.contains("animation-delay: 200ms"));
        assert!(style.contains(EASE_OUT_BACK));
    }

    #[test]
    fn test_particles_stay_inside_hero() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter_particles(&mut rng, 6);
        assert_eq!(particles.len(), 6);
        for p in particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((4_000..6_000).contains(&p.duration_ms));
            assert!(p.delay_ms < 2_000);
        }
    }

    #[test]
    fn test_scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }
}
