// Landing page content and interactive section state
use super::reveal::RevealSpec;
use super::typewriter::TypewriterSpec;
use serde::{Deserialize, Serialize};

const HEADER_SCROLL_THRESHOLD_PX: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_label: String,
    pub cta_href: String,
    pub description: TypewriterSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepsContent {
    pub heading: String,
    pub intro: TypewriterSpec,
    #[serde(default)]
    pub features: Vec<FeatureCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default)]
    pub reveal: RevealSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TestimonialsContent {
    pub heading: String,
    pub subheading: String,
    pub images: Vec<String>,
    /// Seconds for one full marquee loop
    #[serde(default = "default_marquee_seconds")]
    pub marquee_seconds: u32,
}

fn default_marquee_seconds() -> u32 {
    40
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferItem {
    pub text: String,
    pub icon: String,
    #[serde(default)]
    pub reveal: RevealSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct OfferContent {
    pub heading: TypewriterSpec,
    pub pitch: String,
    pub items: Vec<OfferItem>,
    pub original_price: String,
    pub price: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub reveal: RevealSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LandingContent {
    pub brand: String,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    pub hero: HeroContent,
    /// Checklist under the hero, revealed one after another
    #[serde(default)]
    pub benefits: Vec<String>,
    pub steps: StepsContent,
    pub modules: Vec<ModuleDescriptor>,
    pub testimonials: TestimonialsContent,
    pub offer: OfferContent,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    pub footer: String,
}

/// Open/closed state of the FAQ list; every item starts closed and toggles on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Vec<bool>,
}

impl FaqAccordion {
    pub fn new(items: usize) -> Self {
        Self {
            open: vec![false; items],
        }
    }

    /// Returns the new state, or `None` for an unknown index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.open.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
}

impl HeaderState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > HEADER_SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a nav link closes the mobile menu
    pub fn select_item(&mut self) {
        self.menu_open = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_aria_label(&self) -> &'static str {
        if self.menu_open { "Close Menu" } else { "Open Menu" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_items_toggle_independently() {
        let mut faq = FaqAccordion::new(3);
        assert!(!faq.is_open(0));

        assert_eq!(faq.toggle(1), Some(true));
        assert!(faq.is_open(1));
        assert!(!faq.is_open(0));
        assert!(!faq.is_open(2));

        assert_eq!(faq.toggle(0), Some(true));
        assert_eq!(faq.toggle(1), Some(false));
        assert!(faq.is_open(0));

        assert_eq!(faq.toggle(7), None);
        assert!(!faq.is_open(7));
    }

    #[test]
    fn test_header_scroll_threshold() {
        let mut header = HeaderState::default();
        header.on_scroll(20.0);
        assert!(!header.is_scrolled());
        header.on_scroll(21.0);
        assert!(header.is_scrolled());
        header.on_scroll(0.0);
        assert!(!header.is_scrolled());
    }

    #[test]
    fn test_header_menu() {
        let mut header = HeaderState::default();
        assert_eq!(header.menu_aria_label(), "Open Menu");
        header.toggle_menu();
        assert!(header.is_menu_open());
        assert_eq!(header.menu_aria_label(), "Close Menu");
        header.select_item();
        assert!(!header.is_menu_open());
    }

    #[test]
    fn test_feature_card_defaults() {
        let card: FeatureCard = toml::from_str(
            r#"
            title = "Canais Dark"
            desc = "Sem aparecer"
            "#,
        )
        .unwrap();
        assert!(!card.highlight);
        assert_eq!(card.reveal.delay_ms, 0);
    }
}
