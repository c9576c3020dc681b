// Landing service - Page view model and carousel layout
use crate::domain::carousel::{CardTransform, CarouselAction, CarouselState, NavKey};
use crate::domain::landing::{LandingContent, ModuleDescriptor};
use crate::domain::reveal::RevealSpec;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const BENEFIT_BASE_DELAY_MS: u32 = 300;
const BENEFIT_DELAY_STEP_MS: u32 = 100;

#[derive(Debug, Clone, Serialize)]
pub struct CarouselCard {
    pub module: ModuleDescriptor,
    pub transform: CardTransform,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselView {
    pub active_index: usize,
    pub total: usize,
    pub cards: Vec<CarouselCard>,
}

/// One navigation input against the modules carousel
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CarouselInput {
    Next,
    Previous,
    Click { index: usize },
    Key { key: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct BenefitView {
    pub text: String,
    pub reveal: RevealSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    #[serde(flatten)]
    pub content: LandingContent,
    pub benefit_items: Vec<BenefitView>,
    /// Testimonial images twice over so the marquee loops without a gap
    pub marquee_track: Vec<String>,
    pub carousel: CarouselView,
}

#[derive(Clone)]
pub struct LandingService {
    content: Arc<LandingContent>,
    carousel: CarouselState,
}

impl LandingService {
    pub fn new(content: LandingContent) -> anyhow::Result<Self> {
        let Some(carousel) = CarouselState::new(content.modules.len()) else {
            anyhow::bail!("landing content must define at least one module");
        };
        Ok(Self {
            content: Arc::new(content),
            carousel,
        })
    }

    pub fn page(&self) -> LandingPage {
        let benefit_items = self
            .content
            .benefits
            .iter()
            .enumerate()
            .map(|(i, text)| BenefitView {
                text: text.clone(),
                reveal: RevealSpec::with_delay(BENEFIT_BASE_DELAY_MS + i as u32 * BENEFIT_DELAY_STEP_MS),
            })
            .collect();

        let images = &self.content.testimonials.images;
        let marquee_track = images.iter().chain(images.iter()).cloned().collect();

        LandingPage {
            content: (*self.content).clone(),
            benefit_items,
            marquee_track,
            carousel: self.carousel(0),
        }
    }

    /// Layout with `active` as the centred card; out-of-range indices wrap.
    pub fn carousel(&self, active: usize) -> CarouselView {
        let state = self.carousel.at(active);

        let cards = self
            .content
            .modules
            .iter()
            .zip(state.layout())
            .map(|(module, transform)| CarouselCard {
                module: module.clone(),
                transform,
            })
            .collect();

        CarouselView {
            active_index: state.active_index(),
            total: state.len(),
            cards,
        }
    }

    /// Apply one input starting from `active` and lay out the result
    pub fn navigate(&self, active: usize, input: &CarouselInput) -> CarouselView {
        let mut state = self.carousel.at(active);
        match input {
            CarouselInput::Next => state.apply(CarouselAction::Next),
            CarouselInput::Previous => state.apply(CarouselAction::Previous),
            CarouselInput::Click { index } => {
                if *index < state.len() {
                    state.click(*index);
                }
            }
            CarouselInput::Key { key } => {
                state.handle_key(NavKey::from_key(key));
            }
        }
        self.carousel(state.active_index())
    }
}
