//! Slide content shown alongside the timeline, built in or read from TOML.

use crate::error::TimelineError;
use serde::Deserialize;

/// Icon shown inside a timeline marker.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SlideIcon {
    Handshake,
    Headset,
    Search,
    Globe,
}

impl SlideIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SlideIcon::Handshake => "🤝",
            SlideIcon::Headset => "🎧",
            SlideIcon::Search => "🔍",
            SlideIcon::Globe => "🌐",
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub icon: SlideIcon,
    #[serde(default)]
    pub image: Option<String>,
}

/// Ordered, non-empty list of slides. The order is the left-to-right order
/// of the timeline markers.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

#[derive(Deserialize)]
struct SlideFile {
    #[serde(default)]
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Result<Self, TimelineError> {
        if slides.is_empty() {
            return Err(TimelineError::EmptySlideSet);
        }
        Ok(Self { slides })
    }

    /// Parse a `[[slides]]` TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, TimelineError> {
        let file: SlideFile = toml::from_str(contents)
            .map_err(|err| TimelineError::InvalidSlideFile(err.to_string()))?;
        Self::new(file.slides)
    }

    /// The four slides shipped with the page.
    pub fn builtin() -> Self {
        fn slide(
            title: &str,
            subtitle: &str,
            description: &str,
            icon: SlideIcon,
            image: &str,
        ) -> Slide {
            Slide {
                title: title.to_string(),
                subtitle: subtitle.to_string(),
                description: description.to_string(),
                icon,
                image: Some(image.to_string()),
            }
        }

        Self {
            slides: vec![
                slide(
                    "Connect with Partners",
                    "Building Bridges",
                    "We establish strong relationships with industry leaders to ensure sustainable growth and mutual success in every project.",
                    SlideIcon::Handshake,
                    "https://images.unsplash.com/photo-1549923746-c502d488b3ea?q=80&w=2070&auto=format&fit=crop",
                ),
                slide(
                    "24/7 Support System",
                    "Always Here",
                    "Our dedicated team is available round the clock to solve your queries and ensure your operations never hit a roadblock.",
                    SlideIcon::Headset,
                    "https://workingsolutions.com/wp-content/uploads/2022/03/24-7-customer-service-1.jpg",
                ),
                slide(
                    "Deep Analytics",
                    "Data Driven",
                    "Gain insights into your performance with our advanced analytics tools that track every metric that matters to your business.",
                    SlideIcon::Search,
                    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTJAtAyhwbHTcrpS7WvDs12HIIDBzUwrhfloA",
                ),
                slide(
                    "Global Reach",
                    "Worldwide",
                    "Expand your horizon beyond borders. We provide the infrastructure and network to get your product to a global audience.",
                    SlideIcon::Globe,
                    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcT8FjQbRY2BWhc1VGLiLWemOWazAsuqzGT57Q",
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}
