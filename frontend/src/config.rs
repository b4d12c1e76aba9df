use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the optional `<script type="application/json">` element carrying
/// an alternate content set for the page.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const STAGGER_STEP_MS: u32 = 100;

const INSTAGRAM_URL: &str = "https://www.instagram.com/glow_by_thai/";
const BOOKING_URL: &str = "https://booking.optios.net/20771/menu";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config has no navigation links")]
    EmptyNavigation,
    #[error("navigation link {label:?} has invalid target {target:?}")]
    InvalidTarget { label: String, target: String },
    #[error("scroll threshold must not be negative, got {0}")]
    NegativeScrollThreshold(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

impl NavLink {
    fn new(label: &str, target: &str) -> Self {
        Self { label: label.into(), target: target.into() }
    }

    fn has_valid_target(&self) -> bool {
        let target = self.target.trim();
        (target.starts_with('#') && target.len() > 1)
            || target.starts_with("https://")
            || target.starts_with("http://")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub ideal_for: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureIcon {
    Sparkles,
    ShieldCheck,
    Heart,
    Star,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub text: String,
    pub service: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub eyebrow: String,
    pub title: String,
}

impl SectionHeading {
    fn new(eyebrow: &str, title: &str) -> Self {
        Self { eyebrow: eyebrow.into(), title: title.into() }
    }
}

/// Wordmark pieces, rendered as `{lead} <span>{joiner}</span> {tail}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub lead: String,
    pub joiner: String,
    pub tail: String,
    pub tagline: String,
    pub location: String,
    pub country: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            lead: "Glow".into(),
            joiner: "by".into(),
            tail: "Thai".into(),
            tagline: "Boutique Beauty Studio".into(),
            location: "Oostkamp".into(),
            country: "België".into(),
        }
    }
}

impl Branding {
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.lead, self.joiner, self.tail)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLinks {
    pub instagram_url: String,
    pub instagram_handle: String,
    pub booking_url: String,
}

impl Default for ExternalLinks {
    fn default() -> Self {
        Self {
            instagram_url: INSTAGRAM_URL.into(),
            instagram_handle: "@glow_by_thai".into(),
            booking_url: BOOKING_URL.into(),
        }
    }
}

/// Styling constants; the only thing besides copy that differs between
/// page variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub nude: String,
    pub beige: String,
    pub taupe: String,
    pub ink: String,
    pub serif_font: String,
    pub sans_font: String,
    pub scroll_threshold_px: f64,
    pub stagger_step_ms: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            nude: "#F8F4EF".into(),
            beige: "#E6DCD0".into(),
            taupe: "#8C7B6E".into(),
            ink: "#2A2420".into(),
            serif_font: "\"Cormorant Garamond\", Georgia, serif".into(),
            sans_font: "Inter, -apple-system, BlinkMacSystemFont, \"Segoe UI\", sans-serif".into(),
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            stagger_step_ms: STAGGER_STEP_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    pub headline: String,
    pub headline_accent: String,
    pub lead: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            headline: "Jouw nagels,".into(),
            headline_accent: "maar beter.".into(),
            lead: "Verfijnde en natuurlijke beauty voor de moderne vrouw die houdt van perfectie en minimalisme.".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutCopy {
    pub heading: SectionHeading,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub image_url: String,
    pub image_alt: String,
}

impl Default for AboutCopy {
    fn default() -> Self {
        Self {
            heading: SectionHeading::new("Het Verhaal", "Verfijning in het hart van Oostkamp"),
            paragraphs: vec![
                "Glow by Thai staat voor natuurlijke schoonheid en perfectie. Wij geloven dat de mooiste resultaten diegene zijn die aanvoelen als een betere versie van jezelf.".into(),
                "In onze boutique studio in Oostkamp focussen we op precisie, hygiëne en een minimalistische esthetiek. Geen drukke salon, maar een persoonlijke ervaring waar jij centraal staat.".into(),
            ],
            highlights: vec![
                Highlight { value: "100%".into(), label: "Focus op jou".into() },
                Highlight { value: "Premium".into(), label: "Producten".into() },
            ],
            image_url: "/images/logo.jpeg".into(),
            image_alt: "Glow by Thai Logo".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhyCopy {
    pub heading: SectionHeading,
    pub portrait_url: String,
    pub portrait_alt: String,
}

impl Default for WhyCopy {
    fn default() -> Self {
        Self {
            heading: SectionHeading::new("Het Verschil", "Waarom Glow by Thai?"),
            portrait_url: "/images/face.jpeg".into(),
            portrait_alt: "Thai - Glow by Thai".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingCopy {
    pub heading: SectionHeading,
    pub text: String,
}

impl Default for BookingCopy {
    fn default() -> Self {
        Self {
            heading: SectionHeading::new("Klaar om te stralen?", "Reserveer Je Glow"),
            text: "Beleef de perfecte beauty ervaring in onze boutique studio. Afspraken zijn beperkt, boek tijdig online.".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterCopy {
    pub blurb: String,
    pub location_heading: String,
    pub availability: String,
    pub contact_heading: String,
}

impl Default for FooterCopy {
    fn default() -> Self {
        Self {
            blurb: "Boutique beauty studio in Oostkamp voor natuurlijke verfijning.".into(),
            location_heading: "Locatie".into(),
            availability: "Enkel op afspraak".into(),
            contact_heading: "Contact".into(),
        }
    }
}

/// Short UI strings that are not part of any one section's copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub book_now: String,
    pub book_appointment: String,
    pub book_your_appointment: String,
    pub book_online: String,
    pub discover_services: String,
    pub ideal_for: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            book_now: "Boek Nu".into(),
            book_appointment: "Afspraak Maken".into(),
            book_your_appointment: "Boek Je Afspraak".into(),
            book_online: "Boek Online".into(),
            discover_services: "Ontdek Diensten".into(),
            ideal_for: "Ideaal voor".into(),
        }
    }
}

/// Every piece of literal content the page renders. `Default` is the
/// Glow by Thai preset; a JSON document only needs the fields it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: Branding,
    pub links: ExternalLinks,
    pub theme: Theme,
    pub labels: Labels,
    pub nav_links: Vec<NavLink>,
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub services_heading: SectionHeading,
    pub services: Vec<Service>,
    pub why: WhyCopy,
    pub features: Vec<Feature>,
    pub portfolio_heading: SectionHeading,
    pub portfolio: Vec<String>,
    pub reviews_heading: SectionHeading,
    pub reviews: Vec<Review>,
    pub booking: BookingCopy,
    pub footer: FooterCopy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: Branding::default(),
            links: ExternalLinks::default(),
            theme: Theme::default(),
            labels: Labels::default(),
            nav_links: vec![
                NavLink::new("Diensten", "#services"),
                NavLink::new("Over ons", "#about"),
                NavLink::new("Portfolio", "#portfolio"),
                NavLink::new("Reviews", "#testimonials"),
            ],
            hero: HeroCopy::default(),
            about: AboutCopy::default(),
            services_heading: SectionHeading::new("Onze Expertise", "Diensten"),
            services: default_services(),
            why: WhyCopy::default(),
            features: default_features(),
            portfolio_heading: SectionHeading::new("Visueel Verhaal", "Portfolio"),
            portfolio: [
                "/images/SaveClip.App_525411260_17967007754934198_560237891442298755_n.jpg",
                "/images/SaveClip.App_527449235_17967666572934198_579534202566866219_n.jpg",
                "/images/SaveClip.App_564966776_17976267386934198_7481806575206015230_n.jpg",
                "/images/SaveClip.App_572889606_17977681076934198_1847128962047203715_n.jpg",
                "/images/SaveClip.App_576006096_17978764124934198_2504130075196160415_n.jpg",
                "/images/SaveClip.App_586695615_17982189431934198_5155461450697461730_n.jpg",
            ]
            .iter()
            .map(|url| url.to_string())
            .collect(),
            reviews_heading: SectionHeading::new("Reviews", "Klantervaringen"),
            reviews: default_reviews(),
            booking: BookingCopy::default(),
            footer: FooterCopy::default(),
        }
    }
}

fn default_services() -> Vec<Service> {
    [
        (
            "BIAB Specialist",
            "Onze signature behandeling voor sterke, gezonde natuurlijke nagels die 3-4 weken perfect blijven.",
            "Natuurlijke nagelgroei & Clean Girl look.",
        ),
        (
            "Brow Styling",
            "Laminatie, shaping en tinting voor wenkbrauwen die je gezicht perfect omlijsten.",
            "Een verzorgde, open blik.",
        ),
        (
            "Lash Lifts",
            "Een lift van je eigen wimpers voor een natuurlijk open-eye effect zonder extensions.",
            "Een frisse blik zonder mascara.",
        ),
        (
            "Minimalist Art",
            "Subtiele details zoals fijne lijntjes of chrome voor een unieke maar elegante touch.",
            "Subtiele personalisatie.",
        ),
    ]
    .iter()
    .map(|(title, description, ideal_for)| Service {
        title: title.to_string(),
        description: description.to_string(),
        ideal_for: ideal_for.to_string(),
    })
    .collect()
}

fn default_features() -> Vec<Feature> {
    [
        (
            FeatureIcon::Sparkles,
            "Natuurlijke Elegantie",
            "Wij versterken je natuurlijke schoonheid met een tijdloze esthetiek.",
        ),
        (
            FeatureIcon::ShieldCheck,
            "Hygiëne Voorop",
            "Strikte sterilisatie en medische standaarden voor jouw veiligheid.",
        ),
        (
            FeatureIcon::Heart,
            "Persoonlijke Focus",
            "Geen haast, enkel onverdeelde aandacht voor het beste resultaat.",
        ),
        (
            FeatureIcon::Star,
            "Premium Merken",
            "Enkel de beste producten die de gezondheid van je nagels respecteren.",
        ),
    ]
    .iter()
    .map(|(icon, title, description)| Feature {
        icon: *icon,
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn default_reviews() -> Vec<Review> {
    [
        (
            "Sophie M.",
            "De beste BIAB ervaring ooit. Thai's oog voor detail is ongezien. Mijn nagels zijn nog nooit zo sterk geweest.",
            "BIAB Manicure",
        ),
        (
            "Emma L.",
            "Prachtig resultaat van mijn lash lift. Heel natuurlijk en precies wat ik zocht. Een echte aanrader in Oostkamp.",
            "Lash Lift",
        ),
        (
            "Julie D.",
            "Eindelijk een salon dat minimalisme begrijpt. Mijn wenkbrauwen zien er fantastisch uit. Zeer professioneel.",
            "Brow Styling",
        ),
    ]
    .iter()
    .map(|(name, text, service)| Review {
        name: name.to_string(),
        text: text.to_string(),
        service: service.to_string(),
    })
    .collect()
}

impl SiteConfig {
    /// Parses an alternate content set. Fields missing from `raw` keep
    /// their preset values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nav_links.is_empty() {
            return Err(ConfigError::EmptyNavigation);
        }
        if let Some(link) = self.nav_links.iter().find(|link| !link.has_valid_target()) {
            return Err(ConfigError::InvalidTarget {
                label: link.label.clone(),
                target: link.target.clone(),
            });
        }
        if self.theme.scroll_threshold_px < 0.0 {
            return Err(ConfigError::NegativeScrollThreshold(self.theme.scroll_threshold_px));
        }
        Ok(())
    }
}

/// Loads the content set embedded in the host page, falling back to the
/// preset when there is none or it does not parse.
pub fn load() -> SiteConfig {
    let Some(raw) = embedded_config() else {
        info!("No embedded site config, using preset");
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&raw) {
        Ok(config) => {
            info!("Loaded embedded site config for {}", config.brand.full_name());
            config
        }
        Err(e) => {
            warn!("Ignoring embedded site config: {}", e);
            SiteConfig::default()
        }
    }
}

fn embedded_config() -> Option<String> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preset_has_fixed_content_lists() {
        let config = SiteConfig::default();
        assert_eq!(config.nav_links.len(), 4);
        assert_eq!(config.services.len(), 4);
        assert_eq!(config.features.len(), 4);
        assert_eq!(config.reviews.len(), 3);
        assert_eq!(config.portfolio.len(), 6);
        assert_eq!(config.theme.scroll_threshold_px, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn preset_nav_links_keep_display_order() {
        let preset = SiteConfig::default();
        let targets: Vec<&str> = preset
            .nav_links
            .iter()
            .map(|link| link.target.as_str())
            .collect();
        assert_eq!(targets, vec!["#services", "#about", "#portfolio", "#testimonials"]);
    }

    #[test]
    fn json_overrides_only_given_fields() {
        let raw = r##"{
            "brand": { "lead": "Shine", "tail": "Lena" },
            "nav_links": [ { "label": "Services", "target": "#services" } ],
            "theme": { "ink": "#000000" }
        }"##;
        let config = SiteConfig::from_json(raw).unwrap();
        assert_eq!(config.brand.full_name(), "Shine by Lena");
        assert_eq!(config.nav_links.len(), 1);
        assert_eq!(config.theme.ink, "#000000");
        assert_eq!(config.theme.nude, Theme::default().nude);
        assert_eq!(config.services, SiteConfig::default().services);
    }

    #[test]
    fn feature_icons_use_kebab_case() {
        let raw = r#"{ "features": [ { "icon": "shield-check", "title": "Clean", "description": "Always." } ] }"#;
        let config = SiteConfig::from_json(raw).unwrap();
        assert_eq!(config.features[0].icon, FeatureIcon::ShieldCheck);
    }

    #[test]
    fn empty_navigation_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "nav_links": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyNavigation));
    }

    #[test]
    fn bare_anchor_is_rejected() {
        let raw = r##"{ "nav_links": [ { "label": "Top", "target": "#" } ] }"##;
        match SiteConfig::from_json(raw) {
            Err(ConfigError::InvalidTarget { label, target }) => {
                assert_eq!(label, "Top");
                assert_eq!(target, "#");
            }
            other => panic!("expected InvalidTarget, got {:?}", other),
        }
    }

    #[test]
    fn negative_scroll_threshold_is_rejected() {
        let raw = r#"{ "theme": { "scroll_threshold_px": -10.0 } }"#;
        match SiteConfig::from_json(raw) {
            Err(ConfigError::NegativeScrollThreshold(px)) => assert_eq!(px, -10.0),
            other => panic!("expected NegativeScrollThreshold, got {:?}", other),
        }
    }

    #[test]
    fn zero_scroll_threshold_is_accepted() {
        let raw = r#"{ "theme": { "scroll_threshold_px": 0 } }"#;
        let config = SiteConfig::from_json(raw).unwrap();
        assert_eq!(config.theme.scroll_threshold_px, 0.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ nav_links: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn external_targets_are_accepted() {
        let link = NavLink::new("Boek", "https://booking.example.com");
        assert!(link.has_valid_target());
    }
}
