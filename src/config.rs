use log::{debug, warn};
use serde::Deserialize;

use crate::dom::{Element, Page};
use crate::error::SiteError;

/// Id of the optional `<script type="application/json">` block that overrides
/// the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Country code followed by the number, digits only.
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    /// Elements that should open the WhatsApp deep link when clicked.
    pub cta_trigger_selector: String,
    pub reveal_selectors: Vec<String>,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_stagger_ms: u32,
    pub ripple_lifetime_ms: u32,
    pub back_to_top_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "244900000000".to_string(),
            whatsapp_message: "Olá! Gostaria de agendar um diagnóstico gratuito para acelerar as matrículas da minha formação. 🎓".to_string(),
            cta_trigger_selector: "[data-cta=\"whatsapp\"]".to_string(),
            reveal_selectors: [
                ".hero-content",
                ".benefit-card",
                ".feature-stat",
                ".case-card",
                ".system-box",
                ".comparison-box",
                ".about-content",
                ".guarantee-box",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_stagger_ms: 100,
            ripple_lifetime_ms: 600,
            back_to_top_offset: 300.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config island from the page, falling back to defaults.
    pub fn load<P: Page>(page: &P) -> Self {
        let Some(raw) = page.element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text()) else {
            debug!("No #{} block, using default site config", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring site config: {}", e);
                Self::default()
            }
        }
    }

    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}
