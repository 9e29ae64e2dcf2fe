use std::rc::Rc;

use log::{info, warn};

use crate::config::SiteConfig;
use crate::dom::{Click, Element, Page};
use crate::schedule::TaskHandle;

pub const CTA_SELECTOR: &str = ".cta-button";
pub const RIPPLE_CLASS: &str = "ripple";

/// Deep link that opens a WhatsApp chat with `message` already typed.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Opens the booking chat in a new tab.
pub fn open_whatsapp<P: Page>(page: &P, config: &SiteConfig) {
    let url = whatsapp_url(&config.whatsapp_number, &config.whatsapp_message);
    info!("Opening WhatsApp booking link");
    page.open_in_new_context(&url);
}

/// Ripple placement inside the button, relative to its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn centered_on<E: Element>(button: &E, click: &Click<E>) -> Self {
        let rect = button.bounding_rect();
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: click.client_x - rect.left - size / 2.0,
            top: click.client_y - rect.top - size / 2.0,
        }
    }
}

pub fn spawn_ripple<P: Page>(page: &P, button: &P::Element, click: &Click<P::Element>, lifetime_ms: u32) {
    let ripple = match page.create_element("span") {
        Ok(ripple) => ripple,
        Err(e) => {
            warn!("Could not create ripple: {}", e);
            return;
        }
    };

    let geometry = RippleGeometry::centered_on(button, click);
    let size = format!("{}px", geometry.size);
    ripple.set_style("width", &size);
    ripple.set_style("height", &size);
    ripple.set_style("left", &format!("{}px", geometry.left));
    ripple.set_style("top", &format!("{}px", geometry.top));
    ripple.add_class(RIPPLE_CLASS);
    button.append_child(&ripple);

    page.schedule(lifetime_ms, Box::new(move || ripple.remove()))
        .detach();
}

/// Ripples every `.cta-button` and hooks the booking link onto the
/// configured triggers. Returns the number of ripple buttons wired.
pub fn init<P: Page>(page: &P, config: &SiteConfig) -> usize {
    let config = Rc::new(config.clone());

    for trigger in page.query_all(&config.cta_trigger_selector) {
        let page_ref = page.clone();
        let config = config.clone();
        page.on_click(
            &trigger,
            Rc::new(move |_: &Click<P::Element>| open_whatsapp(&page_ref, &config)),
        );
    }

    let buttons = page.query_all(CTA_SELECTOR);
    for button in &buttons {
        let page_ref = page.clone();
        let owner = button.clone();
        let lifetime = config.ripple_lifetime_ms;
        page.on_click(
            button,
            Rc::new(move |click: &Click<P::Element>| {
                spawn_ripple(&page_ref, &owner, click, lifetime)
            }),
        );
    }
    buttons.len()
}
