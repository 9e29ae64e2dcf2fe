use std::cell::RefCell;

use log::{debug, info, warn, Level};
use wasm_bindgen::prelude::*;

mod config;
mod dom;
mod error;
mod schedule;
mod web;

mod components {
    pub mod back_to_top;
    pub mod cta;
    pub mod forms;
    pub mod lazy_images;
    pub mod mobile_menu;
    pub mod reveal;
    pub mod smooth_scroll;
}

use components::{
    back_to_top, cta, forms, lazy_images, mobile_menu::MobileMenu, reveal::RevealAnimator,
    smooth_scroll,
};
use config::SiteConfig;
use web::WebPage;

thread_local! {
    static CONFIG: RefCell<Option<SiteConfig>> = RefCell::new(None);
}

fn active_config(page: &WebPage) -> SiteConfig {
    CONFIG.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| SiteConfig::load(page))
            .clone()
    })
}

const BOOKING_GLOBAL: &str = "agendarDiagnostico";

/// Opens the WhatsApp booking chat. Also installed as
/// `window.agendarDiagnostico` so markup can call it from an inline `onclick`.
#[wasm_bindgen(js_name = agendarDiagnostico)]
pub fn book_diagnosis() {
    match WebPage::new() {
        Ok(page) => {
            let config = active_config(&page);
            cta::open_whatsapp(&page, &config);
        }
        Err(e) => warn!("Cannot open booking link: {}", e),
    }
}

fn init_components(page: &WebPage, config: &SiteConfig) {
    let animated = RevealAnimator::new(page.clone(), config).init();
    debug!("Watching {} animated blocks", animated);

    let menu = MobileMenu::new(page).init(page);
    debug!("Mobile menu starts {:?}", menu.state());
    let anchors = smooth_scroll::init(page, menu);
    debug!("Wired {} in-page anchors", anchors);

    cta::init(page, config);
    back_to_top::init(page, config.back_to_top_offset);
    forms::init(page);

    info!("NextClass - site enhancements loaded");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let page = match WebPage::new() {
        Ok(page) => page,
        Err(e) => {
            warn!("Site enhancements disabled: {}", e);
            return;
        }
    };

    if let Err(e) = page.expose_global(BOOKING_GLOBAL, book_diagnosis) {
        warn!("Inline booking links will not work: {}", e);
    }

    // Deferred images don't wait for DOMContentLoaded.
    lazy_images::init(&page);

    let ready_page = page.clone();
    page.when_ready(move || {
        let config = active_config(&ready_page);
        init_components(&ready_page, &config);
    });
}
