use std::rc::Rc;

use log::debug;

use crate::components::mobile_menu::MobileMenu;
use crate::dom::{Click, Element, Page};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Resolves `#fragment` to the element it names. Bare `#` names nothing.
pub fn resolve_fragment<P: Page>(page: &P, href: &str) -> Option<P::Element> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    page.element_by_id(id)
}

/// Where the window has to scroll so `target` sits right under the fixed navbar.
pub fn scroll_destination<E: Element>(target: &E, navbar: Option<&E>) -> f64 {
    target.offset_top() - navbar.map_or(0.0, |nav| nav.offset_height())
}

pub fn on_anchor_click<P: Page>(
    page: &P,
    menu: &MobileMenu<P>,
    link: &P::Element,
    click: &Click<P::Element>,
) {
    click.prevent_default();

    let Some(href) = link.attribute("href") else {
        return;
    };
    let Some(target) = resolve_fragment(page, &href) else {
        debug!("Anchor {} has no target", href);
        return;
    };

    let navbar = page.query(".navbar");
    page.smooth_scroll_to(scroll_destination(&target, navbar.as_ref()));
    menu.close();
}

/// Hooks every in-page anchor. Returns the number of links wired.
pub fn init<P: Page>(page: &P, menu: Rc<MobileMenu<P>>) -> usize {
    let links = page.query_all(ANCHOR_SELECTOR);
    for link in &links {
        let page_ref = page.clone();
        let menu = menu.clone();
        let owner = link.clone();
        page.on_click(
            link,
            Rc::new(move |click: &Click<P::Element>| {
                on_anchor_click(&page_ref, &menu, &owner, click)
            }),
        );
    }
    links.len()
}
