use std::rc::Rc;

use log::warn;

use crate::dom::{Click, Element, Page};

pub const BUTTON_CLASS: &str = "back-to-top";
pub const VISIBLE_CLASS: &str = "is-visible";

pub fn visible_at(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Creates the floating "back to top" button and keeps its visibility in
/// step with the scroll position. Calling this twice adds a second button.
pub fn init<P: Page>(page: &P, threshold: f64) -> Option<P::Element> {
    let body = page.body()?;
    let button = match page.create_element("button") {
        Ok(button) => button,
        Err(e) => {
            warn!("Could not create back-to-top button: {}", e);
            return None;
        }
    };
    button.add_class(BUTTON_CLASS);
    button.set_attribute("aria-label", "Voltar ao topo");
    button.set_text("↑");
    body.append_child(&button);

    {
        let page_ref = page.clone();
        let button = button.clone();
        page.on_scroll(Rc::new(move || {
            if visible_at(page_ref.scroll_y(), threshold) {
                button.add_class(VISIBLE_CLASS);
            } else {
                button.remove_class(VISIBLE_CLASS);
            }
        }));
    }

    let page_ref = page.clone();
    page.on_click(
        &button,
        Rc::new(move |_: &Click<P::Element>| page_ref.smooth_scroll_to(0.0)),
    );

    Some(button)
}
