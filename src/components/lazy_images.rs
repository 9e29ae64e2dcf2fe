use std::rc::Rc;

use log::{debug, warn};

use crate::dom::{Element, Intersection, ObserverOptions, Page, ViewportObserver};

pub const LAZY_SELECTOR: &str = "img[data-src]";
pub const LOADED_CLASS: &str = "loaded";

fn load<E: Element>(image: &E) {
    if let Some(src) = image.attribute("data-src") {
        image.set_attribute("src", &src);
    }
    image.add_class(LOADED_CLASS);
}

pub fn on_intersections<E, O>(entries: &[Intersection<E>], observer: &O)
where
    E: Element,
    O: ViewportObserver<E>,
{
    for entry in entries.iter().filter(|entry| entry.is_intersecting) {
        load(&entry.target);
        observer.unobserve(&entry.target);
    }
}

/// Starts deferred loading for the images present right now.
/// Returns `None` when the page has no deferred images.
pub fn init<P: Page>(page: &P) -> Option<P::Observer> {
    let images = page.query_all(LAZY_SELECTOR);
    if images.is_empty() {
        debug!("No deferred images on page");
        return None;
    }

    let callback = Rc::new(|entries: &[Intersection<P::Element>], observer: &P::Observer| {
        on_intersections(entries, observer)
    });
    let observer = match page.create_observer(&ObserverOptions::default(), callback) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("Lazy loading disabled: {}", e);
            return None;
        }
    };

    for image in &images {
        observer.observe(image);
    }
    Some(observer)
}
