use std::rc::Rc;

use log::{debug, warn};

use crate::config::SiteConfig;
use crate::dom::{Element, Intersection, ObserverOptions, Page, ViewportObserver};
use crate::schedule::TaskHandle;

pub const PENDING_CLASS: &str = "animate-on-scroll";
pub const VISIBLE_CLASS: &str = "is-visible";

/// Reveals content blocks as they scroll into view, one after another.
pub struct RevealAnimator<P: Page> {
    page: P,
    selector: String,
    options: ObserverOptions,
    stagger_ms: u32,
}

impl<P: Page> RevealAnimator<P> {
    pub fn new(page: P, config: &SiteConfig) -> Self {
        Self {
            page,
            selector: config.reveal_selector(),
            options: ObserverOptions {
                threshold: config.reveal_threshold,
                root_margin: config.reveal_root_margin.clone(),
            },
            stagger_ms: config.reveal_stagger_ms,
        }
    }

    /// Tags every animatable block and starts watching it.
    /// Returns the number of elements observed.
    pub fn init(self) -> usize {
        let elements = self.page.query_all(&self.selector);
        if elements.is_empty() {
            debug!("No animatable elements on page");
            return 0;
        }

        let animator = Rc::new(self);
        let callback = {
            let animator = animator.clone();
            Rc::new(move |entries: &[Intersection<P::Element>], observer: &P::Observer| {
                animator.on_intersections(entries, observer)
            })
        };

        let observer = match animator.page.create_observer(&animator.options, callback) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("Scroll animations disabled: {}", e);
                return 0;
            }
        };

        for element in &elements {
            element.add_class(PENDING_CLASS);
            observer.observe(element);
        }
        elements.len()
    }

    pub fn on_intersections<O>(&self, entries: &[Intersection<P::Element>], observer: &O)
    where
        O: ViewportObserver<P::Element>,
    {
        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_intersecting {
                continue;
            }

            let target = entry.target.clone();
            let delay = (index as u32).saturating_mul(self.stagger_ms);
            self.page
                .schedule(delay, Box::new(move || target.add_class(VISIBLE_CLASS)))
                .detach();

            observer.unobserve(&entry.target);
        }
    }
}
