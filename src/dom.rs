//! The slice of the browser the site components are written against.
//!
//! `web::WebPage` implements these traits on top of `web-sys`; tests use an
//! in-memory page instead, so every component can be driven with synthetic
//! clicks, scroll offsets and visibility batches.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::SiteError;
use crate::schedule::Scheduler;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub trait Element: Clone + PartialEq + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn text(&self) -> Option<String>;
    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);

    /// Inclusive: an element contains itself.
    fn contains(&self, other: &Self) -> bool;

    /// Offset from the top of the offset parent, in CSS pixels.
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;
    fn bounding_rect(&self) -> Rect;

    fn append_child(&self, child: &Self);
    fn remove(&self);
}

/// A pointer activation as seen by a click handler.
pub struct Click<E> {
    pub target: Option<E>,
    pub client_x: f64,
    pub client_y: f64,
    default_prevented: Cell<bool>,
}

impl<E> Click<E> {
    pub fn new(target: Option<E>, client_x: f64, client_y: f64) -> Self {
        Self {
            target,
            client_x,
            client_y,
            default_prevented: Cell::new(false),
        }
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// A form submission about to navigate away.
#[derive(Default)]
pub struct Submit {
    default_prevented: Cell<bool>,
}

impl Submit {
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

pub type ClickHandler<E> = Rc<dyn Fn(&Click<E>)>;
pub type SubmitHandler = Rc<dyn Fn(&Submit)>;
pub type Handler = Rc<dyn Fn()>;

/// One entry of a visibility-crossing batch.
#[derive(Clone, Debug)]
pub struct Intersection<E> {
    pub target: E,
    pub is_intersecting: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

pub trait ViewportObserver<E> {
    fn observe(&self, element: &E);
    fn unobserve(&self, element: &E);
}

pub type IntersectionCallback<E, O> = Rc<dyn Fn(&[Intersection<E>], &O)>;

pub trait Page: Scheduler + Clone + 'static {
    type Element: Element;
    type Observer: ViewportObserver<Self::Element> + 'static;

    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    fn create_element(&self, tag: &str) -> Result<Self::Element, SiteError>;

    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
    fn open_in_new_context(&self, url: &str);

    fn create_observer(
        &self,
        options: &ObserverOptions,
        callback: IntersectionCallback<Self::Element, Self::Observer>,
    ) -> Result<Self::Observer, SiteError>;

    fn on_click(&self, target: &Self::Element, handler: ClickHandler<Self::Element>);
    fn on_document_click(&self, handler: ClickHandler<Self::Element>);
    fn on_submit(&self, target: &Self::Element, handler: SubmitHandler);
    fn on_scroll(&self, handler: Handler);
}
