//! `web-sys` backing for the page traits.

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions, Window,
};

use crate::dom::{
    Click, ClickHandler, Element, Handler, Intersection, IntersectionCallback, ObserverOptions,
    Page, Rect, Submit, SubmitHandler, ViewportObserver,
};
use crate::error::SiteError;
use crate::schedule::{Scheduler, TaskHandle};

#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::MissingWindow)?;
        let document = window.document().ok_or(SiteError::MissingDocument)?;
        Ok(Self { window, document })
    }

    /// Runs `f` once the document has been parsed.
    pub fn when_ready(&self, f: impl FnOnce() + 'static) {
        if self.document.ready_state() != "loading" {
            f();
            return;
        }
        let callback = Closure::once(f);
        if let Err(e) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        {
            warn!("Could not wait for DOMContentLoaded: {}", SiteError::from(e));
        }
        callback.forget();
    }

    /// Makes `f` callable as `window.<name>()` from inline markup.
    pub fn expose_global(&self, name: &str, f: fn()) -> Result<(), SiteError> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        Reflect::set(&self.window, &JsValue::from_str(name), callback.as_ref())?;
        callback.forget();
        Ok(())
    }

    fn listen(&self, target: &web_sys::EventTarget, kind: &str, callback: Closure<dyn FnMut(web_sys::Event)>) {
        if let Err(e) = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()) {
            warn!("Could not listen for {}: {}", kind, SiteError::from(e));
        }
        callback.forget();
    }
}

fn click_from(event: &web_sys::Event) -> Click<WebElement> {
    let target = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(WebElement);
    match event.dyn_ref::<MouseEvent>() {
        Some(mouse) => Click::new(target, mouse.client_x() as f64, mouse.client_y() as f64),
        None => Click::new(target, 0.0, 0.0),
    }
}

fn click_closure(handler: ClickHandler<WebElement>) -> Closure<dyn FnMut(web_sys::Event)> {
    Closure::wrap(Box::new(move |event: web_sys::Event| {
        let click = click_from(&event);
        handler(&click);
        if click.default_prevented() {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(web_sys::Event)>)
}

pub struct WebTask(Timeout);

impl TaskHandle for WebTask {
    fn cancel(self) {
        let _ = self.0.cancel();
    }

    fn detach(self) {
        self.0.forget();
    }
}

impl Scheduler for WebPage {
    type Task = WebTask;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> WebTask {
        WebTask(Timeout::new(delay_ms, task))
    }
}

impl Page for WebPage {
    type Element = WebElement;
    type Observer = WebObserver;

    fn query(&self, selector: &str) -> Option<WebElement> {
        self.document.query_selector(selector).ok().flatten().map(WebElement)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            warn!("Invalid selector: {}", selector);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(|body| WebElement(body.into()))
    }

    fn create_element(&self, tag: &str) -> Result<WebElement, SiteError> {
        Ok(WebElement(self.document.create_element(tag)?))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn open_in_new_context(&self, url: &str) {
        if let Err(e) = self.window.open_with_url_and_target(url, "_blank") {
            warn!("Could not open {}: {}", url, SiteError::from(e));
        }
    }

    fn create_observer(
        &self,
        options: &ObserverOptions,
        callback: IntersectionCallback<WebElement, WebObserver>,
    ) -> Result<WebObserver, SiteError> {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let closure = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<Intersection<WebElement>> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection {
                    target: WebElement(entry.target()),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            callback(&batch, &WebObserver(observer));
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
        closure.forget();
        Ok(WebObserver(observer))
    }

    fn on_click(&self, target: &WebElement, handler: ClickHandler<WebElement>) {
        self.listen(&target.0, "click", click_closure(handler));
    }

    fn on_document_click(&self, handler: ClickHandler<WebElement>) {
        self.listen(&self.document, "click", click_closure(handler));
    }

    fn on_submit(&self, target: &WebElement, handler: SubmitHandler) {
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let submit = Submit::default();
            handler(&submit);
            if submit.default_prevented() {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        self.listen(&target.0, "submit", callback);
    }

    fn on_scroll(&self, handler: Handler) {
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| handler())
            as Box<dyn FnMut(web_sys::Event)>);
        self.listen(&self.window, "scroll", callback);
    }
}

pub struct WebObserver(IntersectionObserver);

impl ViewportObserver<WebElement> for WebObserver {
    fn observe(&self, element: &WebElement) {
        self.0.observe(&element.0);
    }

    fn unobserve(&self, element: &WebElement) {
        self.0.unobserve(&element.0);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl Element for WebElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn text(&self) -> Option<String> {
        self.0.text_content()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.html() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn contains(&self, other: &Self) -> bool {
        let node: &web_sys::Node = &other.0;
        self.0.contains(Some(node))
    }

    fn offset_top(&self) -> f64 {
        self.html().map_or(0.0, |html| html.offset_top() as f64)
    }

    fn offset_height(&self) -> f64 {
        self.html().map_or(0.0, |html| html.offset_height() as f64)
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn append_child(&self, child: &Self) {
        let _ = self.0.append_child(&child.0);
    }

    fn remove(&self) {
        self.0.remove();
    }
}
