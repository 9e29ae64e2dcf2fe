use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::dom::{Click, Element, Page};

pub const ACTIVE_CLASS: &str = "is-active";
pub const BODY_OPEN_CLASS: &str = "menu-open";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Toggle,
    Close,
}

impl MenuState {
    pub fn apply(self, command: MenuCommand) -> MenuState {
        match command {
            MenuCommand::Toggle => MenuState { open: !self.open },
            MenuCommand::Close => MenuState { open: false },
        }
    }
}

/// Hamburger menu: the panel, its toggle and the body change together.
pub struct MobileMenu<P: Page> {
    panel: Option<P::Element>,
    toggle: Option<P::Element>,
    body: Option<P::Element>,
    state: Cell<MenuState>,
}

impl<P: Page> MobileMenu<P> {
    pub fn new(page: &P) -> Self {
        let panel = page.query(".nav-menu");
        let open = panel
            .as_ref()
            .map_or(false, |panel| panel.has_class(ACTIVE_CLASS));
        Self {
            panel,
            toggle: page.query(".menu-toggle"),
            body: page.body(),
            state: Cell::new(MenuState { open }),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// Applies `command` and renders the resulting state in one step.
    pub fn dispatch(&self, command: MenuCommand) {
        let next = self.state.get().apply(command);
        self.state.set(next);

        let render = |element: &Option<P::Element>, class: &str| {
            if let Some(element) = element {
                if next.open {
                    element.add_class(class);
                } else {
                    element.remove_class(class);
                }
            }
        };
        render(&self.panel, ACTIVE_CLASS);
        render(&self.toggle, ACTIVE_CLASS);
        render(&self.body, BODY_OPEN_CLASS);
    }

    pub fn toggle(&self) {
        self.dispatch(MenuCommand::Toggle);
    }

    pub fn close(&self) {
        self.dispatch(MenuCommand::Close);
    }

    /// Closes the menu when a click lands outside both the panel and its toggle.
    pub fn on_document_click(&self, click: &Click<P::Element>) {
        let Some(panel) = &self.panel else {
            return;
        };
        if !self.state.get().open {
            return;
        }

        let contains = |element: &P::Element| {
            click
                .target
                .as_ref()
                .map_or(false, |target| element.contains(target))
        };
        let in_toggle = self.toggle.as_ref().map_or(false, |toggle| contains(toggle));
        if !contains(panel) && !in_toggle {
            self.close();
        }
    }

    /// Wires the toggle button and the outside-click listener.
    pub fn init(self, page: &P) -> Rc<Self> {
        let menu = Rc::new(self);

        match &menu.toggle {
            Some(toggle) => {
                let menu = menu.clone();
                page.on_click(toggle, Rc::new(move |_: &Click<P::Element>| menu.toggle()));
            }
            None => debug!("No .menu-toggle on page"),
        }

        let outside = menu.clone();
        page.on_document_click(Rc::new(move |click: &Click<P::Element>| {
            outside.on_document_click(click)
        }));
        menu
    }
}
