use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, Node};

use crate::error::ConfigurationError;
use crate::options::{AccordionOptions, ItemCallback, LifecycleCallback};

/// One disclosure unit owned by the widget.
///
/// State lives in a [`Cell`] so item callbacks may safely call back into the
/// widget's public methods while a transition is in flight.
pub struct Item {
    trigger: HtmlElement,
    panel: HtmlElement,
    is_opened: Cell<bool>,
    open_callback: Option<ItemCallback>,
    close_callback: Option<ItemCallback>,
}

impl Item {
    pub fn trigger(&self) -> &HtmlElement {
        &self.trigger
    }

    pub fn panel(&self) -> &HtmlElement {
        &self.panel
    }

    pub fn is_opened(&self) -> bool {
        self.is_opened.get()
    }
}

struct Inner {
    items: Vec<Item>,
    initial_index: Option<usize>,
    opened_css_class: String,
    active_css_class: String,
    init_callback: Option<LifecycleCallback>,
    destroy_callback: Option<LifecycleCallback>,
    has_opened_item: Cell<bool>,
    is_initialized: Cell<bool>,
    click_handler: RefCell<Option<Closure<dyn FnMut(Event)>>>,
}

/// Accordion widget enforcing single-open-at-a-time disclosure over a list
/// of trigger/panel pairs.
///
/// All methods take `&self` and run synchronously on the calling thread;
/// cloning yields another handle to the same widget instance.
#[derive(Clone)]
pub struct Accordion {
    inner: Rc<Inner>,
}

impl Accordion {
    /// Validates the configuration and builds the widget. The DOM is not
    /// touched until [`init`](Self::init) is called.
    pub fn new(options: AccordionOptions) -> Result<Self, ConfigurationError> {
        if options.items.is_empty() {
            return Err(ConfigurationError::NoItems);
        }
        let mut items = Vec::with_capacity(options.items.len());
        for (index, item) in options.items.into_iter().enumerate() {
            let trigger = item
                .trigger
                .dyn_into::<HtmlElement>()
                .map_err(|_| ConfigurationError::InvalidTrigger { index })?;
            let panel = item
                .panel
                .dyn_into::<HtmlElement>()
                .map_err(|_| ConfigurationError::InvalidPanel { index })?;
            items.push(Item {
                trigger,
                panel,
                is_opened: Cell::new(false),
                open_callback: item.open_callback,
                close_callback: item.close_callback,
            });
        }
        Ok(Self {
            inner: Rc::new(Inner {
                items,
                initial_index: options.initial_index,
                opened_css_class: options.opened_css_class,
                active_css_class: options.active_css_class,
                init_callback: options.init_callback,
                destroy_callback: options.destroy_callback,
                has_opened_item: Cell::new(false),
                is_initialized: Cell::new(false),
                click_handler: RefCell::new(None),
            }),
        })
    }

    /// Attaches click listeners, sets the collapsed ARIA state on every
    /// item and opens `initial_index` when configured. No-op when already
    /// initialized.
    pub fn init(&self) {
        if self.inner.is_initialized.get() {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let handler = Closure::wrap(Box::new(move |event: Event| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_activation(&event);
            }
        }) as Box<dyn FnMut(Event)>);
        for (index, item) in self.inner.items.iter().enumerate() {
            let _ = item
                .trigger
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
            let _ = item.trigger.set_attribute("aria-expanded", "false");
            let _ = item.panel.set_attribute("aria-hidden", "true");
            item.is_opened.set(false);
            if self.inner.initial_index == Some(index) {
                self.inner.open_item(item);
            }
        }
        *self.inner.click_handler.borrow_mut() = Some(handler);
        self.inner.is_initialized.set(true);
        log::debug!("accordion initialized with {} items", self.inner.items.len());
        if let Some(callback) = &self.inner.init_callback {
            callback();
        }
    }

    /// Opens the item at `index`. Already-open items and out-of-range
    /// indices are no-ops. Does not close other items; mutual exclusion is
    /// the activation handler's job.
    pub fn open(&self, index: usize) {
        match self.inner.items.get(index) {
            Some(item) => self.inner.open_item(item),
            None => log::warn!("accordion open: no item at index {index}"),
        }
    }

    /// Closes the item at `index`. Already-closed items and out-of-range
    /// indices are no-ops.
    pub fn close(&self, index: usize) {
        match self.inner.items.get(index) {
            Some(item) => self.inner.close_item(item),
            None => log::warn!("accordion close: no item at index {index}"),
        }
    }

    /// Remeasures every opened panel and reapplies its `max-height`. Call
    /// after content or viewport changes that resize an open panel.
    pub fn recalc_height(&self) {
        for item in &self.inner.items {
            if item.is_opened.get() {
                let _ = item
                    .panel
                    .style()
                    .set_property("max-height", &measured_height(&item.panel));
            }
        }
    }

    /// Closes every item, detaches the click listeners and removes the
    /// ARIA attributes added by [`init`](Self::init). No-op when not
    /// initialized.
    pub fn destroy(&self) {
        if !self.inner.is_initialized.get() {
            return;
        }
        self.inner.close_all();
        if let Some(handler) = self.inner.click_handler.borrow_mut().take() {
            for item in &self.inner.items {
                let _ = item
                    .trigger
                    .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
                let _ = item.trigger.remove_attribute("aria-expanded");
                let _ = item.panel.remove_attribute("aria-hidden");
            }
        }
        self.inner.has_opened_item.set(false);
        self.inner.is_initialized.set(false);
        log::debug!("accordion destroyed");
        if let Some(callback) = &self.inner.destroy_callback {
            callback();
        }
    }

    /// True while any item is opened.
    pub fn has_opened_item(&self) -> bool {
        self.inner.has_opened_item.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_initialized.get()
    }

    /// Number of items; construction guarantees at least one.
    pub fn len(&self) -> usize {
        self.inner.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.is_empty()
    }

    /// Open state of the item at `index`; false when out of range.
    pub fn is_item_opened(&self, index: usize) -> bool {
        self.inner
            .items
            .get(index)
            .is_some_and(|item| item.is_opened.get())
    }
}

impl Inner {
    /// Mutation order is part of the contract: classes, then ARIA, then
    /// the height style, then the state flag, then the callback.
    fn open_item(&self, item: &Item) {
        if item.is_opened.get() {
            return;
        }
        let _ = item.trigger.class_list().add_1(&self.active_css_class);
        let _ = item.trigger.set_attribute("aria-expanded", "true");
        let _ = item.panel.class_list().add_1(&self.opened_css_class);
        let _ = item.panel.set_attribute("aria-hidden", "false");
        let _ = item
            .panel
            .style()
            .set_property("max-height", &measured_height(&item.panel));
        item.is_opened.set(true);
        self.has_opened_item.set(true);
        if let Some(callback) = &item.open_callback {
            callback(item);
        }
    }

    fn close_item(&self, item: &Item) {
        if !item.is_opened.get() {
            return;
        }
        let _ = item.trigger.class_list().remove_1(&self.active_css_class);
        let _ = item.trigger.set_attribute("aria-expanded", "false");
        let _ = item.panel.class_list().remove_1(&self.opened_css_class);
        let _ = item.panel.set_attribute("aria-hidden", "true");
        let _ = item.panel.style().remove_property("max-height");
        item.is_opened.set(false);
        self.has_opened_item
            .set(self.items.iter().any(|other| other.is_opened.get()));
        if let Some(callback) = &item.close_callback {
            callback(item);
        }
    }

    fn close_all(&self) {
        for item in &self.items {
            self.close_item(item);
        }
    }

    /// A click on an open item's trigger closes it; on a closed item's
    /// trigger it closes everything else first, keeping at most one item
    /// open. Clicks outside every trigger are ignored.
    fn handle_activation(&self, event: &Event) {
        let Some(target) = event.target() else {
            return;
        };
        let target: Node = target.unchecked_into();
        for item in &self.items {
            if item.trigger.contains(Some(&target)) {
                if item.is_opened.get() {
                    self.close_item(item);
                } else {
                    self.close_all();
                    self.open_item(item);
                }
                break;
            }
        }
    }
}

/// Natural content height of a panel as a `max-height` style value. Uses
/// the scroll extent, which is never smaller than the rendered content.
fn measured_height(panel: &HtmlElement) -> String {
    format!("{}px", panel.scroll_height())
}
