use std::rc::Rc;

use web_sys::Element;

use crate::widget::Item;

/// Class added to a panel while its item is opened.
pub const DEFAULT_OPENED_CLASS: &str = "is-opened";

/// Class added to a trigger while its item is opened.
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";

/// Callback invoked with the item that just changed state.
pub type ItemCallback = Rc<dyn Fn(&Item)>;

/// Lifecycle callback, invoked with no arguments.
pub type LifecycleCallback = Rc<dyn Fn()>;

/// One trigger/panel pair handed to [`Accordion::new`].
///
/// Both references are borrowed from the host document; the widget never
/// creates or removes the elements, it only toggles their classes, ARIA
/// attributes and `max-height` style.
///
/// [`Accordion::new`]: crate::Accordion::new
#[derive(Clone)]
pub struct ItemOptions {
    pub trigger: Element,
    pub panel: Element,
    pub open_callback: Option<ItemCallback>,
    pub close_callback: Option<ItemCallback>,
}

impl ItemOptions {
    pub fn new(trigger: Element, panel: Element) -> Self {
        Self {
            trigger,
            panel,
            open_callback: None,
            close_callback: None,
        }
    }

    pub fn with_open_callback(mut self, callback: ItemCallback) -> Self {
        self.open_callback = Some(callback);
        self
    }

    pub fn with_close_callback(mut self, callback: ItemCallback) -> Self {
        self.close_callback = Some(callback);
        self
    }
}

/// Configuration for an [`Accordion`](crate::Accordion), fixed at
/// construction time.
#[derive(Clone)]
pub struct AccordionOptions {
    /// Ordered trigger/panel pairs. Must be non-empty.
    pub items: Vec<ItemOptions>,
    /// Item to auto-open during `init`. Out-of-range values are ignored.
    pub initial_index: Option<usize>,
    /// Class toggled on the panel, defaults to [`DEFAULT_OPENED_CLASS`].
    pub opened_css_class: String,
    /// Class toggled on the trigger, defaults to [`DEFAULT_ACTIVE_CLASS`].
    pub active_css_class: String,
    pub init_callback: Option<LifecycleCallback>,
    pub destroy_callback: Option<LifecycleCallback>,
}

impl AccordionOptions {
    pub fn new(items: Vec<ItemOptions>) -> Self {
        Self {
            items,
            initial_index: None,
            opened_css_class: DEFAULT_OPENED_CLASS.to_string(),
            active_css_class: DEFAULT_ACTIVE_CLASS.to_string(),
            init_callback: None,
            destroy_callback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_class_tokens() {
        let options = AccordionOptions::new(Vec::new());
        assert_eq!(options.opened_css_class, "is-opened");
        assert_eq!(options.active_css_class, "is-active");
        assert!(options.initial_index.is_none());
        assert!(options.init_callback.is_none());
        assert!(options.destroy_callback.is_none());
    }
}
