//! Accessible accordion widget for the browser DOM.
//!
//! An [`Accordion`] owns a list of trigger/panel element pairs and enforces
//! single-open-at-a-time disclosure: clicking a trigger opens its panel and
//! closes every other one, clicking the trigger of the open panel collapses
//! it again. Opening animates via a `max-height` style the host stylesheet
//! can transition; ARIA attributes are kept in sync on every change.

pub mod error;
pub mod options;
pub mod widget;

pub use error::ConfigurationError;
pub use options::{AccordionOptions, ItemOptions};
pub use widget::{Accordion, Item};
