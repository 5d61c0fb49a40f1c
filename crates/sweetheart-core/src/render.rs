//! Render target capability.
//!
//! Every visual component mutates the page through [`RenderTarget`]
//! rather than touching a concrete document. The UI wraps its reactive
//! element state in it; tests use [`ElementState`] directly.

use std::collections::{BTreeMap, BTreeSet};

/// Axis-aligned box in CSS pixels, viewport-relative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Current inner size of the window in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Minimal surface a page element exposes to behavior code.
pub trait RenderTarget {
    /// Current text content.
    fn text(&self) -> String;

    /// Replace the text content.
    fn set_text(&mut self, text: &str);

    /// Inline style property, if set.
    fn style(&self, property: &str) -> Option<String>;

    /// Set an inline style property.
    fn set_style(&mut self, property: &str, value: &str);

    /// Whether the element carries `class`.
    fn has_class(&self, class: &str) -> bool;

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    /// Flip `class` on or off. Returns whether it is present afterwards.
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Last measured bounding box, `None` before the element is laid out.
    fn bounding_box(&self) -> Option<Rect>;
}

/// In-memory element: text, inline styles, classes and last known layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    text: String,
    styles: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    rect: Option<Rect>,
}

impl ElementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element with initial text content.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Element with an initial class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    /// Record a fresh layout measurement.
    pub fn set_bounding_box(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    /// Inline style serialized for a `style` attribute.
    pub fn style_attr(&self) -> String {
        self.styles
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Classes serialized for a `class` attribute, prefixed by `base`.
    pub fn class_attr(&self, base: &str) -> String {
        let mut out = base.to_string();
        for class in &self.classes {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
        out
    }
}

impl RenderTarget for ElementState {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn style(&self, property: &str) -> Option<String> {
        self.styles.get(property).cloned()
    }

    fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn bounding_box(&self) -> Option<Rect> {
        self.rect
    }
}
