//! Style root abstraction
//!
//! The style root is where resolved variables land: the document element in
//! a browser, or any host scope whose custom properties cascade to the
//! components below it. The controller writes to it through this trait only.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use crate::listeners::lock;

/// Marker attribute carrying the resolved light/dark scheme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Marker attribute carrying the variant id
pub const VARIANT_ATTRIBUTE: &str = "data-variant";

/// Writable style scope
pub trait StyleRoot: Send {
    /// Set a string attribute (e.g. `data-theme`)
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Set a custom property; `name` includes the leading `--`
    fn set_property(&mut self, name: &str, value: &str);
}

impl<R: StyleRoot + ?Sized> StyleRoot for Box<R> {
    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

/// Lets a host or test keep a handle on a root the controller writes to
impl<R: StyleRoot> StyleRoot for Arc<Mutex<R>> {
    fn set_attribute(&mut self, name: &str, value: &str) {
        lock(self).set_attribute(name, value);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        lock(self).set_property(name, value);
    }
}

/// In-memory style root.
///
/// Keeps attributes and properties in first-write order and counts writes,
/// which makes it usable both as a headless host and as a test double.
#[derive(Clone, Debug, Default)]
pub struct MemoryStyleRoot {
    attributes: IndexMap<String, String, FxBuildHasher>,
    properties: IndexMap<String, String, FxBuildHasher>,
    writes: usize,
}

impl MemoryStyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap in a shareable handle
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Look up a property by name, with or without the leading `--`
    pub fn property(&self, name: &str) -> Option<&str> {
        if name.starts_with("--") {
            self.properties.get(name).map(String::as_str)
        } else {
            self.properties.get(&format!("--{name}")).map(String::as_str)
        }
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Total attribute and property writes, including repeated values
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Render the current state as a CSS rule.
    ///
    /// The selector pins the marker attributes, e.g.
    /// `:root[data-theme="dark"][data-variant="sepia"]`.
    pub fn to_css(&self) -> String {
        let mut selector = String::from(":root");
        for (name, value) in &self.attributes {
            let _ = write!(selector, "[{name}=\"{value}\"]");
        }
        let mut css = format!("{selector} {{\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleRoot for MemoryStyleRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }
}
