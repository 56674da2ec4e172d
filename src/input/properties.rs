//! Property key listing across features

use std::collections::BTreeSet;

use geojson::JsonObject;

/// Collects the union of property names over a set of features
#[derive(Debug, Default)]
pub struct PropertyInspector {
    keys: BTreeSet<String>,
}

impl PropertyInspector {
    /// Create an inspector with no keys recorded
    pub fn new() -> Self {
        PropertyInspector::default()
    }

    /// Record the keys of one feature's property object
    pub fn add(&mut self, properties: &JsonObject) {
        self.keys.extend(properties.keys().cloned());
    }

    /// Distinct keys seen so far, sorted ascending
    pub fn keys(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }

    /// Format the key list the way the property tool prints it
    pub fn report(&self) -> String {
        let mut out = String::from("Available properties:\n");
        for key in &self.keys {
            out.push_str("  - ");
            out.push_str(key);
            out.push('\n');
        }
        out
    }
}

/// Sorted union of property keys across `features`
///
/// An empty input yields an empty list.
pub fn list_properties<'a, I>(features: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a JsonObject>,
{
    let mut inspector = PropertyInspector::new();
    for properties in features {
        inspector.add(properties);
    }
    inspector.keys()
}
