//! Immutable style mappings attached to visual nodes.
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered CSS property -> value mapping.
///
/// Built once through [`StyleMap::with`] and only read afterwards. Entries keep
/// their insertion order so the generated inline CSS is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: IndexMap<&'static str, &'static str>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with `property` set. An existing property keeps its slot.
    pub fn with(mut self, property: &'static str, value: &'static str) -> Self {
        self.entries.insert(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.entries.get(property).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inline CSS for a `style` attribute, e.g. `"margin: 0; padding: 0;"`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_has_no_css() {
        let style = StyleMap::new();
        assert!(style.is_empty());
        assert_eq!(style.to_css(), "");
    }

    #[test]
    fn css_follows_insertion_order() {
        let style = StyleMap::new()
            .with("margin", "0")
            .with("padding", "0")
            .with("color", "#fff");
        assert_eq!(style.to_css(), "margin: 0; padding: 0; color: #fff;");
        assert_eq!(style.len(), 3);
    }

    #[test]
    fn overriding_a_property_keeps_its_position() {
        let style = StyleMap::new()
            .with("color", "red")
            .with("margin", "0")
            .with("color", "blue");
        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.len(), 2);
        assert_eq!(style.to_css(), "color: blue; margin: 0;");
    }

    #[test]
    fn serializes_as_ordered_object() {
        let style = StyleMap::new().with("z-index", "1").with("align-items", "center");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"z-index":"1","align-items":"center"}"#);
    }
}
