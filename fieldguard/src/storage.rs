use std::collections::BTreeMap;

use crate::value::Value;

/// Per-instance attribute storage of a record.
///
/// Public attributes are visible through [`Storage::attrs`] alongside any
/// non-descriptor attributes. Fields bound with `use_private_attr` live in a
/// separate shadow map under `_<name>` and never show up there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storage {
    attrs: BTreeMap<String, Value>,
    shadow: BTreeMap<String, Value>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the shadow slot backing the private storage of `public`.
    pub fn private_name(public: &str) -> String {
        format!("_{public}")
    }

    /// Visible attribute map.
    pub fn attrs(&self) -> &BTreeMap<String, Value> {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Stores an attribute directly, bypassing any descriptor.
    pub fn insert_attr(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.attrs.insert(name.into(), value)
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<Value> {
        self.attrs.remove(name)
    }

    pub(crate) fn read(&self, name: &str, private: bool) -> Option<&Value> {
        if private { self.shadow.get(name) } else { self.attrs.get(name) }
    }

    pub(crate) fn write(&mut self, name: &str, private: bool, value: Value) {
        let map = if private { &mut self.shadow } else { &mut self.attrs };
        map.insert(name.to_string(), value);
    }

    /// Number of descriptor and plain attributes held, shadow slots included.
    pub fn len(&self) -> usize {
        self.attrs.len() + self.shadow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.shadow.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_writes_stay_out_of_visible_attrs() {
        let mut storage = Storage::new();
        storage.write("_secret", true, Value::Int(1));
        storage.write("name", false, Value::from("x"));

        assert!(storage.attr("_secret").is_none());
        assert_eq!(storage.read("_secret", true), Some(&Value::Int(1)));
        assert_eq!(storage.attrs().keys().collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn plain_attributes_share_the_visible_map() {
        let mut storage = Storage::new();
        storage.insert_attr("note", Value::from("hello"));
        assert_eq!(storage.read("note", false), Some(&Value::from("hello")));
        assert_eq!(Storage::private_name("note"), "_note");
    }
}
