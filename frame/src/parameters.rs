use std::fmt::{
    Display,
    Formatter,
};

use serde::{
    ser::SerializeMap,
    Serialize,
    Serializer,
};
use smallvec::SmallVec;

/// Human-readable frame fields, in declaration order.
///
/// Ordering is part of the contract: entries come back in the order they were
/// first inserted, and replacing a label's value keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parameters(SmallVec<[(&'static str, String); 4]>);

impl Parameters {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &'static str, value: impl Into<String>) {
        let value = value.into();

        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.iter().find(|(l, _)| *l == label).map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(l, v)| (*l, v.as_str()))
    }

    #[inline]
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(l, _)| *l)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Parameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (label, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{label}: {value}")?;
        }

        Ok(())
    }
}

impl Serialize for Parameters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for (label, value) in self.iter() {
            map.serialize_entry(label, value)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut p = Parameters::new();
        p.insert("Zeta", "1");
        p.insert("Alpha", "2");
        p.insert("Mid", "3");
        p.insert("Alpha", "4");

        assert_eq!(p.labels().collect::<Vec<_>>(), ["Zeta", "Alpha", "Mid"]);
        assert_eq!(p.get("Alpha"), Some("4"));
        assert_eq!(p.get("Nope"), None);
        assert_eq!(p.to_string(), "Zeta: 1, Alpha: 4, Mid: 3");
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut p = Parameters::new();
        p.insert("B", "x");
        p.insert("A", "y");

        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"B":"x","A":"y"}"#);
    }
}
