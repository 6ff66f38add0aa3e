use std::{collections::BTreeMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, MapAccess, SeqAccess, Visitor},
};

/// Choices offered by a `select` control.
///
/// `Indexed` options are addressed by position, `Keyed` options by an
/// explicit integer value. On the wire they are a JSON array and a JSON
/// object with stringified integer keys respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SelectOptions {
    Indexed(Vec<String>),
    Keyed(BTreeMap<u32, String>),
}

impl SelectOptions {
    pub fn indexed<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Indexed(labels.into_iter().map(Into::into).collect())
    }

    pub fn keyed<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        Self::Keyed(
            entries
                .into_iter()
                .map(|(key, label)| (key, label.into()))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Indexed(labels) => labels.len(),
            Self::Keyed(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Label shown for `value`, or `None` when `value` is not a valid choice.
    #[must_use]
    pub fn label(&self, value: f64) -> Option<&str> {
        let key = integral(value)?;

        match self {
            Self::Indexed(labels) => usize::try_from(key)
                .ok()
                .and_then(|index| labels.get(index))
                .map(String::as_str),
            Self::Keyed(entries) => entries.get(&key).map(String::as_str),
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.label(value).is_some()
    }

    /// `(value, label)` pairs in presentation order.
    pub fn choices(&self) -> Vec<(u32, &str)> {
        match self {
            Self::Indexed(labels) => labels
                .iter()
                .enumerate()
                .filter_map(|(index, label)| {
                    u32::try_from(index).ok().map(|key| (key, label.as_str()))
                })
                .collect(),
            Self::Keyed(entries) => entries
                .iter()
                .map(|(key, label)| (*key, label.as_str()))
                .collect(),
        }
    }
}

fn integral(value: f64) -> Option<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }

    Some(value as u32)
}

struct SelectOptionsVisitor;

impl<'de> Visitor<'de> for SelectOptionsVisitor {
    type Value = SelectOptions;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of labels or a map from integer value to label")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut labels = Vec::new();
        while let Some(label) = seq.next_element::<String>()? {
            labels.push(label);
        }

        Ok(SelectOptions::Indexed(labels))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some((key, label)) = map.next_entry::<String, String>()? {
            let value = key
                .parse::<u32>()
                .ok()
                .filter(|value| value.to_string() == key)
                .ok_or_else(|| {
                    de::Error::invalid_value(
                        de::Unexpected::Str(&key),
                        &"a canonical integer option value",
                    )
                })?;
            if entries.insert(value, label).is_some() {
                return Err(de::Error::custom(format!("duplicate option value {value}")));
            }
        }

        Ok(SelectOptions::Keyed(entries))
    }
}

impl<'de> Deserialize<'de> for SelectOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SelectOptionsVisitor)
    }
}
