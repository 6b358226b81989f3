use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The five questionnaire categories.
///
/// Declaration order is the questionnaire order; `PreferenceSet` iterates in
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceCategory {
    Music,
    Movies,
    Food,
    Travel,
    Fashion,
}

impl PreferenceCategory {
    pub const ALL: [PreferenceCategory; 5] = [
        PreferenceCategory::Music,
        PreferenceCategory::Movies,
        PreferenceCategory::Food,
        PreferenceCategory::Travel,
        PreferenceCategory::Fashion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceCategory::Music => "music",
            PreferenceCategory::Movies => "movies",
            PreferenceCategory::Food => "food",
            PreferenceCategory::Travel => "travel",
            PreferenceCategory::Fashion => "fashion",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PreferenceCategory::Music => "Music",
            PreferenceCategory::Movies => "Movies & TV",
            PreferenceCategory::Food => "Food & Dining",
            PreferenceCategory::Travel => "Travel & Places",
            PreferenceCategory::Fashion => "Fashion & Style",
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            PreferenceCategory::Music => "What music do you love?",
            PreferenceCategory::Movies => "What genres do you enjoy watching?",
            PreferenceCategory::Food => "What cuisines and dining styles do you prefer?",
            PreferenceCategory::Travel => "What kind of travel experiences appeal to you?",
            PreferenceCategory::Fashion => "What styles and brands resonate with you?",
        }
    }

    /// Tags offered by the onboarding questionnaire.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            PreferenceCategory::Music => &[
                "Jazz", "Rock", "Hip-Hop", "Classical", "Electronic", "Indie", "Pop", "Blues",
                "Folk", "Reggae", "Country", "R&B", "Punk", "Metal", "Alternative",
            ],
            PreferenceCategory::Movies => &[
                "Drama", "Comedy", "Action", "Thriller", "Sci-Fi", "Horror", "Romance",
                "Documentary", "Animation", "Mystery", "Fantasy", "Crime", "Adventure",
                "Historical", "Indie Films",
            ],
            PreferenceCategory::Food => &[
                "Italian", "Japanese", "Mexican", "Indian", "French", "Thai", "Mediterranean",
                "Chinese", "Korean", "Vietnamese", "American", "Fine Dining", "Street Food",
                "Vegan", "Comfort Food",
            ],
            PreferenceCategory::Travel => &[
                "Beach Destinations", "Mountain Adventures", "City Exploration",
                "Cultural Sites", "Museums", "National Parks", "Food Tours", "Nightlife",
                "Shopping", "Art Galleries", "Historical Sites", "Off-the-beaten-path",
                "Luxury Resorts", "Backpacking", "Road Trips",
            ],
            PreferenceCategory::Fashion => &[
                "Minimalist", "Bohemian", "Classic", "Streetwear", "Vintage", "Luxury",
                "Casual", "Formal", "Artistic", "Athletic", "Sustainable", "Designer", "Thrift",
                "Trendy", "Timeless",
            ],
        }
    }

    /// Qloo entity type queried for this category.
    pub fn entity_type(&self) -> &'static str {
        match self {
            PreferenceCategory::Music => "urn:entity:artist",
            PreferenceCategory::Movies => "urn:entity:movie",
            PreferenceCategory::Food => "urn:entity:place",
            PreferenceCategory::Travel => "urn:entity:destination",
            PreferenceCategory::Fashion => "urn:entity:brand",
        }
    }
}

impl fmt::Display for PreferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "music" => Ok(PreferenceCategory::Music),
            "movies" => Ok(PreferenceCategory::Movies),
            "food" => Ok(PreferenceCategory::Food),
            "travel" => Ok(PreferenceCategory::Travel),
            "fashion" => Ok(PreferenceCategory::Fashion),
            other => Err(format!("Unknown preference category: {}", other)),
        }
    }
}

/// A user's questionnaire answers: category -> selected tags.
///
/// A category is present only with at least one non-blank tag. Built once
/// per onboarding session and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSet {
    entries: BTreeMap<PreferenceCategory, Vec<String>>,
}

impl PreferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Blank tags are dropped; an empty result leaves
    /// the category absent.
    pub fn with<I, S>(mut self, category: PreferenceCategory, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty() {
            self.entries.remove(&category);
        } else {
            self.entries.insert(category, values);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, category: PreferenceCategory) -> Option<&[String]> {
        self.entries.get(&category).map(Vec::as_slice)
    }

    /// First tag selected for a category.
    pub fn first_value(&self, category: PreferenceCategory) -> Option<&str> {
        self.get(category)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Categories present, in questionnaire order.
    pub fn categories(&self) -> impl Iterator<Item = PreferenceCategory> + '_ {
        self.entries.keys().copied()
    }

    pub fn first_category(&self) -> Option<PreferenceCategory> {
        self.categories().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PreferenceCategory, &[String])> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl Serialize for PreferenceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Lenient: unknown keys and non-string tags are ignored, so a stale client
/// sending an extra questionnaire step still gets recommendations. Keys that
/// differ only in case name the same category and their tags are merged.
impl<'de> Deserialize<'de> for PreferenceSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut merged: BTreeMap<PreferenceCategory, Vec<String>> = BTreeMap::new();
        for (key, value) in raw {
            let Ok(category) = key.parse::<PreferenceCategory>() else {
                tracing::debug!(category = %key, "Ignoring unknown preference category");
                continue;
            };
            let values: Vec<String> = match value {
                serde_json::Value::Array(items) => items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                serde_json::Value::String(single) => vec![single],
                _ => Vec::new(),
            };

            let tags = merged.entry(category).or_default();
            for value in values {
                let value = value.trim();
                if !value.is_empty() && !tags.iter().any(|tag| tag == value) {
                    tags.push(value.to_string());
                }
            }
        }

        Ok(merged
            .into_iter()
            .fold(PreferenceSet::new(), |set, (category, tags)| set.with(category, tags)))
    }
}
