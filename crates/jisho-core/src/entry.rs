use serde::{Deserialize, Deserializer};

/// `null` and a missing key both become the default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One dictionary result as returned by the search API.
///
/// Only the fields used for display are read, everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LookupEntry {
    #[serde(default)]
    pub slug: Option<String>,
    /// Word/reading pairs, most common first
    #[serde(default, deserialize_with = "null_as_default")]
    pub japanese: Vec<WordReading>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WordReading {
    /// Kanji form
    #[serde(default)]
    pub word: Option<String>,
    /// Kana form
    #[serde(default)]
    pub reading: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub english_definitions: Option<Vec<String>>,
}

/// Which script forms the primary word/reading pair carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Headword<'a> {
    KanjiWithReading { word: &'a str, reading: &'a str },
    KanjiOnly { word: &'a str },
    ReadingOnly { reading: &'a str },
}

impl<'a> Headword<'a> {
    /// `None` when the pair has neither a word nor a reading
    pub fn from_pair(pair: &'a WordReading) -> Option<Self> {
        match (pair.word.as_deref(), pair.reading.as_deref()) {
            (Some(word), Some(reading)) => Some(Headword::KanjiWithReading { word, reading }),
            (Some(word), None) => Some(Headword::KanjiOnly { word }),
            (None, Some(reading)) => Some(Headword::ReadingOnly { reading }),
            (None, None) => None,
        }
    }

    /// Headline text, kanji when present
    pub fn title(&self) -> &'a str {
        match self {
            Headword::KanjiWithReading { word, .. } | Headword::KanjiOnly { word } => *word,
            Headword::ReadingOnly { reading } => *reading,
        }
    }
}

impl LookupEntry {
    /// First word/reading pair. Alternate readings are ignored.
    pub fn primary(&self) -> Option<&WordReading> {
        self.japanese.first()
    }

    pub fn headword(&self) -> Option<Headword<'_>> {
        self.primary().and_then(Headword::from_pair)
    }

    /// Every gloss across all senses, in sense order
    pub fn glosses(&self) -> impl Iterator<Item = &str> {
        self.senses
            .iter()
            .filter_map(|sense| sense.english_definitions.as_deref())
            .flatten()
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_entry() {
        let json = r#"{
            "slug": "食べる",
            "is_common": true,
            "tags": ["wanikani5"],
            "jlpt": ["jlpt-n5"],
            "japanese": [
                {"word": "食べる", "reading": "たべる"},
                {"word": "喰べる", "reading": "たべる"}
            ],
            "senses": [
                {"english_definitions": ["to eat"], "parts_of_speech": ["Ichidan verb"], "links": []},
                {"english_definitions": ["to live on (e.g. a salary)"], "parts_of_speech": []}
            ],
            "attribution": {"jmdict": true, "jmnedict": false, "dbpedia": false}
        }"#;

        let entry: LookupEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.slug.as_deref(), Some("食べる"));
        assert_eq!(entry.japanese.len(), 2);
        assert_eq!(
            entry.headword(),
            Some(Headword::KanjiWithReading {
                word: "食べる",
                reading: "たべる"
            })
        );
        assert_eq!(
            entry.glosses().collect::<Vec<_>>(),
            vec!["to eat", "to live on (e.g. a salary)"]
        );
    }

    #[test]
    fn test_headword_variants() {
        let kanji_only = WordReading {
            word: Some("ああ".into()),
            reading: None,
        };
        let kana_only = WordReading {
            word: None,
            reading: Some("ねこ".into()),
        };

        assert_eq!(
            Headword::from_pair(&kanji_only),
            Some(Headword::KanjiOnly { word: "ああ" })
        );
        assert_eq!(
            Headword::from_pair(&kana_only),
            Some(Headword::ReadingOnly { reading: "ねこ" })
        );
        assert_eq!(Headword::from_pair(&WordReading::default()), None);
        assert_eq!(Headword::from_pair(&kana_only).unwrap().title(), "ねこ");
    }

    #[test]
    fn test_null_and_unknown_fields_tolerated() {
        let json = r#"{
            "slug": null,
            "is_common": null,
            "jlpt": null,
            "tags": null,
            "japanese": [{"word": "猫", "reading": "ねこ"}],
            "senses": [
                {"english_definitions": ["cat"], "parts_of_speech": null, "links": null},
                {"english_definitions": null, "restrictions": [1, 2]}
            ]
        }"#;

        let entry: LookupEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.slug, None);
        assert_eq!(entry.headword().unwrap().title(), "猫");
        assert_eq!(entry.glosses().collect::<Vec<_>>(), vec!["cat"]);

        let entry: LookupEntry =
            serde_json::from_str(r#"{"japanese": null, "senses": null}"#).unwrap();
        assert!(entry.japanese.is_empty());
        assert!(entry.senses.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let entry: LookupEntry = serde_json::from_str("{}").unwrap();
        assert!(entry.primary().is_none());
        assert!(entry.headword().is_none());
        assert_eq!(entry.glosses().count(), 0);
    }
}
