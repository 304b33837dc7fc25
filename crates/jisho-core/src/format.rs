use crate::entry::{Headword, LookupEntry};
use crate::types::{DisplayItem, Icon};

/// Separator between English definitions
pub const SEP_GLOSS: &str = ", ";
/// Separator between kana reading and definitions
pub const SEP_BAR: &str = " | ";

/// All glosses of an entry joined into one line
pub fn combine_glosses(entry: &LookupEntry) -> String {
    entry.glosses().collect::<Vec<_>>().join(SEP_GLOSS)
}

/// Map one dictionary entry to a result row.
///
/// Kanji is preferred as the title. Returns `None` when the first
/// word/reading pair is missing or carries neither form.
pub fn to_display_item(entry: &LookupEntry) -> Option<DisplayItem> {
    let headword = entry.headword()?;
    let glosses = combine_glosses(entry);

    let subtitle = match headword {
        Headword::KanjiWithReading { reading, .. } => format!("{reading}{SEP_BAR}{glosses}"),
        Headword::KanjiOnly { .. } | Headword::ReadingOnly { .. } => glosses,
    };

    let title = headword.title();

    Some(
        DisplayItem::new(title, Icon::Web)
            .subtitle(subtitle)
            .arg(title)
            .valid(true)
            .large_type(title),
    )
}
