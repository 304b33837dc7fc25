use std::io::Write;

use serde::Serialize;

use crate::types::DisplayItem;

/// Receives the final result list for the launcher
pub trait FeedbackSink {
    fn send(&mut self, items: &[DisplayItem]) -> Result<(), FeedbackError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("Failed to serialize feedback: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write feedback: {0}")]
    Io(#[from] std::io::Error),
}

/// Alfred script filter JSON document
#[derive(Debug, Serialize)]
pub struct Feedback<'a> {
    items: Vec<FeedbackItem<'a>>,
}

#[derive(Debug, Serialize)]
struct FeedbackItem<'a> {
    title: &'a str,
    subtitle: &'a str,
    arg: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    autocomplete: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<FeedbackText<'a>>,
    icon: FeedbackIcon,
}

#[derive(Debug, Serialize)]
struct FeedbackText<'a> {
    largetype: &'a str,
}

#[derive(Debug, Serialize)]
struct FeedbackIcon {
    path: String,
}

impl<'a> Feedback<'a> {
    pub fn new(items: &'a [DisplayItem]) -> Self {
        let items = items
            .iter()
            .map(|item| FeedbackItem {
                title: &item.title,
                subtitle: &item.subtitle,
                arg: &item.arg,
                valid: item.valid,
                autocomplete: item.autocomplete.as_deref(),
                text: item
                    .large_type
                    .as_deref()
                    .map(|largetype| FeedbackText { largetype }),
                icon: FeedbackIcon {
                    path: item.icon.path(),
                },
            })
            .collect();

        Self { items }
    }

    pub fn to_json(&self) -> Result<String, FeedbackError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Writes feedback JSON to any writer, normally stdout
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FeedbackSink for WriterSink<W> {
    fn send(&mut self, items: &[DisplayItem]) -> Result<(), FeedbackError> {
        serde_json::to_writer(&mut self.writer, &Feedback::new(items))?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every batch it is sent
#[derive(Debug, Default)]
pub struct MemorySink {
    pub sent: Vec<Vec<DisplayItem>>,
}

impl FeedbackSink for MemorySink {
    fn send(&mut self, items: &[DisplayItem]) -> Result<(), FeedbackError> {
        self.sent.push(items.to_vec());
        Ok(())
    }
}
