use serde::ser::SerializeStruct;
use serde::{ser, Serialize};

/// One visual unit of a message. Slack renders blocks top to bottom in the
/// order they're given.
///
/// <https://api.slack.com/reference/block-kit/blocks>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: Option<Text>,
}

/// The subset of Slack's block types we produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    Section,
}

/// A string tagged with how Slack should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub format: TextFormat,
    /// Passed through untouched. Any escaping is Slack's business.
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    /// "mrkdwn" is Slack's alternative to Markdown.
    ///
    /// <https://api.slack.com/reference/surfaces/formatting#basics>
    Markdown,
}

impl Block {
    pub fn header<T: Into<String>>(x: T) -> Self {
        Block {
            kind: BlockKind::Header,
            text: Some(Text::plain(x)),
        }
    }

    pub fn section<T: Into<String>>(x: T) -> Self {
        Block {
            kind: BlockKind::Section,
            text: Some(Text::markdown(x)),
        }
    }
}

impl Text {
    pub fn plain<T: Into<String>>(x: T) -> Self {
        Text {
            format: TextFormat::Plain,
            content: x.into(),
        }
    }

    pub fn markdown<T: Into<String>>(x: T) -> Self {
        Text {
            format: TextFormat::Markdown,
            content: x.into(),
        }
    }
}

impl BlockKind {
    fn wire_name(&self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Section => "section",
        }
    }
}

impl TextFormat {
    fn wire_name(&self) -> &'static str {
        match self {
            TextFormat::Plain => "plain_text",
            TextFormat::Markdown => "mrkdwn",
        }
    }
}

#[derive(Serialize)]
struct RawText<'a> {
    #[serde(rename = "type")]
    typ: &'static str,
    text: &'a str,
}

impl ser::Serialize for Text {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        RawText {
            typ: self.format.wire_name(),
            text: &self.content,
        }
        .serialize(serializer)
    }
}

impl ser::Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let len = if self.text.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("Block", len)?;

        state.serialize_field("type", self.kind.wire_name())?;

        match &self.text {
            Some(x) => state.serialize_field("text", x)?,
            None => state.skip_field("text")?,
        };

        state.end()
    }
}
