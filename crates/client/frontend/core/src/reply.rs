//! Transport-neutral reply model.

/// Embed accent colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Purple,
    Blue,
    Green,
    Orange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Structured rich reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    pub image: Option<String>,
    pub color: Color,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
            image: None,
            color,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    #[must_use]
    pub fn image(mut self, image: Option<&str>) -> Self {
        self.image = image.map(str::to_string);
        self
    }
}

/// What the bot sends back for one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Self::Embed(embed)
    }
}
