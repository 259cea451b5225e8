//! Boss record schema.
//!
//! Dataset rows arrive as loose `(header, value)` pairs. They are folded into a
//! [`BossRecord`] exactly once at load time: known headers land in a fixed slot
//! per [`Field`], unknown headers are dropped and missing fields default to the
//! empty string. Comparison code never performs string-keyed lookups.

use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::RecordError;

/// Header of the identifying column.
pub const NAME_HEADER: &str = "Name";

/// Header of the optional image column.
pub const IMAGE_HEADER: &str = "Image";

/// A field that takes part in guess comparison.
///
/// Declaration order is the order in which verdicts are reported.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Field {
    Type,
    #[strum(serialize = "First Encounter")]
    FirstEncounter,
    Reward,
    Attacks,
    #[strum(serialize = "Ascend HP")]
    AscendHp,
    HasPhases,
    CanStagger,
}

/// How the raw text of a field is interpreted during comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Compared by exact string equality.
    Scalar,
    /// Truthy tokens canonicalized to `Yes`/`No`.
    Boolean,
    /// Integer with a directional hint.
    Numeric,
    /// Comma separated tokens with partial credit.
    List,
}

impl Field {
    /// Column header as it appears in the dataset.
    pub fn header(self) -> &'static str {
        self.into()
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Type | Self::FirstEncounter => FieldKind::Scalar,
            Self::HasPhases | Self::CanStagger => FieldKind::Boolean,
            Self::AscendHp => FieldKind::Numeric,
            Self::Reward | Self::Attacks => FieldKind::List,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// All compared fields in report order.
    pub fn all() -> impl Iterator<Item = Field> {
        Self::iter()
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.header())
    }
}

/// Immutable dataset entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossRecord {
    name: String,
    image: Option<String>,
    fields: [String; Field::COUNT],
}

impl BossRecord {
    /// Starts a record with the given name and every field empty.
    pub fn builder(name: impl Into<String>) -> BossRecordBuilder {
        BossRecordBuilder {
            name: name.into(),
            image: None,
            fields: Default::default(),
        }
    }

    /// Folds `(header, value)` pairs into a record.
    ///
    /// Unknown headers are ignored and absent fields stay empty. The only
    /// hard requirement is a non-blank `Name`.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut name = None;
        let mut builder = Self::builder(String::new());

        for (header, value) in pairs {
            let header = header.as_ref().trim();
            if header == NAME_HEADER {
                name = Some(value.into());
            } else if header == IMAGE_HEADER {
                builder = builder.image(value);
            } else if let Ok(field) = header.parse::<Field>() {
                builder = builder.field(field, value);
            }
        }

        let name = name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(RecordError::MissingName);
        }
        builder.name = name.trim().to_string();
        Ok(builder.build())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Raw text of a compared field.
    pub fn get(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// Case-insensitive name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Builder for [`BossRecord`], used by loaders and tests.
#[derive(Clone, Debug)]
pub struct BossRecordBuilder {
    name: String,
    image: Option<String>,
    fields: [String; Field::COUNT],
}

impl BossRecordBuilder {
    #[must_use]
    pub fn field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.fields[field.index()] = value.into();
        self
    }

    /// Sets the image reference; blank values mean "no image".
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        self.image = if image.trim().is_empty() {
            None
        } else {
            Some(image.trim().to_string())
        };
        self
    }

    pub fn build(self) -> BossRecord {
        BossRecord {
            name: self.name,
            image: self.image,
            fields: self.fields,
        }
    }
}
