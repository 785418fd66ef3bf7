use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::{
    openapi::{
        schema::{ObjectBuilder, Schema, SchemaType, Type},
        RefOr,
    },
    PartialSchema, ToSchema,
};

/// A single dated training session with per-person attendance records.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    /// Display identifier of the session, `"<Weekday>, DD.MM.YYYY"`.
    pub date: String,
    /// Attendance icon per non-trainer player, keyed by player name.
    #[serde(default)]
    pub participants: BTreeMap<String, AttendanceIcon>,
    /// Commitment per trainer, keyed by trainer name.
    #[serde(default)]
    pub trainer_status: BTreeMap<String, TrainerStatus>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited: Option<LastEdited>,
}

impl Training {
    /// Attendance icon recorded for a player, `Unknown` when the player has
    /// no entry in this session.
    pub fn icon_for(&self, player_name: &str) -> AttendanceIcon {
        self.participants
            .get(player_name)
            .copied()
            .unwrap_or_default()
    }
}

/// Audit stamp of the most recent edit, `at` in `DD.MM.YYYY HH:MM` format.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
pub struct LastEdited {
    pub by: String,
    pub at: String,
}

/// Participation status of a non-trainer player in a training session.
///
/// On the wire each variant is a single icon. The vocabulary is closed: any
/// icon outside {✅, ❌, ⏳} decodes to `Unknown` and re-encodes as ❓, so an
/// unrecognized value can never pass for an attendance.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AttendanceIcon {
    Attending,
    Absent,
    NoResponse,
    #[default]
    Unknown,
}

impl AttendanceIcon {
    /// Decodes a wire icon. Total: unrecognized input yields `Unknown`.
    pub fn from_icon(raw: &str) -> Self {
        match raw {
            "✅" => Self::Attending,
            "❌" => Self::Absent,
            "⏳" => Self::NoResponse,
            _ => Self::Unknown,
        }
    }

    pub fn as_icon(self) -> &'static str {
        match self {
            Self::Attending => "✅",
            Self::Absent => "❌",
            Self::NoResponse => "⏳",
            Self::Unknown => "❓",
        }
    }

    /// Status phrase shown in attendance reports.
    ///
    /// `Unknown` means the player never responded to an agreed session, hence
    /// the default phrase, never the attending one.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Attending => "TEILNEHMEND",
            Self::Absent => "ABGEMELDET",
            Self::NoResponse => "KEINE RÜCKMELDUNG",
            Self::Unknown => "ZUGESAGT, ABER NICHT ERSCHIENEN",
        }
    }
}

impl Serialize for AttendanceIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_icon())
    }
}

impl<'de> Deserialize<'de> for AttendanceIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Cow::<str>::deserialize(deserializer)?;
        Ok(Self::from_icon(&raw))
    }
}

impl PartialSchema for AttendanceIcon {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(SchemaType::Type(Type::String))
            .enum_values(Some(["✅", "❌", "⏳", "❓"]))
            .into()
    }
}

impl ToSchema for AttendanceIcon {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("AttendanceIcon")
    }
}

/// Commitment of a trainer to a training session.
///
/// Two-valued on the wire ("Zugesagt"/"Abgemeldet"); anything else, including
/// a missing entry, counts as `Abgemeldet`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TrainerStatus {
    Zugesagt,
    #[default]
    Abgemeldet,
}

impl TrainerStatus {
    pub fn from_text(raw: &str) -> Self {
        match raw {
            "Zugesagt" => Self::Zugesagt,
            _ => Self::Abgemeldet,
        }
    }

    pub fn as_text(self) -> &'static str {
        match self {
            Self::Zugesagt => "Zugesagt",
            Self::Abgemeldet => "Abgemeldet",
        }
    }
}

impl Serialize for TrainerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_text())
    }
}

impl<'de> Deserialize<'de> for TrainerStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Cow::<str>::deserialize(deserializer)?;
        Ok(Self::from_text(&raw))
    }
}

impl PartialSchema for TrainerStatus {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(SchemaType::Type(Type::String))
            .enum_values(Some(["Zugesagt", "Abgemeldet"]))
            .into()
    }
}

impl ToSchema for TrainerStatus {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("TrainerStatus")
    }
}
