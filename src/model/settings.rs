use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const GROUP_RANGE: RangeInclusive<i64> = 1..=7;
pub const PARTY_RANGE: RangeInclusive<i64> = 1..=6;

pub const FARMING_MODES: [FarmingMode; 2] = [FarmingMode::Quest, FarmingMode::Special];
pub const ITEMS_FOR_QUEST: [&str; 3] = ["Satin Feather", "Zephyr Feather", "Flying Sprout"];
pub const MISSIONS_FOR_QUEST: [&str; 1] = ["test1"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmingMode {
    Quest,
    Special,
}

impl FarmingMode {
    pub fn label(self) -> &'static str {
        match self {
            FarmingMode::Quest => "Quest",
            FarmingMode::Special => "Special",
        }
    }
}

impl fmt::Display for FarmingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* =========================
   Settings record
   ========================= */

/// Everything the bot reads from `settings.json`. Field order here is the
/// order keys are written in: the nine form fields the bot consumes, then
/// `summons`, an extra key so the support summon selection survives restarts.
/// Files written without `summons` still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BotSettings {
    pub current_combat_script_name: String,
    pub current_combat_script: String,

    // "" in the file means no mode chosen yet
    #[serde(with = "farming_mode_field")]
    pub farming_mode: Option<FarmingMode>,

    pub item: Option<String>,
    pub mission: String,
    pub item_amount: u32,

    pub group_number: i64,
    pub party_number: i64,

    pub debug_mode: bool,

    /// Selected support summons, in selection order.
    pub summons: Vec<String>,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            current_combat_script_name: String::new(),
            current_combat_script: String::new(),
            farming_mode: None,
            item: None,
            mission: String::new(),
            item_amount: 0,
            group_number: 1,
            party_number: 1,
            debug_mode: false,
            summons: Vec::new(),
        }
    }
}

/// Form hints for the numeric fields. Never blocks a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    pub group_out_of_range: bool,
    pub party_out_of_range: bool,
}

impl Validation {
    pub fn is_clean(&self) -> bool {
        !self.group_out_of_range && !self.party_out_of_range
    }
}

impl BotSettings {
    pub fn group_number_in_range(&self) -> bool {
        GROUP_RANGE.contains(&self.group_number)
    }

    pub fn party_number_in_range(&self) -> bool {
        PARTY_RANGE.contains(&self.party_number)
    }

    pub fn validation(&self) -> Validation {
        Validation {
            group_out_of_range: !self.group_number_in_range(),
            party_out_of_range: !self.party_number_in_range(),
        }
    }

    /// Serialized with four-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Text from the "# of Items" field. Anything that is not a non-negative
/// integer counts as zero.
pub fn parse_item_amount(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

mod farming_mode_field {
    use super::FarmingMode;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(mode: &Option<FarmingMode>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str((*mode).map(FarmingMode::label).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<FarmingMode>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some("Quest") => Ok(Some(FarmingMode::Quest)),
            Some("Special") => Ok(Some(FarmingMode::Special)),
            Some(other) => Err(serde::de::Error::unknown_variant(other, &["Quest", "Special"])),
        }
    }
}
