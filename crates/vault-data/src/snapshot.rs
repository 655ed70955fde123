//! Character snapshot model.
//!
//! Mirrors the JSON document produced by the game-state bridge. Every
//! section is optional on the wire and defaults to empty so a partial export
//! still loads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vault_types::error::{Result, VaultError};

use crate::timeline::Timeline;

/// Sample snapshot compiled into the binary.
const SAMPLE_JSON: &str = include_str!("../data/sample_snapshot.json");

/// Read-only view of the character and world state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub character: Character,
    pub visuals: Visuals,
    pub stats: Stats,
    pub special: Special,
    pub skills: Vec<Skill>,
    pub perks: Vec<Perk>,
    pub traits: Vec<Trait>,
    pub inventory: Inventory,
    pub quests: Vec<Quest>,
    pub journal: Vec<JournalEntry>,
    pub relations: Relations,
    pub current_location: String,
    pub map: WorldMap,
    /// Location archive keyed by lowercase location id.
    pub locations: BTreeMap<String, Location>,
    pub timeline: Timeline,
    pub stream_highlights: Vec<String>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(text)?;
        if snapshot.character.name.is_empty() {
            return Err(VaultError::Data("snapshot has no character name".into()));
        }
        Ok(snapshot)
    }

    /// The embedded sample character.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_JSON)
    }

    /// Look up an archived location. Ids are matched case-insensitively.
    pub fn location(&self, id: &str) -> Option<&Location> {
        let key = id.to_lowercase();
        self.locations.get(&key).or_else(|| {
            self.locations
                .iter()
                .find(|(k, _)| k.to_lowercase() == key)
                .map(|(_, loc)| loc)
        })
    }

    /// Number of archived locations marked visited.
    pub fn visited_location_count(&self) -> usize {
        self.locations.values().filter(|l| l.visited).count()
    }

    /// Count quests with the given status.
    pub fn quest_count(&self, status: QuestStatus) -> usize {
        self.quests.iter().filter(|q| q.status == status).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub age: u32,
    pub pronouns: String,
    pub origin: String,
    pub background: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Visuals {
    pub portrait_url: String,
    pub sprite_url: String,
    pub theme_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    pub level: u32,
    pub experience: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub ap: i32,
    pub max_ap: i32,
    pub ac: i32,
    pub sequence: i32,
    pub healing_rate: i32,
    pub critical_chance: i32,
}

/// S.P.E.C.I.A.L. attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Special {
    pub strength: u8,
    pub perception: u8,
    pub endurance: u8,
    pub charisma: u8,
    pub intelligence: u8,
    pub agility: u8,
    pub luck: u8,
}

impl Special {
    /// Attribute names and values in S.P.E.C.I.A.L. order.
    pub fn entries(&self) -> [(&'static str, u8); 7] {
        [
            ("Strength", self.strength),
            ("Perception", self.perception),
            ("Endurance", self.endurance),
            ("Charisma", self.charisma),
            ("Intelligence", self.intelligence),
            ("Agility", self.agility),
            ("Luck", self.luck),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub value: u32,
    /// `primary` or `secondary` for tagged skills.
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Perk {
    pub name: String,
    pub rank: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trait {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub equipped: Vec<EquippedItem>,
    pub notable: Vec<NotableItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquippedItem {
    pub slot: String,
    pub name: String,
    pub pid: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotableItem {
    pub name: String,
    pub quantity: u32,
    pub pid: u32,
    pub note: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    #[default]
    Active,
    Completed,
    Failed,
}

impl QuestStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub name: String,
    pub status: QuestStatus,
    pub highlight: bool,
    pub description: String,
    pub outcome: Option<String>,
    pub linked_locations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalEntry {
    pub date: String,
    pub entry: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relations {
    pub karma: String,
    pub factions: Vec<Faction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faction {
    pub name: String,
    pub reputation: String,
    pub standing: i32,
}

/// World map pins and the route travelled so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldMap {
    pub map_image: String,
    pub locations: Vec<MapPin>,
    pub route: Vec<RouteStop>,
}

impl WorldMap {
    pub fn visited_count(&self) -> usize {
        self.locations.iter().filter(|l| l.visited).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapPin {
    pub id: String,
    pub name: String,
    /// Horizontal position as a percentage of the map width.
    pub x: u32,
    /// Vertical position as a percentage of the map height.
    pub y: u32,
    pub visited: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteStop {
    pub location_id: String,
    pub timestamp: String,
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub first_arrival: String,
    pub visited: bool,
    pub events: Vec<LocationEvent>,
    pub npcs: Vec<Npc>,
    pub tags: Vec<String>,
    pub consequences: Consequences,
}

impl Location {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub linked_quest_id: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Npc {
    pub name: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consequences {
    pub karma: i32,
    pub reputation: BTreeMap<String, i32>,
}
