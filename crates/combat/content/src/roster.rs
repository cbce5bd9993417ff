//! Fighter archetypes and their move table files.

/// Playable fighter archetype.
///
/// Each archetype has its own move table; all archetypes share the combat
/// rules.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum FighterArchetype {
    Jaguar,
    Shadow,
    Thorn,
    Pyros,
    Electra,
    Katana,
    Shredder,
    Flail,
    Gargoyle,
    Chronos,
    Nova,
}

impl FighterArchetype {
    pub const ALL: [Self; 11] = [
        Self::Jaguar,
        Self::Shadow,
        Self::Thorn,
        Self::Pyros,
        Self::Electra,
        Self::Katana,
        Self::Shredder,
        Self::Flail,
        Self::Gargoyle,
        Self::Chronos,
        Self::Nova,
    ];

    /// File name of the archetype's move table inside `moves/`.
    pub fn table_file(self) -> String {
        let name: &str = self.as_ref();
        format!("{name}.ron")
    }
}
