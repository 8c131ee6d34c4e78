use rust_embed::Embed;
use serde::Deserialize;

#[derive(Embed)]
#[folder = "assets/data/"]
struct DataAssets;

pub const SKILL_MAX: u32 = 100;

#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
    pub name: String,
    pub value: u32,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SkillsData {
    #[serde(default)]
    pub soft: Vec<Skill>,
    #[serde(default)]
    pub hard: Vec<Skill>,
}

impl SkillsData {
    /// Load the bundled skill tables. A broken asset yields empty tables
    /// rather than a startup failure; the charts just render empty.
    pub fn load() -> Self {
        let Some(file) = DataAssets::get("skills.toml") else {
            return Self::default();
        };
        let Ok(content) = std::str::from_utf8(file.data.as_ref()) else {
            return Self::default();
        };
        toml::from_str(content).unwrap_or_default()
    }
}
