use serde::{Deserialize, Serialize};

/// A cat image as returned by the remote service. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breeds: Option<Vec<Breed>>,
}

impl Image {
    /// The first breed attached to the image, if any.
    pub fn primary_breed(&self) -> Option<&Breed> {
        self.breeds.as_ref().and_then(|breeds| breeds.first())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Weight {
    #[serde(default)]
    pub imperial: String,
    #[serde(default)]
    pub metric: String,
}

/// Breed metadata. Trait scores range 0..=5; `hypoallergenic` is 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub life_span: String,
    #[serde(default)]
    pub temperament: String,
    #[serde(default)]
    pub weight: Weight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia_url: Option<String>,
    #[serde(default)]
    pub hypoallergenic: u8,
    #[serde(default)]
    pub adaptability: u8,
    #[serde(default)]
    pub affection_level: u8,
    #[serde(default)]
    pub child_friendly: u8,
    #[serde(default)]
    pub dog_friendly: u8,
    #[serde(default)]
    pub energy_level: u8,
    #[serde(default)]
    pub grooming: u8,
    #[serde(default)]
    pub health_issues: u8,
    #[serde(default)]
    pub intelligence: u8,
    #[serde(default)]
    pub shedding_level: u8,
    #[serde(default)]
    pub social_needs: u8,
    #[serde(default)]
    pub stranger_friendly: u8,
    #[serde(default)]
    pub vocalisation: u8,
}

impl Breed {
    /// Temperament split into individual traits ("Active, Playful" -> ["Active", "Playful"]).
    pub fn temperament_traits(&self) -> Vec<&str> {
        if self.temperament.is_empty() {
            return Vec::new();
        }
        self.temperament.split(", ").collect()
    }

    /// Named 0..=5 trait scores in display order.
    pub fn trait_scores(&self) -> [(&'static str, u8); 12] {
        [
            ("adaptability", self.adaptability),
            ("affection_level", self.affection_level),
            ("child_friendly", self.child_friendly),
            ("dog_friendly", self.dog_friendly),
            ("energy_level", self.energy_level),
            ("grooming", self.grooming),
            ("health_issues", self.health_issues),
            ("intelligence", self.intelligence),
            ("shedding_level", self.shedding_level),
            ("social_needs", self.social_needs),
            ("stranger_friendly", self.stranger_friendly),
            ("vocalisation", self.vocalisation),
        ]
    }
}
