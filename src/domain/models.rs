use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
}

impl CyclePhase {
    pub const ALL: [CyclePhase; 4] = [
        CyclePhase::Menstrual,
        CyclePhase::Follicular,
        CyclePhase::Ovulatory,
        CyclePhase::Luteal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "menstrual",
            CyclePhase::Follicular => "follicular",
            CyclePhase::Ovulatory => "ovulatory",
            CyclePhase::Luteal => "luteal",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CyclePhase {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "menstrual" => Ok(CyclePhase::Menstrual),
            "follicular" => Ok(CyclePhase::Follicular),
            "ovulatory" => Ok(CyclePhase::Ovulatory),
            "luteal" => Ok(CyclePhase::Luteal),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    Low,
    #[serde(rename = "below average")]
    BelowAverage,
    Average,
    Good,
    Great,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    #[serde(rename = "very low")]
    VeryLow,
    Low,
    Moderate,
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LifestylePersona {
    Athlete,
    Workaholic,
    Researcher,
    Engineer,
    #[serde(rename = "gym girlie")]
    GymGirlie,
}

impl LifestylePersona {
    /// Identifier-safe form, used when synthesizing recommendation ids.
    pub fn slug(&self) -> &'static str {
        match self {
            LifestylePersona::Athlete => "athlete",
            LifestylePersona::Workaholic => "workaholic",
            LifestylePersona::Researcher => "researcher",
            LifestylePersona::Engineer => "engineer",
            LifestylePersona::GymGirlie => "gym-girlie",
        }
    }
}

/// The four fixed recommendation buckets. Every recommendation carries the
/// bucket it belongs to in its `category` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Eat,
    Move,
    Work,
    Connect,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Eat, Bucket::Move, Bucket::Work, Bucket::Connect];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Eat => "eat",
            Bucket::Move => "move",
            Bucket::Work => "work",
            Bucket::Connect => "connect",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric rank used for ordering: high outranks medium outranks low.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Anytime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyPattern {
    Low,
    Building,
    Peak,
    Declining,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialPreference {
    Solitude,
    #[serde(rename = "small groups")]
    SmallGroups,
    Social,
    #[serde(rename = "highly social")]
    HighlySocial,
}

impl SocialPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPreference::Solitude => "solitude",
            SocialPreference::SmallGroups => "small groups",
            SocialPreference::Social => "social",
            SocialPreference::HighlySocial => "highly social",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriorityShift {
    #[serde(rename = "self-care")]
    SelfCare,
    Productivity,
    Social,
    Rest,
}

/// A single actionable suggestion. Equality for de-duplication is by title,
/// not id: the same advice can arrive from several sources under different ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub category: Bucket,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// One ordered list of recommendations per bucket. The bucket set is fixed;
/// insertion routes on the recommendation's own category so bucket membership
/// and the category field cannot drift apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationSet {
    pub eat: Vec<Recommendation>,
    #[serde(rename = "move")]
    pub movement: Vec<Recommendation>,
    pub work: Vec<Recommendation>,
    pub connect: Vec<Recommendation>,
}

impl RecommendationSet {
    pub fn bucket(&self, bucket: Bucket) -> &[Recommendation] {
        match bucket {
            Bucket::Eat => &self.eat,
            Bucket::Move => &self.movement,
            Bucket::Work => &self.work,
            Bucket::Connect => &self.connect,
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Recommendation> {
        match bucket {
            Bucket::Eat => &mut self.eat,
            Bucket::Move => &mut self.movement,
            Bucket::Work => &mut self.work,
            Bucket::Connect => &mut self.connect,
        }
    }

    pub fn insert(&mut self, rec: Recommendation) {
        self.bucket_mut(rec.category).push(rec);
    }
}

/// Validated input for one plan request. Constructed once per request by the
/// deserialization layer and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub cycle_phase: CyclePhase,
    pub mood: MoodLevel,
    pub energy: EnergyLevel,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<LifestylePersona>,
}

/// Narrative summary derived from the phase template, untouched by the
/// modifier stages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CycleInsights {
    pub phase: CyclePhase,
    pub description: String,
    pub key_focus: Vec<String>,
    pub energy_pattern: String,
    pub nutritional_needs: Vec<String>,
    pub exercise_recommendations: String,
    pub work_optimization: String,
    pub social_needs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_rank_is_a_total_order() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn cycle_phase_parses_loosely() {
        assert_eq!(
            CyclePhase::try_from(" Ovulatory "),
            Ok(CyclePhase::Ovulatory)
        );
        assert!(CyclePhase::try_from("lunar").is_err());
    }

    #[test]
    fn user_input_accepts_wire_format() {
        let input: UserInput = serde_json::from_str(
            r#"{
                "cyclePhase": "luteal",
                "mood": "below average",
                "energy": "very low",
                "symptoms": ["cramps", "Mood Swings"],
                "lifestyle": "gym girlie"
            }"#,
        )
        .unwrap();
        assert_eq!(input.cycle_phase, CyclePhase::Luteal);
        assert_eq!(input.mood, MoodLevel::BelowAverage);
        assert_eq!(input.energy, EnergyLevel::VeryLow);
        assert_eq!(input.lifestyle, Some(LifestylePersona::GymGirlie));
    }

    #[test]
    fn symptoms_default_to_empty() {
        let input: UserInput = serde_json::from_str(
            r#"{"cyclePhase": "menstrual", "mood": "low", "energy": "low"}"#,
        )
        .unwrap();
        assert!(input.symptoms.is_empty());
        assert!(input.lifestyle.is_none());
    }

    #[test]
    fn insert_routes_by_category() {
        let mut set = RecommendationSet::default();
        set.insert(Recommendation {
            id: "x".into(),
            category: Bucket::Move,
            title: "Stretch".into(),
            description: "Loosen up".into(),
            priority: Priority::Low,
            time_of_day: None,
            duration: None,
            difficulty: None,
        });
        assert_eq!(set.movement.len(), 1);
        assert!(set.eat.is_empty());
    }
}
