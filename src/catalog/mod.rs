//! Read-only rule tables: one template per cycle phase, one modifier per
//! lifestyle persona, an ordered list of mood/energy adjustment rules, and
//! one modifier per known symptom. Loaded and validated once at startup;
//! every request works on its own deep copy of whatever it pulls from here.

mod mood_energy;
mod personas;
mod phases;
mod symptoms;

use crate::domain::models::{
    Bucket, CyclePhase, Difficulty, EnergyLevel, EnergyPattern, Intensity, LifestylePersona,
    MoodLevel, Priority, PriorityShift, Recommendation, RecommendationSet, SocialPreference,
    TimeOfDay,
};
use anyhow::{bail, ensure};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseGuidelines {
    pub intensity: Intensity,
    pub types: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOptimization {
    pub best_for: Vec<String>,
    pub avoid: Vec<String>,
    pub time_management: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialNeeds {
    pub preference: SocialPreference,
    pub activities: Vec<String>,
}

/// Immutable reference data for one cycle phase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTemplate {
    pub phase: CyclePhase,
    pub description: String,
    pub duration: String,
    pub hormones: Vec<String>,
    pub energy_pattern: EnergyPattern,
    pub key_focus: Vec<String>,
    pub base_recommendations: RecommendationSet,
    pub common_symptoms: Vec<String>,
    pub nutritional_priorities: Vec<String>,
    pub exercise_guidelines: ExerciseGuidelines,
    pub work_optimization: WorkOptimization,
    pub social_needs: SocialNeeds,
}

/// Partial recommendation template carried by a persona modifier. Fields not
/// present here take engine defaults when the recommendation is synthesized.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSeed {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleModifier {
    pub persona: LifestylePersona,
    pub description: String,
    pub priorities: Vec<String>,
    pub work_style: String,
    pub exercise_preference: Vec<String>,
    pub nutrition_focus: Vec<String>,
    pub social_style: String,
    pub modifications: Vec<(Bucket, Vec<RecommendationSeed>)>,
}

/// Adjustment rule for one exact (mood, energy) pair. Coverage of the pair
/// space is intentionally partial; an unmatched pair is valid and skips the
/// mood/energy stage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEnergyModifier {
    pub mood: MoodLevel,
    pub energy: EnergyLevel,
    pub intensity_multiplier: f32,
    pub priority_shift: PriorityShift,
    pub additional_recommendations: Vec<Recommendation>,
    pub remove_categories: Vec<String>,
}

/// Field-level overrides a symptom applies to every recommendation in one
/// bucket. Identity fields (id, title, description, category) are never
/// patchable, so a patch cannot move a recommendation between buckets.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPatch {
    pub priority: Option<Priority>,
    pub time_of_day: Option<TimeOfDay>,
    pub duration: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl RecommendationPatch {
    pub fn apply(&self, rec: &mut Recommendation) {
        if let Some(priority) = self.priority {
            rec.priority = priority;
        }
        if let Some(time_of_day) = self.time_of_day {
            rec.time_of_day = Some(time_of_day);
        }
        if let Some(duration) = &self.duration {
            rec.duration = Some(duration.clone());
        }
        if let Some(difficulty) = self.difficulty {
            rec.difficulty = Some(difficulty);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketAdjustment {
    pub bucket: Bucket,
    pub patch: RecommendationPatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Serialize)]
pub struct SymptomModifier {
    pub symptom: String,
    pub severity: Severity,
    pub add: Vec<Recommendation>,
    pub modify: Vec<BucketAdjustment>,
    pub avoid: Vec<String>,
}

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::load().expect("built-in recommendation catalog is valid"));

#[derive(Debug)]
pub struct Catalog {
    pub(crate) templates: HashMap<CyclePhase, PhaseTemplate>,
    pub(crate) personas: HashMap<LifestylePersona, LifestyleModifier>,
    pub(crate) mood_energy: Vec<MoodEnergyModifier>,
    pub(crate) symptoms: HashMap<String, SymptomModifier>,
}

impl Catalog {
    /// Process-wide catalog, built on first access and never modified.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn load() -> anyhow::Result<Catalog> {
        let templates: HashMap<_, _> = phases::templates()
            .into_iter()
            .map(|t| (t.phase, t))
            .collect();
        let personas: HashMap<_, _> = personas::modifiers()
            .into_iter()
            .map(|m| (m.persona, m))
            .collect();
        let mood_energy = mood_energy::rules();
        let symptoms: HashMap<_, _> = symptoms::modifiers()
            .into_iter()
            .map(|m| (m.symptom.clone(), m))
            .collect();

        let catalog = Catalog {
            templates,
            personas,
            mood_energy,
            symptoms,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for phase in CyclePhase::ALL {
            let Some(template) = self.templates.get(&phase) else {
                bail!("missing phase template for `{phase}`");
            };
            for bucket in Bucket::ALL {
                for rec in template.base_recommendations.bucket(bucket) {
                    ensure!(
                        rec.category == bucket,
                        "recommendation `{}` sits in bucket `{}` but is categorized `{}`",
                        rec.id,
                        bucket.as_str(),
                        rec.category.as_str(),
                    );
                }
            }
        }
        for (i, rule) in self.mood_energy.iter().enumerate() {
            let duplicate = self.mood_energy[..i]
                .iter()
                .any(|r| r.mood == rule.mood && r.energy == rule.energy);
            ensure!(
                !duplicate,
                "duplicate mood/energy rule for ({:?}, {:?})",
                rule.mood,
                rule.energy
            );
        }
        for (key, modifier) in &self.symptoms {
            ensure!(
                *key == normalize_symptom(key),
                "symptom key `{key}` is not in normalized form"
            );
            ensure!(
                *key == modifier.symptom,
                "symptom modifier `{}` is keyed under `{key}`",
                modifier.symptom
            );
        }
        Ok(())
    }

    pub fn phase_template(&self, phase: CyclePhase) -> Option<&PhaseTemplate> {
        self.templates.get(&phase)
    }

    pub fn lifestyle_modifier(&self, persona: LifestylePersona) -> Option<&LifestyleModifier> {
        self.personas.get(&persona)
    }

    /// Exact-pair match only; absence is an expected outcome, not an error.
    pub fn mood_energy_modifier(
        &self,
        mood: MoodLevel,
        energy: EnergyLevel,
    ) -> Option<&MoodEnergyModifier> {
        self.mood_energy
            .iter()
            .find(|rule| rule.mood == mood && rule.energy == energy)
    }

    /// Lookup by normalized symptom name; absence is an expected outcome.
    pub fn symptom_modifier(&self, raw: &str) -> Option<&SymptomModifier> {
        self.symptoms.get(&normalize_symptom(raw))
    }
}

/// Symptoms arrive as free-form text; fold case and collapse whitespace
/// before keying into the table.
pub(crate) fn normalize_symptom(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_and_validates() {
        let catalog = Catalog::load().unwrap();
        for phase in CyclePhase::ALL {
            assert!(catalog.phase_template(phase).is_some());
        }
        assert_eq!(catalog.personas.len(), 5);
    }

    #[test]
    fn mood_energy_coverage_is_partial() {
        let catalog = Catalog::global();
        assert!(catalog
            .mood_energy_modifier(MoodLevel::Low, EnergyLevel::VeryLow)
            .is_some());
        assert!(catalog
            .mood_energy_modifier(MoodLevel::Average, EnergyLevel::Moderate)
            .is_none());
    }

    #[test]
    fn symptom_lookup_normalizes_keys() {
        let catalog = Catalog::global();
        assert!(catalog.symptom_modifier("  Mood   Swings ").is_some());
        assert!(catalog.symptom_modifier("CRAMPS").is_some());
        assert!(catalog.symptom_modifier("levitation").is_none());
    }

    #[test]
    fn normalize_collapses_inner_whitespace() {
        assert_eq!(normalize_symptom("  Mood \t Swings "), "mood swings");
    }
}
