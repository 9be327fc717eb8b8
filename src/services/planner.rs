//! Recommendation composition pipeline. Starts from the phase template,
//! layers persona, mood/energy, and symptom modifiers over a working copy,
//! then de-duplicates, ranks, and truncates each bucket. Pure function of
//! the input and the immutable catalog; the catalog is never written to.

use crate::catalog::{Catalog, LifestyleModifier, MoodEnergyModifier, PhaseTemplate, SymptomModifier};
use crate::domain::models::{
    Bucket, CycleInsights, Difficulty, EnergyPattern, Priority, Recommendation, RecommendationSet,
    TimeOfDay, UserInput,
};
use crate::error::ComposeError;

/// Hard cap on entries per bucket after optimization.
const MAX_PER_BUCKET: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPlan {
    pub recommendations: RecommendationSet,
    pub insights: CycleInsights,
}

/// Build a personalized plan for one request.
///
/// Stage order matters: later stages may remove what earlier stages added.
/// The only hard failure is a cycle phase with no template; unknown personas,
/// unmatched mood/energy pairs, and unknown symptoms skip their stage.
pub fn compose(catalog: &Catalog, input: &UserInput) -> Result<ComposedPlan, ComposeError> {
    let template = catalog
        .phase_template(input.cycle_phase)
        .ok_or(ComposeError::UnknownPhase(input.cycle_phase))?;

    // Working copy: owned clone of the template's recommendations, so no
    // modifier stage can reach back into catalog storage.
    let mut working = template.base_recommendations.clone();

    if let Some(persona) = input.lifestyle {
        if let Some(modifier) = catalog.lifestyle_modifier(persona) {
            apply_persona(&mut working, modifier);
        }
    }

    if let Some(rule) = catalog.mood_energy_modifier(input.mood, input.energy) {
        apply_mood_energy(&mut working, rule);
    }

    for symptom in &input.symptoms {
        if let Some(modifier) = catalog.symptom_modifier(symptom) {
            apply_symptom(&mut working, modifier);
        }
    }

    optimize(&mut working);

    Ok(ComposedPlan {
        recommendations: working,
        insights: derive_insights(template),
    })
}

/// Inject one synthesized recommendation per persona modification entry.
/// Ids are deterministic (persona-bucket-sequence) so identical requests
/// produce identical output.
fn apply_persona(set: &mut RecommendationSet, modifier: &LifestyleModifier) {
    let mut seq = 0usize;
    for (bucket, seeds) in &modifier.modifications {
        for s in seeds {
            seq += 1;
            set.insert(Recommendation {
                id: format!("{}-{}-{}", modifier.persona.slug(), bucket.as_str(), seq),
                category: *bucket,
                title: s.title.clone(),
                description: s.description.clone(),
                priority: s.priority.unwrap_or(Priority::Medium),
                time_of_day: Some(TimeOfDay::Anytime),
                duration: None,
                difficulty: Some(Difficulty::Moderate),
            });
        }
    }
}

fn apply_mood_energy(set: &mut RecommendationSet, rule: &MoodEnergyModifier) {
    for bucket in Bucket::ALL {
        for rec in set.bucket_mut(bucket).iter_mut() {
            rec.difficulty = rescale_difficulty(rec.difficulty, rule.intensity_multiplier);
        }
    }

    for rec in &rule.additional_recommendations {
        set.insert(rec.clone());
    }

    // Removal matches the id and the lower-cased description; titles are
    // intentionally not consulted here (unlike symptom avoidance).
    if !rule.remove_categories.is_empty() {
        for bucket in Bucket::ALL {
            set.bucket_mut(bucket).retain(|rec| {
                !rule.remove_categories.iter().any(|token| {
                    rec.id.contains(token) || rec.description.to_lowercase().contains(token)
                })
            });
        }
    }
}

/// A multiplier below 0.7 flattens everything to easy; above 1.2 bumps one
/// step (easy becomes moderate, anything else becomes challenging). The
/// middle band leaves difficulty untouched.
fn rescale_difficulty(current: Option<Difficulty>, multiplier: f32) -> Option<Difficulty> {
    if multiplier < 0.7 {
        Some(Difficulty::Easy)
    } else if multiplier > 1.2 {
        match current {
            Some(Difficulty::Easy) => Some(Difficulty::Moderate),
            _ => Some(Difficulty::Challenging),
        }
    } else {
        current
    }
}

fn apply_symptom(set: &mut RecommendationSet, modifier: &SymptomModifier) {
    for rec in &modifier.add {
        set.insert(rec.clone());
    }

    for adjustment in &modifier.modify {
        for rec in set.bucket_mut(adjustment.bucket).iter_mut() {
            adjustment.patch.apply(rec);
        }
    }

    for token in &modifier.avoid {
        let needle = token.to_lowercase();
        for bucket in Bucket::ALL {
            set.bucket_mut(bucket).retain(|rec| {
                !(rec.id.to_lowercase().contains(&needle)
                    || rec.title.to_lowercase().contains(&needle)
                    || rec.description.to_lowercase().contains(&needle))
            });
        }
    }
}

/// Per bucket: drop duplicate titles (first occurrence wins), rank by
/// priority with a stable sort so ties keep their relative order, cap at
/// `MAX_PER_BUCKET`. Running this on an already-optimized set is a no-op.
pub fn optimize(set: &mut RecommendationSet) {
    for bucket in Bucket::ALL {
        let recs = set.bucket_mut(bucket);
        let mut seen = std::collections::HashSet::new();
        recs.retain(|rec| seen.insert(rec.title.clone()));
        recs.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        recs.truncate(MAX_PER_BUCKET);
    }
}

/// Insights come from the original template, not the modified working set.
fn derive_insights(template: &PhaseTemplate) -> CycleInsights {
    CycleInsights {
        phase: template.phase,
        description: template.description.clone(),
        key_focus: template.key_focus.clone(),
        energy_pattern: energy_pattern_summary(template.energy_pattern).into(),
        nutritional_needs: template.nutritional_priorities.clone(),
        exercise_recommendations: format!(
            "{} intensity: {}",
            template.exercise_guidelines.intensity.as_str(),
            template.exercise_guidelines.types.join(", ")
        ),
        work_optimization: template.work_optimization.time_management.clone(),
        social_needs: format!(
            "{} preference: {}",
            template.social_needs.preference.as_str(),
            template.social_needs.activities.join(", ")
        ),
    }
}

fn energy_pattern_summary(pattern: EnergyPattern) -> &'static str {
    match pattern {
        EnergyPattern::Low => "Focus on rest and gentle activities",
        EnergyPattern::Building => "Gradually increase activity levels",
        EnergyPattern::Peak => "Optimal time for challenging activities",
        EnergyPattern::Declining => "Maintain steady pace, prepare for rest",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CyclePhase, EnergyLevel, LifestylePersona, MoodLevel};
    use std::collections::HashMap;

    fn input(phase: CyclePhase, mood: MoodLevel, energy: EnergyLevel) -> UserInput {
        UserInput {
            cycle_phase: phase,
            mood,
            energy,
            symptoms: vec![],
            lifestyle: None,
        }
    }

    #[test]
    fn buckets_are_capped_and_deduplicated_for_all_inputs() {
        let catalog = Catalog::global();
        let moods = [
            MoodLevel::Low,
            MoodLevel::BelowAverage,
            MoodLevel::Average,
            MoodLevel::Good,
            MoodLevel::Great,
        ];
        let energies = [
            EnergyLevel::VeryLow,
            EnergyLevel::Low,
            EnergyLevel::Moderate,
            EnergyLevel::High,
            EnergyLevel::VeryHigh,
        ];
        let personas = [
            None,
            Some(LifestylePersona::Athlete),
            Some(LifestylePersona::Workaholic),
            Some(LifestylePersona::Researcher),
            Some(LifestylePersona::Engineer),
            Some(LifestylePersona::GymGirlie),
        ];

        for phase in CyclePhase::ALL {
            for mood in moods {
                for energy in energies {
                    for lifestyle in personas {
                        let mut req = input(phase, mood, energy);
                        req.lifestyle = lifestyle;
                        req.symptoms =
                            vec!["cramps".into(), "fatigue".into(), "mood swings".into()];
                        let plan = compose(catalog, &req).unwrap();
                        for bucket in Bucket::ALL {
                            let recs = plan.recommendations.bucket(bucket);
                            assert!(recs.len() <= MAX_PER_BUCKET);
                            let mut titles: Vec<_> = recs.iter().map(|r| &r.title).collect();
                            titles.sort();
                            titles.dedup();
                            assert_eq!(titles.len(), recs.len(), "duplicate titles in {bucket:?}");
                            for rec in recs {
                                assert_eq!(rec.category, bucket);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn compose_is_deterministic() {
        let catalog = Catalog::global();
        let mut req = input(CyclePhase::Luteal, MoodLevel::Great, EnergyLevel::VeryHigh);
        req.lifestyle = Some(LifestylePersona::Engineer);
        req.symptoms = vec!["fatigue".into()];

        let first = compose(catalog, &req).unwrap();
        let second = compose(catalog, &req).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn optimize_is_idempotent() {
        let catalog = Catalog::global();
        let mut req = input(CyclePhase::Ovulatory, MoodLevel::Good, EnergyLevel::High);
        req.lifestyle = Some(LifestylePersona::GymGirlie);
        let plan = compose(catalog, &req).unwrap();

        let mut again = plan.recommendations.clone();
        optimize(&mut again);
        assert_eq!(again, plan.recommendations);
    }

    #[test]
    fn low_multiplier_forces_easy() {
        assert_eq!(
            rescale_difficulty(Some(Difficulty::Challenging), 0.5),
            Some(Difficulty::Easy)
        );
        assert_eq!(rescale_difficulty(None, 0.5), Some(Difficulty::Easy));
    }

    #[test]
    fn high_multiplier_never_leaves_easy() {
        assert_eq!(
            rescale_difficulty(Some(Difficulty::Easy), 1.5),
            Some(Difficulty::Moderate)
        );
        assert_eq!(
            rescale_difficulty(Some(Difficulty::Moderate), 1.5),
            Some(Difficulty::Challenging)
        );
        assert_eq!(
            rescale_difficulty(Some(Difficulty::Challenging), 1.5),
            Some(Difficulty::Challenging)
        );
    }

    #[test]
    fn midband_multiplier_is_untouched() {
        assert_eq!(
            rescale_difficulty(Some(Difficulty::Moderate), 1.0),
            Some(Difficulty::Moderate)
        );
        assert_eq!(rescale_difficulty(None, 0.7), None);
        assert_eq!(rescale_difficulty(None, 1.2), None);
    }

    #[test]
    fn menstrual_low_very_low_flattens_and_adds_self_care() {
        let catalog = Catalog::global();
        let req = input(CyclePhase::Menstrual, MoodLevel::Low, EnergyLevel::VeryLow);
        let plan = compose(catalog, &req).unwrap();

        let top = &plan.recommendations.eat[0];
        assert_eq!(top.priority, Priority::High);
        assert_eq!(top.difficulty, Some(Difficulty::Easy));

        assert!(plan
            .recommendations
            .connect
            .iter()
            .any(|r| r.title == "Gentle Self-Care"));
    }

    #[test]
    fn ovulatory_athlete_peak_energy() {
        let catalog = Catalog::global();
        let mut req = input(CyclePhase::Ovulatory, MoodLevel::Great, EnergyLevel::VeryHigh);
        req.lifestyle = Some(LifestylePersona::Athlete);
        let plan = compose(catalog, &req).unwrap();

        let work = &plan.recommendations.work;
        assert!(work.iter().any(|r| r.title == "Tackle Big Goals"));
        assert!(work.iter().any(|r| r.id.starts_with("athlete-work-")));

        for bucket in Bucket::ALL {
            for rec in plan.recommendations.bucket(bucket) {
                assert_ne!(rec.difficulty, Some(Difficulty::Easy), "{} stayed easy", rec.id);
            }
        }
    }

    #[test]
    fn cramps_strip_intense_movement_and_add_stretching() {
        let catalog = Catalog::global();
        let mut req = input(CyclePhase::Ovulatory, MoodLevel::Average, EnergyLevel::Moderate);
        req.symptoms = vec!["cramps".into()];
        let plan = compose(catalog, &req).unwrap();

        let movement = &plan.recommendations.movement;
        assert!(movement.iter().any(|r| r.title == "Gentle Stretching"));
        for rec in movement {
            let haystack = format!(
                "{} {} {}",
                rec.id.to_lowercase(),
                rec.title.to_lowercase(),
                rec.description.to_lowercase()
            );
            assert!(!haystack.contains("high-intensity"));
            assert!(!haystack.contains("core-intensive"));
        }
    }

    #[test]
    fn later_symptom_overwrites_earlier_patch() {
        let catalog = Catalog::global();
        let mut req = input(CyclePhase::Follicular, MoodLevel::Average, EnergyLevel::Moderate);
        // cramps sets move duration to 15-20, fatigue then overwrites to 20-30
        req.symptoms = vec!["cramps".into(), "fatigue".into()];
        let plan = compose(catalog, &req).unwrap();

        for rec in &plan.recommendations.movement {
            assert_eq!(rec.duration.as_deref(), Some("20-30 minutes"), "{}", rec.id);
        }
    }

    #[test]
    fn unknown_phase_is_the_only_hard_failure() {
        let empty = Catalog {
            templates: HashMap::new(),
            personas: HashMap::new(),
            mood_energy: Vec::new(),
            symptoms: HashMap::new(),
        };
        let req = input(CyclePhase::Menstrual, MoodLevel::Low, EnergyLevel::Low);
        assert_eq!(
            compose(&empty, &req).unwrap_err(),
            ComposeError::UnknownPhase(CyclePhase::Menstrual)
        );

        // Unknown symptom and unmatched mood/energy degrade to no-ops.
        let catalog = Catalog::global();
        let mut harmless = input(CyclePhase::Menstrual, MoodLevel::Average, EnergyLevel::Moderate);
        harmless.symptoms = vec!["levitation".into()];
        assert!(compose(catalog, &harmless).is_ok());
    }

    #[test]
    fn dedup_keeps_first_occurrence_and_sort_is_stable() {
        let mut set = RecommendationSet::default();
        let mk = |id: &str, title: &str, priority: Priority| Recommendation {
            id: id.into(),
            category: Bucket::Eat,
            title: title.into(),
            description: String::new(),
            priority,
            time_of_day: None,
            duration: None,
            difficulty: None,
        };
        set.insert(mk("a", "Snack", Priority::Low));
        set.insert(mk("b", "Hydrate", Priority::Medium));
        set.insert(mk("c", "Snack", Priority::High)); // duplicate title, dropped
        set.insert(mk("d", "Greens", Priority::Medium));

        optimize(&mut set);

        let ids: Vec<_> = set.eat.iter().map(|r| r.id.as_str()).collect();
        // Medium entries keep insertion order; the duplicate "Snack" kept its
        // first (low-priority) occurrence and sorts last.
        assert_eq!(ids, vec!["b", "d", "a"]);
    }

    #[test]
    fn insights_come_from_the_untouched_template() {
        let catalog = Catalog::global();
        let req = input(CyclePhase::Menstrual, MoodLevel::Low, EnergyLevel::VeryLow);
        let plan = compose(catalog, &req).unwrap();

        let insights = &plan.insights;
        assert_eq!(insights.phase, CyclePhase::Menstrual);
        assert_eq!(insights.energy_pattern, "Focus on rest and gentle activities");
        assert_eq!(
            insights.exercise_recommendations,
            "low intensity: Gentle yoga, Walking, Stretching, Light swimming"
        );
        assert_eq!(
            insights.social_needs,
            "solitude preference: Quiet time with close friends, Solo activities, Gentle support"
        );
        assert_eq!(
            insights.work_optimization,
            "Shorter work blocks with frequent breaks"
        );
    }
}
