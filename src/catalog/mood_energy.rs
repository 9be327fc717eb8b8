//! Mood/energy adjustment rules, matched by exact pair only. The pair space
//! is deliberately sparse: most combinations leave the plan as-is.

use super::MoodEnergyModifier;
use crate::domain::models::{
    Bucket, Difficulty, EnergyLevel, MoodLevel, Priority, PriorityShift, Recommendation, TimeOfDay,
};

pub(super) fn rules() -> Vec<MoodEnergyModifier> {
    vec![
        MoodEnergyModifier {
            mood: MoodLevel::Low,
            energy: EnergyLevel::VeryLow,
            intensity_multiplier: 0.3,
            priority_shift: PriorityShift::SelfCare,
            additional_recommendations: vec![Recommendation {
                id: "low-mood-support".into(),
                category: Bucket::Connect,
                title: "Gentle Self-Care".into(),
                description: "Take a warm bath, listen to calming music, or practice deep breathing".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Anytime),
                duration: None,
                difficulty: Some(Difficulty::Easy),
            }],
            remove_categories: vec!["high-intensity".into()],
        },
        MoodEnergyModifier {
            mood: MoodLevel::Great,
            energy: EnergyLevel::VeryHigh,
            intensity_multiplier: 1.3,
            priority_shift: PriorityShift::Productivity,
            additional_recommendations: vec![Recommendation {
                id: "high-energy-challenge".into(),
                category: Bucket::Work,
                title: "Tackle Big Goals".into(),
                description: "Use this high energy to make progress on important projects".into(),
                priority: Priority::High,
                time_of_day: Some(TimeOfDay::Morning),
                duration: None,
                difficulty: Some(Difficulty::Challenging),
            }],
            remove_categories: vec![],
        },
    ]
}
