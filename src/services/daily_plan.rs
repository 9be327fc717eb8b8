//! Legacy plan generator kept for older callers. Produces a fixed-format
//! descriptive string for a phase and never consults the full pipeline.

use crate::domain::models::CyclePhase;

/// Unrecognized or missing phases fall back to follicular.
pub fn resolve_phase(raw: Option<&str>) -> CyclePhase {
    raw.and_then(|value| CyclePhase::try_from(value).ok())
        .unwrap_or(CyclePhase::Follicular)
}

pub fn generate_plan(raw: Option<&str>) -> String {
    let phase = resolve_phase(raw);
    format!(
        "Daily plan for phase: {phase}\n\
         1. Nutrition recommendation for {phase} phase\n\
         2. Exercise recommendation for {phase} phase\n\
         3. Wellness recommendation for {phase} phase",
        phase = phase.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_phase_defaults_to_follicular() {
        assert_eq!(resolve_phase(None), CyclePhase::Follicular);
        assert_eq!(resolve_phase(Some("lunar")), CyclePhase::Follicular);
        assert_eq!(resolve_phase(Some("Luteal")), CyclePhase::Luteal);
    }

    #[test]
    fn plan_format_is_fixed() {
        let plan = generate_plan(Some("menstrual"));
        assert_eq!(
            plan,
            "Daily plan for phase: menstrual\n\
             1. Nutrition recommendation for menstrual phase\n\
             2. Exercise recommendation for menstrual phase\n\
             3. Wellness recommendation for menstrual phase"
        );
    }
}
