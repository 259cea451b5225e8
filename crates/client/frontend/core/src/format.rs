//! Text rendering of comparison verdicts.
use game_core::{Direction, FieldVerdict, MatchLevel};

/// One line per verdict, e.g. `🔶 Attacks: Lunge, Throw (partial)`.
pub fn render_verdicts(verdicts: &[FieldVerdict]) -> String {
    verdicts
        .iter()
        .map(render_verdict)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_verdict(verdict: &FieldVerdict) -> String {
    let FieldVerdict {
        field,
        display,
        level,
    } = verdict;

    match level {
        MatchLevel::Exact => format!("✅ {field}: {display}"),
        MatchLevel::Partial => format!("🔶 {field}: {display} (partial)"),
        MatchLevel::Directional(Direction::Higher) => format!("❌ {field}: {display} 🔼"),
        MatchLevel::Directional(Direction::Lower) => format!("❌ {field}: {display} 🔽"),
        MatchLevel::Mismatch => format!("❌ {field}: {display}"),
    }
}

#[cfg(test)]
mod tests {
    use game_core::{BossRecord, Field, compare};

    use super::*;

    #[test]
    fn renders_each_level() {
        let guess = BossRecord::builder("Nosk")
            .field(Field::Type, "Optional")
            .field(Field::FirstEncounter, "Deepnest")
            .field(Field::Reward, "Geo")
            .field(Field::Attacks, "Leap, Throw")
            .field(Field::AscendHp, "750")
            .field(Field::HasPhases, "false")
            .field(Field::CanStagger, "TRUE")
            .build();
        let target = BossRecord::builder("Hornet")
            .field(Field::Type, "Main")
            .field(Field::FirstEncounter, "Deepnest")
            .field(Field::Reward, "Cloak")
            .field(Field::Attacks, "Lunge, Throw")
            .field(Field::AscendHp, "900")
            .field(Field::HasPhases, "no")
            .field(Field::CanStagger, "yes")
            .build();

        let expected = [
            "❌ Type: Optional",
            "✅ First Encounter: Deepnest",
            "❌ Reward: Geo",
            "🔶 Attacks: Leap, Throw (partial)",
            "❌ Ascend HP: 750 🔼",
            "✅ HasPhases: No",
            "✅ CanStagger: Yes",
        ]
        .join("\n");

        assert_eq!(render_verdicts(&compare(&guess, &target)), expected);
    }

    #[test]
    fn lower_hint_uses_down_arrow() {
        let verdict = FieldVerdict {
            field: Field::AscendHp,
            display: "1300".to_string(),
            level: MatchLevel::Directional(Direction::Lower),
        };
        assert_eq!(render_verdict(&verdict), "❌ Ascend HP: 1300 🔽");
    }
}
