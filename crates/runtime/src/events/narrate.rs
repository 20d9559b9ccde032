use game_core::{BattleEvent, BattleOutcome, MitigationNote};

use super::Tone;

/// Renders one battle event as a narrative line.
pub fn describe(event: &BattleEvent, opponent: &str) -> (Tone, String) {
    match event {
        BattleEvent::PlayerHit {
            damage,
            critical: true,
        } => (Tone::Success, format!("Critical hit! You strike for {damage}!")),
        BattleEvent::PlayerHit { damage, .. } => {
            (Tone::Success, format!("You slash for {damage}!"))
        }
        BattleEvent::PlayerMissed => (Tone::Danger, "You miss!".to_string()),
        BattleEvent::StanceTaken { action } => {
            (Tone::Info, format!("You prepare to {}.", action.label()))
        }
        BattleEvent::ItemUsed => (Tone::Info, "You fumble through your bag.".to_string()),
        BattleEvent::ChargeInterrupted => (Tone::Success, "You interrupt the charge!".to_string()),
        BattleEvent::Enraged => (
            Tone::Warning,
            format!("{opponent} is enraged! Its attacks grow fiercer."),
        ),
        BattleEvent::MonsterCountered { damage } => (
            Tone::Success,
            format!("You counter the {opponent} for {damage} and dodge its attack!"),
        ),
        BattleEvent::CounterFailed => (Tone::Danger, "Your counter fails!".to_string()),
        BattleEvent::Fled => (Tone::Success, "You got away safely.".to_string()),
        BattleEvent::FleeFailed => (Tone::Danger, format!("The {opponent} blocks your escape!")),
        BattleEvent::MoveAnnounced { name, note } if note.is_empty() => {
            (Tone::Warning, format!("{opponent} uses {name}!"))
        }
        BattleEvent::MoveAnnounced { note, .. } => (Tone::Warning, (*note).to_string()),
        BattleEvent::ChargeBegun => (
            Tone::Warning,
            format!("{opponent} is gathering power. Strike now or brace yourself!"),
        ),
        BattleEvent::OpponentHealed { amount } => {
            (Tone::Warning, format!("{opponent} heals for {amount}!"))
        }
        BattleEvent::OpponentMissed => (Tone::Success, format!("The {opponent} misses!")),
        BattleEvent::Mitigated { note } => mitigation_line(*note),
        BattleEvent::CounterStrike { damage } => {
            (Tone::Success, format!("You strike back for {damage}!"))
        }
        BattleEvent::OpponentStrike {
            move_name: None,
            damage,
            ..
        } => (Tone::Danger, format!("The {opponent} hits you for {damage}!")),
        BattleEvent::OpponentStrike {
            move_name: Some(name),
            damage,
            hits: 1,
            ..
        } => (Tone::Danger, format!("{opponent} uses {name} for {damage}!")),
        BattleEvent::OpponentStrike {
            move_name: Some(name),
            damage,
            hit,
            hits,
        } => (Tone::Danger, format!("{name} hit {hit}/{hits} deals {damage}!")),
        BattleEvent::Revived { hp } => (
            Tone::Banner,
            format!("REVIVED! The Phoenix's Feather restores you to {hp} HP."),
        ),
        BattleEvent::Finished { outcome } => match outcome {
            BattleOutcome::Victory => (Tone::Banner, format!("{opponent} falls! Victory!")),
            BattleOutcome::Defeat => (Tone::Danger, "You are defeated...".to_string()),
            BattleOutcome::Fled => (Tone::Info, "You leave the fight behind.".to_string()),
        },
    }
}

fn mitigation_line(note: MitigationNote) -> (Tone, String) {
    let (tone, text) = match note {
        MitigationNote::Unopposed => (Tone::Info, "Nothing stands in the way."),
        MitigationNote::Defended => (Tone::Info, "You brace behind your guard."),
        MitigationNote::Parried => (Tone::Success, "You parry most of the blow!"),
        MitigationNote::Mistimed => (Tone::Danger, "Your parry is mistimed!"),
        MitigationNote::FlurrySlips => (Tone::Danger, "The flurry slips past your blade!"),
        MitigationNote::Ruined => (Tone::Danger, "The flurry ruins your counter!"),
        MitigationNote::Countered => (Tone::Success, "You turn the blow aside!"),
        MitigationNote::CounterFailed => (Tone::Danger, "Your counter fails!"),
    };
    (tone, text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strikes_name_the_move_and_the_sub_hit() {
        let single = BattleEvent::OpponentStrike {
            move_name: Some("Tail Swipe"),
            damage: 700,
            hit: 1,
            hits: 1,
        };
        assert_eq!(describe(&single, "Drago").1, "Drago uses Tail Swipe for 700!");

        let second = BattleEvent::OpponentStrike {
            move_name: Some("Wing Attack"),
            damage: 495,
            hit: 2,
            hits: 2,
        };
        assert_eq!(describe(&second, "Drago").1, "Wing Attack hit 2/2 deals 495!");
    }

    #[test]
    fn monster_strike_and_victory() {
        let hit = BattleEvent::OpponentStrike {
            move_name: None,
            damage: 12,
            hit: 1,
            hits: 1,
        };
        assert_eq!(
            describe(&hit, "Goblin"),
            (Tone::Danger, "The Goblin hits you for 12!".into())
        );
        let won = BattleEvent::Finished {
            outcome: BattleOutcome::Victory,
        };
        assert_eq!(describe(&won, "Goblin").0, Tone::Banner);
    }
}
