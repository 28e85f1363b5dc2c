//! Text and JSON rendering of planner results.

use console::style;
use planner_core::{
    Character, CoreRank, Level, SlotReport, StatBlock, Weapon, WeaponStats, available_core_ranks,
    format_stat,
};
use serde::Serialize;

/// One line of the stat panel.
#[derive(Debug, Serialize)]
pub struct StatLine {
    pub name: &'static str,
    pub value: f64,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct WeaponView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub level: Level,
    /// `None` when the weapon's tables do not cover this level.
    pub attack: Option<f64>,
    pub substat: Option<String>,
    pub substat_value: Option<String>,
}

/// JSON shape of one slot.
#[derive(Debug, Serialize)]
pub struct SlotView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<usize>,
    pub character_id: &'a str,
    pub name: &'a str,
    pub level: Level,
    pub core_rank: CoreRank,
    pub core_label: String,
    pub weapon: Option<WeaponView<'a>>,
    /// `None` when the character has no base stats.
    pub stats: Option<Vec<StatLine>>,
}

impl<'a> SlotView<'a> {
    pub fn new(slot: Option<usize>, report: &'a SlotReport<'a>) -> Self {
        let weapon = report.weapon.map(|weapon| WeaponView {
            id: &weapon.id,
            name: &weapon.name,
            level: report.weapon_level.unwrap_or(Level::MAX),
            attack: report.weapon_stats.as_ref().map(|w| w.attack),
            substat: report.weapon_stats.as_ref().map(|w| w.substat_name.clone()),
            substat_value: report.weapon_stats.as_ref().map(WeaponStats::display_substat),
        });

        Self {
            slot,
            character_id: &report.character.id,
            name: &report.character.name,
            level: report.level,
            core_rank: report.core_rank,
            core_label: report.core_rank.to_string(),
            weapon,
            stats: report.stats.as_ref().map(stat_lines),
        }
    }
}

fn stat_lines(stats: &StatBlock) -> Vec<StatLine> {
    stats
        .iter()
        .map(|(kind, value)| StatLine {
            name: kind.name(),
            value,
            display: format_stat(kind, value),
        })
        .collect()
}

fn character_tags(character: &Character) -> String {
    [
        character.rarity.to_string().as_str(),
        character.element.as_str(),
        character.specialty.as_str(),
        character.faction.as_str(),
    ]
    .into_iter()
    .filter(|tag| !tag.is_empty())
    .collect::<Vec<_>>()
    .join(" · ")
}

/// Prints the character panel for one slot.
pub fn print_slot(report: &SlotReport<'_>) {
    println!(
        "{} {}",
        style(&report.character.name).bold().cyan(),
        style(format!("[{}]", character_tags(report.character))).dim()
    );
    println!("  Level {} · {}", report.level, report.core_rank);

    match report.weapon {
        Some(weapon) => {
            let level = report.weapon_level.unwrap_or(Level::MAX);
            print!("  W-Engine: {} Lv.{level}", style(&weapon.name).yellow());
            match &report.weapon_stats {
                Some(stats) => println!(
                    " · ATK {} · {} {}",
                    stats.attack,
                    stats.substat_name,
                    stats.display_substat()
                ),
                None => println!(" · {}", style("no stats available").dim()),
            }
        }
        None => println!("  W-Engine: {}", style("none").dim()),
    }

    println!();
    match &report.stats {
        Some(stats) => {
            for (kind, value) in stats.iter() {
                println!("  {:<22}{:>10}", kind.name(), format_stat(kind, value));
            }
        }
        None => println!("  {}", style("No stats available").dim()),
    }
}

/// Prints the weapon panel.
pub fn print_weapon(weapon: &Weapon, level: Level, stats: Option<&WeaponStats>) {
    println!(
        "{} {}",
        style(&weapon.name).bold().yellow(),
        style(format!("[{} · {}]", weapon.rarity, weapon.weapon_type)).dim()
    );
    println!("  Level {level}");
    match stats {
        Some(stats) => {
            println!("  {:<22}{:>10}", "Base ATK", stats.attack);
            println!(
                "  {:<22}{:>10}",
                stats.substat_name,
                stats.display_substat()
            );
        }
        None => println!("  {}", style("No stats available").dim()),
    }
}

/// Prints every core rank, marking those `level` unlocks.
pub fn print_cores(level: Level) {
    let available = available_core_ranks(level);
    let highest = available.last().copied().unwrap_or_default();

    println!("Core ranks at level {}", style(level).bold());
    for rank in CoreRank::ALL {
        let requirement = format!("requires level {}", rank.required_level());
        if rank == highest {
            println!(
                "  {} {:<8} {}",
                style("●").green(),
                style(rank).green().bold(),
                style(requirement).dim()
            );
        } else if available.contains(&rank) {
            println!("  {} {:<8} {}", style("○").green(), rank, style(requirement).dim());
        } else {
            println!(
                "  {} {:<8} {}",
                style("✗").red(),
                style(rank).dim(),
                style(requirement).dim()
            );
        }
    }
}

/// Prints a character list as an aligned table.
pub fn print_characters(characters: &[&Character]) {
    println!(
        "{}",
        style(format!(
            "{:<8} {:<20} {:<3} {:<10} {:<10} {}",
            "ID", "NAME", "RAR", "ELEMENT", "SPECIALTY", "FACTION"
        ))
        .bold()
    );
    for c in characters {
        println!(
            "{:<8} {:<20} {:<3} {:<10} {:<10} {}",
            c.id, c.name, c.rarity, c.element, c.specialty, c.faction
        );
    }
    println!("{}", style(format!("{} agents", characters.len())).dim());
}

/// Prints a weapon list as an aligned table.
pub fn print_weapons(weapons: &[&Weapon]) {
    println!(
        "{}",
        style(format!("{:<8} {:<32} {:<3} {}", "ID", "NAME", "RAR", "TYPE")).bold()
    );
    for w in weapons {
        println!(
            "{:<8} {:<32} {:<3} {}",
            w.id, w.name, w.rarity, w.weapon_type
        );
    }
    println!("{}", style(format!("{} W-Engines", weapons.len())).dim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{CharacterBaseStats, Rarity};

    #[test]
    fn tags_skip_empty_fields() {
        let character = Character {
            rarity: Rarity::S,
            element: "Ice".into(),
            specialty: "Stun".into(),
            ..Character::with_stats("1141", CharacterBaseStats::default())
        };
        assert_eq!(character_tags(&character), "S · Ice · Stun");
    }

    #[test]
    fn slot_view_lists_stats_in_display_order() {
        let character = Character::with_stats("1011", CharacterBaseStats::default());
        let report = SlotReport {
            character: &character,
            level: Level::MAX,
            core_rank: CoreRank::F,
            weapon: None,
            weapon_level: None,
            weapon_stats: None,
            stats: Some(StatBlock {
                energy_regen: 1.2,
                crit_rate: 5.0,
                ..StatBlock::default()
            }),
        };

        let view = SlotView::new(Some(0), &report);
        assert_eq!(view.core_label, "Core F");
        let stats = view.stats.as_ref().unwrap();
        assert_eq!(stats.len(), 11);
        assert_eq!(stats[5].name, "Energy Regen");
        assert_eq!(stats[5].display, "1.20");
        assert_eq!(stats[6].display, "5.0%");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["core_rank"], 7);
        assert!(json["weapon"].is_null());
    }

    #[test]
    fn slot_view_without_stats_serializes_null() {
        let character = Character {
            stats: None,
            ..Character::with_stats("1999", CharacterBaseStats::default())
        };
        let report = SlotReport {
            character: &character,
            level: Level::MAX,
            core_rank: CoreRank::F,
            weapon: None,
            weapon_level: None,
            weapon_stats: None,
            stats: None,
        };

        let json = serde_json::to_value(SlotView::new(None, &report)).unwrap();
        assert!(json["stats"].is_null());
        assert!(json.get("slot").is_none());
    }
}
