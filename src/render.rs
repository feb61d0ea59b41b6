use crate::ant::{Ant, AntId, AntKind};
use crate::bee::BeeId;
use crate::events::{Event, EventSink, Unit};
use crate::simulation::{Game, Hive};
use crate::world::{Colony, PlaceId};
use colored::{ColoredString, Colorize};

/// Draw the whole board as text
pub fn board<S: EventSink>(game: &Game<S>) -> String {
    let colony = game.colony();
    let length = game.places().first().map_or(0, Vec::len);
    let ruler = (0..length)
        .map(|col| col.to_string())
        .collect::<Vec<_>>()
        .join("    ");

    let mut map = String::with_capacity(256 + 64 * length * game.places().len());
    map.push_str(&format!("{}\n", "The Colony is under attack!".bold()));
    map.push_str(&format!(
        "Turn: {}, Food: {}, Boosts available: [{}]\n",
        game.turn(),
        game.food(),
        game.boost_names().join(",")
    ));
    map.push_str(&format!("     {}      {}\n", ruler, Hive::NAME));

    for (row, tunnel) in game.places().iter().enumerate() {
        map.push_str("    ");
        map.push_str(&"=====".repeat(length));
        if row == 0 {
            map.push_str("    ");
            map.push_str(&bee_stack(game.hive_bee_count()));
        }
        map.push('\n');

        map.push_str(&format!("{})  ", row));
        for place in tunnel.iter().filter_map(|&id| colony.place(id)) {
            let icon = place
                .ant()
                .and_then(|id| colony.ant(id))
                .map_or_else(|| " ".normal(), |ant| icon_for(colony, ant));
            map.push_str(&format!("{} ", icon));
            if place.bees().is_empty() {
                map.push_str("  ");
            } else {
                map.push_str(&bee_stack(place.bees().len()));
            }
            map.push(' ');
        }

        map.push_str("\n    ");
        for place in tunnel.iter().filter_map(|&id| colony.place(id)) {
            if place.is_water() {
                map.push_str(&format!("{} ", "~~~~".on_cyan()));
            } else {
                map.push_str("==== ");
            }
        }
        map.push('\n');
    }
    map.push_str(&format!("     {}\n", ruler));
    map
}

/// `B` plus the count when more than one bee shares the spot
fn bee_stack(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => format!("{} ", "B".black().on_yellow()),
        n => format!("{}{}", "B".black().on_yellow(), n),
    }
}

/// One-letter glyph per ant type; a guard shows the ant it protects, underlined
pub fn icon_for(colony: &Colony, ant: &Ant) -> ColoredString {
    match &ant.kind {
        AntKind::Grower => "G".green(),
        AntKind::Thrower => "T".red(),
        AntKind::Eater(stomach) if stomach.is_full() => "E".yellow().on_magenta(),
        AntKind::Eater(_) => "E".magenta(),
        AntKind::Scuba => "S".cyan(),
        AntKind::Guard => {
            let guarded = ant
                .place
                .and_then(|place| colony.place(place)?.guarded_ant())
                .and_then(|id| colony.ant(id));
            match guarded {
                Some(guarded) => icon_for(colony, guarded).underline(),
                None => "x".underline(),
            }
        }
    }
}

fn place_name(colony: &Colony, place: Option<PlaceId>) -> &str {
    place
        .and_then(|id| colony.place(id))
        .map_or("", |place| place.name.as_str())
}

fn ant_label(colony: &Colony, id: AntId) -> String {
    match colony.ant(id) {
        Some(ant) => format!("{}({})", ant.ant_type().as_str(), place_name(colony, ant.place)),
        None => format!("Ant#{}", id.0),
    }
}

fn bee_label(colony: &Colony, id: BeeId) -> String {
    let place = colony.bee(id).and_then(|bee| bee.place);
    format!("Bee#{}({})", id.0, place_name(colony, place))
}

fn unit_label(colony: &Colony, unit: Unit) -> String {
    match unit {
        Unit::Ant(id) => ant_label(colony, id),
        Unit::Bee(id) => bee_label(colony, id),
    }
}

/// One log line for an event
pub fn describe(colony: &Colony, event: &Event) -> String {
    match event {
        Event::AntDeployed { kind, place, .. } => {
            format!("{} deployed at {}", kind.as_str(), place_name(colony, Some(*place)))
                .green()
                .to_string()
        }
        Event::AntRemoved { ant, place } => format!(
            "{} removed from {}",
            colony.ant(*ant).map_or("Ant", |a| a.ant_type().as_str()),
            place_name(colony, Some(*place))
        ),
        Event::AntDrowned { ant, place } => format!(
            "{} drowned in {}",
            colony.ant(*ant).map_or("Ant", |a| a.ant_type().as_str()),
            place_name(colony, Some(*place))
        )
        .blue()
        .to_string(),
        Event::BoostApplied { ant, boost } => {
            format!("{} is given a {}", ant_label(colony, *ant), boost)
        }
        Event::BoostFound { boost } => format!("Found a {}!", boost).green().to_string(),
        Event::FoodHarvested { amount } => format!("Dug up {} food", amount).green().to_string(),
        Event::LeafThrown { ant, bee } => format!(
            "{} throws a leaf at {}",
            ant_label(colony, *ant),
            bee_label(colony, *bee)
        ),
        Event::BeeStatusChanged { bee, status } => {
            format!("{} is {}!", bee_label(colony, *bee), status.as_str()).cyan().to_string()
        }
        Event::BugSprayed { ant, place } => format!(
            "{} sprays bug repellant everywhere in {}!",
            colony.ant(*ant).map_or("Ant", |a| a.ant_type().as_str()),
            place_name(colony, Some(*place))
        )
        .yellow()
        .to_string(),
        Event::BeeStung { bee, ant } => format!(
            "{} stings {}!",
            bee_label(colony, *bee),
            ant_label(colony, *ant)
        )
        .red()
        .to_string(),
        Event::BeeMoved { bee, from, to } => format!(
            "Bee#{} moves from {} to {}",
            bee.0,
            place_name(colony, Some(*from)),
            place_name(colony, Some(*to))
        )
        .dimmed()
        .to_string(),
        Event::BeeSwallowed { ant, bee } => {
            format!("{} eats Bee#{}!", ant_label(colony, *ant), bee.0).magenta().to_string()
        }
        Event::BeeRegurgitated { ant, bee } => {
            format!("{} coughs up {}!", ant_label(colony, *ant), bee_label(colony, *bee))
                .magenta()
                .to_string()
        }
        Event::BeeDigested { ant, bee } => format!(
            "{} is done digesting {}",
            ant_label(colony, *ant),
            bee_label(colony, *bee)
        ),
        Event::UnitDamaged { unit, armor, .. } => {
            format!("{} armor reduced to {}", unit_label(colony, *unit), armor)
        }
        Event::UnitDied { unit, place } => {
            let name = match unit {
                Unit::Ant(id) => colony
                    .ant(*id)
                    .map_or_else(|| "Ant".to_string(), |a| a.ant_type().as_str().to_string()),
                Unit::Bee(id) => format!("Bee#{}", id.0),
            };
            format!(
                "{}({}) ran out of armor and expired",
                name,
                place_name(colony, Some(*place))
            )
            .bright_red()
            .to_string()
        }
        Event::WaveSpawned { bees, .. } => match bees.len() {
            1 => "A bee flies out of the hive!".yellow().to_string(),
            n => format!("{} bees fly out of the hive!", n).yellow().to_string(),
        },
        Event::TurnEnded { turn } => format!("=== end of turn {} ===", turn).dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn game() -> Game {
        let mut hive = Hive::new(3, 1);
        hive.add_wave(0, 2);
        Game::new(Colony::new(20, 2, 3, 2), hive, fastrand::Rng::with_seed(4))
    }

    #[test]
    fn test_board_header() {
        plain();
        let game = game();
        let map = board(&game);

        assert!(map.starts_with("The Colony is under attack!\n"));
        assert!(map.contains("Turn: 0, Food: 20, Boosts available: [FlyingLeaf,StickyLeaf,IcyLeaf]"));
        assert!(map.contains("     0    1    2      Hive"));
        assert!(map.contains("===============    B2"));
    }

    #[test]
    fn test_board_rows() {
        plain();
        let mut game = game();
        game.deploy_ant("thrower", "0,0").unwrap();
        game.deploy_ant("guard", "1,2").unwrap();
        let map = board(&game);

        assert!(map.contains("0)  T      "));
        assert!(map.contains(&format!("1){}x    ", " ".repeat(12))));
        assert!(map.contains("==== ~~~~ ==== "));
    }

    #[test]
    fn test_describe() {
        plain();
        let mut game = game();
        game.deploy_ant("grower", "0,1").unwrap();
        let colony = game.colony();

        let lines: Vec<String> = game.sink().iter().map(|e| describe(colony, e)).collect();
        assert_eq!(lines, vec!["Grower deployed at water[0,1]".to_string()]);
        assert_eq!(
            describe(colony, &Event::TurnEnded { turn: 3 }),
            "=== end of turn 3 ==="
        );
    }
}
