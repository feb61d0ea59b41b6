// End-to-end rules checks against the library API.

use ants_vs_bees::prelude::*;
use ants_vs_bees::{Bee, BeeStatus, PlaceId};

fn new_game(food: u32, tunnels: usize, length: usize, hive: Hive) -> Game {
    Game::new(
        Colony::new(food, tunnels, length, 0),
        hive,
        fastrand::Rng::with_seed(2024),
    )
}

fn at(game: &Game, row: usize, col: usize) -> PlaceId {
    game.colony().place_at(row, col).expect("place on board")
}

#[test]
fn deployment_charges_exact_cost_or_nothing() {
    let mut game = new_game(10, 1, 3, Hive::new(3, 1));

    assert!(game.deploy_ant("thrower", "0,0").is_ok());
    assert_eq!(game.food(), 6);

    assert_eq!(game.deploy_ant("thrower", "0,0"), Err(GameError::TunnelOccupied));
    assert_eq!(game.food(), 6);

    assert!(game.deploy_ant("grower", "0,1").is_ok());
    assert_eq!(game.food(), 5);
}

#[test]
fn food_never_goes_negative() {
    let mut game = new_game(9, 2, 4, Hive::new(3, 1));
    let attempts = ["scuba", "eater", "guard", "thrower", "grower", "grower", "scuba"];

    for (i, ant) in attempts.iter().enumerate() {
        let before = game.food();
        let coordinate = format!("{},{}", i % 2, i % 4);
        match game.deploy_ant(ant, &coordinate) {
            Ok(_) => {
                let cost = ant.parse::<ants_vs_bees::AntType>().unwrap().food_cost();
                assert_eq!(game.food(), before - cost);
            }
            Err(_) => assert_eq!(game.food(), before),
        }
    }
}

#[test]
fn second_guard_is_rejected_without_side_effects() {
    let mut game = new_game(20, 1, 3, Hive::new(3, 1));
    let thrower = game.deploy_ant("thrower", "0,1").unwrap();
    let guard = game.deploy_ant("guard", "0,1").unwrap();

    assert_eq!(game.deploy_ant("guard", "0,1"), Err(GameError::TunnelOccupied));
    let place = game.place(at(&game, 0, 1)).unwrap();
    assert_eq!(place.guard(), Some(guard));
    assert_eq!(place.guarded_ant(), Some(thrower));
    assert_eq!(game.food(), 12);
}

#[test]
fn wave_spawns_at_the_entrance() {
    let mut hive = Hive::new(3, 1);
    hive.add_wave(0, 1);
    let mut game = new_game(0, 1, 3, hive);
    assert_eq!(game.hive_bee_count(), 1);

    game.take_turn();

    let entrance = game.colony().entrances()[0];
    assert_eq!(entrance, at(&game, 0, 2));
    assert_eq!(game.place(entrance).unwrap().bees().len(), 1);
    assert_eq!(game.hive_bee_count(), 0);
}

#[test]
fn thrower_hits_bee_two_places_away() {
    let mut hive = Hive::new(3, 1);
    hive.add_wave(0, 1);
    let mut game = new_game(10, 1, 5, hive);
    game.deploy_ant("thrower", "0,2").unwrap();
    game.take_turn(); // bee lands on 0,4

    let bee = game.place(at(&game, 0, 4)).unwrap().bees()[0];
    game.take_turn();

    assert_eq!(game.colony().bee(bee).unwrap().armor, 2);
}

#[test]
fn flying_leaf_reaches_five_places_and_is_spent() {
    let mut hive = Hive::new(3, 1);
    hive.add_wave(0, 1);
    let mut game = new_game(10, 1, 6, hive);
    let thrower = game.deploy_ant("thrower", "0,0").unwrap();
    game.take_turn(); // bee lands on 0,5
    game.boost_ant("FlyingLeaf", "0,0").unwrap();

    let bee = game.place(at(&game, 0, 5)).unwrap().bees()[0];
    game.take_turn();

    assert_eq!(game.colony().bee(bee).unwrap().armor, 2);
    assert_eq!(game.colony().ant(thrower).unwrap().boost, None);
}

#[test]
fn closest_bee_respects_distance_bounds() {
    let mut colony = Colony::new(0, 1, 6, 0);
    let origin = colony.place_at(0, 1).unwrap();
    let near = colony.spawn_bee(Bee::new(3, 1), colony.place_at(0, 2).unwrap());
    let far = colony.spawn_bee(Bee::new(3, 1), colony.place_at(0, 5).unwrap());

    assert_eq!(colony.closest_bee(origin, 0, 0), None);
    assert_eq!(colony.closest_bee(origin, 1, 0), Some(near));
    assert_eq!(colony.closest_bee(origin, 4, 2), Some(far));
    assert_eq!(colony.closest_bee(origin, 3, 2), None);
    // Only four places lie hive-ward of the origin
    assert_eq!(colony.closest_bee(origin, 10, 5), None);
}

#[test]
fn eater_hides_its_meal_for_three_acts() {
    let mut colony = Colony::new(10, 1, 3, 0);
    let place = colony.place_at(0, 0).unwrap();
    let eater = colony.deploy_ant(ants_vs_bees::AntType::Eater, place).unwrap();
    let bee = colony.spawn_bee(Bee::new(3, 1), place);
    let mut rng = fastrand::Rng::with_seed(1);

    colony.ants_act(&mut rng);
    assert_eq!(colony.stomach_contents(eater), Some(bee));
    for _ in 0..3 {
        assert_eq!(colony.closest_bee(place, 0, 0), None);
        assert!(colony.all_bees().is_empty());
        colony.ants_act(&mut rng);
    }
    assert_eq!(colony.closest_bee(place, 0, 0), None);

    colony.ants_act(&mut rng);
    assert_eq!(colony.closest_bee(place, 0, 0), Some(bee));
}

#[test]
fn guarded_ant_acts_exactly_once_per_turn() {
    let mut hive = Hive::new(10, 1);
    hive.add_wave(0, 1);
    let mut game = new_game(20, 1, 4, hive);
    game.deploy_ant("thrower", "0,0").unwrap();
    game.deploy_ant("guard", "0,0").unwrap();
    game.take_turn(); // bee lands on 0,3

    let bee = game.place(at(&game, 0, 3)).unwrap().bees()[0];
    game.take_turn();

    assert_eq!(game.colony().bee(bee).unwrap().armor, 9);
}

#[test]
fn guard_soaks_stings_for_the_ant_behind_it() {
    let mut hive = Hive::new(10, 1);
    hive.add_wave(0, 1);
    let mut game = new_game(20, 1, 1, hive);
    let grower = game.deploy_ant("grower", "0,0").unwrap();
    let guard = game.deploy_ant("guard", "0,0").unwrap();

    game.take_turn(); // bee lands on the guarded place
    game.take_turn();
    assert_eq!(game.colony().ant(guard).unwrap().armor, 1);
    assert_eq!(game.colony().ant(grower).unwrap().armor, 1);

    game.take_turn();
    game.take_turn();
    assert!(!game.colony().ant(guard).unwrap().is_alive());
    assert!(!game.colony().ant(grower).unwrap().is_alive());
    assert_eq!(game.place(at(&game, 0, 0)).unwrap().ant(), None);
}

#[test]
fn icy_bee_skips_its_sting() {
    let mut hive = Hive::new(10, 1);
    hive.add_wave(0, 1);
    let mut game = new_game(20, 1, 1, hive);
    let thrower = game.deploy_ant("thrower", "0,0").unwrap();
    let guard = game.deploy_ant("guard", "0,0").unwrap();
    game.take_turn();

    // Boosts land on the guard, so take it off first
    game.remove_ant("0,0").unwrap();
    game.boost_ant("IcyLeaf", "0,0").unwrap();
    let bee = game.place(at(&game, 0, 0)).unwrap().bees()[0];
    game.take_turn();

    assert_eq!(game.colony().ant(guard).unwrap().place, None);
    assert!(game.colony().ant(thrower).unwrap().is_alive());
    assert_eq!(game.colony().bee(bee).unwrap().status(), BeeStatus::None);
    assert_eq!(game.colony().bee(bee).unwrap().armor, 9);
}

#[test]
fn win_and_loss_detection() {
    let game = new_game(0, 1, 2, Hive::new(3, 1));
    assert_eq!(game.game_is_won(), Some(true));

    let mut hive = Hive::new(3, 1);
    hive.add_wave(0, 1).add_wave(9, 1);
    let mut game = new_game(0, 1, 2, hive);
    game.take_turn();
    assert_eq!(game.game_is_won(), None);

    game.take_turn();
    game.take_turn();
    assert!(game.colony().queen_has_bees());
    // Bees still in the hive do not matter once the queen is reached
    assert_eq!(game.hive_bee_count(), 1);
    assert_eq!(game.game_is_won(), Some(false));
    assert_eq!(game.outcome(), Outcome::Lost);
}

#[test]
fn water_drowns_everything_but_scuba() {
    let mut game = Game::new(
        Colony::new(20, 1, 4, 2),
        Hive::new(3, 1),
        fastrand::Rng::with_seed(5),
    );
    let scuba = game.deploy_ant("scuba", "0,1").unwrap();
    let thrower = game.deploy_ant("thrower", "0,3").unwrap();
    let grower = game.deploy_ant("grower", "0,0").unwrap();

    game.take_turn();

    assert_eq!(game.place(at(&game, 0, 1)).unwrap().ant(), Some(scuba));
    assert_eq!(game.colony().ant(thrower).unwrap().place, None);
    assert_eq!(game.place(at(&game, 0, 0)).unwrap().ant(), Some(grower));
    assert!(game
        .sink()
        .iter()
        .any(|event| matches!(event, Event::AntDrowned { ant, .. } if *ant == thrower)));
}

#[test]
fn seeded_games_replay_identically() {
    let run = || {
        let mut hive = Hive::new(2, 1);
        hive.add_wave(0, 3).add_wave(2, 3);
        let mut game = Game::new(
            Colony::new(10, 3, 4, 0),
            hive,
            fastrand::Rng::with_seed(77),
        );
        game.deploy_ant("grower", "0,0").unwrap();
        game.deploy_ant("thrower", "1,0").unwrap();
        for _ in 0..6 {
            game.take_turn();
        }
        (game.food(), game.boost_names(), game.sink().clone())
    };

    assert_eq!(run(), run());
}

#[test]
fn stings_never_raise_armor() {
    let mut hive = Hive::new(10, -1);
    hive.add_wave(0, 1);
    let mut game = new_game(10, 1, 1, hive);
    let guard = game.deploy_ant("guard", "0,0").unwrap();

    let mut last = game.colony().ant(guard).unwrap().armor;
    for _ in 0..4 {
        game.take_turn();
        let armor = game.colony().ant(guard).unwrap().armor;
        assert!(armor <= last);
        last = armor;
    }
}

#[test]
fn harvesting_at_max_food_does_not_overflow() {
    let mut game = new_game(u32::MAX, 1, 2, Hive::new(3, 1));
    game.deploy_ant("grower", "0,0").unwrap();

    for _ in 0..20 {
        game.take_turn();
    }
    assert_eq!(game.food(), u32::MAX);
}
