use crate::cli::Args;
use crate::error::{ParseError, Result};
use crate::simulation::{Game, Hive};
use crate::world::{parse_waves, Colony};

/// Everything needed to set up a game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub tunnels: usize,
    pub tunnel_length: usize,
    pub food: u32,
    pub moat_frequency: usize,
    pub bee_armor: i32,
    pub bee_damage: i32,
    pub waves: Vec<(u32, usize)>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tunnels: 3,
            tunnel_length: 8,
            food: 10,
            moat_frequency: 0,
            bee_armor: 3,
            bee_damage: 1,
            waves: vec![(2, 1), (4, 1), (6, 2), (8, 2), (10, 3)],
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Self {
            tunnels: args.tunnels,
            tunnel_length: args.length,
            food: args.food,
            moat_frequency: args.moat_frequency,
            bee_armor: args.bee_armor,
            bee_damage: args.bee_damage,
            waves: parse_waves(&args.waves)?,
            seed: args.seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tunnels == 0 {
            return Err(ParseError::InvalidConfig("need at least one tunnel".to_string()));
        }
        if self.tunnel_length == 0 {
            return Err(ParseError::InvalidConfig("tunnels need at least one place".to_string()));
        }
        if self.bee_armor <= 0 {
            return Err(ParseError::InvalidConfig("bee armor must be positive".to_string()));
        }
        if self.bee_damage < 0 {
            return Err(ParseError::InvalidConfig("bee damage cannot be negative".to_string()));
        }
        Ok(())
    }

    pub fn colony(&self) -> Colony {
        Colony::new(self.food, self.tunnels, self.tunnel_length, self.moat_frequency)
    }

    pub fn hive(&self) -> Hive {
        let mut hive = Hive::new(self.bee_armor, self.bee_damage);
        for &(turn, count) in &self.waves {
            hive.add_wave(turn, count);
        }
        hive
    }

    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    /// Build a fresh game collecting events in memory
    pub fn build(&self) -> Game {
        Game::new(self.colony(), self.hive(), self.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_cli() {
        let args = Args::parse_from(["ants_vs_bees"]);
        assert_eq!(GameConfig::from_args(&args).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "ants_vs_bees",
            "--tunnels", "1",
            "--length", "4",
            "--moat-frequency", "2",
            "--waves", "0:2",
            "--seed", "5",
        ]);
        let config = GameConfig::from_args(&args).unwrap();

        assert_eq!(config.tunnels, 1);
        assert_eq!(config.tunnel_length, 4);
        assert_eq!(config.waves, vec![(0, 2)]);
        assert_eq!(config.seed, Some(5));

        let game = config.build();
        assert_eq!(game.places().len(), 1);
        assert_eq!(game.hive_bee_count(), 2);
        let flooded = game.colony().place_at(0, 1).unwrap();
        assert!(game.place(flooded).unwrap().is_water());
    }

    #[test]
    fn test_rejects_empty_board() {
        let config = GameConfig {
            tunnels: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ParseError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_bee_damage() {
        let args = Args::parse_from(["ants_vs_bees", "--bee-damage=-1", "--waves", "0:1"]);
        assert!(matches!(GameConfig::from_args(&args), Err(ParseError::InvalidConfig(_))));

        let args = Args::parse_from(["ants_vs_bees", "--bee-damage", "0"]);
        assert!(GameConfig::from_args(&args).is_ok());
    }

    #[test]
    fn test_rejects_bad_waves() {
        let args = Args::parse_from(["ants_vs_bees", "--waves", "soon"]);
        assert!(matches!(GameConfig::from_args(&args), Err(ParseError::InvalidWave(_))));
    }
}
