use clap::Parser;

/// CLI arguments for the ants vs. bees game
#[derive(Parser, Debug)]
#[command(name = "ants_vs_bees", about = "🐜 Defend the ant queen from waves of bees")]
pub struct Args {
    /// Number of tunnels
    #[arg(short = 't', long, default_value_t = 3)]
    pub tunnels: usize,

    /// Places per tunnel
    #[arg(short = 'l', long, default_value_t = 8)]
    pub length: usize,

    /// Starting food
    #[arg(short = 'f', long, default_value_t = 10)]
    pub food: u32,

    /// Flood every n-th place of each tunnel (0 = dry)
    #[arg(long, default_value_t = 0)]
    pub moat_frequency: usize,

    /// Armor of every bee
    #[arg(long, default_value_t = 3)]
    pub bee_armor: i32,

    /// Sting damage of every bee
    #[arg(long, default_value_t = 1)]
    pub bee_damage: i32,

    /// Wave schedule as turn:count pairs
    #[arg(short = 'w', long, default_value = "2:1,4:1,6:2,8:2,10:3")]
    pub waves: String,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    pub script: Option<String>,

    /// Suppress event logs
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}
