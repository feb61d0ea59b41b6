use crate::events::Event;
use crate::render;
use crate::simulation::{Game, Outcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  show                          Shows the current game board.
  deploy <antType> <row,col>    Deploys an ant (aliases: add, d).
  remove <row,col>              Removes the ant from a place (alias: rm).
  boost <boost> <row,col>       Applies a boost to the ant at a place (alias: b).
  turn                          Ends the turn, ants and bees act (aliases: t, end turn, take turn).
  help                          Shows this message.
  quit                          Leaves the game (alias: exit).";

/// One line of player input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Deploy { ant_type: String, location: String },
    Remove { location: String },
    Boost { boost: String, location: String },
    Turn,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line; `None` if it is not a known command
    pub fn parse(line: &str) -> Option<Command> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["show"] => Command::Show,
            ["deploy" | "add" | "d", ant_type, location] => Command::Deploy {
                ant_type: ant_type.to_string(),
                location: location.to_string(),
            },
            ["remove" | "rm", location] => Command::Remove {
                location: location.to_string(),
            },
            ["boost" | "b", boost, location] => Command::Boost {
                boost: boost.to_string(),
                location: location.to_string(),
            },
            ["turn" | "t"] | ["end" | "take", "turn"] => Command::Turn,
            ["help"] => Command::Help,
            ["quit" | "exit"] => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Line-oriented front end driving a [`Game`]
pub struct Shell<'a, W: Write> {
    game: &'a mut Game,
    out: W,
    quiet: bool,
    prompt: bool,
}

impl<'a, W: Write> Shell<'a, W> {
    pub fn new(game: &'a mut Game, out: W) -> Self {
        Self {
            game,
            out,
            quiet: false,
            prompt: false,
        }
    }

    /// Suppress event logs
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a prompt before each command
    pub fn prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Play until the game ends, the player quits or input runs out
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<Outcome> {
        self.show()?;
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "{} ", "AvB $".green())?;
                self.out.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Command::parse(line) {
                Some(Command::Quit) => break,
                Some(command) => {
                    if let Some(outcome) = self.execute(command)? {
                        return Ok(outcome);
                    }
                }
                None => writeln!(
                    self.out,
                    "Unknown command: {}. Type 'help' for a list of commands.",
                    line
                )?,
            }
        }
        Ok(self.game.outcome())
    }

    /// Run one command; returns the outcome once the game is decided
    pub fn execute(&mut self, command: Command) -> io::Result<Option<Outcome>> {
        match command {
            Command::Show => self.show()?,
            Command::Deploy { ant_type, location } => {
                match self.game.deploy_ant(&ant_type, &location) {
                    Ok(_) => {
                        self.log_events()?;
                        self.show()?;
                    }
                    Err(err) => writeln!(self.out, "Invalid deployment: {}.", err)?,
                }
            }
            Command::Remove { location } => match self.game.remove_ant(&location) {
                Ok(()) => {
                    self.log_events()?;
                    self.show()?;
                }
                Err(err) => writeln!(self.out, "Invalid removal: {}.", err)?,
            },
            Command::Boost { boost, location } => match self.game.boost_ant(&boost, &location) {
                Ok(()) => self.log_events()?,
                Err(err) => writeln!(self.out, "Invalid boost: {}", err)?,
            },
            Command::Turn => {
                self.game.take_turn();
                writeln!(self.out)?;
                self.log_events()?;
                writeln!(self.out)?;
                self.show()?;
                return self.announce();
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Some(self.game.outcome())),
        }
        Ok(None)
    }

    fn announce(&mut self) -> io::Result<Option<Outcome>> {
        match self.game.outcome() {
            Outcome::Won => {
                writeln!(
                    self.out,
                    "{}",
                    "Yaaaay---\nAll bees are vanquished. You win!\n".green()
                )?;
                Ok(Some(Outcome::Won))
            }
            Outcome::Lost => {
                writeln!(
                    self.out,
                    "{}",
                    "Bzzzzz---\nThe ant queen has perished! Please try again.\n".yellow()
                )?;
                Ok(Some(Outcome::Lost))
            }
            Outcome::Ongoing => Ok(None),
        }
    }

    fn show(&mut self) -> io::Result<()> {
        write!(self.out, "{}", render::board(&*self.game))
    }

    fn log_events(&mut self) -> io::Result<()> {
        let events: Vec<Event> = std::mem::take(self.game.sink_mut());
        if self.quiet {
            return Ok(());
        }
        for event in &events {
            writeln!(self.out, "{}", render::describe(self.game.colony(), event))?;
        }
        Ok(())
    }
}
