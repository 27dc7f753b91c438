use std::io::{self, BufRead, Write};

use crate::error::AgentError;
use crate::game::{Board, Player};

use super::agent::Agent;

/// Input boundary for the human agent: given a validated set of choices,
/// block for input and return one of them.
pub trait Prompter {
    fn choose(&mut self, player: Player, choices: &[usize]) -> io::Result<usize>;
}

/// Prompts on stdout and reads column numbers from stdin, re-prompting until
/// the input parses and names a playable column.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn choose(&mut self, player: Player, choices: &[usize]) -> io::Result<usize> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{:<8}> ", player.name());
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stdin closed while waiting for a move",
                ));
            }
            if let Ok(col) = line.trim().parse::<usize>() {
                if choices.contains(&col) {
                    return Ok(col);
                }
            }
            println!("pick one of {choices:?}");
        }
    }
}

/// An agent driven by an interactive prompt.
pub struct HumanAgent {
    player: Player,
    prompter: Box<dyn Prompter>,
}

impl HumanAgent {
    pub fn new(player: Player) -> Self {
        HumanAgent {
            player,
            prompter: Box::new(StdinPrompter),
        }
    }

    pub fn with_prompter(player: Player, prompter: Box<dyn Prompter>) -> Self {
        HumanAgent { player, prompter }
    }
}

impl Agent for HumanAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn next_move(&mut self, board: &Board) -> Result<usize, AgentError> {
        let choices = board.available_moves();
        if choices.is_empty() {
            return Err(AgentError::NoPlayableColumn);
        }
        Ok(self.prompter.choose(self.player, &choices)?)
    }

    fn name(&self) -> &str {
        "Human"
    }
}
