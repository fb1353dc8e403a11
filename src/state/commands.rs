use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::state::player::{Position, Team};

/// Command sent from the round/UI/network layers to the world tick loop
#[derive(Debug, Clone, PartialEq)]
pub enum WorldCommand {
    // Roster
    AddPlayer {
        id: u32,
        is_local: bool,
        is_ai: bool,
    },
    SetTeam {
        slot: usize,
        team: Team,
    },
    RemoveAllPlayers,

    // Movement (only latest kept per slot)
    Move {
        slot: usize,
        position: Position,
        angle: f32,
    },

    // Vitals
    Damage {
        slot: usize,
        amount: u32,
        attacker: Option<usize>,
    },
    SetHealth {
        slot: usize,
        health: i32,
    },

    // Economy
    Reward {
        team: Team,
        amount: i32,
    },
    Spend {
        slot: usize,
        amount: i32,
    },

    // Round flow
    StartRound,
    EndRound {
        winner: Team,
    },
}

/// Result of draining the queue for one frame
#[derive(Debug, Default)]
pub struct Drained {
    pub commands: Vec<WorldCommand>,
    /// Every sender is gone and nothing is left to read
    pub disconnected: bool,
}

/// Coalesce commands from queue, keeping only the latest move per slot.
/// Moves are appended after the other commands, in slot order.
pub fn drain_and_coalesce(rx: &mut mpsc::Receiver<WorldCommand>) -> Drained {
    let mut latest_moves: HashMap<usize, WorldCommand> = HashMap::new();
    let mut drained = Drained::default();

    loop {
        match rx.try_recv() {
            Ok(WorldCommand::Move {
                slot,
                position,
                angle,
            }) => {
                latest_moves.insert(
                    slot,
                    WorldCommand::Move {
                        slot,
                        position,
                        angle,
                    },
                );
            }
            Ok(cmd) => drained.commands.push(cmd),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                drained.disconnected = true;
                break;
            }
        }
    }

    let mut moves: Vec<(usize, WorldCommand)> = latest_moves.into_iter().collect();
    moves.sort_by_key(|(slot, _)| *slot);
    drained.commands.extend(moves.into_iter().map(|(_, cmd)| cmd));
    drained
}
