use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::domain::{economy, registry, round, timers, vitals};
use crate::error::RosterError;
use crate::state::commands::{drain_and_coalesce, WorldCommand};
use crate::state::world::World;
use crate::tick::delta_sync;
use crate::tick::engine::Engine;
use crate::utils::buffers::SmallEventVec;
use crate::utils::config::Config;

/// World tick loop - processes commands and forwards side effects, once per frame.
/// Runs until every command sender is dropped, then hands the world back.
pub async fn world_tick_loop(
    mut world: World,
    mut command_rx: mpsc::Receiver<WorldCommand>,
    mut engine: Box<dyn Engine>,
    config: Arc<Config>,
) -> World {
    let tick_interval = Duration::from_millis(config.tick_interval_ms());
    let mut tick_timer = interval(tick_interval);
    let mut frame: u64 = 0;

    loop {
        tick_timer.tick().await;
        frame += 1;

        let drained = drain_and_coalesce(&mut command_rx);
        let sync = run_frame(&mut world, drained.commands, engine.as_mut());
        if !sync.is_empty() {
            log::trace!("Frame {}: {} sync events", frame, sync.len());
        }

        if drained.disconnected {
            log::info!("Command queue closed after {} frames", frame);
            return world;
        }
    }
}

/// One frame: apply commands, advance timers, flush engine events, collect sync deltas
pub fn run_frame(
    world: &mut World,
    commands: Vec<WorldCommand>,
    engine: &mut dyn Engine,
) -> SmallEventVec {
    for cmd in commands {
        let label = format!("{:?}", cmd);
        if let Err(e) = process_command(world, cmd) {
            match e {
                RosterError::SlotFull
                | RosterError::LocalSlotTaken
                | RosterError::DuplicateId(_)
                | RosterError::NamePoolExhausted
                | RosterError::SpawnPoolExhausted { .. } => {
                    log::warn!("{} rejected: {}", label, e)
                }
                _ => log::debug!("{} ignored: {}", label, e),
            }
        }
    }

    let respawned = timers::tick_timers(world);
    if !respawned.is_empty() {
        log::debug!("Respawned slots {:?}", respawned);
    }

    for event in world.drain_events() {
        engine.apply(&event);
    }

    let sync = delta_sync::collect_dirty_events(world);
    world.clear_dirty();
    sync
}

/// Process a single command
pub fn process_command(world: &mut World, cmd: WorldCommand) -> Result<(), RosterError> {
    match cmd {
        WorldCommand::AddPlayer {
            id,
            is_local,
            is_ai,
        } => registry::add_player(world, id, is_local, is_ai).map(|_| ()),
        WorldCommand::SetTeam { slot, team } => registry::set_team(world, slot, team),
        WorldCommand::RemoveAllPlayers => {
            registry::remove_all_players(world);
            Ok(())
        }
        WorldCommand::Move {
            slot,
            position,
            angle,
        } => {
            let player = world.occupied_mut(slot)?;
            player.lerp_destination = position;
            player.angle_destination = angle;
            Ok(())
        }
        WorldCommand::Damage {
            slot,
            amount,
            attacker,
        } => vitals::apply_damage(world, slot, amount, attacker).map(|_| ()),
        WorldCommand::SetHealth { slot, health } => vitals::set_health(world, slot, health),
        WorldCommand::Reward { team, amount } => {
            economy::add_money_to_team(world, amount, team);
            Ok(())
        }
        WorldCommand::Spend { slot, amount } => {
            economy::reduce_money(world, slot, amount).map(|_| ())
        }
        WorldCommand::StartRound => round::start_round(world),
        WorldCommand::EndRound { winner } => {
            round::end_round(world, winner);
            Ok(())
        }
    }
}
