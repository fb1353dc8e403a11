use crate::domain::economy::set_money;
use crate::domain::vitals::set_health;
use crate::error::RosterError;
use crate::state::player::{Inventory, Player, Position, Team, MAX_HEALTH};
use crate::state::resources::{ModelKind, PlayerResources};
use crate::state::world::{World, LOCAL_SLOT};
use crate::utils::buffers::WorldEvent;

const PLAYER_SIZE: Position = Position::new(0.35, 0.9, 0.35);
const REMOTE_HUMAN_NAME: &str = "Player";

/// Add a player to the first free slot and return that slot.
///
/// The local player always takes slot 0, everyone else the first free slot from 1
/// upward. Bots draw a random unused name from the pool. Nothing changes on error.
pub fn add_player(
    world: &mut World,
    requested_id: u32,
    is_local: bool,
    is_ai: bool,
) -> Result<usize, RosterError> {
    if world.slot_of(requested_id).is_some() {
        return Err(RosterError::DuplicateId(requested_id));
    }

    let slot = if is_local {
        match world.players.get(LOCAL_SLOT) {
            Some(player) if player.is_occupied() => return Err(RosterError::LocalSlotTaken),
            Some(_) => LOCAL_SLOT,
            None => return Err(RosterError::SlotFull),
        }
    } else {
        (1..world.capacity())
            .find(|&slot| !world.players[slot].is_occupied())
            .ok_or(RosterError::SlotFull)?
    };

    let name = if is_local {
        world.local_player_name.clone()
    } else if is_ai {
        world
            .bot_names
            .take(&mut world.rng)
            .ok_or(RosterError::NamePoolExhausted)?
    } else {
        REMOTE_HUMAN_NAME.to_string()
    };

    if let Some(stale) = world.players[slot].resources.take() {
        stale.release(&mut world.events);
    }
    let resources = create_body(world, is_local);

    let mut inventory = Inventory::default();
    inventory.reset_ammo(&world.weapons);
    let spawn_with_armor = world.party_mode.spawn_with_armor;

    world.players[slot] = Player {
        id: Some(requested_id),
        is_local,
        is_ai,
        name,
        team: Team::Spectator,
        armor: if spawn_with_armor { 100 } else { 0 },
        has_headset: spawn_with_armor,
        position: Position::OFF_MAP,
        lerp_destination: Position::OFF_MAP,
        size: PLAYER_SIZE,
        inventory,
        resources: Some(resources),
        ..Default::default()
    };
    world.player_count += 1;
    // A new occupant is synced in full
    world.last_sync_state.remove(&slot);

    set_health(world, slot, MAX_HEALTH)?;
    let start_money = i32::try_from(world.party_mode.start_money).unwrap_or(i32::MAX);
    set_money(world, slot, start_money)?;

    log::info!(
        "Added {} (id {}) to slot {}{}",
        world.players[slot].name,
        requested_id,
        slot,
        if is_ai { " as bot" } else { "" }
    );
    Ok(slot)
}

fn create_body(world: &mut World, is_local: bool) -> PlayerResources {
    let kind = if is_local {
        ModelKind::LocalBody
    } else {
        ModelKind::RemoteBody
    };
    let model = world.handles.model(kind, &mut world.events);
    let physics = if is_local {
        Some(world.handles.physics(&model, &mut world.events))
    } else {
        None
    };

    if !is_local {
        world.push_event(WorldEvent::ModelSkin {
            model: model.id(),
            team: Team::CounterTerrorist,
        });
    }
    world.push_event(WorldEvent::ModelMoved {
        model: model.id(),
        position: Position::OFF_MAP,
    });
    PlayerResources { model, physics }
}

/// Free every slot and release the engine resources they own.
/// Returns how many players were removed.
pub fn remove_all_players(world: &mut World) -> usize {
    let removed = world.player_count;

    for slot in 0..world.capacity() {
        let player = std::mem::take(&mut world.players[slot]);
        if player.is_occupied() {
            world.mark_dirty(slot);
        }
        if let Some(resources) = player.resources {
            resources.release(&mut world.events);
        }
    }

    world.player_count = 0;
    world.bot_names.release_all();
    world.shop_zone = None;

    log::info!("Removed {} players", removed);
    removed
}

/// Move a player to another team and swap the model skin
pub fn set_team(world: &mut World, slot: usize, team: Team) -> Result<(), RosterError> {
    let player = world.occupied_mut(slot)?;
    if player.team != team {
        // Recorded spawn indexes the old team's table
        player.spawn_at = None;
    }
    player.team = team;
    let skin = match (&player.resources, player.is_local, team) {
        (Some(resources), false, Team::Terrorist | Team::CounterTerrorist) => {
            Some(resources.model.id())
        }
        _ => None,
    };

    if let Some(model) = skin {
        world.push_event(WorldEvent::ModelSkin { model, team });
    }
    world.mark_dirty(slot);
    Ok(())
}

/// Create a floor shadow for every remote slot that lacks one.
/// Returns how many were created.
pub fn create_player_shadows(world: &mut World) -> usize {
    let mut created = 0;
    for slot in 1..world.capacity() {
        if world.shadows[slot].is_none() {
            let shadow = world.handles.model(ModelKind::Shadow, &mut world.events);
            world.shadows[slot] = Some(shadow);
            created += 1;
        }
    }
    created
}
