use crate::error::RosterError;
use crate::state::player::{Position, Team};
use crate::state::resources::CollisionBox;
use crate::state::world::{World, LOCAL_SLOT};
use crate::utils::buffers::WorldEvent;

const SHOP_ZONE_SIZE: Position = Position::new(4.0, 3.0, 4.0);

/// Fail if a team has more players than its spawn table
pub fn check_spawn_capacity(world: &World) -> Result<(), RosterError> {
    for team in [Team::Terrorist, Team::CounterTerrorist] {
        let needed = world
            .occupied_slots()
            .filter(|&slot| world.players[slot].team == team)
            .count();
        let available = world.map.spawns(team).len();
        if needed > available {
            return Err(RosterError::SpawnPoolExhausted { team, available });
        }
    }
    Ok(())
}

/// Put every team player on the next free spawn point of their team.
///
/// Terrorists and counter-terrorists have independent counters that restart at
/// zero on every call. Fails before moving anyone if a team has more players
/// than its spawn table. Returns how many players were placed.
pub fn place_all_at_spawns(world: &mut World) -> Result<usize, RosterError> {
    check_spawn_capacity(world)?;

    let mut next_terrorist = 0;
    let mut next_counter = 0;
    let mut placed = 0;

    for slot in 0..world.capacity() {
        let player = &world.players[slot];
        if !player.is_occupied() {
            continue;
        }
        let team = player.team;
        let counter = match team {
            Team::Terrorist => &mut next_terrorist,
            Team::CounterTerrorist => &mut next_counter,
            Team::Spectator => continue,
        };
        let index = *counter;
        *counter += 1;

        world.players[slot].spawn_at = Some(index);
        move_to_spawn(world, slot, team, index);
        placed += 1;
    }

    world.local_view.view_rotation_dirty = true;
    log::debug!(
        "Placed {} players at spawns ({} T, {} CT)",
        placed,
        next_terrorist,
        next_counter
    );
    Ok(placed)
}

/// Put one player back on the spawn point recorded by the last `place_all_at_spawns`
pub fn place_player_at_spawn(world: &mut World, slot: usize) -> Result<(), RosterError> {
    let player = world.occupied_mut(slot)?;
    let team = player.team;
    if team == Team::Spectator {
        return Ok(());
    }
    let index = player.spawn_at.ok_or(RosterError::NoSpawnRecorded(slot))?;

    let available = world.map.spawns(team).len();
    if index >= available {
        return Err(RosterError::SpawnPoolExhausted { team, available });
    }

    move_to_spawn(world, slot, team, index);
    world.local_view.view_rotation_dirty = true;
    Ok(())
}

/// Record a spawn point for a player who has none yet, picking the first one of
/// their team that no teammate holds. Spectators and players with a spawn are left alone.
pub fn assign_free_spawn(world: &mut World, slot: usize) -> Result<(), RosterError> {
    let player = world.occupied_mut(slot)?;
    let team = player.team;
    if team == Team::Spectator || player.spawn_at.is_some() {
        return Ok(());
    }

    let taken: Vec<usize> = world
        .occupied_slots()
        .filter(|&other| other != slot && world.players[other].team == team)
        .filter_map(|other| world.players[other].spawn_at)
        .collect();
    let available = world.map.spawns(team).len();
    let index = (0..available)
        .find(|index| !taken.contains(index))
        .ok_or(RosterError::SpawnPoolExhausted { team, available })?;

    world.players[slot].spawn_at = Some(index);
    Ok(())
}

/// Recompute the buy zone around the local player
pub fn set_shop_zone(world: &mut World, center: Position) {
    let zone = CollisionBox {
        center,
        size: SHOP_ZONE_SIZE,
    };
    world.shop_zone = Some(zone);
    world.push_event(WorldEvent::ShopZoneMoved(zone));
}

fn move_to_spawn(world: &mut World, slot: usize, team: Team, index: usize) {
    let point = world.map.spawns(team)[index];
    let angle = world.map.start_angle(team).unwrap_or_default();

    let player = &mut world.players[slot];
    player.position = point;
    player.lerp_destination = point;
    player.angle = angle;
    player.angle_destination = angle;
    let model = player.resources.as_ref().map(|resources| resources.model.id());

    if let Some(model) = model {
        world.push_event(WorldEvent::ModelMoved {
            model,
            position: point,
        });
    }
    if slot == LOCAL_SLOT {
        set_shop_zone(world, point);
    }
    world.mark_dirty(slot);
}
