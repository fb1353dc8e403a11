use rand::Rng;

use crate::error::RosterError;
use crate::state::player::{Team, BOMB_SLOT};
use crate::state::world::{World, LOCAL_SLOT};
use crate::utils::weapondb::BOMB;

/// Take the bomb away from everyone, then hand it to one terrorist.
///
/// A terrorist local player always gets it. Otherwise a uniformly random
/// terrorist among the other slots is chosen. Returns the carrier's slot.
pub fn set_bomb_for_random_player(world: &mut World) -> Result<usize, RosterError> {
    let terrorist_count = strip_bomb(world);

    if is_terrorist(world, LOCAL_SLOT) {
        give_bomb(world, LOCAL_SLOT);
        return Ok(LOCAL_SLOT);
    }

    if terrorist_count == 0 {
        log::debug!("No terrorist to carry the bomb");
        return Err(RosterError::NoEligibleTerrorist);
    }

    let rank = world.rng.gen_range(0..terrorist_count);
    give_bomb_to_terrorist_rank(world, rank)
}

/// Give the bomb to the `rank`-th terrorist (0-based, slot order, local slot excluded)
/// after taking it from whoever had it
pub fn give_bomb_to_terrorist_rank(world: &mut World, rank: usize) -> Result<usize, RosterError> {
    strip_bomb(world);
    let carrier = (1..world.capacity())
        .filter(|&slot| is_terrorist(world, slot))
        .nth(rank)
        .ok_or(RosterError::NoEligibleTerrorist)?;

    give_bomb(world, carrier);
    Ok(carrier)
}

/// Clear every bomb flag and bomb slot. Returns the number of terrorists.
fn strip_bomb(world: &mut World) -> usize {
    let mut terrorists = 0;
    for slot in 0..world.capacity() {
        let player = &mut world.players[slot];
        let had_bomb = player.has_bomb;
        player.inventory.set(BOMB_SLOT, None);
        player.has_bomb = false;
        if player.is_occupied() && player.team == Team::Terrorist {
            terrorists += 1;
        }
        if had_bomb {
            world.mark_dirty(slot);
        }
    }
    terrorists
}

fn is_terrorist(world: &World, slot: usize) -> bool {
    world
        .players
        .get(slot)
        .map(|player| player.is_occupied() && player.team == Team::Terrorist)
        .unwrap_or(false)
}

fn give_bomb(world: &mut World, slot: usize) {
    let player = &mut world.players[slot];
    player.has_bomb = true;
    player.inventory.set(BOMB_SLOT, Some(BOMB));
    log::info!("{} carries the bomb (slot {})", player.name, slot);
    world.mark_dirty(slot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::{add_player, set_team};
    use crate::state::world::tests::test_world;

    /// Local player plus bots in slots 1..=teams.len()
    fn world_with(local: Team, bots: &[Team]) -> World {
        let mut world = test_world(8);
        add_player(&mut world, 100, true, false).unwrap();
        set_team(&mut world, 0, local).unwrap();
        for (i, &team) in bots.iter().enumerate() {
            let slot = add_player(&mut world, i as u32 + 1, false, true).unwrap();
            set_team(&mut world, slot, team).unwrap();
        }
        world
    }

    fn carriers(world: &World) -> Vec<usize> {
        (0..world.capacity())
            .filter(|&slot| world.players[slot].has_bomb)
            .collect()
    }

    #[test]
    fn test_rank_picks_terrorist_in_slot_order() {
        use Team::*;
        // Terrorists at slots 2, 4 and 6
        let mut world = world_with(
            CounterTerrorist,
            &[CounterTerrorist, Terrorist, CounterTerrorist, Terrorist, Spectator, Terrorist],
        );

        assert_eq!(give_bomb_to_terrorist_rank(&mut world, 1), Ok(4));
        assert_eq!(carriers(&world), vec![4]);
        assert_eq!(world.players[4].inventory.slots[BOMB_SLOT], Some(BOMB));
    }

    #[test]
    fn test_local_terrorist_always_carries() {
        let mut world = world_with(Team::Terrorist, &[Team::Terrorist, Team::Terrorist]);
        for _ in 0..10 {
            assert_eq!(set_bomb_for_random_player(&mut world), Ok(0));
            assert_eq!(carriers(&world), vec![0]);
        }
    }

    #[test]
    fn test_exactly_one_carrier() {
        let mut world = world_with(
            Team::CounterTerrorist,
            &[Team::Terrorist, Team::Terrorist, Team::CounterTerrorist, Team::Terrorist],
        );
        for _ in 0..20 {
            let carrier = set_bomb_for_random_player(&mut world).unwrap();
            assert_eq!(carriers(&world), vec![carrier]);
            assert_eq!(world.players[carrier].team, Team::Terrorist);
            let bomb_slots = world
                .players
                .iter()
                .filter(|p| p.inventory.slots[BOMB_SLOT].is_some())
                .count();
            assert_eq!(bomb_slots, 1);
        }
    }

    #[test]
    fn test_no_terrorists_is_harmless() {
        let mut world = world_with(Team::CounterTerrorist, &[Team::CounterTerrorist]);
        world.players[1].has_bomb = true;
        world.players[1].inventory.set(BOMB_SLOT, Some(BOMB));

        assert_eq!(set_bomb_for_random_player(&mut world), Err(RosterError::NoEligibleTerrorist));
        assert!(carriers(&world).is_empty());
        assert_eq!(world.players[1].inventory.slots[BOMB_SLOT], None);
    }

    #[test]
    fn test_empty_world() {
        let mut world = test_world(4);
        assert_eq!(set_bomb_for_random_player(&mut world), Err(RosterError::NoEligibleTerrorist));
    }

    #[test]
    fn test_rank_out_of_range() {
        let mut world = world_with(Team::CounterTerrorist, &[Team::Terrorist]);
        assert_eq!(give_bomb_to_terrorist_rank(&mut world, 1), Err(RosterError::NoEligibleTerrorist));
    }
}
