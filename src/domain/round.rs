use crate::domain::bomb::set_bomb_for_random_player;
use crate::domain::economy::add_money_to_team;
use crate::domain::spawn::{check_spawn_capacity, place_all_at_spawns};
use crate::domain::vitals::set_health;
use crate::error::RosterError;
use crate::state::player::{Team, BOMB_SLOT, GRENADE_KINDS, MAX_HEALTH};
use crate::state::world::{RoundState, World, LOCAL_SLOT};
use crate::utils::buffers::WorldEvent;

/// Frames of spawn protection in training
pub const TRAINING_INVINCIBILITY: u32 = 60 * 5;

/// Whether a reset takes away bought gear: after a death, at the side swap and
/// on the first round. Survivors keep their weapons otherwise.
pub fn strips_loadout(world: &World, is_dead: bool) -> bool {
    let rounds_played = world.rounds_played();
    is_dead || world.party_mode.swap_round() == Some(rounds_played) || rounds_played == 0
}

/// Prepare a player for a new round
pub fn reset_player(world: &mut World, slot: usize) -> Result<(), RosterError> {
    let is_dead = world.occupied_mut(slot)?.is_dead;
    let strip = strips_loadout(world, is_dead);
    let spawn_with_armor = world.party_mode.spawn_with_armor;
    let training = world.round_state == RoundState::Training;

    let player = &mut world.players[slot];
    player.stop_reloading();
    player.grenades_bought = [0; GRENADE_KINDS];

    if strip {
        player.has_defuse_kit = false;
        player.armor = 0;
        player.has_headset = false;

        if let Some(gun) = player.team.default_gun() {
            player.inventory.set(1, Some(gun));
        }
        for index in 2..BOMB_SLOT {
            player.inventory.set(index, None);
        }
        if player.inventory.current_weapon().is_none() {
            player.inventory.current = 1;
        }
    }

    set_health(world, slot, MAX_HEALTH)?;

    let weapons = world.weapons.clone();
    let player = &mut world.players[slot];
    if spawn_with_armor {
        player.armor = 100;
        player.has_headset = true;
    }
    if training {
        player.invincibility_timer = TRAINING_INVINCIBILITY;
        player.inventory.current = 1;
    }
    player.is_planting_bomb = false;
    player.bomb_timer = 0;
    player.inventory.reset_ammo(&weapons);

    if slot == LOCAL_SLOT {
        world.local_view.camera_player = LOCAL_SLOT;
        world.local_view.frame_count_during_air = 0;
        world.push_event(WorldEvent::CameraTarget { slot: LOCAL_SLOT });
    } else {
        let ai = &mut player.ai;
        ai.path_count = 0;
        ai.target = None;
        ai.last_seen_target = None;
    }

    log::debug!("Reset slot {} (loadout stripped: {})", slot, strip);
    Ok(())
}

/// Reset everyone, put them on their spawns and pick a bomb carrier.
/// Nothing is reset when a team does not fit its spawn table.
pub fn start_round(world: &mut World) -> Result<(), RosterError> {
    check_spawn_capacity(world)?;
    let slots: Vec<usize> = world.occupied_slots().collect();
    for &slot in &slots {
        reset_player(world, slot)?;
    }
    place_all_at_spawns(world)?;

    match set_bomb_for_random_player(world) {
        Ok(_) | Err(RosterError::NoEligibleTerrorist) => {}
        Err(e) => return Err(e),
    }

    if world.round_state != RoundState::Training {
        world.round_state = RoundState::Playing;
    }
    log::info!(
        "Round {} started with {} players",
        world.rounds_played() + 1,
        slots.len()
    );
    Ok(())
}

/// Score the round for `winner` and pay both teams
pub fn end_round(world: &mut World, winner: Team) {
    match winner {
        Team::Terrorist => world.terrorists_score += 1,
        Team::CounterTerrorist => world.counter_score += 1,
        Team::Spectator => {
            log::warn!("Ignoring round won by spectators");
            return;
        }
    }

    let win_reward = i32::try_from(world.party_mode.win_reward).unwrap_or(i32::MAX);
    let loss_reward = i32::try_from(world.party_mode.loss_reward).unwrap_or(i32::MAX);
    add_money_to_team(world, win_reward, winner);
    add_money_to_team(world, loss_reward, winner.opponent());

    world.round_state = RoundState::RoundEnd;
    log::info!(
        "{:?} won the round (T {} - CT {})",
        winner,
        world.terrorists_score,
        world.counter_score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::{add_player, set_team};
    use crate::state::player::Ammo;
    use crate::state::world::tests::test_world;
    use crate::utils::weapondb::{BOMB, DEFAULT_COUNTER_TERRORIST_GUN, DEFAULT_TERRORIST_GUN};

    const AK47: u32 = 10;

    fn armed_world() -> World {
        let mut world = test_world(4);
        add_player(&mut world, 1, true, false).unwrap();
        add_player(&mut world, 2, false, true).unwrap();
        set_team(&mut world, 0, Team::CounterTerrorist).unwrap();
        set_team(&mut world, 1, Team::Terrorist).unwrap();
        for slot in 0..2 {
            let player = &mut world.players[slot];
            player.inventory.set(2, Some(AK47));
            player.inventory.current = 2;
            player.armor = 100;
            player.has_headset = true;
            player.has_defuse_kit = true;
            player.grenades_bought = [1, 1, 0];
            player.is_reloading = true;
        }
        world.drain_events();
        world
    }

    #[test]
    fn test_first_round_strips_everyone() {
        let mut world = armed_world();
        reset_player(&mut world, 0).unwrap();
        reset_player(&mut world, 1).unwrap();

        let ct = &world.players[0];
        assert_eq!(ct.inventory.slots[1], Some(DEFAULT_COUNTER_TERRORIST_GUN));
        assert_eq!(ct.inventory.slots[2], None);
        assert_eq!(ct.inventory.current, 1);
        assert_eq!(ct.armor, 0);
        assert!(!ct.has_headset);
        assert!(!ct.has_defuse_kit);

        assert_eq!(world.players[1].inventory.slots[1], Some(DEFAULT_TERRORIST_GUN));
    }

    #[test]
    fn test_survivor_keeps_gear_mid_match() {
        let mut world = armed_world();
        world.terrorists_score = 2;
        world.counter_score = 1;

        reset_player(&mut world, 1).unwrap();
        let player = &world.players[1];
        assert_eq!(player.inventory.slots[2], Some(AK47));
        assert_eq!(player.inventory.current, 2);
        assert_eq!(player.armor, 100);
        assert!(player.has_defuse_kit);
        // Transient state is always cleared
        assert!(!player.is_reloading);
        assert_eq!(player.grenades_bought, [0, 0, 0]);
        assert_eq!(player.inventory.ammo[2], Ammo { magazine: 30, reserve: 90 });
    }

    #[test]
    fn test_dead_player_loses_gear_mid_match() {
        let mut world = armed_world();
        world.terrorists_score = 3;
        set_health(&mut world, 1, 0).unwrap();

        reset_player(&mut world, 1).unwrap();
        let player = &world.players[1];
        assert_eq!(player.inventory.slots[2], None);
        assert!(!player.is_dead);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_side_swap_round_strips() {
        let mut world = armed_world();
        world.terrorists_score = 8;
        world.counter_score = 7;
        assert_eq!(world.party_mode.swap_round(), Some(15));

        reset_player(&mut world, 1).unwrap();
        assert_eq!(world.players[1].inventory.slots[2], None);
    }

    #[test]
    fn test_no_swap_without_mode_flag() {
        let mut world = armed_world();
        world.party_mode.middle_party_team_swap = false;
        world.terrorists_score = 8;
        world.counter_score = 7;

        reset_player(&mut world, 1).unwrap();
        assert_eq!(world.players[1].inventory.slots[2], Some(AK47));
    }

    #[test]
    fn test_bomb_slot_survives_strip() {
        let mut world = armed_world();
        world.players[1].inventory.set(BOMB_SLOT, Some(BOMB));
        reset_player(&mut world, 1).unwrap();
        assert_eq!(world.players[1].inventory.slots[BOMB_SLOT], Some(BOMB));
    }

    #[test]
    fn test_training_grants_invincibility() {
        let mut world = armed_world();
        world.round_state = RoundState::Training;
        world.terrorists_score = 1;
        reset_player(&mut world, 1).unwrap();

        assert_eq!(world.players[1].invincibility_timer, TRAINING_INVINCIBILITY);
        assert_eq!(world.players[1].inventory.current, 1);
    }

    #[test]
    fn test_spawn_armor_regranted() {
        let mut world = armed_world();
        world.party_mode.spawn_with_armor = true;
        reset_player(&mut world, 0).unwrap();
        assert_eq!(world.players[0].armor, 100);
        assert!(world.players[0].has_headset);
    }

    #[test]
    fn test_local_and_bot_specific_reset() {
        let mut world = armed_world();
        world.local_view.camera_player = 1;
        world.local_view.frame_count_during_air = 9;
        world.players[1].ai.target = Some(0);
        world.players[1].ai.path_count = 4;
        world.players[1].is_planting_bomb = true;
        world.players[1].bomb_timer = 80;

        reset_player(&mut world, 0).unwrap();
        reset_player(&mut world, 1).unwrap();

        assert_eq!(world.local_view.camera_player, 0);
        assert_eq!(world.local_view.frame_count_during_air, 0);
        assert!(world
            .drain_events()
            .contains(&WorldEvent::CameraTarget { slot: 0 }));
        assert_eq!(world.players[1].ai.target, None);
        assert_eq!(world.players[1].ai.path_count, 0);
        assert!(!world.players[1].is_planting_bomb);
        assert_eq!(world.players[1].bomb_timer, 0);
    }

    #[test]
    fn test_start_round() {
        let mut world = armed_world();
        start_round(&mut world).unwrap();

        assert_eq!(world.round_state, RoundState::Playing);
        assert!(world.players[1].has_bomb);
        assert_eq!(world.players[0].spawn_at, Some(0));
        assert_eq!(world.players[1].spawn_at, Some(0));
    }

    #[test]
    fn test_start_round_without_terrorists() {
        let mut world = armed_world();
        set_team(&mut world, 1, Team::CounterTerrorist).unwrap();
        assert_eq!(start_round(&mut world), Ok(()));
        assert!(world.players.iter().all(|p| !p.has_bomb));
    }

    #[test]
    fn test_start_round_refused_when_spawns_run_out() {
        let mut world = armed_world();
        set_health(&mut world, 1, 0).unwrap();
        world.map.terrorist_spawns.clear();
        world.drain_events();

        assert_eq!(
            start_round(&mut world),
            Err(RosterError::SpawnPoolExhausted {
                team: Team::Terrorist,
                available: 0
            })
        );
        let player = &world.players[1];
        assert!(player.is_dead);
        assert_eq!(player.health, 0);
        assert_eq!(player.inventory.slots[2], Some(AK47));
        assert!(player.is_reloading);
        assert_eq!(world.players[0].armor, 100);
        assert_eq!(world.round_state, RoundState::WaitingPlayers);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_end_round_pays_teams() {
        let mut world = armed_world();
        end_round(&mut world, Team::Terrorist);

        assert_eq!(world.terrorists_score, 1);
        assert_eq!(world.round_state, RoundState::RoundEnd);
        assert_eq!(world.players[1].money, 800 + 3250);
        assert_eq!(world.players[0].money, 800 + 1400);
    }
}
