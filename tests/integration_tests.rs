use std::sync::Arc;

use strikeroster::domain::{bomb, economy, registry, round, spawn, vitals};
use strikeroster::tick::world_tick::{run_frame, world_tick_loop};
use strikeroster::utils::weapondb::WeaponDb;
use strikeroster::{Config, LogEngine, RosterError, RoundState, Team, World, WorldCommand};
use tokio::sync::mpsc;

// Blackbox tests driving the roster the way the round layer does

fn world(capacity: usize, seed: u64) -> World {
    let mut config = Config::default();
    config.max_players = capacity;
    config.rng_seed = Some(seed);
    World::from_config(&config, Arc::new(WeaponDb::load())).unwrap()
}

/// Local CT in slot 0, bots alternating T/CT after it
fn five_a_side(seed: u64) -> World {
    let mut world = world(6, seed);
    registry::add_player(&mut world, 1, true, false).unwrap();
    registry::set_team(&mut world, 0, Team::CounterTerrorist).unwrap();
    for id in 2..=5 {
        let slot = registry::add_player(&mut world, id, false, true).unwrap();
        let team = if slot % 2 == 1 { Team::Terrorist } else { Team::CounterTerrorist };
        registry::set_team(&mut world, slot, team).unwrap();
    }
    world
}

#[test]
fn test_full_round_cycle() {
    let mut world = five_a_side(11);
    round::start_round(&mut world).unwrap();

    let carriers: Vec<usize> = (0..6).filter(|&s| world.players[s].has_bomb).collect();
    assert_eq!(carriers.len(), 1);
    assert_eq!(world.players[carriers[0]].team, Team::Terrorist);

    // CT wins after both terrorists die
    assert!(vitals::apply_damage(&mut world, 1, 150, Some(0)).unwrap());
    assert!(vitals::apply_damage(&mut world, 3, 150, Some(2)).unwrap());
    round::end_round(&mut world, Team::CounterTerrorist);

    assert_eq!(world.players[0].kill_count, 1);
    assert_eq!(world.players[2].kill_count, 1);
    assert_eq!(world.counter_score, 1);

    round::start_round(&mut world).unwrap();
    assert!(world.players.iter().filter(|p| p.is_occupied()).all(|p| !p.is_dead));
    assert_eq!(world.round_state, RoundState::Playing);
}

#[test]
fn test_money_example_clamps_at_party_max() {
    let mut world = five_a_side(1);
    assert_eq!(world.party_mode.max_money, 16000);
    economy::set_money(&mut world, 0, 15900).unwrap();
    assert_eq!(economy::add_money(&mut world, 0, 500).unwrap(), 16000);
}

#[test]
fn test_bomb_rank_example() {
    let mut world = world(8, 5);
    registry::add_player(&mut world, 1, true, false).unwrap();
    registry::set_team(&mut world, 0, Team::CounterTerrorist).unwrap();
    for id in 2..=7 {
        let slot = registry::add_player(&mut world, id, false, true).unwrap();
        let team = if slot % 2 == 0 { Team::Terrorist } else { Team::CounterTerrorist };
        registry::set_team(&mut world, slot, team).unwrap();
    }

    // Terrorists sit in slots 2, 4 and 6; rank 1 is slot 4
    assert_eq!(bomb::give_bomb_to_terrorist_rank(&mut world, 1), Ok(4));
}

#[test]
fn test_registry_is_reusable() {
    let mut world = five_a_side(3);
    spawn::place_all_at_spawns(&mut world).unwrap();
    registry::remove_all_players(&mut world);

    assert_eq!(world.player_count, 0);
    assert!(world.shop_zone.is_none());
    for id in 1..=6 {
        registry::add_player(&mut world, id, id == 1, id != 1).unwrap();
    }
    assert_eq!(registry::add_player(&mut world, 7, false, false), Err(RosterError::SlotFull));
}

#[test]
fn test_frames_keep_engine_in_step() {
    let mut world = world(4, 9);
    let mut engine = LogEngine::new();
    registry::create_player_shadows(&mut world);

    run_frame(
        &mut world,
        vec![
            WorldCommand::AddPlayer { id: 1, is_local: true, is_ai: false },
            WorldCommand::AddPlayer { id: 2, is_local: false, is_ai: true },
            WorldCommand::SetTeam { slot: 0, team: Team::Terrorist },
            WorldCommand::SetTeam { slot: 1, team: Team::CounterTerrorist },
            WorldCommand::StartRound,
        ],
        &mut engine,
    );
    // Two bodies plus three shadows
    assert_eq!(engine.live_models(), 5);
    assert!(world.players[0].has_bomb);

    run_frame(&mut world, vec![WorldCommand::RemoveAllPlayers], &mut engine);
    assert_eq!(engine.live_models(), 3);
    assert_eq!(engine.live_physics(), 0);
}

#[tokio::test]
async fn test_tick_loop_match() {
    let world = world(6, 21);
    let (tx, rx) = mpsc::channel(64);
    let mut config = Config::default();
    config.tick_rate_hz = 1000;
    let handle = tokio::spawn(world_tick_loop(
        world,
        rx,
        Box::new(LogEngine::new()),
        Arc::new(config),
    ));

    tx.send(WorldCommand::AddPlayer { id: 1, is_local: true, is_ai: false }).await.unwrap();
    tx.send(WorldCommand::AddPlayer { id: 2, is_local: false, is_ai: true }).await.unwrap();
    tx.send(WorldCommand::SetTeam { slot: 0, team: Team::CounterTerrorist }).await.unwrap();
    tx.send(WorldCommand::SetTeam { slot: 1, team: Team::Terrorist }).await.unwrap();
    tx.send(WorldCommand::StartRound).await.unwrap();
    tx.send(WorldCommand::EndRound { winner: Team::Terrorist }).await.unwrap();
    drop(tx);

    let world = handle.await.unwrap();
    assert_eq!(world.terrorists_score, 1);
    assert_eq!(world.players[1].money, 800 + 3250);
    assert!(world.players[1].has_bomb);
}
