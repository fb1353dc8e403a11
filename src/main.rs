use std::sync::Arc;
use tokio::sync::mpsc;

use strikeroster::domain::registry;
use strikeroster::tick::world_tick::world_tick_loop;
use strikeroster::utils::weapondb::WeaponDb;
use strikeroster::{Config, LogEngine, Team, World, WorldCommand};

const BOTS: u32 = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    setup_logging(&config)?;

    // Load immutable globals
    let weapons = Arc::new(WeaponDb::load());
    let config = Arc::new(config);

    let mut world = World::from_config(&config, weapons)?;
    registry::create_player_shadows(&mut world);
    log::info!(
        "World ready: {} slots, {} on {}",
        world.capacity(),
        world.party_mode.name,
        world.map.name
    );

    let (tx, rx) = mpsc::channel::<WorldCommand>(1000);
    let tick = tokio::spawn(world_tick_loop(
        world,
        rx,
        Box::new(LogEngine::new()),
        config.clone(),
    ));

    // A short scripted match: local player plus bots, one round each way
    tx.send(WorldCommand::AddPlayer { id: 1, is_local: true, is_ai: false }).await?;
    tx.send(WorldCommand::SetTeam { slot: 0, team: Team::CounterTerrorist }).await?;
    for id in 0..BOTS {
        let slot = id as usize + 1;
        let team = if id % 2 == 0 { Team::Terrorist } else { Team::CounterTerrorist };
        tx.send(WorldCommand::AddPlayer { id: id + 2, is_local: false, is_ai: true }).await?;
        tx.send(WorldCommand::SetTeam { slot, team }).await?;
    }

    tx.send(WorldCommand::StartRound).await?;
    tx.send(WorldCommand::Damage { slot: 1, amount: 100, attacker: Some(0) }).await?;
    tx.send(WorldCommand::Damage { slot: 3, amount: 100, attacker: Some(0) }).await?;
    tx.send(WorldCommand::EndRound { winner: Team::CounterTerrorist }).await?;
    tx.send(WorldCommand::StartRound).await?;
    tx.send(WorldCommand::Spend { slot: 0, amount: 2500 }).await?;
    tx.send(WorldCommand::EndRound { winner: Team::Terrorist }).await?;
    tx.send(WorldCommand::RemoveAllPlayers).await?;
    drop(tx);

    let world = tick.await?;
    log::info!(
        "Match over: T {} - CT {}",
        world.terrorists_score,
        world.counter_score
    );
    Ok(())
}

fn setup_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Utc::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(config.log_level_filter())
        .chain(std::io::stdout());
    if let Some(path) = &config.log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;
    Ok(())
}
