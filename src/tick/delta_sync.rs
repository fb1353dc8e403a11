use crate::state::world::World;
use crate::utils::buffers::{SmallEventVec, SyncEvent};

/// Collect dirty events for delta-based state sync
/// Only includes changed fields compared to last sync state
pub fn collect_dirty_events(world: &mut World) -> SmallEventVec {
    let mut events = SmallEventVec::new();

    for &slot in &world.dirty_players {
        let Some(player) = world.players.get(slot) else {
            continue;
        };
        if !player.is_occupied() {
            if world.last_sync_state.remove(&slot).is_some() {
                events.push(SyncEvent::PlayerRemoved { slot });
            }
            continue;
        }
        let last = world.last_sync_state.get(&slot);

        if last.map(|l| l.health != player.health).unwrap_or(true) {
            events.push(SyncEvent::HealthChanged {
                slot,
                health: player.health,
            });
        }

        if last.map(|l| l.is_dead != player.is_dead).unwrap_or(true) {
            events.push(SyncEvent::DeathChanged {
                slot,
                is_dead: player.is_dead,
            });
        }

        if last.map(|l| l.money != player.money).unwrap_or(true) {
            events.push(SyncEvent::MoneyChanged {
                slot,
                money: player.money,
            });
        }

        if last.map(|l| l.team != player.team).unwrap_or(true) {
            events.push(SyncEvent::TeamChanged {
                slot,
                team: player.team,
            });
        }

        if last
            .map(|l| l.armor != player.armor || l.has_headset != player.has_headset)
            .unwrap_or(true)
        {
            events.push(SyncEvent::ArmorChanged {
                slot,
                armor: player.armor,
                has_headset: player.has_headset,
            });
        }

        if last.map(|l| l.has_bomb != player.has_bomb).unwrap_or(true) {
            events.push(SyncEvent::BombChanged {
                slot,
                has_bomb: player.has_bomb,
            });
        }

        if last
            .map(|l| l.kill_count != player.kill_count || l.death_count != player.death_count)
            .unwrap_or(true)
        {
            events.push(SyncEvent::StatsChanged {
                slot,
                kills: player.kill_count,
                deaths: player.death_count,
            });
        }

        world.last_sync_state.insert(slot, player.to_sync_state(slot));
    }

    events
}
