use crate::domain::round::reset_player;
use crate::domain::spawn::{assign_free_spawn, place_player_at_spawn};
use crate::error::RosterError;
use crate::state::world::World;

/// Advance per-player countdowns by one frame. Returns the slots respawned this frame.
///
/// A respawn that cannot get a spawn point leaves the player dead with
/// `need_respawn` set, so it is tried again on the next frame.
pub fn tick_timers(world: &mut World) -> Vec<usize> {
    let mut due = Vec::new();

    for (slot, player) in world.players.iter_mut().enumerate() {
        if !player.is_occupied() {
            continue;
        }
        player.invincibility_timer = player.invincibility_timer.saturating_sub(1);

        if player.need_respawn {
            player.respawn_timer = player.respawn_timer.saturating_sub(1);
            if player.respawn_timer == 0 {
                due.push(slot);
            }
        }
    }

    due.retain(|&slot| match respawn(world, slot) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Respawn of slot {} postponed: {}", slot, e);
            false
        }
    });
    due
}

/// Move to the spawn first: it validates before touching anything, so a
/// failure leaves the player dead and still waiting.
fn respawn(world: &mut World, slot: usize) -> Result<(), RosterError> {
    assign_free_spawn(world, slot)?;
    place_player_at_spawn(world, slot)?;
    reset_player(world, slot)?;
    world.players[slot].need_respawn = false;
    log::debug!("Respawned slot {}", slot);
    Ok(())
}
