use crate::domain::audio::{panning, SoundCue, DEATH_CUE_FALLOFF};
use crate::error::RosterError;
use crate::state::player::MAX_HEALTH;
use crate::state::world::{World, LOCAL_SLOT};
use crate::utils::buffers::WorldEvent;

/// Write a player's health and fire the transitions it implies.
///
/// Only two values are significant: `<= 0` kills a living player (once per life)
/// and exactly `100` revives. Anything in between is stored without side effects,
/// so a dead player healed to 50 stays dead.
pub fn set_health(world: &mut World, slot: usize, health: i32) -> Result<(), RosterError> {
    let player = world.occupied_mut(slot)?;
    player.health = health.clamp(0, MAX_HEALTH);
    let was_dead = player.is_dead;

    if health <= 0 {
        if !was_dead {
            on_death(world, slot);
        }
    } else if health == MAX_HEALTH {
        on_revive(world, slot);
    }

    world.mark_dirty(slot);
    Ok(())
}

/// Hurt a player. Returns true when this blow killed them.
///
/// Dead and invincible players ignore damage. The attacker is credited with the
/// kill unless an external rules engine owns kill bookkeeping.
pub fn apply_damage(
    world: &mut World,
    slot: usize,
    amount: u32,
    attacker: Option<usize>,
) -> Result<bool, RosterError> {
    let player = world.occupied_mut(slot)?;
    if amount == 0 || player.is_dead || player.invincibility_timer > 0 {
        return Ok(false);
    }

    let remaining = player.health.saturating_sub(amount.min(i32::MAX as u32) as i32);
    set_health(world, slot, remaining)?;
    if remaining > 0 {
        return Ok(false);
    }

    if let Some(attacker) = attacker.filter(|&a| a != slot) {
        if !world.apply_rules {
            if let Ok(killer) = world.occupied_mut(attacker) {
                killer.kill_count += 1;
                world.mark_dirty(attacker);
            }
        }
    }
    Ok(true)
}

fn on_death(world: &mut World, slot: usize) {
    let apply_rules = world.apply_rules;
    let can_respawn = world.party_mode.can_respawn;
    let respawn_delay = world.party_mode.respawn_delay;

    let player = &mut world.players[slot];
    player.is_dead = true;
    if !apply_rules {
        player.death_count += 1;
        if can_respawn {
            player.need_respawn = true;
            player.respawn_timer = respawn_delay;
        }
    }
    let source = player.position;
    log::info!("{} died (slot {})", player.name, slot);

    if slot == LOCAL_SLOT {
        world.local_view.crosshair_visible = false;
        world.push_event(WorldEvent::AimDisabled);
        world.push_event(WorldEvent::Sound {
            cue: SoundCue::Death,
            spatial: None,
        });
        world.push_event(WorldEvent::CrosshairVisible(false));
    } else {
        let listener = &world.players[LOCAL_SLOT];
        let spatial = panning(listener.position, listener.angle, source, DEATH_CUE_FALLOFF);
        world.push_event(WorldEvent::Sound {
            cue: SoundCue::Death,
            spatial: Some(spatial),
        });
    }
}

fn on_revive(world: &mut World, slot: usize) {
    if slot == LOCAL_SLOT {
        let view = &mut world.local_view;
        view.crosshair_visible = true;
        view.death_camera_animation = 0;
        view.death_camera_y_offset = 0.0;
        view.red_health_text_counter = 0;
        world.push_event(WorldEvent::CrosshairVisible(true));
    }

    let player = &mut world.players[slot];
    player.is_dead = false;
    player.need_respawn = false;
}
