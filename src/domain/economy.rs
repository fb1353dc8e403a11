use crate::error::RosterError;
use crate::state::player::{Player, Team};
use crate::state::world::{World, LOCAL_SLOT};
use crate::utils::buffers::{SmallSlotVec, WorldEvent};

/// Set a player's money, clamped to `[0, max money]`. Returns the new balance.
pub fn set_money(world: &mut World, slot: usize, amount: i32) -> Result<u32, RosterError> {
    let max_money = world.party_mode.max_money;
    let player = world.occupied_mut(slot)?;
    player.money = (amount.max(0) as u32).min(max_money);
    let balance = player.money;

    on_money_updated(world, slot);
    Ok(balance)
}

/// Give money to a player. Non-positive amounts do nothing.
pub fn add_money(world: &mut World, slot: usize, amount: i32) -> Result<u32, RosterError> {
    let max_money = world.party_mode.max_money;
    let player = world.occupied_mut(slot)?;
    if amount <= 0 {
        return Ok(player.money);
    }
    let balance = credit(player, amount as u32, max_money);

    on_money_updated(world, slot);
    Ok(balance)
}

/// Take money from a player, never below zero. Non-positive amounts do nothing.
pub fn reduce_money(world: &mut World, slot: usize, amount: i32) -> Result<u32, RosterError> {
    let player = world.occupied_mut(slot)?;
    if amount <= 0 {
        return Ok(player.money);
    }
    player.money = player.money.saturating_sub(amount as u32);
    let balance = player.money;

    on_money_updated(world, slot);
    Ok(balance)
}

/// Give money to every player of a team. Returns how many players were paid.
pub fn add_money_to_team(world: &mut World, amount: i32, team: Team) -> usize {
    if amount <= 0 {
        return 0;
    }

    let max_money = world.party_mode.max_money;
    let mut paid = SmallSlotVec::new();
    for (slot, player) in world.players.iter_mut().enumerate() {
        if player.is_occupied() && player.team == team {
            credit(player, amount as u32, max_money);
            paid.push(slot);
        }
    }
    for &slot in &paid {
        on_money_updated(world, slot);
    }

    log::debug!("Paid {} to {} {:?} players", amount, paid.len(), team);
    paid.len()
}

fn credit(player: &mut Player, amount: u32, max_money: u32) -> u32 {
    player.money = player.money.saturating_add(amount).min(max_money);
    player.money
}

fn on_money_updated(world: &mut World, slot: usize) {
    world.mark_dirty(slot);
    // Refresh the shop screen if it is showing the balance
    if slot == LOCAL_SLOT && world.menu.shows_money() {
        world.push_event(WorldEvent::ShopRefresh);
    }
}
