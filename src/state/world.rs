use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::RosterError;
use crate::state::player::{Player, PlayerSyncState};
use crate::state::resources::{CollisionBox, HandleAllocator, ModelHandle};
use crate::utils::buffers::{SmallSlotVec, WorldEvent, WorldEventVec};
use crate::utils::config::{Config, ConfigError};
use crate::utils::maps::{MapData, MapDb};
use crate::utils::names::NamePool;
use crate::utils::partymodes::{PartyMode, PartyModeDb};
use crate::utils::weapondb::WeaponDb;

pub const LOCAL_SLOT: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    Training,
    #[default]
    WaitingPlayers,
    Playing,
    RoundEnd,
}

/// Screen the local player currently looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    Game,
    Shop,
    ShopCategories,
    Score,
}

impl Menu {
    pub fn shows_money(self) -> bool {
        matches!(self, Menu::Shop | Menu::ShopCategories)
    }
}

/// Presentation state that only exists for the local player
#[derive(Debug, Clone, PartialEq)]
pub struct LocalView {
    pub crosshair_visible: bool,
    pub death_camera_animation: u32,
    pub death_camera_y_offset: f32,
    pub red_health_text_counter: u32,
    pub frame_count_during_air: u32,
    pub camera_player: usize,
    pub view_rotation_dirty: bool,
}

impl Default for LocalView {
    fn default() -> Self {
        Self {
            crosshair_visible: true,
            death_camera_animation: 0,
            death_camera_y_offset: 0.0,
            red_health_text_counter: 0,
            frame_count_during_air: 0,
            camera_player: LOCAL_SLOT,
            view_rotation_dirty: false,
        }
    }
}

/// Everything the per-player logic reads and writes
#[derive(Debug)]
pub struct World {
    pub players: Vec<Player>,
    pub shadows: Vec<Option<ModelHandle>>,
    pub player_count: usize,

    pub party_mode: PartyMode,
    pub map: MapData,
    pub weapons: Arc<WeaponDb>,

    // Owned by the rules/round layer, read here
    pub round_state: RoundState,
    pub terrorists_score: u32,
    pub counter_score: u32,
    pub apply_rules: bool,

    pub menu: Menu,
    pub local_view: LocalView,
    pub shop_zone: Option<CollisionBox>,
    pub local_player_name: String,
    pub bot_names: NamePool,

    pub(crate) rng: StdRng,
    pub(crate) handles: HandleAllocator,
    pub(crate) events: WorldEventVec,

    // Delta tracking for state sync
    pub dirty_players: SmallSlotVec,
    pub last_sync_state: HashMap<usize, PlayerSyncState>,
}

impl World {
    pub fn new(
        capacity: usize,
        party_mode: PartyMode,
        map: MapData,
        weapons: Arc<WeaponDb>,
        bot_names: Vec<String>,
        rng: StdRng,
    ) -> Self {
        Self {
            players: (0..capacity).map(|_| Player::default()).collect(),
            shadows: (0..capacity).map(|_| None).collect(),
            player_count: 0,
            party_mode,
            map,
            weapons,
            round_state: RoundState::default(),
            terrorists_score: 0,
            counter_score: 0,
            apply_rules: false,
            menu: Menu::default(),
            local_view: LocalView::default(),
            shop_zone: None,
            local_player_name: "Player".to_string(),
            bot_names: NamePool::new(bot_names),
            rng,
            handles: HandleAllocator::new(),
            events: WorldEventVec::new(),
            dirty_players: SmallSlotVec::new(),
            last_sync_state: HashMap::new(),
        }
    }

    /// Build a world from config, resolving party mode and map by name
    pub fn from_config(config: &Config, weapons: Arc<WeaponDb>) -> Result<Self, ConfigError> {
        if config.max_players == 0 {
            return Err(ConfigError::NoSlots);
        }
        let party_mode = PartyModeDb::load()
            .get(&config.party_mode)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownPartyMode(config.party_mode.clone()))?;
        let map = MapDb::load()
            .get(&config.map)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownMap(config.map.clone()))?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut world = Self::new(
            config.max_players,
            party_mode,
            map,
            weapons,
            config.bot_names.clone(),
            rng,
        );
        world.local_player_name = config.local_player_name.clone();
        Ok(world)
    }

    pub fn capacity(&self) -> usize {
        self.players.len()
    }

    /// Rounds already decided this match
    pub fn rounds_played(&self) -> u32 {
        self.terrorists_score + self.counter_score
    }

    pub fn player(&self, slot: usize) -> Result<&Player, RosterError> {
        self.players.get(slot).ok_or(RosterError::InvalidSlot(slot))
    }

    pub fn player_mut(&mut self, slot: usize) -> Result<&mut Player, RosterError> {
        self.players.get_mut(slot).ok_or(RosterError::InvalidSlot(slot))
    }

    /// Like `player_mut` but also rejects free slots
    pub fn occupied_mut(&mut self, slot: usize) -> Result<&mut Player, RosterError> {
        let player = self.player_mut(slot)?;
        if !player.is_occupied() {
            return Err(RosterError::VacantSlot(slot));
        }
        Ok(player)
    }

    pub fn occupied_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.is_occupied())
            .map(|(slot, _)| slot)
    }

    pub fn slot_of(&self, id: u32) -> Option<usize> {
        self.players.iter().position(|player| player.id == Some(id))
    }

    pub fn push_event(&mut self, event: WorldEvent) {
        self.events.push(event);
    }

    /// Take every engine event emitted since the last drain
    pub fn drain_events(&mut self) -> WorldEventVec {
        std::mem::take(&mut self.events)
    }

    /// Mark a player as dirty (state changed)
    pub fn mark_dirty(&mut self, slot: usize) {
        if !self.dirty_players.contains(&slot) {
            self.dirty_players.push(slot);
        }
    }

    /// Clear all dirty flags
    pub fn clear_dirty(&mut self) {
        self.dirty_players.clear();
    }
}
