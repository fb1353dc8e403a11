use serde::{Deserialize, Serialize};

use crate::state::resources::PlayerResources;
use crate::utils::weapondb::{
    WeaponDb, WeaponId, DEFAULT_COUNTER_TERRORIST_GUN, DEFAULT_TERRORIST_GUN, KNIFE,
};

pub const INVENTORY_CAPACITY: usize = 9;
/// Last inventory slot is reserved for the bomb
pub const BOMB_SLOT: usize = INVENTORY_CAPACITY - 1;
pub const GRENADE_KINDS: usize = 3;
pub const MAX_HEALTH: i32 = 100;
pub const GUN_MIN_RECOIL: f32 = 1.0;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// Represents a 3D position in game world
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Where fresh players wait before their first spawn
    pub const OFF_MAP: Position = Position::new(0.0, -100.0, -2.0);
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0., 0., 0.)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Team {
    #[default]
    Spectator,
    Terrorist,
    CounterTerrorist,
}

impl Team {
    /// Pistol a player of this team holds after a stripping reset
    pub fn default_gun(self) -> Option<WeaponId> {
        match self {
            Team::Terrorist => Some(DEFAULT_TERRORIST_GUN),
            Team::CounterTerrorist => Some(DEFAULT_COUNTER_TERRORIST_GUN),
            Team::Spectator => None,
        }
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::Terrorist => Team::CounterTerrorist,
            Team::CounterTerrorist => Team::Terrorist,
            Team::Spectator => Team::Spectator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ammo {
    pub magazine: u32,
    pub reserve: u32,
}

/// Weapons carried by a player
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub slots: [Option<WeaponId>; INVENTORY_CAPACITY],
    pub ammo: [Ammo; INVENTORY_CAPACITY],
    pub current: usize,
}

impl Default for Inventory {
    /// Knife in slot 0, starting pistol in slot 1, the rest empty
    fn default() -> Self {
        let mut slots = [None; INVENTORY_CAPACITY];
        slots[0] = Some(KNIFE);
        slots[1] = Some(DEFAULT_TERRORIST_GUN);
        Self {
            slots,
            ammo: [Ammo::default(); INVENTORY_CAPACITY],
            current: 1,
        }
    }
}

impl Inventory {
    /// Refill magazine and reserve of every owned weapon
    pub fn reset_ammo(&mut self, weapons: &WeaponDb) {
        for (slot, ammo) in self.slots.iter().zip(self.ammo.iter_mut()) {
            *ammo = slot
                .and_then(|id| weapons.get(id))
                .map(|weapon| Ammo {
                    magazine: weapon.magazine,
                    reserve: weapon.reserve,
                })
                .unwrap_or_default();
        }
    }

    pub fn set(&mut self, index: usize, weapon: Option<WeaponId>) {
        self.slots[index] = weapon;
        if weapon.is_none() {
            self.ammo[index] = Ammo::default();
        }
    }

    pub fn current_weapon(&self) -> Option<WeaponId> {
        self.slots[self.current]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recoil {
    pub right_x: f32,
    pub right_y: f32,
    pub left_x: f32,
    pub left_y: f32,
}

impl Default for Recoil {
    fn default() -> Self {
        Self {
            right_x: GUN_MIN_RECOIL,
            right_y: GUN_MIN_RECOIL,
            left_x: GUN_MIN_RECOIL,
            left_y: GUN_MIN_RECOIL,
        }
    }
}

/// Navigation and target tracking, only meaningful for bots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiState {
    pub path_count: u32,
    pub current_path: u32,
    pub last_waypoint: u32,
    pub target: Option<usize>,
    pub last_seen_target: Option<usize>,
    pub scan_for_grenade: Option<usize>,
    pub just_checking: bool,
}

/// One slot of the player table
#[derive(Debug, Default)]
pub struct Player {
    pub id: Option<u32>,
    pub is_local: bool,
    pub is_ai: bool,
    pub name: String,
    pub team: Team,

    // Vitals
    pub health: i32,
    pub is_dead: bool,
    pub armor: u32,
    pub has_headset: bool,
    pub invincibility_timer: u32,

    // Placement
    pub position: Position,
    pub lerp_destination: Position,
    pub angle: f32,
    pub angle_destination: f32,
    pub size: Position,
    pub spawn_at: Option<usize>,

    // Weapons
    pub inventory: Inventory,
    pub recoil: Recoil,
    pub is_reloading: bool,
    pub reload_wait: u32,
    pub gun_wait: u32,
    pub grenades_bought: [u8; GRENADE_KINDS],

    pub money: u32,

    // Round objective
    pub has_bomb: bool,
    pub is_planting_bomb: bool,
    pub bomb_timer: u32,
    pub has_defuse_kit: bool,

    // Stats
    pub kill_count: u32,
    pub death_count: u32,
    pub respawn_timer: u32,
    pub need_respawn: bool,

    pub ai: AiState,
    pub resources: Option<PlayerResources>,
}

/// Player sync state for delta tracking
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSyncState {
    pub slot: usize,
    pub health: i32,
    pub is_dead: bool,
    pub money: u32,
    pub team: Team,
    pub armor: u32,
    pub has_headset: bool,
    pub has_bomb: bool,
    pub kill_count: u32,
    pub death_count: u32,
}

impl Player {
    pub fn is_occupied(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_alive(&self) -> bool {
        self.is_occupied() && !self.is_dead
    }

    pub fn stop_reloading(&mut self) {
        self.is_reloading = false;
        self.reload_wait = 0;
    }

    pub fn to_sync_state(&self, slot: usize) -> PlayerSyncState {
        PlayerSyncState {
            slot,
            health: self.health,
            is_dead: self.is_dead,
            money: self.money,
            team: self.team,
            armor: self.armor,
            has_headset: self.has_headset,
            has_bomb: self.has_bomb,
            kill_count: self.kill_count,
            death_count: self.death_count,
        }
    }
}
