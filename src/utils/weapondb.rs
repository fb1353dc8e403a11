use std::collections::HashMap;
use serde::{Deserialize, Serialize};

pub type WeaponId = u32;

pub const KNIFE: WeaponId = 0;
pub const DEFAULT_TERRORIST_GUN: WeaponId = 1;
pub const DEFAULT_COUNTER_TERRORIST_GUN: WeaponId = 2;
pub const BOMB: WeaponId = 28;

/// Weapon data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponData {
    pub id: WeaponId,
    pub name: String,
    pub price: u32,
    pub magazine: u32,
    pub reserve: u32,
}

/// Immutable weapon database - loaded once at startup
#[derive(Debug, Clone)]
pub struct WeaponDb {
    weapons: HashMap<WeaponId, WeaponData>,
}

impl WeaponDb {
    /// Load weapon database with hardcoded data
    pub fn load() -> Self {
        let table: [(WeaponId, &str, u32, u32, u32); 12] = [
            (KNIFE, "Knife", 0, 0, 0),
            (DEFAULT_TERRORIST_GUN, "Glock-18", 200, 20, 120),
            (DEFAULT_COUNTER_TERRORIST_GUN, "USP", 200, 12, 100),
            (3, "Desert Eagle", 650, 7, 35),
            (10, "AK-47", 2500, 30, 90),
            (11, "M4A1", 3100, 30, 90),
            (12, "AWP", 4750, 10, 30),
            (13, "MP5", 1500, 30, 120),
            (25, "HE Grenade", 300, 1, 0),
            (26, "Flashbang", 200, 1, 0),
            (27, "Smoke Grenade", 300, 1, 0),
            (BOMB, "C4", 0, 0, 0),
        ];

        let weapons = table
            .iter()
            .map(|&(id, name, price, magazine, reserve)| {
                (
                    id,
                    WeaponData {
                        id,
                        name: name.to_string(),
                        price,
                        magazine,
                        reserve,
                    },
                )
            })
            .collect();

        Self { weapons }
    }

    /// Get weapon by ID
    pub fn get(&self, id: WeaponId) -> Option<&WeaponData> {
        self.weapons.get(&id)
    }

    /// Check if weapon exists
    pub fn contains(&self, id: WeaponId) -> bool {
        self.weapons.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}
