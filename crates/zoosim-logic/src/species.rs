//! Species catalog: static presets used to build animals.
//!
//! One row per species fixes starting vitality, hunger threshold, movement
//! capabilities and category. Per-category tables hold the flavor "special
//! actions" an animal may perform on a given day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::chances::SPECIAL_ACTION;

// ── Movement capabilities ──────────────────────────────────────────────

/// Set of movement capabilities, stored as bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movement(u8);

impl Movement {
    pub const NONE: Self = Self(0);
    pub const TERRESTRIAL: Self = Self(1 << 0);
    pub const AERIAL: Self = Self(1 << 1);
    pub const AQUATIC: Self = Self(1 << 2);
    pub const ALL: Self = Self(0b111);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn can(self, locomotion: Locomotion) -> bool {
        self.contains(locomotion.capability())
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Human-readable capability names, e.g. `["terrestrial", "aquatic"]`.
    pub fn names(self) -> Vec<&'static str> {
        [
            (Self::TERRESTRIAL, "terrestrial"),
            (Self::AERIAL, "aerial"),
            (Self::AQUATIC, "aquatic"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect()
    }
}

/// A concrete way of moving, gated by the matching capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locomotion {
    Run,
    Fly,
    Swim,
}

impl Locomotion {
    pub fn capability(self) -> Movement {
        match self {
            Locomotion::Run => Movement::TERRESTRIAL,
            Locomotion::Fly => Movement::AERIAL,
            Locomotion::Swim => Movement::AQUATIC,
        }
    }

    /// Movement signal line, or `None` if the animal lacks the capability.
    pub fn describe(self, movement: Movement, name: &str) -> Option<String> {
        if !movement.can(self) {
            return None;
        }
        let verb = match self {
            Locomotion::Run => "running",
            Locomotion::Fly => "flying",
            Locomotion::Swim => "swimming",
        };
        Some(format!("{} is {}.", name, verb))
    }
}

// ── Categories ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mammal,
    Bird,
    Fish,
    Amphibian,
    /// Special animals with every movement capability and a larger repertoire.
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodTemperature {
    Warm,
    Cold,
    Variable,
}

/// A flavor behavior. Hybrid actions may also trigger a movement signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialAction {
    pub icon: &'static str,
    /// Predicate following the animal's name, e.g. "builds a nest."
    pub text: &'static str,
    pub locomotion: Option<Locomotion>,
}

impl SpecialAction {
    const fn flavor(icon: &'static str, text: &'static str) -> Self {
        Self {
            icon,
            text,
            locomotion: None,
        }
    }

    const fn moving(icon: &'static str, text: &'static str, locomotion: Locomotion) -> Self {
        Self {
            icon,
            text,
            locomotion: Some(locomotion),
        }
    }

    pub fn render(&self, emoji: &str, name: &str) -> String {
        format!("{}{} {} {}", self.icon, emoji, name, self.text)
    }
}

static MAMMAL_ACTIONS: &[SpecialAction] = &[
    SpecialAction::flavor("👶", "takes care of its young."),
    SpecialAction::flavor("🌞", "basks in the sun."),
    SpecialAction::flavor("🌳", "marks its territory."),
    SpecialAction::flavor("🛌", "sleeps deeply."),
    SpecialAction::flavor("🐾", "plays with other mammals."),
];

static BIRD_ACTIONS: &[SpecialAction] = &[
    SpecialAction::flavor("🏡", "builds a nest."),
    SpecialAction::flavor("🎶", "sings a melody."),
    SpecialAction::flavor("🌬️", "glides on the wind."),
    SpecialAction::flavor("🪺", "incubates its eggs."),
    SpecialAction::flavor("🐦", "performs an aerial dance."),
];

static FISH_ACTIONS: &[SpecialAction] = &[
    SpecialAction::flavor("🐟", "swims with a school of fish."),
    SpecialAction::flavor("🌊", "leaps briefly out of the water."),
    SpecialAction::flavor("💨", "hides among the seaweed."),
    SpecialAction::flavor("🫧", "blows bubbles."),
    SpecialAction::flavor("🍴", "hunts small fish."),
];

static AMPHIBIAN_ACTIONS: &[SpecialAction] = &[
    SpecialAction::flavor("🦎", "sheds its skin."),
    SpecialAction::flavor("💦", "jumps into a puddle."),
    SpecialAction::flavor("🐛", "hunts insects."),
    SpecialAction::flavor("🌫️", "blends into its surroundings."),
    SpecialAction::flavor("🎶", "croaks loudly."),
];

static HYBRID_ACTIONS: &[SpecialAction] = &[
    SpecialAction::flavor("🎩", "performs a trick for the visitors."),
    SpecialAction::flavor("✨", "changes color."),
    SpecialAction::flavor("🌀", "spins around."),
    SpecialAction::flavor("💫", "pulls off an acrobatic stunt."),
    SpecialAction::flavor("🔮", "imitates a human voice."),
    SpecialAction::moving("🏃", "sprints at full speed.", Locomotion::Run),
    SpecialAction::moving("✈️", "soars across the sky.", Locomotion::Fly),
    SpecialAction::moving("🏊", "swims through the water.", Locomotion::Swim),
];

impl Category {
    pub fn blood_temperature(self) -> BloodTemperature {
        match self {
            Category::Mammal | Category::Bird => BloodTemperature::Warm,
            Category::Fish | Category::Amphibian => BloodTemperature::Cold,
            Category::Hybrid => BloodTemperature::Variable,
        }
    }

    pub fn special_actions(self) -> &'static [SpecialAction] {
        match self {
            Category::Mammal => MAMMAL_ACTIONS,
            Category::Bird => BIRD_ACTIONS,
            Category::Fish => FISH_ACTIONS,
            Category::Amphibian => AMPHIBIAN_ACTIONS,
            Category::Hybrid => HYBRID_ACTIONS,
        }
    }
}

/// Daily special-action roll for a category.
///
/// The first draw decides whether anything happens (2%); only then is a
/// second draw taken to pick the action.
pub fn roll_special_action(
    category: Category,
    mut roll: impl FnMut() -> f64,
) -> Option<&'static SpecialAction> {
    if roll() >= SPECIAL_ACTION {
        return None;
    }
    let actions = category.special_actions();
    let index = ((roll() * actions.len() as f64) as usize).min(actions.len() - 1);
    actions.get(index)
}

// ── Species ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Lion,
    Zebra,
    Elephant,
    Eagle,
    Owl,
    Shark,
    Dolphin,
    Frog,
    Salamander,
    Parrot,
}

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesPreset {
    pub species: Species,
    pub name: &'static str,
    pub emoji: &'static str,
    pub category: Category,
    /// May exceed the vitality cap; animals clamp it at creation.
    pub base_vitality: u32,
    pub hunger_threshold: u32,
    pub movement: Movement,
    /// Verb used when the animal starves, e.g. "roars".
    pub distress_verb: &'static str,
}

const T: Movement = Movement::TERRESTRIAL;
const A: Movement = Movement::AERIAL;
const Q: Movement = Movement::AQUATIC;

/// Indexed by `Species as usize`.
pub static CATALOG: [SpeciesPreset; 10] = [
    SpeciesPreset {
        species: Species::Lion,
        name: "lion",
        emoji: "🦁",
        category: Category::Mammal,
        base_vitality: 120,
        hunger_threshold: 4,
        movement: T,
        distress_verb: "roars",
    },
    SpeciesPreset {
        species: Species::Zebra,
        name: "zebra",
        emoji: "🦓",
        category: Category::Mammal,
        base_vitality: 110,
        hunger_threshold: 3,
        movement: T,
        distress_verb: "neighs",
    },
    SpeciesPreset {
        species: Species::Elephant,
        name: "elephant",
        emoji: "🐘",
        category: Category::Mammal,
        base_vitality: 60,
        hunger_threshold: 4,
        movement: T,
        distress_verb: "trumpets",
    },
    SpeciesPreset {
        species: Species::Eagle,
        name: "eagle",
        emoji: "🦅",
        category: Category::Bird,
        base_vitality: 200,
        hunger_threshold: 3,
        movement: A,
        distress_verb: "screeches",
    },
    SpeciesPreset {
        species: Species::Owl,
        name: "owl",
        emoji: "🦉",
        category: Category::Bird,
        base_vitality: 180,
        hunger_threshold: 2,
        movement: A,
        distress_verb: "hoots",
    },
    SpeciesPreset {
        species: Species::Shark,
        name: "shark",
        emoji: "🦈",
        category: Category::Fish,
        base_vitality: 300,
        hunger_threshold: 3,
        movement: Q,
        distress_verb: "blows bubbles",
    },
    SpeciesPreset {
        species: Species::Dolphin,
        name: "dolphin",
        emoji: "🐬",
        category: Category::Fish,
        base_vitality: 250,
        hunger_threshold: 3,
        movement: Q,
        distress_verb: "squeaks",
    },
    SpeciesPreset {
        species: Species::Frog,
        name: "frog",
        emoji: "🐸",
        category: Category::Amphibian,
        base_vitality: 180,
        hunger_threshold: 2,
        movement: T.union(Q),
        distress_verb: "croaks",
    },
    SpeciesPreset {
        species: Species::Salamander,
        name: "salamander",
        emoji: "🦎",
        category: Category::Amphibian,
        base_vitality: 120,
        hunger_threshold: 3,
        movement: T.union(Q),
        distress_verb: "hisses",
    },
    SpeciesPreset {
        species: Species::Parrot,
        name: "parrot",
        emoji: "🦜",
        category: Category::Hybrid,
        base_vitality: 150,
        hunger_threshold: 2,
        movement: T.union(A).union(Q),
        distress_verb: "mimics sounds",
    },
];

impl Species {
    pub const ALL: [Species; 10] = [
        Species::Lion,
        Species::Zebra,
        Species::Elephant,
        Species::Eagle,
        Species::Owl,
        Species::Shark,
        Species::Dolphin,
        Species::Frog,
        Species::Salamander,
        Species::Parrot,
    ];

    pub fn preset(self) -> &'static SpeciesPreset {
        &CATALOG[self as usize]
    }

    pub fn category(self) -> Category {
        self.preset().category
    }

    pub fn emoji(self) -> &'static str {
        self.preset().emoji
    }

    /// Hunger distress line for an animal of this species.
    pub fn distress_call(self, name: &str) -> String {
        let preset = self.preset();
        format!(
            "🚨{} {} {} because it is hungry!",
            preset.emoji, name, preset.distress_verb
        )
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.preset().name)
    }
}

/// Errors from catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownSpecies(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownSpecies(name) => {
                write!(f, "Unknown species '{}' (not in the catalog)", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl FromStr for Species {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CATALOG
            .iter()
            .find(|row| row.name.eq_ignore_ascii_case(wanted))
            .map(|row| row.species)
            .ok_or_else(|| CatalogError::UnknownSpecies(wanted.to_string()))
    }
}
