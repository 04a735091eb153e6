//! Hazard catalog and per-round hazard state.
//!
//! A hazard is the disaster scenario a round revolves around: selected
//! when the round begins (randomly or forced), triggered after a
//! warning delay during live play, and preventable during the
//! investigation window by winning the mini-game its kind resolves to.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use rewind_core::{EntityId, WorldAccess};

use crate::minigame::MiniGameKind;

/// The closed set of hazard classifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HazardKind {
    Explosion,
    Fire,
    Collapse,
    GasLeak,
    Flooding,
    ElectricalFailure,
}

impl HazardKind {
    /// All hazard kinds, for iteration and random selection.
    pub const ALL: [HazardKind; 6] = [
        HazardKind::Explosion,
        HazardKind::Fire,
        HazardKind::Collapse,
        HazardKind::GasLeak,
        HazardKind::Flooding,
        HazardKind::ElectricalFailure,
    ];

    /// The fixed hazard-to-mini-game lookup table.
    ///
    /// Each kind resolves to exactly one mini-game: disarm codes for
    /// explosions and electrical resets, valve/extinguisher switches
    /// for fire and gas, cable repair for structural and water damage.
    pub fn mini_game(&self) -> MiniGameKind {
        match self {
            Self::Explosion | Self::ElectricalFailure => MiniGameKind::NumberSequence,
            Self::Fire | Self::GasLeak => MiniGameKind::SwitchActivation,
            Self::Collapse | Self::Flooding => MiniGameKind::CableMatch,
        }
    }
}

/// A catalog entry: one hazard kind's static parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Hazard {
    /// Classification; drives the mini-game mapping.
    pub kind: HazardKind,
    /// Display name.
    pub name: String,
    /// One-line description for the warning banner.
    pub description: String,
    /// Radius of the damage zone around the hazard location.
    pub damage_radius: f32,
}

/// The externally supplied set of hazards a round may draw from.
#[derive(Clone, Debug)]
pub struct HazardCatalog {
    entries: Vec<Hazard>,
}

impl HazardCatalog {
    /// A catalog with the given entries.
    pub fn new(entries: Vec<Hazard>) -> Self {
        Self { entries }
    }

    /// The stock catalog: four hazards with their classic radii.
    pub fn default_catalog() -> Self {
        Self::new(vec![
            Hazard {
                kind: HazardKind::Explosion,
                name: "Explosion".into(),
                description: "A bomb is about to go off!".into(),
                damage_radius: 8.0,
            },
            Hazard {
                kind: HazardKind::Fire,
                name: "Fire".into(),
                description: "A short circuit is about to start a fire!".into(),
                damage_radius: 6.0,
            },
            Hazard {
                kind: HazardKind::Collapse,
                name: "Collapse".into(),
                description: "The structure is about to give way!".into(),
                damage_radius: 10.0,
            },
            Hazard {
                kind: HazardKind::GasLeak,
                name: "Gas leak".into(),
                description: "Toxic gas is leaking!".into(),
                damage_radius: 12.0,
            },
        ])
    }

    /// Look up the entry for `kind`, if the catalog carries one.
    pub fn get(&self, kind: HazardKind) -> Option<&Hazard> {
        self.entries.iter().find(|h| h.kind == kind)
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn pick(&self, rng: &mut ChaCha8Rng) -> Option<&Hazard> {
        if self.entries.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.entries.len());
        Some(&self.entries[i])
    }
}

/// The hazard selected for the current round, fixed until reset.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveHazard {
    /// The catalog entry this round uses.
    pub hazard: Hazard,
    /// Where the hazard strikes, planar world coordinates.
    pub location: [f32; 2],
    /// The mini-game that defuses it.
    pub mini_game: MiniGameKind,
}

/// Per-round hazard lifecycle: prepared → triggered → (prevented?).
#[derive(Debug, Default)]
pub struct HazardState {
    current: Option<ActiveHazard>,
    triggered: bool,
    prevented: bool,
}

impl HazardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select this round's hazard and location.
    ///
    /// A forced kind missing from the catalog falls back to a random
    /// catalog entry — a documented substitute, not an error. With an
    /// empty catalog no hazard is selected and the round carries none.
    /// `spawn` overrides the random location when the level pins one.
    pub fn prepare(
        &mut self,
        catalog: &HazardCatalog,
        forced: Option<HazardKind>,
        spawn: Option<[f32; 2]>,
        rng: &mut ChaCha8Rng,
    ) {
        self.triggered = false;
        self.prevented = false;

        let entry = forced
            .and_then(|kind| catalog.get(kind))
            .or_else(|| catalog.pick(rng))
            .cloned();

        self.current = entry.map(|hazard| {
            let location = spawn.unwrap_or_else(|| {
                // Random point in a 10-unit disc around the origin.
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                let radius = 10.0 * rng.random_range(0.0f32..1.0).sqrt();
                [radius * angle.cos(), radius * angle.sin()]
            });
            let mini_game = hazard.kind.mini_game();
            ActiveHazard {
                hazard,
                location,
                mini_game,
            }
        });
    }

    /// Execute the hazard: mark it triggered and return the entities
    /// inside the damage radius. No-op (empty result) when already
    /// triggered or no hazard is prepared.
    pub fn execute(&mut self, world: &dyn WorldAccess) -> SmallVec<[EntityId; 8]> {
        if self.triggered {
            return SmallVec::new();
        }
        match &self.current {
            Some(active) => {
                self.triggered = true;
                world.within_radius(active.location, active.hazard.damage_radius)
            }
            None => SmallVec::new(),
        }
    }

    /// Mark the hazard prevented. Returns `true` only the first time.
    pub fn prevent(&mut self) -> bool {
        if self.prevented || self.current.is_none() {
            return false;
        }
        self.prevented = true;
        true
    }

    /// The hazard selected for this round, if any.
    pub fn current(&self) -> Option<&ActiveHazard> {
        self.current.as_ref()
    }

    /// Whether the hazard has been executed this round.
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Whether the hazard was prevented this round.
    pub fn is_prevented(&self) -> bool {
        self.prevented
    }

    /// Forget the round's hazard entirely.
    pub fn reset(&mut self) {
        self.current = None;
        self.triggered = false;
        self.prevented = false;
    }
}
