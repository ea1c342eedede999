//! Immutable geometry and move tables shared between boards.

use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::{AttackTables, GeometryMasks};

static SHARED: LazyLock<Arc<Ruleset>> = LazyLock::new(|| Arc::new(Ruleset::new()));

/// Geometry masks together with the tables built from them.
///
/// Neither depends on piece placement, so one instance can serve any number
/// of boards. Nothing is mutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    geometry: GeometryMasks,
    attacks: AttackTables,
}

impl Ruleset {
    /// Builds the masks, then the tables.
    pub fn new() -> Self {
        let geometry = GeometryMasks::new();
        let attacks = AttackTables::build(&geometry);
        debug!("ruleset ready");
        Ruleset { geometry, attacks }
    }

    /// Returns the process-wide instance, building it on first use.
    pub fn shared() -> Arc<Ruleset> {
        Arc::clone(&SHARED)
    }

    #[inline]
    pub fn geometry(&self) -> &GeometryMasks {
        &self.geometry
    }

    #[inline]
    pub fn attacks(&self) -> &AttackTables {
        &self.attacks
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::new()
    }
}
