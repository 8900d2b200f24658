//! Module statuses and severity classification.

use std::fmt;

use crate::PlatformModule;

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

// ── ModuleStatus ──────────────────────────────────────────────────────────────

/// Operational status badge of one module.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModuleStatus {
    #[default]
    Active,
    Alert,
    Error,
}

impl ModuleStatus {
    /// Map to the severity tier that drives badge coloring.
    pub fn severity(self) -> Severity {
        match self {
            ModuleStatus::Active => Severity::Ok,
            ModuleStatus::Alert => Severity::Warn,
            ModuleStatus::Error => Severity::Critical,
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleStatus::Active => write!(f, "active"),
            ModuleStatus::Alert => write!(f, "alert"),
            ModuleStatus::Error => write!(f, "error"),
        }
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

/// Three-tier severity used by badges and the threat header (green /
/// yellow / red in the reference shell — the UI layer owns actual colors).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Ok,
    Warn,
    Critical,
}

/// Classify a threat level: ≤ 2 ok, ≤ 3 warn, above that critical.
pub fn threat_severity(level: f64) -> Severity {
    if level <= 2.0 {
        Severity::Ok
    } else if level <= 3.0 {
        Severity::Warn
    } else {
        Severity::Critical
    }
}

// ── StatusBoard ───────────────────────────────────────────────────────────────

/// Current status badge per module.
///
/// Starts from the reference snapshot (everything active, EW defense on
/// alert).  Hosts flip badges with [`set`](StatusBoard::set); the board
/// never changes on its own.
pub struct StatusBoard {
    statuses: Map<PlatformModule, ModuleStatus>,
}

impl Default for StatusBoard {
    fn default() -> Self {
        let mut statuses = Map::default();
        for module in PlatformModule::ALL {
            statuses.insert(module, ModuleStatus::Active);
        }
        statuses.insert(PlatformModule::EwDefense, ModuleStatus::Alert);
        Self { statuses }
    }
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The badge for `module` (missing entries read as `Active`).
    pub fn status(&self, module: PlatformModule) -> ModuleStatus {
        self.statuses.get(&module).copied().unwrap_or_default()
    }

    pub fn set(&mut self, module: PlatformModule, status: ModuleStatus) {
        self.statuses.insert(module, status);
    }

    /// All `(module, status)` pairs in dashboard display order.
    pub fn iter(&self) -> impl Iterator<Item = (PlatformModule, ModuleStatus)> + '_ {
        PlatformModule::ALL.into_iter().map(|m| (m, self.status(m)))
    }
}
