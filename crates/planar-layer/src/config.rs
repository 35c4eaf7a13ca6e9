use planar_engine::paint::Color;
use serde::Deserialize;

use crate::layer::SyncMode;

/// Whether a removal also recomposes the floor's lighting.
///
/// The light update is pointless for removals replayed from a remote echo,
/// but "came from the network" and "skip the light update" are separate
/// questions; hosts pick the coupling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalLightPolicy {
    /// Skip the light update for `NoSync` removals only.
    #[default]
    UpdateUnlessUnsynced,
    AlwaysUpdate,
    NeverUpdate,
}

impl RemovalLightPolicy {
    pub fn skip_light_update(self, sync: SyncMode) -> bool {
        match self {
            RemovalLightPolicy::UpdateUnlessUnsynced => !sync.is_synced(),
            RemovalLightPolicy::AlwaysUpdate => false,
            RemovalLightPolicy::NeverUpdate => true,
        }
    }
}

/// Per-layer settings. Loadable from JSON; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    #[serde(with = "crate::colour")]
    pub selection_color: Color,
    pub selection_width: f32,
    pub removal_light_policy: RemovalLightPolicy,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            selection_color: Color::from_srgb_u8(0xCC, 0x00, 0x00, 0xFF),
            selection_width: 2.0,
            removal_light_policy: RemovalLightPolicy::default(),
        }
    }
}
