//! State-layer alpha tokens
//!
//! Interactive elements overlay their surface with the content color at a
//! fixed alpha per interaction state. These alphas are part of the design
//! contract and do not change between theme variants.

/// Semantic state-layer token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum StateLayerToken {
    Hover,
    Pressed,
    Focus,
    Dragged,
}

/// Complete set of state-layer alphas
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateLayerAlphas {
    pub hover: f32,
    pub pressed: f32,
    pub focus: f32,
    pub dragged: f32,
}

impl StateLayerAlphas {
    /// Get an alpha value by token key
    pub fn get(&self, token: StateLayerToken) -> f32 {
        match token {
            StateLayerToken::Hover => self.hover,
            StateLayerToken::Pressed => self.pressed,
            StateLayerToken::Focus => self.focus,
            StateLayerToken::Dragged => self.dragged,
        }
    }
}

impl Default for StateLayerAlphas {
    fn default() -> Self {
        Self {
            hover: 0.08,
            pressed: 0.12,
            focus: 0.12,
            dragged: 0.16,
        }
    }
}
