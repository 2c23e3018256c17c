//! Spacing tokens
//!
//! A seven-step scale on a 4px grid. The scale is a compile-time constant;
//! layout code reads it through [`SpacingTokens::get`] or by field.

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl SpacingToken {
    /// All spacing tokens, smallest first
    pub fn all() -> &'static [SpacingToken] {
        const TOKENS: [SpacingToken; 7] = [
            SpacingToken::XxSmall,
            SpacingToken::XSmall,
            SpacingToken::Small,
            SpacingToken::Medium,
            SpacingToken::Large,
            SpacingToken::XLarge,
            SpacingToken::XxLarge,
        ];
        &TOKENS
    }
}

/// Complete set of spacing tokens
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacingTokens {
    pub xx_small: f32,
    pub x_small: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub x_large: f32,
    pub xx_large: f32,
}

impl SpacingTokens {
    /// Get a spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::XxSmall => self.xx_small,
            SpacingToken::XSmall => self.x_small,
            SpacingToken::Small => self.small,
            SpacingToken::Medium => self.medium,
            SpacingToken::Large => self.large,
            SpacingToken::XLarge => self.x_large,
            SpacingToken::XxLarge => self.xx_large,
        }
    }

    /// The full scale, smallest first
    pub fn scale(&self) -> [f32; 7] {
        [
            self.xx_small,
            self.x_small,
            self.small,
            self.medium,
            self.large,
            self.x_large,
            self.xx_large,
        ]
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xx_small: 4.0,
            x_small: 8.0,
            small: 12.0,
            medium: 16.0,
            large: 24.0,
            x_large: 32.0,
            xx_large: 48.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_ascending_on_a_4px_grid() {
        let scale = SpacingTokens::default().scale();
        assert_eq!(scale, [4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0]);
        for pair in scale.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for value in scale {
            assert_eq!(value % 4.0, 0.0);
        }
    }

    #[test]
    fn get_matches_token_order() {
        let tokens = SpacingTokens::default();
        let by_key: Vec<f32> = SpacingToken::all().iter().map(|t| tokens.get(*t)).collect();
        assert_eq!(by_key, tokens.scale().to_vec());
    }
}
