//! Transient interactive condition of a button.

/// Interactive state of a button.
///
/// This enum carries every state literal either resolution strategy
/// understands. Which subset a strategy themes is described by
/// [`StateVocabulary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ButtonState {
    #[default]
    Default,
    Disabled,
    Attention,
    Success,
    Error,
    Warning,
    Active,
}

token_enum!(ButtonState, "state", {
    Default => "default",
    Disabled => "disabled",
    Attention => "attention",
    Success => "success",
    Error => "error",
    Warning => "warning",
    Active => "active",
});

/// The set of state literals a resolution path accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateVocabulary {
    /// Keys of the default theme table.
    Themed,
    /// States handled by status/state style derivation.
    #[default]
    Semantic,
}

impl StateVocabulary {
    /// States in this vocabulary.
    pub fn members(&self) -> &'static [ButtonState] {
        match self {
            StateVocabulary::Themed => &[
                ButtonState::Default,
                ButtonState::Disabled,
                ButtonState::Attention,
                ButtonState::Success,
                ButtonState::Warning,
            ],
            StateVocabulary::Semantic => &[
                ButtonState::Success,
                ButtonState::Error,
                ButtonState::Warning,
                ButtonState::Active,
                ButtonState::Default,
                ButtonState::Disabled,
            ],
        }
    }

    /// Check whether `value` names a state in this vocabulary.
    pub fn contains(&self, value: &str) -> bool {
        ButtonState::from_token(value).is_some_and(|state| self.members().contains(&state))
    }
}

/// Check whether `value` names a state of the [`StateVocabulary::Semantic`] set.
///
/// This is the set that layered derivation styles. The default table is keyed by
/// [`StateVocabulary::Themed`], whose only extra member is `attention`; use
/// `StateVocabulary::Themed.contains` to test against the table's keys.
pub fn is_valid_state(value: &str) -> bool {
    StateVocabulary::Semantic.contains(value)
}
