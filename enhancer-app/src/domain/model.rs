use std::fmt;

/// The closed set of OpenAI models the selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelId {
    #[default]
    Gpt4o,
    Gpt4Turbo,
    Gpt35Turbo,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [ModelId::Gpt4o, ModelId::Gpt4Turbo, ModelId::Gpt35Turbo];

    pub fn name(self) -> &'static str {
        match self {
            Self::Gpt4o => "gpt-4o",
            Self::Gpt4Turbo => "gpt-4-turbo",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }

    /// Unknown names fall back to the default model.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .unwrap_or_default()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_known_names() {
        for model in ModelId::ALL {
            assert_eq!(ModelId::from_name(model.name()), model);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(ModelId::from_name("gpt-9000"), ModelId::Gpt4o);
        assert_eq!(ModelId::from_name(""), ModelId::Gpt4o);
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(ModelId::default(), ModelId::ALL[0]);
    }
}
