//! Persisted panel view settings

use crate::result_type::ResultType;

/// Settings the result panel carries across sessions.
///
/// Passed into the panel when it opens and handed back when it closes, so the
/// embedding application decides where (and whether) to persist them. There
/// is no ambient global state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewSettings {
    /// Selected result type
    pub result_type: ResultType,
    /// Whether the deformed mesh is shown
    pub show_displacement: bool,
    /// Displacement exaggeration factor
    pub displacement_factor: f64,
    /// Upper bound of the factor slider
    pub displacement_factor_max: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            result_type: ResultType::None,
            show_displacement: false,
            displacement_factor: 0.0,
            displacement_factor_max: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ViewSettings::default();
        assert_eq!(settings.result_type, ResultType::None);
        assert!(!settings.show_displacement);
        assert_eq!(settings.displacement_factor, 0.0);
        assert_eq!(settings.displacement_factor_max, 100.0);
    }
}
