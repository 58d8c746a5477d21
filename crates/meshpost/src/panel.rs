//! Result panel session logic
//!
//! A headless port of the post-processing settings panel: selecting a result
//! type paints the corresponding scalar field through the [`MeshView`] and
//! reports its statistics; the displacement controls scale the deformed
//! shape; user formulas run through the safe expression evaluator. The
//! settings struct travels in through [`ResultPanel::open`] and back out of
//! [`ResultPanel::close`], so session persistence is the caller's decision.

use crate::error::PanelResult;
use crate::view::MeshView;
use meshpost_core::{ResultSet, ResultType, SummaryStats, ViewSettings};
use meshpost_formula::evaluate_summary;

/// One post-processing session over a solver result.
pub struct ResultPanel<V: MeshView> {
    result: ResultSet,
    settings: ViewSettings,
    view: V,
}

impl<V: MeshView> ResultPanel<V> {
    /// Open a panel, restoring the previous session's settings.
    ///
    /// The result set is validated up front; arrays inconsistent with the
    /// node count would corrupt the color mapping, so such a result is
    /// rejected rather than partially painted. A restored result type whose
    /// backing data is missing from this result falls back to [`ResultType::None`],
    /// and the displacement state is re-applied as it was left.
    pub fn open(result: ResultSet, settings: ViewSettings, view: V) -> PanelResult<Self> {
        if let Err(e) = result.validate() {
            log::warn!("rejecting result set: {e}");
            return Err(e.into());
        }

        let mut panel = Self {
            result,
            settings,
            view,
        };

        if !panel.result.has_data(panel.settings.result_type) {
            log::debug!(
                "restored result type {} has no data, falling back to None",
                panel.settings.result_type
            );
            panel.settings.result_type = ResultType::None;
        }
        panel.select(panel.settings.result_type)?;

        if panel.settings.show_displacement {
            panel.view.set_node_displacements(
                &panel.result.node_numbers,
                &panel.result.displacement_vectors,
            );
        }
        panel.view.apply_displacement(panel.effective_factor());

        Ok(panel)
    }

    /// Current settings
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// The result set under inspection
    pub fn result(&self) -> &ResultSet {
        &self.result
    }

    /// The viewer being driven
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Select a result type: paint its scalar field and report statistics.
    ///
    /// [`ResultType::None`] clears the coloring and reports zeros.
    pub fn select(&mut self, result_type: ResultType) -> PanelResult<SummaryStats> {
        let stats = if result_type == ResultType::None {
            self.view.clear_node_colors();
            SummaryStats::zeros(result_type.unit())
        } else {
            let values = self.result.scalar_field(result_type)?;
            let stats = self.stats_for(result_type, &values)?;
            self.view.set_node_colors(&self.result.node_numbers, &values);
            stats
        };
        self.settings.result_type = result_type;
        Ok(stats)
    }

    /// Evaluate a user formula over this result's fields, paint the values
    /// and store them as the user-defined result.
    ///
    /// On any error nothing is painted or stored; the previously displayed
    /// state stands.
    pub fn apply_formula(&mut self, expression: &str) -> PanelResult<SummaryStats> {
        let fields = self.result.field_set()?;
        let (values, stats) =
            evaluate_summary(&fields, expression, ResultType::UserDefined.unit())?;

        self.view.set_node_colors(&self.result.node_numbers, &values);
        self.result.user_defined = Some(values);
        self.settings.result_type = ResultType::UserDefined;
        Ok(stats)
    }

    /// Show or hide the deformed mesh
    pub fn set_show_displacement(&mut self, show: bool) {
        self.settings.show_displacement = show;
        if show {
            self.view.set_node_displacements(
                &self.result.node_numbers,
                &self.result.displacement_vectors,
            );
        }
        self.view.apply_displacement(self.effective_factor());
    }

    /// Change the displacement exaggeration factor
    pub fn set_displacement_factor(&mut self, factor: f64) {
        let max = self.settings.displacement_factor_max.max(0.0);
        self.settings.displacement_factor = factor.clamp(0.0, max);
        self.view.apply_displacement(self.effective_factor());
    }

    /// Change the factor's upper bound, clamping the current factor to it
    pub fn set_displacement_factor_max(&mut self, max: f64) {
        // Exaggeration is never negative
        let max = max.max(0.0);
        self.settings.displacement_factor_max = max;
        if self.settings.displacement_factor > max {
            self.set_displacement_factor(max);
        }
    }

    /// Close the panel: reset the deformation and hand the settings back for
    /// the caller to persist.
    pub fn close(mut self) -> ViewSettings {
        self.view.apply_displacement(0.0);
        self.settings
    }

    /// Factor actually applied to the view; hiding displacement shows the
    /// undeformed mesh without forgetting the slider position
    fn effective_factor(&self) -> f64 {
        if self.settings.show_displacement {
            self.settings.displacement_factor
        } else {
            0.0
        }
    }

    /// Statistics for a result type's scalar values.
    ///
    /// The solver's precomputed table is preferred where it has a slot;
    /// temperature and user-defined results are always computed from the
    /// values, matching what the solver provides.
    fn stats_for(&self, result_type: ResultType, values: &[f64]) -> PanelResult<SummaryStats> {
        if let Some(table) = &self.result.stats {
            if let Some(stats) = SummaryStats::from_table(table, result_type) {
                return Ok(stats);
            }
        }
        Ok(SummaryStats::summarize(values, result_type.unit())?)
    }
}
