//! Solver result snapshots

use crate::error::{Error, Result};
use crate::field::FieldSet;
use crate::result_type::ResultType;

/// One solver result: per-node arrays sampled at the mesh nodes.
///
/// This is a read-only snapshot of the quantities the FE solver produced.
/// Arrays that a particular analysis did not compute are simply empty; every
/// non-empty array must have one entry per node in `node_numbers`
/// (checked by [`ResultSet::validate`]).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResultSet {
    /// Mesh node numbers the arrays are indexed by
    pub node_numbers: Vec<u64>,
    /// Displacement vector per node
    pub displacement_vectors: Vec<[f64; 3]>,
    /// Displacement magnitude per node
    pub displacement_lengths: Vec<f64>,
    /// Von Mises equivalent stress per node
    pub stress_values: Vec<f64>,
    /// Principal stresses per node
    pub principal_max: Vec<f64>,
    pub principal_med: Vec<f64>,
    pub principal_min: Vec<f64>,
    /// Maximum shear stress per node
    pub max_shear: Vec<f64>,
    /// Stress vector (sx, sy, sz) per node
    pub stress_vectors: Vec<[f64; 3]>,
    /// Strain vector (ex, ey, ez) per node
    pub strain_vectors: Vec<[f64; 3]>,
    /// Temperature per node
    pub temperature: Vec<f64>,
    /// Precomputed (min, avg, max) table, see [`crate::stats::STATS_TABLE_LEN`]
    pub stats: Option<Vec<f64>>,
    /// Values of the last user-defined formula, if any
    pub user_defined: Option<Vec<f64>>,
}

impl ResultSet {
    /// Number of nodes in the result
    pub fn node_count(&self) -> usize {
        self.node_numbers.len()
    }

    /// Check that every non-empty array matches the node count.
    ///
    /// Result sets from beam/shell meshes or partial solver runs can carry
    /// arrays of the wrong length; painting those would corrupt the node
    /// color mapping, so they are rejected before any use.
    pub fn validate(&self) -> Result<()> {
        let n = self.node_count();
        if n == 0 {
            return Err(Error::EmptyResult);
        }
        let scalar_arrays: [(&str, &[f64]); 7] = [
            ("DisplacementLengths", &self.displacement_lengths),
            ("StressValues", &self.stress_values),
            ("PrincipalMax", &self.principal_max),
            ("PrincipalMed", &self.principal_med),
            ("PrincipalMin", &self.principal_min),
            ("MaxShear", &self.max_shear),
            ("Temperature", &self.temperature),
        ];
        for (name, arr) in scalar_arrays {
            if !arr.is_empty() && arr.len() != n {
                return Err(Error::LengthMismatch {
                    field: name.to_string(),
                    expected: n,
                    actual: arr.len(),
                });
            }
        }
        let vector_arrays: [(&str, &[[f64; 3]]); 3] = [
            ("DisplacementVectors", &self.displacement_vectors),
            ("StressVectors", &self.stress_vectors),
            ("StrainVectors", &self.strain_vectors),
        ];
        for (name, arr) in vector_arrays {
            if !arr.is_empty() && arr.len() != n {
                return Err(Error::LengthMismatch {
                    field: name.to_string(),
                    expected: n,
                    actual: arr.len(),
                });
            }
        }
        if let Some(user) = &self.user_defined {
            if user.len() != n {
                return Err(Error::LengthMismatch {
                    field: "UserDefined".to_string(),
                    expected: n,
                    actual: user.len(),
                });
            }
        }
        Ok(())
    }

    /// True if the result set carries the data backing a result type
    pub fn has_data(&self, result_type: ResultType) -> bool {
        match result_type {
            ResultType::None => true,
            ResultType::DisplacementAbs => !self.displacement_lengths.is_empty(),
            ResultType::DisplacementX
            | ResultType::DisplacementY
            | ResultType::DisplacementZ => !self.displacement_vectors.is_empty(),
            ResultType::Temperature => !self.temperature.is_empty(),
            ResultType::VonMises => !self.stress_values.is_empty(),
            ResultType::PrincipalMax => !self.principal_max.is_empty(),
            ResultType::PrincipalMin => !self.principal_min.is_empty(),
            ResultType::MaxShear => !self.max_shear.is_empty(),
            ResultType::UserDefined => self.user_defined.is_some(),
        }
    }

    /// Result types that can be selected for this result set
    pub fn available_result_types(&self) -> Vec<ResultType> {
        ResultType::ALL
            .into_iter()
            .filter(|rt| self.has_data(*rt))
            .collect()
    }

    /// The per-node scalar array painted for a result type.
    ///
    /// Displacement components are extracted column-wise from the
    /// displacement vectors.
    pub fn scalar_field(&self, result_type: ResultType) -> Result<Vec<f64>> {
        if !self.has_data(result_type) {
            return Err(Error::MissingField(result_type.key()));
        }
        let values = match result_type {
            ResultType::None => vec![0.0; self.node_count()],
            ResultType::DisplacementAbs => self.displacement_lengths.clone(),
            ResultType::DisplacementX => vector_component(&self.displacement_vectors, 0),
            ResultType::DisplacementY => vector_component(&self.displacement_vectors, 1),
            ResultType::DisplacementZ => vector_component(&self.displacement_vectors, 2),
            ResultType::Temperature => self.temperature.clone(),
            ResultType::VonMises => self.stress_values.clone(),
            ResultType::PrincipalMax => self.principal_max.clone(),
            ResultType::PrincipalMin => self.principal_min.clone(),
            ResultType::MaxShear => self.max_shear.clone(),
            ResultType::UserDefined => self
                .user_defined
                .clone()
                .ok_or(Error::MissingField("user"))?,
        };
        Ok(values)
    }

    /// Build the named field snapshot a user formula evaluates over.
    ///
    /// Field names follow the solver's conventions: `P1`/`P2`/`P3` principal
    /// stresses, `Von` von Mises stress, `T` temperature, `x`/`y`/`z`
    /// displacement components, `sx`/`sy`/`sz` stress vector components and
    /// `ex`/`ey`/`ez` strain vector components. Only quantities present in
    /// the result set contribute fields.
    pub fn field_set(&self) -> Result<FieldSet> {
        let mut fields = FieldSet::new();
        let scalars: [(&str, &[f64]); 5] = [
            ("P1", &self.principal_max),
            ("P2", &self.principal_med),
            ("P3", &self.principal_min),
            ("Von", &self.stress_values),
            ("T", &self.temperature),
        ];
        for (name, arr) in scalars {
            if !arr.is_empty() {
                fields.insert(name, arr.to_vec())?;
            }
        }
        let vectors: [([&str; 3], &[[f64; 3]]); 3] = [
            (["x", "y", "z"], &self.displacement_vectors),
            (["sx", "sy", "sz"], &self.stress_vectors),
            (["ex", "ey", "ez"], &self.strain_vectors),
        ];
        for (names, arr) in vectors {
            if !arr.is_empty() {
                for (i, name) in names.into_iter().enumerate() {
                    fields.insert(name, vector_component(arr, i))?;
                }
            }
        }
        Ok(fields)
    }
}

fn vector_component(vectors: &[[f64; 3]], index: usize) -> Vec<f64> {
    vectors.iter().map(|v| v[index]).collect()
}
