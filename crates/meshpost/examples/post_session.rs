//! A complete post-processing session over a small synthetic result.

use meshpost::prelude::*;

fn main() -> Result<(), PanelError> {
    let result = ResultSet {
        node_numbers: vec![1, 2, 3, 4, 5],
        displacement_vectors: vec![
            [0.00, 0.0, 0.01],
            [0.02, 0.0, 0.05],
            [0.04, 0.0, 0.11],
            [0.02, 0.0, 0.05],
            [0.00, 0.0, 0.01],
        ],
        displacement_lengths: vec![0.010, 0.054, 0.117, 0.054, 0.010],
        stress_values: vec![80.0, 140.0, 210.0, 140.0, 80.0],
        principal_max: vec![95.0, 160.0, 240.0, 160.0, 95.0],
        principal_min: vec![-12.0, -25.0, -40.0, -25.0, -12.0],
        ..Default::default()
    };

    let mut panel = ResultPanel::open(result, ViewSettings::default(), NullView)?;

    for result_type in panel.result().available_result_types() {
        let stats = panel.select(result_type)?;
        println!("{result_type:>8}: {stats}");
    }

    // Exaggerate the deformed shape 20x
    panel.set_show_displacement(true);
    panel.set_displacement_factor(20.0);

    // Evaluate a user formula over the named fields
    let stats = panel.apply_formula("(P1 - P3) / 2")?;
    println!("{:>8}: {stats}", "formula");

    let settings = panel.close();
    println!("settings to persist: {settings:?}");
    Ok(())
}
