use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Box-Muller transform for normally distributed weights.
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen_range(1e-15..1.0);
    let u2: f64 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// Generate one weight matrix with a smooth per-column structure plus noise,
/// so the column means form a visibly shaped curve rather than flat noise.
fn generate_matrix(rng: &mut StdRng, n_rows: usize, n_cols: usize, amplitude: f64) -> Vec<Vec<f64>> {
    (0..n_rows)
        .map(|_| {
            (0..n_cols)
                .map(|col| {
                    let phase = col as f64 / n_cols as f64 * std::f64::consts::TAU;
                    amplitude * phase.sin() + gauss(rng, 0.0, 0.2)
                })
                .collect()
        })
        .collect()
}

fn write_csv(path: &Path, rows: &[Vec<f64>]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.write_record(row.iter().map(|v| format!("{v:.6}")))?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(42);

    // Hidden layer: 64 neurons x 20 inputs. Output layer: 10 neurons x 64
    // inputs, deliberately a different width so both traces keep their own
    // lengths in the viewer.
    let hidden = generate_matrix(&mut rng, 64, 20, 0.8);
    let output = generate_matrix(&mut rng, 10, 64, 0.4);

    let hidden_path = Path::new("hidden_weights.csv");
    let output_path = Path::new("output_weights.csv");

    write_csv(hidden_path, &hidden)?;
    write_csv(output_path, &output)?;

    println!(
        "Wrote {} ({}x{}) and {} ({}x{})",
        hidden_path.display(),
        hidden.len(),
        hidden[0].len(),
        output_path.display(),
        output.len(),
        output[0].len(),
    );

    Ok(())
}
