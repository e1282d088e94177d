use spfsim::core::stats::{ExperimentReport, Histogram};
use spfsim::{Experiment, SimulationConfig};

/// Histogram range and edge count used for every bucket (hours)
const HIST_LO: f64 = 0.0;
const HIST_HI: f64 = 15.0;
const HIST_EDGES: usize = 100;
const BAR_WIDTH: f64 = 40.0;

fn load_config() -> Result<SimulationConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read config '{}': {}", path, e))?;
            serde_json::from_str(&raw).map_err(|e| format!("Failed to parse config '{}': {}", path, e))
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn print_histogram(label: &str, samples: &[f64]) {
    let histogram = Histogram::density(samples, HIST_LO, HIST_HI, HIST_EDGES);
    let peak = histogram.density.iter().cloned().fold(0.0, f64::max);

    println!("\n{} ({} samples)", label, samples.len());
    if peak == 0.0 {
        println!("   (no samples in range)");
        return;
    }
    for (bin, &density) in histogram.density.iter().enumerate() {
        if histogram.counts[bin] == 0 {
            continue;
        }
        let bar = "#".repeat(((density / peak) * BAR_WIDTH).ceil() as usize);
        println!(
            "   [{:5.2}, {:5.2}) {:7.4} {}",
            histogram.edges[bin],
            histogram.edges[bin + 1],
            density,
            bar
        );
    }
}

fn fmt_mean(mean: Option<f64>) -> String {
    mean.map_or_else(|| "n/a".to_string(), |m| format!("{:.4}", m))
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = load_config()?;
    println!("🏢 Application office simulation");
    println!(
        "   K={} λ={} μf={} μc={} μw={} p={} q={} r={} T={}",
        config.replications,
        config.arrival_rate,
        config.rates.fingerprint,
        config.rates.case_review,
        config.rates.interview,
        config.branching.self_check,
        config.branching.case_approval,
        config.branching.interview_approval,
        config.horizon
    );

    let experiment = Experiment::new(config).map_err(|e| e.to_string())?;
    let buckets = experiment.run_seeded().map_err(|e| e.to_string())?;
    let report = ExperimentReport::from_buckets(&buckets);

    println!("\n📊 RESULTS");
    println!("E[Ta] = {}", fmt_mean(report.all.mean));
    println!("E[Tc] = {}", fmt_mean(report.completed.mean));
    println!("E[Tr] = {}", fmt_mean(report.rejected.mean));

    print_histogram("Ta (all)", &buckets.all());
    print_histogram("Tc (completed)", &buckets.completed);
    print_histogram("Tr (rejected)", &buckets.rejected);

    Ok(())
}
