//! Fire Suppression Scenario Driver
//!
//! Parses scenario arguments, loads the rule table, runs the simulation,
//! and narrates each step to stdout. All algorithmic work lives in the
//! library crates; this is presentation and wiring only.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fuzzifier::fuzzify_temperature;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rule_engine::ActionResolver;
use simulator::{
    run_simulation, EnvironmentState, Outcome, SimulationConfig, SimulationReport,
};
use storage::RuleRepository;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Output format for simulation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Fire suppression decision-support simulator
#[derive(Parser, Debug)]
#[command(name = "suppression-pipeline")]
#[command(about = "Simulate a building fire-suppression controller scenario")]
pub struct Args {
    /// Initial smoke concentration (ppm)
    #[arg(long, default_value_t = 15.0)]
    pub smoke: f64,

    /// Initial temperature (°C)
    #[arg(long, default_value_t = 35.0)]
    pub temp: f64,

    /// Initial zone risk score (0-100)
    #[arg(long, default_value_t = 25.0)]
    pub zone_risk: f64,

    /// Maximum simulation steps
    #[arg(long, default_value_t = 15)]
    pub steps: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the JSON rule file (created with the built-in set if missing)
    #[arg(long, default_value = "fire_rules.json")]
    pub rules: std::path::PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,

    /// Run the three preset scenarios instead of a single run
    #[arg(long)]
    pub demo: bool,
}

/// Preset scenarios: a small fire, a serious fire, a critical situation.
const DEMO_SCENARIOS: [(&str, f64, f64, f64, u32); 3] = [
    ("Scenario 1: small fire in a safe zone", 15.0, 35.0, 25.0, 12),
    ("Scenario 2: serious fire in a dangerous zone", 55.0, 65.0, 75.0, 15),
    ("Scenario 3: critical situation", 70.0, 80.0, 85.0, 10),
];

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load the rules, run the requested scenario(s), print the result.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let table = RuleRepository::new(&args.rules)
        .load_or_init()
        .context("failed to initialize rule table")?;
    let resolver = ActionResolver::new(table);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.demo {
        let mut reports = Vec::new();
        for (title, smoke, temp, zone_risk, steps) in DEMO_SCENARIOS {
            let report = run_one(&resolver, smoke, temp, zone_risk, steps, &mut rng)?;
            if args.format == Format::Text {
                print_banner(title, smoke, temp, zone_risk);
                print_report(&report);
            }
            reports.push(report);
        }
        if args.format == Format::Json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    } else {
        let report = run_one(
            &resolver,
            args.smoke,
            args.temp,
            args.zone_risk,
            args.steps,
            &mut rng,
        )?;
        match args.format {
            Format::Text => {
                print_banner("Simulation", args.smoke, args.temp, args.zone_risk);
                print_report(&report);
            }
            Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
    }

    Ok(())
}

fn run_one<R: Rng>(
    resolver: &ActionResolver,
    smoke: f64,
    temp: f64,
    zone_risk: f64,
    max_steps: u32,
    rng: &mut R,
) -> anyhow::Result<SimulationReport> {
    let initial = EnvironmentState::initial(smoke, temp, zone_risk)
        .context("invalid initial conditions")?;
    Ok(run_simulation(
        resolver,
        initial,
        &SimulationConfig { max_steps },
        rng,
    ))
}

fn print_banner(title: &str, smoke: f64, temp: f64, zone_risk: f64) {
    println!();
    println!("{}", "=".repeat(70));
    println!("{title}");
    println!("   Initial conditions: smoke={smoke} ppm, temperature={temp}°C, zone risk={zone_risk}%");
    println!("{}", "=".repeat(70));
}

fn print_report(report: &SimulationReport) {
    for step in &report.steps {
        let temp_category = fuzzify_temperature(step.temperature);
        println!();
        println!("Step {}:", step.step_index);
        println!("   Smoke: {:.1} ppm [{}]", step.smoke, step.smoke_category.as_str());
        println!(
            "   Temperature: {:.1}°C [{}]",
            step.temperature,
            temp_category.as_str()
        );
        println!(
            "   Zone risk: {:.1}% [{}]",
            step.zone_risk,
            step.zone_category.as_str()
        );
        println!("   Action: {} (priority {})", step.action_name, step.priority);
        println!("   {}", step.description);
    }

    println!();
    match report.outcome {
        Outcome::Extinguished => {
            println!("SUCCESS: fire localized and extinguished");
        }
        Outcome::Runaway => {
            println!("CRITICAL: fire out of control");
        }
        Outcome::Incomplete => {
            println!("Step budget exhausted before a terminal condition was reached");
        }
    }
    println!(
        "Final state: smoke={:.1} ppm, temperature={:.1}°C, zone risk={:.1}%",
        report.final_state.smoke, report.final_state.temperature, report.final_state.zone_risk
    );
}
