use russell_tensor::Tensor2;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use structopt::StructOpt;
use uo2creep::base::DEFAULT_OUT_DIR;
use uo2creep::prelude::*;
use uo2creep::StrError;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "uo2creep_history",
    about = "Runs a creep-relaxation history at a single integration point under constant strain"
)]
struct Options {
    /// JSON file with the creep parameters (uses the sample UO2 parameters if not given)
    #[structopt(long)]
    param: Option<String>,

    /// Temperature (K)
    #[structopt(long, default_value = "1500.0")]
    temperature: f64,

    /// Oxygen hyper-stoichiometry ratio
    #[structopt(long, default_value = "2.01")]
    oxygen_ratio: f64,

    /// Applied uniaxial strain
    #[structopt(long, default_value = "1e-4")]
    strain: f64,

    /// Time step length (s)
    #[structopt(long, default_value = "3600.0")]
    dt: f64,

    /// Number of time steps
    #[structopt(long, default_value = "24")]
    n_steps: usize,

    /// Saves the history to a JSON file in the default output directory
    #[structopt(long)]
    save: bool,

    /// Prints the solver diagnostics
    #[structopt(short, long)]
    verbose: bool,
}

/// Holds the results of one time step
#[derive(Serialize)]
struct HistoryRow {
    time: f64,
    sigma_vm: f64,
    equivalent_strain: f64,
    n_iterations: usize,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    if options.verbose {
        tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
    }

    // parameters
    let param: ParamCreep = match &options.param {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|_| "cannot open file")?;
            serde_json::from_str(&contents).map_err(|_| "deserialize failed")?
        }
        None => SampleParams::param_creep_uo2(),
    };
    let config = Config::new(3, param)?;
    let observer: Arc<dyn Observer> = if options.verbose {
        Arc::new(TracingObserver)
    } else {
        Arc::new(NoObserver)
    };
    let model = CreepUpdate::new(&config, observer)?;

    // constant uniaxial strain
    let eps = options.strain;
    let strain = Tensor2::from_matrix(&[[eps, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]], model.mandel())?;
    let inputs = LocalInputs::new(options.temperature, options.oxygen_ratio);
    let mut state = CreepState::new(model.mandel());

    // run
    let mut history = Vec::new();
    println!("{:>12} {:>15} {:>15} {:>6}", "time", "σ_vm", "εd", "iter");
    for step in 0..options.n_steps {
        let out = model.update_state(0, &mut state, &strain, &inputs, options.dt)?;
        let row = HistoryRow {
            time: (step + 1) as f64 * options.dt,
            sigma_vm: out.stress.invariant_sigma_d(),
            equivalent_strain: state.equivalent_strain,
            n_iterations: out.stats.n_iterations,
        };
        println!(
            "{:>12.1} {:>15.6e} {:>15.6e} {:>6}",
            row.time, row.sigma_vm, row.equivalent_strain, row.n_iterations
        );
        history.push(row);
    }

    // save
    if options.save {
        fs::create_dir_all(DEFAULT_OUT_DIR).map_err(|_| "cannot create directory")?;
        let path = Path::new(DEFAULT_OUT_DIR).join("uo2creep_history.json");
        let file = File::create(&path).map_err(|_| "cannot create file")?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &history).map_err(|_| "cannot write file")?;
        let path_json = path.to_string_lossy();
        let thin_line = format!("{:─^1$}", "", path_json.len());
        println!("\n{}", thin_line);
        println!("history saved to:");
        println!("{}", path_json);
        println!("{}\n", thin_line);
    }
    Ok(())
}
