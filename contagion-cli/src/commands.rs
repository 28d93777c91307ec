//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use contagion_core::config::{ContagionConfig, GraphConfig, RunConfig, SimulationParameters};
use contagion_core::graph::ContactNetwork;
use contagion_core::sim::{DeterministicRng, EpidemicSimulator};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run an epidemic simulation and report per-step counts
    Run {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        model: ModelArgs,

        /// Number of time steps to simulate
        #[arg(short, long, default_value_t = 30)]
        steps: usize,

        /// RNG seed; derived from entropy and reported when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the full run as JSON instead of console lines
        #[arg(long)]
        json: bool,

        /// Suppress per-step lines, print only the summary
        #[arg(short, long)]
        quiet: bool,
    },
    /// Generate a contact network and print its structure
    Graph {
        #[command(flatten)]
        graph: GraphArgs,

        /// RNG seed; derived from entropy and reported when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Contact-network shape options shared by commands.
#[derive(Args)]
pub struct GraphArgs {
    /// Number of individuals in the population
    #[arg(short, long, default_value_t = 200)]
    nodes: usize,

    /// Probability of a contact edge between any two individuals
    #[arg(short, long, default_value_t = 0.1)]
    edge_probability: f64,
}

/// SIRDS transition probabilities.
#[derive(Args)]
pub struct ModelArgs {
    /// Per-infected-neighbor transmission probability
    #[arg(long, default_value_t = 0.25)]
    p_infect: f64,

    /// Per-step recovery probability for infected individuals
    #[arg(long, default_value_t = 0.1)]
    p_recover: f64,

    /// Per-step death probability for infected individuals
    #[arg(long, default_value_t = 0.02)]
    p_deceased: f64,

    /// Per-step reinfection probability for recovered individuals
    #[arg(long, default_value_t = 0.05)]
    p_reinfect: f64,
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            graph,
            model,
            steps,
            seed,
            json,
            quiet,
        } => run_simulation(graph, model, steps, seed, json, quiet),
        Commands::Graph { graph, seed } => inspect_graph(graph, seed),
    }
}

/// Run one simulation and report per-step counts plus a summary
///
/// # Errors
/// - `ParameterError` - Invalid probabilities
/// - `SimulationError` - Empty contact graph
fn run_simulation(
    graph: GraphArgs,
    model: ModelArgs,
    steps: usize,
    seed: Option<u64>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let config = ContagionConfig {
        graph: GraphConfig {
            node_count: graph.nodes,
            edge_probability: graph.edge_probability,
        },
        parameters: SimulationParameters {
            p_infect: model.p_infect,
            p_recover: model.p_recover,
            p_deceased: model.p_deceased,
            p_reinfect: model.p_reinfect,
        },
        run: RunConfig { steps, seed },
    };
    config.validate()?;

    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, steps = config.run.steps, "starting simulation run");

    let mut rng = DeterministicRng::from_seed(seed);
    let network = ContactNetwork::random(
        config.graph.node_count,
        config.graph.edge_probability,
        &mut rng,
    );
    let mut simulator = EpidemicSimulator::new(network, config.parameters, rng)?;

    let history = simulator.run(config.run.steps).to_vec();
    let summary = simulator.summary();

    if json {
        let document = serde_json::json!({
            "seed": seed,
            "config": config,
            "history": history,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    if !quiet {
        for record in &history {
            println!("{}", record.console_line());
        }
        println!();
    }

    print!("{}", summary.render());
    println!("  Seed: {seed}");

    Ok(())
}

/// Generate a contact network and print degree statistics
///
/// # Errors
/// - `ParameterError` - Invalid edge probability
fn inspect_graph(graph: GraphArgs, seed: Option<u64>) -> Result<()> {
    let config = GraphConfig {
        node_count: graph.nodes,
        edge_probability: graph.edge_probability,
    };
    config.validate()?;

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = DeterministicRng::from_seed(seed);
    let network = ContactNetwork::random(config.node_count, config.edge_probability, &mut rng);

    println!("Contact network");
    println!("  Nodes: {}", network.node_count());
    println!("  Edges: {}", network.edge_count());

    if !network.is_empty() {
        let mut min_degree = usize::MAX;
        let mut max_degree = 0;
        let mut isolated = 0;
        for node in network.nodes() {
            let degree = network.degree(node)?;
            min_degree = min_degree.min(degree);
            max_degree = max_degree.max(degree);
            if degree == 0 {
                isolated += 1;
            }
        }
        let mean_degree = 2.0 * network.edge_count() as f64 / network.node_count() as f64;

        println!("  Degree: min = {min_degree}, mean = {mean_degree:.2}, max = {max_degree}");
        println!("  Isolated nodes: {isolated}");
    }

    println!("  Seed: {seed}");

    Ok(())
}
