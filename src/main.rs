// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{Parser, Subcommand};
use kostka_search::kostka::{admissible_configurations, charge, kostka_polynomial_with, KostkaMethod};
use kostka_search::partition::{
    multiset_partitions, multiset_partitions_of_integer, num_partitions, partitions,
    partitions_bounded, Partition,
};
use kostka_search::tableau::{
    hook_lengths, num_standard_tableaux, schensted, semistandard_tableaux,
    semistandard_tableaux_with_weight, standard_tableaux,
};
use kostka_search::{CombinatoricsError, Result};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "kostka_search=debug,kostka=debug"
    } else {
        "kostka_search=info,kostka=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser, Debug)]
#[command(
    name = "kostka",
    version,
    about = "Partitions, tableaux and Kostka-Foulkes polynomials"
)]
struct Cli {
    /// Log search progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List partitions of n, optionally into exactly k bounded parts
    Partitions {
        n: usize,

        /// Exact number of parts
        #[arg(long)]
        parts: Option<usize>,

        /// Smallest allowed part (with --parts)
        #[arg(long, default_value_t = 1, requires = "parts")]
        min: usize,

        /// Largest allowed part (with --parts); defaults to n
        #[arg(long, requires = "parts")]
        max: Option<usize>,

        /// Require distinct parts (with --parts)
        #[arg(long, requires = "parts")]
        distinct: bool,
    },

    /// Count partitions of n
    Count { n: usize },

    /// List semistandard tableaux of a shape
    Tableaux {
        /// Shape, e.g. 3,2,1
        #[arg(long, value_delimiter = ',', required = true)]
        shape: Vec<usize>,

        /// Largest allowed entry
        #[arg(long, conflicts_with = "weight", required_unless_present = "weight")]
        max_val: Option<usize>,

        /// Exact content: weight[i] copies of i+1
        #[arg(long, value_delimiter = ',')]
        weight: Option<Vec<usize>>,
    },

    /// List standard tableaux of a shape
    Standard {
        #[arg(long, value_delimiter = ',', required = true)]
        shape: Vec<usize>,
    },

    /// Show hook lengths and the number of standard tableaux of a shape
    Hooks {
        #[arg(long, value_delimiter = ',', required = true)]
        shape: Vec<usize>,
    },

    /// List multiset partitions of a partition, or of every partition of n
    Multiset {
        #[arg(long, value_delimiter = ',', required_unless_present = "n", conflicts_with = "n")]
        partition: Option<Vec<usize>>,

        #[arg(long)]
        n: Option<usize>,

        /// Exact number of groups
        #[arg(long)]
        groups: Option<usize>,
    },

    /// Robinson-Schensted insertion and recording tableaux of a sequence
    Schensted {
        #[arg(value_delimiter = ',', required = true)]
        sequence: Vec<usize>,
    },

    /// Charge of a word with partition content
    Charge {
        #[arg(value_delimiter = ',', required = true)]
        word: Vec<usize>,
    },

    /// Kostka-Foulkes polynomial K_{lambda,mu}(t)
    Kostka {
        #[arg(long, value_delimiter = ',', required = true)]
        lambda: Vec<usize>,

        #[arg(long, value_delimiter = ',', required = true)]
        mu: Vec<usize>,

        /// configurations or charge
        #[arg(long, default_value_t = KostkaMethod::Configurations)]
        method: KostkaMethod,

        /// Also list the admissible configurations
        #[arg(long)]
        configurations: bool,
    },
}

fn run(cmd: Command) -> Result<()> {
    match cmd {
        Command::Partitions {
            n,
            parts,
            min,
            max,
            distinct,
        } => {
            let count = match parts {
                Some(k) => print_all(partitions_bounded(n, k, min, max.unwrap_or(n), distinct)),
                None => print_all(partitions(n)),
            };
            info!(n, count, "partitions");
        }
        Command::Count { n } => println!("{}", num_partitions(n)),
        Command::Tableaux {
            shape,
            max_val,
            weight,
        } => {
            let shape = Partition::new(shape)?;
            let count = match (max_val, weight) {
                (_, Some(weight)) => print_all(semistandard_tableaux_with_weight(&shape, &weight)),
                (Some(max_val), None) => print_all(semistandard_tableaux(&shape, max_val)),
                (None, None) => {
                    return Err(CombinatoricsError::InvalidArgument(
                        "either --max-val or --weight is required".to_string(),
                    ))
                }
            };
            info!(%shape, count, "semistandard tableaux");
        }
        Command::Standard { shape } => {
            let shape = Partition::new(shape)?;
            let count = print_all(standard_tableaux(&shape));
            info!(%shape, count, "standard tableaux");
        }
        Command::Hooks { shape } => {
            let shape = Partition::new(shape)?;
            println!("{}", hook_lengths(&shape));
            println!("{}", num_standard_tableaux(&shape));
        }
        Command::Multiset {
            partition,
            n,
            groups,
        } => {
            let count = match (partition, n) {
                (Some(parts), _) => {
                    let p = Partition::new(parts)?;
                    print_all(multiset_partitions(&p, groups))
                }
                (None, Some(n)) => print_all(multiset_partitions_of_integer(n, groups)),
                (None, None) => {
                    return Err(CombinatoricsError::InvalidArgument(
                        "either --partition or --n is required".to_string(),
                    ))
                }
            };
            info!(count, "multiset partitions");
        }
        Command::Schensted { sequence } => {
            let (p, q) = schensted(&sequence)?;
            println!("P = {}", p);
            println!("Q = {}", q);
        }
        Command::Charge { word } => println!("{}", charge(&word)?),
        Command::Kostka {
            lambda,
            mu,
            method,
            configurations,
        } => {
            let lambda = Partition::new(lambda)?;
            let mu = Partition::new(mu)?;
            if configurations {
                let mut all = admissible_configurations(&lambda, &mu)?;
                for configuration in all.by_ref() {
                    let levels: Vec<String> =
                        configuration.levels().iter().map(ToString::to_string).collect();
                    println!("{}  charge {}", levels.join(" "), configuration.charge());
                }
                info!(statistics = %all.statistics(), "configuration search");
            }
            println!("{}", kostka_polynomial_with(&lambda, &mu, method)?);
        }
    }
    Ok(())
}

/// Print each item on its own line; returns how many were printed.
fn print_all<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> usize {
    let mut count = 0;
    for item in items {
        println!("{}", item);
        count += 1;
    }
    count
}
