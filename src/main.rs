use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use seedbloom::io_utils::{bloom_cli_error, io_cli_error, simple_cli_error, CliError};
use seedbloom::{murmur64, params, BloomFilter, Config};

#[derive(Parser)]
#[command(name = "seedbloom", about = "Bloom filter with a seeded 64-bit hash")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a 1000-bit, 3-hash filter with two keys and print three lookups
    Demo,
    /// Insert keys into a filter and report membership for each query
    Query {
        /// Number of bits in the filter
        #[arg(long)]
        size: Option<usize>,
        /// Number of hash probes per key
        #[arg(long)]
        hashes: Option<usize>,
        /// JSON file with `size` and `hash_count`; flags override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Key to insert (repeatable)
        #[arg(long = "add")]
        add: Vec<String>,
        /// File with one key per line to insert
        #[arg(long)]
        keys_file: Option<PathBuf>,
        /// Treat every key as hex-encoded bytes
        #[arg(long)]
        hex: bool,
        /// Print results and filter statistics as JSON
        #[arg(long)]
        json: bool,
        /// Keys to look up
        queries: Vec<String>,
    },
    /// Print the seeded hash of a key
    Hash {
        data: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        hex: bool,
    },
    /// Print the optimal size and hash count for a workload
    Size {
        #[arg(long)]
        items: usize,
        #[arg(long)]
        rate: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Demo => {
            let mut bf = BloomFilter::new(1000, 3)
                .map_err(|e| bloom_cli_error("building filter", e))?;
            bf.add("exemplo1");
            bf.add("exemplo2");
            println!("{}", bf.contains("exemplo1"));
            println!("{}", bf.contains("exemplo2"));
            println!("{}", bf.contains("exemplo3"));
        }
        Command::Query {
            size,
            hashes,
            config,
            add,
            keys_file,
            hex,
            json,
            queries,
        } => {
            let mut cfg = match &config {
                Some(path) => Config::from_json_file(path)
                    .map_err(|e| bloom_cli_error(&format!("loading config '{}'", path.display()), e))?,
                None => Config::default(),
            };
            if let Some(size) = size {
                cfg.size = size;
            }
            if let Some(hashes) = hashes {
                cfg.hash_count = hashes;
            }
            let mut bf = cfg.build().map_err(|e| bloom_cli_error("building filter", e))?;

            for key in &add {
                bf.add(decode_key(key, hex)?);
            }
            if let Some(path) = &keys_file {
                let text = fs::read_to_string(path)
                    .map_err(|e| io_cli_error("reading keys file", path, e))?;
                for line in text.lines().filter(|l| !l.is_empty()) {
                    bf.add(decode_key(line, hex)?);
                }
            }

            let mut results = Vec::with_capacity(queries.len());
            for q in &queries {
                results.push((q.as_str(), bf.contains(decode_key(q, hex)?)));
            }

            let stats = bf.stats();
            if json {
                let out = serde_json::json!({
                    "results": results
                        .iter()
                        .map(|(key, present)| serde_json::json!({ "key": key, "present": present }))
                        .collect::<Vec<_>>(),
                    "stats": stats,
                });
                let text = serde_json::to_string_pretty(&out)
                    .map_err(|e| simple_cli_error(&format!("encoding JSON: {e}")))?;
                println!("{text}");
            } else {
                for (key, present) in &results {
                    println!("{key}\t{present}");
                }
                stats.report();
            }
        }
        Command::Hash { data, seed, hex } => {
            let bytes = decode_key(&data, hex)?;
            println!("{:016x}", murmur64(&bytes, seed));
        }
        Command::Size { items, rate } => {
            let (size, hash_count) =
                params::size_for(items, rate).map_err(|e| bloom_cli_error("sizing filter", e))?;
            println!("size={size} hash_count={hash_count}");
        }
    }
    Ok(())
}

fn decode_key(key: &str, hex: bool) -> Result<Vec<u8>, CliError> {
    if hex {
        hex::decode(key).map_err(|e| simple_cli_error(&format!("invalid hex key '{key}': {e}")))
    } else {
        Ok(key.as_bytes().to_vec())
    }
}
