use anyhow::Context;
use clap::Parser;
use pgoutput_listener::ListenerOptions;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const VERBOSE_FILTER: &str = "pgoutput_listener=debug,info";
const DEFAULT_FILTER: &str = "pgoutput_listener=info,warn";

#[derive(Parser, Debug)]
#[command(name = "pgoutput-listener")]
#[command(about = "Resolve and inspect PostgreSQL replication listener options", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "listener.toml")]
    config: PathBuf,

    #[arg(short, long, help = "Enable JSON output for logs")]
    json_logs: bool,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,

    #[arg(
        short,
        long,
        help = "Print the resolved options as JSON, with the connection string redacted"
    )]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, args.verbose);

    info!("Loading listener options from {:?}", args.config);

    let options: ListenerOptions = match ListenerOptions::from_file(&args.config) {
        Ok(options) => options,
        Err(e) => {
            error!("Failed to load listener options: {}", e);
            return Err(e).with_context(|| format!("loading {}", args.config.display()));
        }
    };

    // The connection string carries credentials and is never logged.
    info!(
        publication = %options.publication_name(),
        slot = %options.replication_slot_name(),
        partitions = options.partitions().len(),
        write_nulls = options.write_nulls(),
        "Listener options summary"
    );

    for (table, routing) in options.partitions() {
        debug!(
            table = %table,
            partition_count = routing.partition_count,
            column_index = routing.column_index,
            "Partition routing"
        );
    }

    if args.print {
        println!("{}", options.to_json_redacted()?);
    }

    Ok(())
}

fn init_logging(json: bool, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
