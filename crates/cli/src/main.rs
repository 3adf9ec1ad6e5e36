use clap::{Parser, Subcommand};
use ferrous_recon_domain::{Answer, CliOverrides};
use serde_json::json;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-recon")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Recon - concurrent DNS lookups for reconnaissance")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Bounded request queue size
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// Per-query timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a name over UDP
    Resolve {
        name: String,

        /// Record type (A, AAAA, CNAME, PTR, NS, MX, TXT, SOA, SPF, SRV)
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: String,

        /// Name server as host[:port]
        #[arg(short = 's', long)]
        server: Option<String>,
    },

    /// Look up the host name of an IP address
    Reverse {
        ip: String,

        /// Name server as host[:port]
        #[arg(short = 's', long)]
        server: Option<String>,
    },

    /// Check whether a domain answers for every subdomain
    Wildcard {
        domain: String,

        /// Name server as host[:port]
        #[arg(short = 's', long)]
        server: Option<String>,
    },

    /// Resolve through the DNS-over-HTTPS JSON service
    Google {
        name: String,

        /// Record type (A, AAAA, CNAME, PTR, NS, MX, TXT, SOA, SPF, SRV)
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: String,
    },
}

impl Command {
    fn server(&self) -> Option<String> {
        match self {
            Command::Resolve { server, .. }
            | Command::Reverse { server, .. }
            | Command::Wildcard { server, .. } => server.clone(),
            Command::Google { .. } => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.command.server(),
        queue_capacity: cli.queue_capacity,
        query_timeout: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::config::log_config(cli.config.as_deref(), &config);

    info!("Starting Ferrous Recon v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config).await?;
    let use_cases = di::UseCases::new(&dns_services);

    let result = run(&cli, &use_cases, dns_services.resolver.default_server()).await;

    dns_services.shutdown().await;

    if let Err(e) = &result {
        error!(error = %e, "Lookup failed");
    }
    result
}

async fn run(cli: &Cli, use_cases: &di::UseCases, server: &str) -> anyhow::Result<()> {
    match &cli.command {
        Command::Resolve {
            name, record_type, ..
        } => {
            let answers = use_cases.resolve.execute(name, server, record_type).await?;
            print_answers(&answers, cli.json)?;
        }
        Command::Reverse { ip, .. } => {
            let hostname = use_cases.reverse.execute(ip, server).await?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "ip": ip, "hostname": hostname }))?
                );
            } else {
                println!("{}", hostname);
            }
        }
        Command::Wildcard { domain, .. } => {
            let result = use_cases.check_wildcard.execute(domain).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.has_wildcard {
                println!("{}: wildcard DNS detected ({})", domain, result.ip);
            } else {
                println!("{}: no wildcard DNS", domain);
            }
        }
        Command::Google { name, record_type } => {
            let answers = use_cases
                .resolve_fallback
                .execute(name, "", record_type)
                .await?;
            print_answers(&answers, cli.json)?;
        }
    }

    Ok(())
}

fn print_answers(answers: &[Answer], as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(answers)?);
        return Ok(());
    }

    for answer in answers {
        let kind = answer
            .kind()
            .map(|rt| rt.to_string())
            .unwrap_or_else(|| answer.record_type.to_string());
        println!("{}\t{}\t{}\t{}", answer.name, kind, answer.ttl, answer.data);
    }
    Ok(())
}
