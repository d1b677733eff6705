use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use smilepay::application::client::GatewayClient;
use smilepay::domain::order::Credentials;
use smilepay::domain::ports::TransportRef;
use smilepay::domain::status;
use smilepay::infrastructure::canned::CannedTransport;
use smilepay::infrastructure::http::ReqwestTransport;
use smilepay::interfaces::csv::order_reader::OrderReader;
use smilepay::interfaces::xml::response_parser::ResponseParser;
use smilepay::logging;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit every order of a CSV file to the gateway
    Submit(SubmitArgs),
    /// Decode a stored gateway XML reply
    Parse {
        /// XML reply file
        input: PathBuf,
    },
    /// Print the description of a gateway status code
    Status {
        #[arg(allow_hyphen_values = true)]
        code: String,
    },
}

#[derive(Args)]
struct SubmitArgs {
    /// Orders CSV file, headed by the gateway field names
    input: PathBuf,

    /// Merchant code
    #[arg(long, env = "SMILEPAY_DCVC")]
    dcvc: String,

    /// Parameter code
    #[arg(long, env = "SMILEPAY_RVG2C")]
    rvg2c: String,

    /// Verification key
    #[arg(long, env = "SMILEPAY_VERIFY_KEY", hide_env_values = true)]
    verify_key: String,

    /// Seconds to wait for each gateway reply
    #[arg(long, env = "SMILEPAY_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Print the encoded request bodies instead of sending them
    #[arg(long)]
    dry_run: bool,

    /// Answer every request with this XML file instead of calling the gateway
    #[arg(long, conflicts_with = "dry_run")]
    replay: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Submit(args) => submit(args).await,
        Command::Parse { input } => {
            let xml = std::fs::read_to_string(input).into_diagnostic()?;
            let response = ResponseParser::new().parse(&xml)?;
            println!("{}", serde_json::to_string(&response).into_diagnostic()?);
            Ok(())
        }
        Command::Status { code } => {
            let description =
                status::describe(&code).ok_or_else(|| miette!("Unknown SmilePay status: {code}"))?;
            println!("{description}");
            Ok(())
        }
    }
}

async fn submit(args: SubmitArgs) -> Result<()> {
    let transport: TransportRef = match &args.replay {
        Some(path) => {
            let xml = std::fs::read_to_string(path).into_diagnostic()?;
            Arc::new(CannedTransport::ok(xml))
        }
        None => Arc::new(ReqwestTransport::new().into_diagnostic()?),
    };

    let credentials = Credentials::new(args.dcvc, args.rvg2c, args.verify_key);
    let client = GatewayClient::new(credentials, transport)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    let file = File::open(&args.input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    for order_result in reader.orders() {
        let order = match order_result {
            Ok(order) => order,
            Err(e) => {
                eprintln!("Error reading order: {}", e);
                continue;
            }
        };

        if args.dry_run {
            match client.encode_order(&order) {
                Ok(body) => println!("{body}"),
                Err(e) => eprintln!("Error encoding order: {}", e),
            }
            continue;
        }

        match client.submit_order(&order).await {
            Ok(response) => println!("{}", serde_json::to_string(&response).into_diagnostic()?),
            Err(e) => eprintln!("Error submitting order: {}", e),
        }
    }

    Ok(())
}
