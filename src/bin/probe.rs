use clap::Parser;
use valida_cpf::utils::error::ErrorSeverity;
use valida_cpf::utils::logger;
use valida_cpf::CpfClient;

/// 未指定 CPF 時送出的範例
const SAMPLE_CPFS: [&str; 5] = [
    "111.444.777-35",
    "111.444.777-36",
    "12345678909",
    "000.000.000-00",
    "",
];

#[derive(Debug, Parser)]
#[command(name = "probe")]
#[command(about = "Send CPF numbers to a running validation endpoint")]
struct ProbeArgs {
    #[arg(long, default_value = "http://127.0.0.1:7071/api/HttpValidaCpf")]
    endpoint: String,

    #[arg(long, env = "CPF_FUNCTION_KEY", hide_env_values = true)]
    function_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    /// CPF numbers to check
    cpfs: Vec<String>,
}

#[tokio::main]
async fn main() {
    let args = ProbeArgs::parse();
    logger::init_cli_logger(args.verbose, false);

    let client = match CpfClient::new(args.endpoint.clone(), args.function_key.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let cpfs: Vec<String> = if args.cpfs.is_empty() {
        SAMPLE_CPFS.iter().map(|cpf| cpf.to_string()).collect()
    } else {
        args.cpfs
    };

    println!("🚀 Probing {}", client.endpoint());

    let mut failed = false;
    for cpf in &cpfs {
        match client.validate(Some(cpf)).await {
            Ok(verdict) => {
                let icon = if verdict.is_valid() { "✅" } else { "❌" };
                println!(
                    "  {} {:<16} {} {}",
                    icon,
                    format!("{:?}", cpf),
                    verdict.status,
                    verdict.response.message
                );
            }
            Err(e) => {
                tracing::error!("Request for {:?} failed: {}", cpf, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                failed = true;
                if e.severity() >= ErrorSeverity::High {
                    break;
                }
            }
        }
    }

    if failed {
        std::process::exit(2);
    }
}
