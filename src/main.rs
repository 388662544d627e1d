use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use ptero::catalog::{Catalog, GameType};
use ptero::config::{self, Settings};
use ptero::handoff::HandoffTarget;
use ptero::models::AppState;
use ptero::notify::Severity;
use ptero::ports::{NavigationPort, PresentationPort};
use ptero::quick::{quick_handoff, ServiceLine};
use ptero::routes::build_router;
use ptero::validator::{OrderInput, Validator};
use ptero::workflow::OrderController;

/// Prints what the page would show.
struct TerminalPresenter;

impl PresentationPort for TerminalPresenter {
    fn show_dialog(&mut self, plan_summary: &str) {
        println!("{} {}", yansi::Paint::new("Paket:").bold(), plan_summary);
    }

    fn hide_dialog(&mut self) {}

    fn reset_form(&mut self) {}

    fn notify(&mut self, message: &str, severity: Severity) {
        let line = format!("{} {}", severity.icon(), message);
        match severity {
            Severity::Error => eprintln!("{}", yansi::Paint::new(line).red()),
            Severity::Success => println!("{}", yansi::Paint::new(line).green()),
            Severity::Info => println!("{}", yansi::Paint::new(line).cyan()),
        }
    }
}

/// A terminal cannot open a browser tab; it prints the link instead.
struct TerminalNavigator;

impl NavigationPort for TerminalNavigator {
    fn open_external(&mut self, url: &str) {
        println!("\n{}\n{}", yansi::Paint::new("Buka tautan berikut:").bold(), yansi::Paint::new(url).underline());
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_plans() {
    let mut table = new_table();
    table.set_header(vec!["ID", "Paket", "Harga", "Fitur"]);
    for plan in Catalog::builtin().plans() {
        table.add_row(vec![
            plan.id.to_string(),
            plan.name.clone(),
            plan.price_label(),
            plan.features.join("\n"),
        ]);
    }
    println!("\n{table}\n");
}

fn load_settings(env_file: Option<&str>) -> Settings {
    config::load_env_file(env_file);
    Settings::from_env()
}

async fn start_server(settings: Settings, host: &str, port: u16, stylesheet: Option<String>) {
    let mut state = match AppState::new(settings) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(%e, "Invalid configuration");
            eprintln!("{}: {}", yansi::Paint::new("Invalid configuration").red(), e);
            process::exit(1);
        }
    };
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting pricing page server");
    println!("{} {}", yansi::Paint::new("Pricing page running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "ptero",
    author,
    version,
    about = "Pterodactyl hosting pricing page and WhatsApp order tool",
    long_about = r#"ptero: serve the hosting pricing page and turn orders into WhatsApp messages.

The `serve` command runs the web page. The other commands run the same order
workflow from a terminal, which is handy to check prices or preview the message
a customer would send.

Examples:
  1) Run the page:
      ptero serve --host 0.0.0.0 --port 8080
  2) Preview an order:
      ptero order premium --name Budi --email budi@mail.com --phone 081234567890
"#,
    after_help = "Use `ptero <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (defaults to $HOST, then 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to $PORT, then 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// List the hosting plans
    Plans,
    /// Place an order from the terminal and print the WhatsApp link
    #[command(long_about = "Runs the same validation and message composition as the order dialog on the page. Nothing is sent: the link is printed so it can be opened manually.")]
    Order {
        /// Plan identifier (basic, premium, pro)
        plan: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// WhatsApp number, e.g. 081234567890 or +6281234567890
        #[arg(long)]
        phone: String,
        #[arg(long)]
        server_name: Option<String>,
        /// minecraft, csgo, rust, ark, gmod or other
        #[arg(long)]
        game: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Also print the composed message
        #[arg(long, default_value_t = false)]
        show_message: bool,
    },
    /// Build a one-click order link for a sister service
    Quick {
        /// edit-media or graphic-design
        service: String,
        /// Package name, e.g. Premium
        package: String,
    },
    /// Validate configuration (env vars)
    CheckConfig,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let settings = load_settings(cli.env_file.as_deref());

    let Some(command) = cli.command else {
        start_server(settings, &config::get_host(), config::get_port(), None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, stylesheet } => {
            let host = host.unwrap_or_else(config::get_host);
            let port = port.unwrap_or_else(config::get_port);
            start_server(settings, &host, port, stylesheet).await;
        }
        Commands::Plans => {
            print_plans();
        }
        Commands::Order {
            plan,
            name,
            email,
            phone,
            server_name,
            game,
            notes,
            show_message,
        } => {
            if let Some(g) = game.as_deref() {
                if GameType::parse(g).is_none() {
                    eprintln!("{} '{}'", yansi::Paint::new("Unknown game type").yellow(), g);
                }
            }
            let validator = match Validator::new(&settings.contact_rule()) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Invalid configuration").red(), e);
                    process::exit(1);
                }
            };
            let mut controller = OrderController::new(
                validator,
                HandoffTarget::new(&settings.messaging_base_url, &settings.order_recipient),
                TerminalPresenter,
                TerminalNavigator,
            );
            if let Err(e) = controller.open(&plan) {
                eprintln!("{}: {}", yansi::Paint::new("Cannot open order").red(), e);
                process::exit(1);
            }
            let input = OrderInput {
                name,
                email,
                contact: phone,
                server_name: server_name.unwrap_or_default(),
                game_type: game.unwrap_or_default(),
                notes: notes.unwrap_or_default(),
            };
            match controller.submit(&input) {
                Ok(handoff) => {
                    if show_message {
                        println!("\n{}", handoff.message);
                    }
                }
                Err(_) => process::exit(1),
            }
        }
        Commands::Quick { service, package } => {
            let line = match ServiceLine::parse(&service) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("{} (edit-media, graphic-design)", yansi::Paint::new(e.to_string()).red());
                    process::exit(1);
                }
            };
            match quick_handoff(line, &package, &settings) {
                Ok(handoff) => println!("{}", handoff.url),
                Err(e) => {
                    eprintln!("{}", yansi::Paint::new(e.to_string()).red());
                    process::exit(1);
                }
            }
        }
        Commands::CheckConfig => {
            let problems = settings.problems();
            if problems.is_empty() {
                let mut table = new_table();
                table.set_header(vec!["Setting", "Value"]);
                table.add_row(vec!["MESSAGING_BASE_URL".to_string(), settings.messaging_base_url.clone()]);
                table.add_row(vec!["ORDER_RECIPIENT".to_string(), settings.order_recipient.clone()]);
                table.add_row(vec!["EDIT_MEDIA_RECIPIENT".to_string(), settings.edit_media_recipient.clone()]);
                table.add_row(vec!["GRAPHIC_DESIGN_RECIPIENT".to_string(), settings.graphic_design_recipient.clone()]);
                table.add_row(vec!["CONTACT_PREFIXES".to_string(), settings.contact_prefixes.join(",")]);
                table.add_row(vec![
                    "CONTACT_DIGITS".to_string(),
                    format!("{}..={}", settings.contact_min_digits, settings.contact_max_digits),
                ]);
                table.add_row(vec!["NOTIFICATION_TTL_MS".to_string(), settings.notification_ttl_ms.to_string()]);
                println!("\n{table}");
                println!("{}", yansi::Paint::new("Configuration looks valid").green());
            } else {
                for p in problems {
                    eprintln!("{}", yansi::Paint::new(p).red());
                }
                process::exit(1);
            }
        }
    }
}
