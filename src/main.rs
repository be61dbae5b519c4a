use clap::{Parser, Subcommand, ValueEnum};
use sales_dashboard::{
    Config, ConsoleNotifier, DashboardApp, Document, FileStore, HttpSalesApi, ThemeController,
};
use std::{path::PathBuf, process::ExitCode};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "sales-dashboard")]
#[command(about = "Record sales and view the sales dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Base path of the sales backend, e.g. http://127.0.0.1:5000/api
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// File holding saved preferences
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the dashboard
    Show,

    /// Record a sale, then print the refreshed dashboard
    Add {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        item: String,
        #[arg(long, default_value = "1")]
        quantity: String,
    },

    /// Write the dashboard page as HTML
    Render {
        #[arg(long)]
        out: PathBuf,
        /// Row whose action menu is shown open
        #[arg(long)]
        open_menu: Option<usize>,
    },

    /// Show or flip the display theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },

    /// List the items that can be sold
    Items,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(base) = cli.api_base {
        config.api_base = base;
    }
    if let Some(path) = cli.prefs {
        config.prefs_path = path;
    }

    let store = FileStore::open(&config.prefs_path).await;

    match cli.command.unwrap_or(Command::Show) {
        Command::Theme { action } => {
            let mut controller = ThemeController::new(store);
            let mut document = Document::default();
            let mut theme = controller.init(&mut document);
            if let ThemeAction::Toggle = action {
                theme = controller.toggle(&mut document).await?;
            }
            println!("{theme}");
        }
        Command::Items => {
            for item in &config.catalog {
                let price = sales_dashboard::format_currency(&config.currency, item.price);
                println!("{}\t{price}", item.name);
            }
        }
        command => {
            let api = HttpSalesApi::new(&config);
            let mut app = DashboardApp::new(&config, api, store, ConsoleNotifier);
            info!(api_base = %config.api_base, "loading dashboard");
            // Read failures are logged by the renderer and leave an empty dashboard.
            let _ = app.load().await;

            match command {
                Command::Add {
                    customer,
                    item,
                    quantity,
                } => {
                    app.form.fill(&customer, &item, &quantity);
                    let submitted = app.submit().await;
                    print!("{}", app.render_text());
                    if submitted.is_err() {
                        return Ok(ExitCode::FAILURE);
                    }
                }
                Command::Render { out, open_menu } => {
                    if let Some(row) = open_menu {
                        app.toggle_menu(&row.to_string());
                    }
                    fs::write(&out, app.render_html()).await?;
                    info!(path = %out.display(), "dashboard written");
                }
                _ => print!("{}", app.render_text()),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
