use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use kiosk::console::render;
use kiosk::console::{AdminCommand, AdminShell, Command, CustomerShell, Outcome};
use kiosk::{AdminConsole, Config, initial_menu, open_session, print_banner, setup_environment};

#[derive(Parser)]
#[command(name = "kiosk")]
#[command(about = "Table-side ordering console")]
struct Cli {
    /// Query string from the table QR code, e.g. `?mesa=5`
    #[arg(short, long, env = "KIOSK_QUERY", default_value = "")]
    query: String,

    /// Open the menu management console instead of the customer view
    #[arg(long)]
    admin: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment();
    if !config.is_production() {
        print_banner();
    }

    if cli.admin {
        let menu = initial_menu(&config);
        tracing::info!(items = menu.len(), environment = %config.environment, "Admin console starting");
        return run_admin(AdminShell::new(AdminConsole::new(menu))).await;
    }

    // 2. 校验桌号, 通过后才初始化菜单
    let session = match open_session(&cli.query, &config, || initial_menu(&config)) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(query = %cli.query, reason = %e, "Table validation failed");
            println!("{}", render::validation_screen(e));
            return Ok(());
        }
    };
    tracing::info!(
        table = session.table().get(),
        items = session.menu().len(),
        environment = %config.environment,
        "Kiosk starting"
    );
    run_customer(CustomerShell::new(session, config.estimated_wait.clone()), &config).await
}

async fn run_customer(mut shell: CustomerShell, config: &Config) -> anyhow::Result<()> {
    let mut cart_updates = shell.session().cart().subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n\n(help para ver os comandos)", shell.screen());
    tracing::debug!(delay_ms = config.payment_delay_ms, "Customer console ready");

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(kiosk::console::ParseError::Empty) => continue,
            Err(e) => {
                println!("⚠ {e}");
                continue;
            }
        };
        if command == Command::Pay {
            println!("Processando...");
        }

        match shell.execute(command).await {
            Outcome::Continue(text) => println!("{text}"),
            Outcome::Quit => break,
        }

        if cart_updates.has_changed()? {
            let _ = cart_updates.borrow_and_update();
            if let Some(badge) = shell.cart_badge() {
                println!("\n{badge}");
            }
        }
    }

    tracing::info!("Customer console closed");
    Ok(())
}

async fn run_admin(shell: AdminShell) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}\n\n(help para ver os comandos)", shell.screen());

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<AdminCommand>() {
            Ok(command) => command,
            Err(kiosk::console::ParseError::Empty) => continue,
            Err(e) => {
                println!("⚠ {e}");
                continue;
            }
        };
        match shell.execute(command) {
            Outcome::Continue(text) => println!("{text}"),
            Outcome::Quit => break,
        }
    }

    tracing::info!("Admin console closed");
    Ok(())
}
