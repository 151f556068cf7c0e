use std::io::{self, Write};

use chat_core::{BookingInfo, Config, HotelInfo, Message, Sender};
use chat_session::{ChatController, SendOutcome};
use clap::{Parser, Subcommand};
use colored::Colorize;
use concierge_client::ConciergeClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "concierge-cli")]
#[command(about = "Terminal client for the hotel concierge chatbot")]
#[command(version)]
struct Cli {
    /// Backend API base URL (overrides config/env)
    #[arg(long)]
    api_base: Option<String>,

    /// Session id for server-side history correlation
    #[arg(long)]
    session_id: Option<String>,

    /// Transport timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start interactive chat
    Chat,
    /// Send a single message and print the reply
    Send {
        /// Message content
        message: String,
    },
    /// Check backend availability
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    if let Some(session_id) = cli.session_id {
        config.session_id = Some(session_id);
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    let client = ConciergeClient::new(&config)?;

    match cli.command {
        Commands::Chat => {
            let controller = ChatController::new(client, config.session_id.clone());
            run_chat_loop(&controller).await?;
        }
        Commands::Send { message } => {
            let controller = ChatController::new(client, config.session_id.clone());
            controller.send(&message).await?;
            let session = controller.snapshot().await;
            if let Some(reply) = session.last() {
                render_message(reply);
            }
        }
        Commands::Health => {
            use chat_core::ChatTransport;
            if client.check().await {
                println!("{}", "backend is up".green());
            } else {
                println!("{}", "backend is unreachable".red());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn run_chat_loop<T: chat_core::ChatTransport + 'static>(
    controller: &ChatController<T>,
) -> anyhow::Result<()> {
    let session = controller.snapshot().await;
    for message in session.messages() {
        render_message(message);
    }
    println!(
        "{}",
        "Type a message, /clear to start over, /quit to exit.".dimmed()
    );

    loop {
        print!("{} ", ">".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "/quit" | "/exit" => break,
            "/clear" => {
                controller.reset().await;
                println!("{}", "Conversation cleared.".dimmed());
                let session = controller.snapshot().await;
                for message in session.messages() {
                    render_message(message);
                }
                continue;
            }
            _ => {}
        }

        match controller.send(input).await? {
            SendOutcome::Delivered => {
                let session = controller.snapshot().await;
                if let Some(reply) = session.last() {
                    render_message(reply);
                }
            }
            SendOutcome::Ignored => {}
            SendOutcome::Busy => {
                println!("{}", "Still waiting for the previous reply...".dimmed());
            }
            SendOutcome::Stale => {}
        }
    }

    Ok(())
}

fn render_message(message: &Message) {
    match message.sender {
        Sender::User => println!("{} {}", "you:".bold(), message.content),
        Sender::Assistant => println!("{} {}", "concierge:".green().bold(), message.content),
    }
    if let Some(info) = &message.booking_info {
        render_booking(info);
    }
    if let Some(hotels) = &message.hotels {
        render_hotels(hotels);
    }
}

fn render_booking(info: &BookingInfo) {
    println!("  {}", "── booking ─────────────".dimmed());
    println!("  {} {}", "id:".dimmed(), info.booking_id);
    println!("  {} {} ({})", "hotel:".dimmed(), info.hotel_name, info.city);
    println!(
        "  {} {} → {} ({} guests)",
        "stay:".dimmed(),
        info.check_in,
        info.check_out,
        info.guests
    );
    println!("  {} {:?}", "status:".dimmed(), info.status);
    if let Some(price) = info.total_price {
        println!("  {} {price}", "total:".dimmed());
    }
}

fn render_hotels(hotels: &[HotelInfo]) {
    for hotel in hotels {
        let availability = if hotel.available {
            "available".green()
        } else {
            "sold out".red()
        };
        println!(
            "  {} {} ({}) - {} {}/night [{}]",
            "•".dimmed(),
            hotel.name,
            hotel.city,
            hotel.room_type,
            hotel.price_per_night,
            availability
        );
    }
}
