//! Terminal quote calculator and booking form for FastClear Portsmouth.

mod app;
mod clipboard;
mod input;
mod logging;
mod ui;

use std::{io, path::PathBuf, sync::Arc, time::Duration as StdDuration};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use tracing::info;

use fastclear_core::ports::RelayError;
use fastclear_core::service::{Dispatch, QuoteService};
use fastclear_relay_formspree as formspree;

use crate::app::{App, Notice};
use crate::input::Action;

#[derive(Debug, Parser)]
#[command(
    name = "fastclear",
    about = "Quote calculator and booking form for FastClear Portsmouth",
    version
)]
struct Cli {
    /// Form relay endpoint that receives booking requests; demo mode when unset
    #[arg(long, env = "FASTCLEAR_RELAY_URL")]
    relay_url: Option<String>,

    /// Append logs to this file instead of discarding them
    #[arg(long, env = "FASTCLEAR_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    // HTTP + service setup
    let client = Client::builder().user_agent("fastclear/0.1").build()?;

    let relay = cli.relay_url.map(|url| {
        info!(endpoint = %url, "relay endpoint configured");
        formspree::relay(client, url)
    });
    if relay.is_none() {
        info!("no relay endpoint configured, bookings will be logged only");
    }

    let service = Arc::new(QuoteService::new(relay));

    // App state
    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::CopySummary => {
                    let summary = app.service.summary(&app.selection);

                    match clipboard::copy(&summary) {
                        Ok(()) => {
                            app.notice = Some(Notice::info("Quote copied to clipboard"));
                        }
                        Err(err) => {
                            app.notice = Some(Notice::error(format!("Copy failed: {err}")));
                        }
                    }
                }
                Action::SubmitBooking => {
                    if !app.selection.ready_to_book() {
                        app.notice =
                            Some(Notice::error("Complete the required fields before booking"));
                        continue;
                    }

                    app.is_submitting = true;
                    app.notice = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app.service.submit_booking(&app.selection).await;

                    app.is_submitting = false;
                    app.notice = Some(match res {
                        Ok(Dispatch::Sent) => {
                            Notice::info("Booking request sent! We will contact you shortly.")
                        }
                        Ok(Dispatch::Logged) => Notice::info(
                            "Demo: booking captured in the log. Set --relay-url to deliver bookings.",
                        ),
                        Err(RelayError::Rejected { .. }) => Notice::error(
                            "There was an error submitting the booking. Please try WhatsApp or call.",
                        ),
                        Err(RelayError::Network(_)) => {
                            Notice::error("Network error. Please try again later.")
                        }
                    });
                }
            }
        }
    }

    Ok(())
}
