use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver};

use rookie_core::{RequestState, SearchSession, StockApiClient};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error::CliError;
use crate::output::Renderer;

pub const POPULAR_TICKERS: [&str; 6] = ["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "NVDA"];

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionInput {
    Search(String),
    Pick(usize),
    Retry,
    Popular,
    Quit,
    Blank,
}

fn parse_input(line: &str) -> SessionInput {
    let line = line.trim();
    if line.is_empty() {
        return SessionInput::Blank;
    }

    if let Some(command) = line.strip_prefix(':') {
        return match command.trim().to_ascii_lowercase().as_str() {
            "r" | "retry" => SessionInput::Retry,
            "p" | "popular" => SessionInput::Popular,
            "q" | "quit" | "exit" => SessionInput::Quit,
            _ => SessionInput::Search(String::from(line)),
        };
    }

    match line.parse::<usize>() {
        Ok(number) => SessionInput::Pick(number),
        Err(_) => SessionInput::Search(String::from(line)),
    }
}

pub async fn run(client: &StockApiClient, renderer: Renderer) -> Result<ExitCode, CliError> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    drive(client, renderer, stdin, &mut stdout).await?;
    Ok(ExitCode::SUCCESS)
}

/// Read commands from `input` until EOF or `:quit`, rendering every state change.
async fn drive<R, W>(
    client: &StockApiClient,
    renderer: Renderer,
    input: R,
    out: &mut W,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (sender, states) = mpsc::channel();
    let mut session = SearchSession::new();
    session.on_transition(move |state| {
        let _ = sender.send(state.clone());
    });

    writeln!(
        out,
        "Enter a ticker (e.g. {}), :popular, :retry or :quit.",
        POPULAR_TICKERS[..3].join(", ")
    )?;
    prompt(out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let ticket = match parse_input(&line) {
            SessionInput::Quit => break,
            SessionInput::Blank => None,
            SessionInput::Popular => {
                for (index, ticker) in POPULAR_TICKERS.iter().enumerate() {
                    writeln!(out, "  {}. {ticker}", index + 1)?;
                }
                None
            }
            SessionInput::Pick(number) => match number
                .checked_sub(1)
                .and_then(|index| POPULAR_TICKERS.get(index))
            {
                Some(ticker) => session.submit(ticker).ok(),
                None => {
                    writeln!(out, "No popular ticker #{number}; try :popular.")?;
                    None
                }
            },
            SessionInput::Retry => {
                let ticket = session.retry();
                if ticket.is_none() {
                    writeln!(out, "Nothing to retry.")?;
                }
                ticket
            }
            SessionInput::Search(raw) => match session.submit(&raw) {
                Ok(ticket) => Some(ticket),
                Err(error) => {
                    writeln!(out, "  ! {error}")?;
                    None
                }
            },
        };

        if let Some(ticket) = ticket {
            flush_states(&states, renderer, out)?;
            session.run(client, ticket).await;
        }
        flush_states(&states, renderer, out)?;
        prompt(out)?;
    }

    Ok(())
}

fn flush_states<W: Write>(
    states: &Receiver<RequestState>,
    renderer: Renderer,
    out: &mut W,
) -> Result<(), CliError> {
    for state in states.try_iter() {
        renderer.state(out, &state)?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<(), CliError> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
