//! REPL session
//!
//! Holds the pagination cursors and runs commands against the API client.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;
use crate::repl::commands::{Command, COMMANDS};

/// Prompt printed before each line of input
pub const PROMPT: &str = "Pokedex > ";

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive session state.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    /// URL of the page `map` shows next
    next: Option<String>,
    /// URL of the page `mapb` shows next
    previous: Option<String>,
    /// Set once any page has been shown
    paged: bool,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            paged: false,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    // == Execute ==
    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => {
                write!(out, "Welcome to the Pokedex!\nUsage:\n\n")?;
                for (name, description) in COMMANDS {
                    writeln!(out, "{}: {}", name, description)?;
                }
            }
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                if self.paged && self.next.is_none() {
                    writeln!(out, "you're on the last page")?;
                } else {
                    let url = self.next.clone();
                    self.show_page(url.as_deref(), out).await?;
                }
            }
            Command::MapBack => match self.previous.clone() {
                Some(url) => self.show_page(Some(&url), out).await?,
                None => writeln!(out, "you're on the first page")?,
            },
            Command::Explore(area) => {
                let area = area.ok_or(PokedexError::MissingArgument("explore"))?;
                let detail = self.client.location_area(&area).await?;
                writeln!(out, "Exploring {}...", detail.name)?;
                writeln!(out, "Found Pokemon:")?;
                for name in detail.pokemon_names() {
                    writeln!(out, " - {}", name)?;
                }
            }
            Command::Unknown(name) => {
                writeln!(out, "Unknown command: {}", name)?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn show_page<W: Write>(&mut self, url: Option<&str>, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url).await?;
        self.update_cursors(&page);
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    fn update_cursors(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.paged = true;
    }
}

// == Run ==
/// Reads commands from `input` until `exit` or end of input.
///
/// Command failures are printed as `Error: ...` and do not end the loop;
/// only I/O failures on `input` or `out` are returned.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        debug!(?command, "Dispatching command");

        match session.execute(command, out).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(PokedexError::Io(err)) => return Err(PokedexError::Io(err)),
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
    }

    Ok(())
}
