// ABOUTME: App orchestrator: wires config, style catalog, session, generator, and the TUI loop.
// ABOUTME: Also hosts the headless --print and --list-styles paths.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyEventKind,
};
use crossterm::execute;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::config::Config;
use crate::export::DirectorySink;
use crate::generator::Generator;
use crate::studio::Studio;
use crate::styles::{Rendered, StylePresetTable, build_catalog};
use crate::tui::input::{InputResult, handle_key};
use crate::tui::state::{Focus, TuiState};
use crate::tui::ui;
use crate::tui::widgets::status::format_elapsed;

/// Top-level application that orchestrates all subsystems.
pub struct App {
    config: Config,
    studio: Studio,
}

impl App {
    /// Build the catalog and a fresh session from `config`.
    pub fn new(config: Config, initial_prompt: Option<String>) -> anyhow::Result<Self> {
        let (presets, renderer) = build_catalog(&config.styles)?;
        let mut studio = Studio::new(Arc::new(presets), Arc::new(renderer));
        if !config.generation.default_style.is_empty() {
            studio.set_style(config.generation.default_style.clone());
        }
        if let Some(prompt) = initial_prompt {
            studio.set_prompt(prompt);
        }
        Ok(Self { config, studio })
    }

    pub fn studio(&self) -> &Studio {
        &self.studio
    }

    /// Run the interactive TUI until the user quits.
    pub async fn run(self) -> anyhow::Result<()> {
        let latency = Duration::from_millis(self.config.generation.simulated_latency_ms);
        let (generator, results) = Generator::new(self.studio.renderer(), latency);
        let sink = DirectorySink::new(self.config.export.directory.clone());

        let state = TuiState::new(
            self.studio,
            sink.dir().display().to_string(),
            self.config.export.filename,
        );

        info!(
            styles = state.studio.presets().len(),
            latency_ms = generator.latency().as_millis() as u64,
            "starting studio"
        );

        let mut terminal = ratatui::init();
        execute!(std::io::stdout(), EnableBracketedPaste)?;
        let result = event_loop(&mut terminal, state, &generator, results, &sink).await;
        let _ = execute!(std::io::stdout(), DisableBracketedPaste);
        ratatui::restore();

        match result {
            Ok(state) => {
                print_exit_screen(&state);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "studio exited with error");
                Err(e)
            }
        }
    }

    /// Generate once from the configured style and prompt, print the result, optionally export.
    pub fn run_headless(mut self, json: bool, export: bool) -> anyhow::Result<()> {
        let generated = self.studio.generate().cloned();
        let entry = match generated {
            Ok(entry) => entry,
            Err(err) => {
                report_notifications(&mut self.studio);
                return Err(err.into());
            }
        };

        let mut stdout = std::io::stdout().lock();
        if json {
            serde_json::to_writer_pretty(&mut stdout, &entry)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "{}", entry.content)?;
        }

        if export {
            let sink = DirectorySink::new(self.config.export.directory.clone());
            match self
                .studio
                .export(&sink, self.config.export.filename, Utc::now().date_naive())
            {
                Ok(receipt) => eprintln!("exported {}", receipt.path.display()),
                Err(err) => {
                    report_notifications(&mut self.studio);
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }
}

/// Drive input, rendering, and generation results until quit.
async fn event_loop(
    terminal: &mut DefaultTerminal,
    mut state: TuiState,
    generator: &Generator,
    mut results: mpsc::Receiver<Rendered>,
    sink: &DirectorySink,
) -> anyhow::Result<TuiState> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, &mut state))?;

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else {
                    break;
                };
                match event? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match handle_key(&mut state, key) {
                            InputResult::None => {}
                            InputResult::Generate => {
                                if let Some(request) = state.start_generation() {
                                    generator.spawn(request);
                                }
                            }
                            InputResult::Export => {
                                state.export(sink, Utc::now().date_naive());
                            }
                            InputResult::Quit => break,
                        }
                    }
                    Event::Paste(text) => {
                        if state.focus == Focus::Prompt {
                            state.insert_str_at_cursor(&text);
                        }
                    }
                    _ => {}
                }
            }
            Some(rendered) = results.recv() => {
                state.finish_generation(rendered);
            }
        }
    }

    Ok(state)
}

/// Print queued notifications to stderr (headless mode has no toast area).
fn report_notifications(studio: &mut Studio) {
    for note in studio.drain_notifications() {
        eprintln!("{}: {}", note.title, note.description);
    }
}

/// Print the preset table for --list-styles.
pub fn print_styles(presets: &StylePresetTable) {
    let width = presets.iter().map(|p| p.id.len()).max().unwrap_or(0);
    for preset in presets.iter() {
        println!("{:width$}  {}", preset.id, preset.display_name, width = width);
        if let Some(ref description) = preset.description {
            println!("{:width$}  {}", "", description, width = width);
        }
    }
}

/// Print a farewell summary after the TUI exits.
fn print_exit_screen(state: &TuiState) {
    let elapsed = format_elapsed(state.session_start.elapsed().as_secs());
    let count = state.studio.history().len();

    println!();
    println!("  \x1b[1mThanks for using content studio!\x1b[0m");
    println!("  Session lasted {elapsed} with {count} generations.");
    println!();
}
