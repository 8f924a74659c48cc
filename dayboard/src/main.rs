use anyhow::Result;
use clap::Parser;
use model::{Cmd, Model, Msg, update};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, mpsc};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod days;
mod dog;
mod input;
mod view;

const DOG_API_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// How long to wait for a key before draining async messages.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "dayboard")]
#[command(about = "A daily home page for the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Endpoint returning {"message": "<image url>"} for the featured dog
    #[arg(long, default_value = DOG_API_URL)]
    api_url: String,

    /// Append tracing output to this file (stdout belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    // without a log file there is no sink: the terminal owns stdout
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &runtime, &cli.api_url);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &tokio::runtime::Runtime,
    api_url: &str,
) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    // no timeout on the client: the fetch either resolves or is dropped
    // on teardown together with the runtime
    let client = reqwest::Client::new();

    let mut model = Model::new(days::week());

    // mount effects: roll the lucky number once, let the reducer command
    // the first dog fetch
    let cmd = update(
        &mut model,
        Msg::Mount {
            lucky_number: rand::random::<f64>(),
        },
    );
    run_cmd(cmd, runtime, &client, api_url, &tx);

    // initial draw
    terminal.draw(|f| view::draw(f, &model))?;

    let mut needs_redraw = false;
    while !model.quit() {
        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(msg) = input::map_key(model.mode(), key) {
                        let vibe_edit = matches!(msg, Msg::VibeChar(_) | Msg::VibeBackspace);
                        let cmd = update(&mut model, msg);
                        if vibe_edit {
                            debug!(vibe = model.vibe(), "vibe changed");
                        }
                        run_cmd(cmd, runtime, &client, api_url, &tx);
                        needs_redraw = true;
                    }
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }

        while let Ok(msg) = rx.try_recv() {
            let cmd = update(&mut model, msg);
            run_cmd(cmd, runtime, &client, api_url, &tx);
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| view::draw(f, &model))?;
            needs_redraw = false;
        }
    }

    Ok(())
}

fn run_cmd(
    cmd: Cmd,
    runtime: &tokio::runtime::Runtime,
    client: &reqwest::Client,
    api_url: &str,
    tx: &mpsc::Sender<Msg>,
) {
    match cmd {
        Cmd::None | Cmd::Quit => {}
        Cmd::FetchDog => {
            runtime.spawn(dog::fetch_and_send(
                client.clone(),
                api_url.to_string(),
                tx.clone(),
            ));
        }
    }
}
