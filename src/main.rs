use std::io::{BufRead, Write as _};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use yojana_voice::voice::{
    CapturePlatform, CaptureSession, SpeechOutputController, SynthesisCapability,
};
use yojana_voice::{
    Assistant, Config, Dictionary, FileStore, PlaybackSessionManager, SpeechInputController,
    TracingNotifier, language, prefs,
};

/// Yojana - Multilingual voice assistant for welfare-scheme queries
#[derive(Parser)]
#[command(name = "yojana", version, about)]
struct Cli {
    /// Response locale (e.g. "hi", "pa", "ta")
    #[arg(short, long, env = "YOJANA_LOCALE")]
    locale: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable voice features (for headless servers without audio hardware)
    #[arg(long, env = "YOJANA_DISABLE_VOICE")]
    disable_voice: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a single question and print the response
    Ask {
        /// Question text
        text: String,
    },
    /// Interactive question loop
    Repl,
    /// List supported locales
    Locales,
}

/// The CLI runs without a microphone; capture is reported as unavailable
/// and the assistant degrades to its text path.
struct HeadlessPlatform;

impl CapturePlatform for HeadlessPlatform {
    fn create_session(&mut self) -> Option<Box<dyn CaptureSession>> {
        None
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn,yojana_voice=info",
        1 => "info,yojana_voice=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_with_options(cli.disable_voice)?;
    tracing::debug!(?config, "loaded configuration");

    let locale = cli.locale.unwrap_or_else(|| config.default_locale.clone());

    match cli.command {
        Command::Ask { text } => {
            let mut assistant = build_assistant(&config, &locale);
            match assistant.submit_text(&text).await {
                Some(response) => println!("{response}"),
                None => tracing::warn!("empty question, nothing to answer"),
            }
        }
        Command::Repl => repl(&config, &locale).await?,
        Command::Locales => {
            for profile in yojana_voice::PROFILES {
                println!("{:4} {}", profile.locale_id, profile.english_name);
            }
        }
    }

    Ok(())
}

fn build_assistant(config: &Config, locale: &str) -> Assistant {
    let store = FileStore::new(config.data_dir.clone());
    let preferences = prefs::load(&store);

    let synthesis = if config.voice_enabled {
        platform_synthesis()
    } else {
        tracing::info!("voice disabled, responses stay text-only");
        None
    };

    Assistant::new(
        SpeechInputController::new(Box::new(HeadlessPlatform)),
        PlaybackSessionManager::new(SpeechOutputController::new(synthesis)),
        Box::new(TracingNotifier),
        Dictionary::new(),
        preferences,
        locale,
    )
}

/// Synthesis backend linked into this build, if any
///
/// The CLI ships no audio stack today; hosts embedding the library supply
/// their own capability. `voice_enabled` can only gate a backend off, never
/// conjure one.
fn platform_synthesis() -> Option<Box<dyn SynthesisCapability>> {
    None
}

async fn repl(config: &Config, locale: &str) -> anyhow::Result<()> {
    let mut assistant = build_assistant(config, locale);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!(
        "Ask about any government scheme ({}). Empty line quits.",
        language::display_name(locale)
    );
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        if let Some(response) = assistant.submit_text(question).await {
            println!("{response}");
        }
    }

    Ok(())
}
