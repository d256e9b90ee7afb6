use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use deck_core::model::{Deck, SlideIndex};
use services::AssessmentService;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSlide { raw: String },
    InvalidPeriod { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSlide { raw } => write!(f, "invalid --slide value: {raw}"),
            ArgsError::InvalidPeriod { raw } => {
                write!(f, "invalid --autoplay-secs value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--slide <n>] [--autoplay-secs <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --slide 1");
    eprintln!("  --autoplay-secs 8");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PITCH_START_SLIDE, PITCH_AUTOPLAY_SECS");
}

struct Args {
    start_slide: SlideIndex,
    autoplay_period: Duration,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut start_slide = std::env::var("PITCH_START_SLIDE")
            .ok()
            .and_then(|value| value.parse::<SlideIndex>().ok())
            .unwrap_or(SlideIndex::FIRST);
        let mut autoplay_period = std::env::var("PITCH_AUTOPLAY_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(Duration::from_secs(8), Duration::from_secs);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--slide" => {
                    let value = require_value(args, "--slide")?;
                    start_slide = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSlide { raw: value.clone() })?;
                }
                "--autoplay-secs" => {
                    let value = require_value(args, "--autoplay-secs")?;
                    let secs: u64 = value
                        .parse()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or(ArgsError::InvalidPeriod { raw: value.clone() })?;
                    autoplay_period = Duration::from_secs(secs);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            start_slide,
            autoplay_period,
        })
    }
}

struct DesktopApp {
    deck: Arc<Deck>,
    start_slide: SlideIndex,
    autoplay_period: Duration,
}

impl UiApp for DesktopApp {
    fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    fn start_slide(&self) -> SlideIndex {
        self.start_slide
    }

    fn autoplay_period(&self) -> Duration {
        self.autoplay_period
    }

    fn assessment(&self) -> AssessmentService {
        AssessmentService::default()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv)?;

    let deck = Arc::new(Deck::sdv_pitch());
    // Out-of-range start slides fall back to the first slide rather than
    // failing the launch.
    let start_slide = if args.start_slide.value() <= deck.total() {
        args.start_slide
    } else {
        SlideIndex::FIRST
    };
    info!(
        slides = deck.total(),
        start = %start_slide,
        autoplay_secs = args.autoplay_period.as_secs(),
        "launching"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        deck,
        start_slide,
        autoplay_period: args.autoplay_period,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the deck doesn't behave like a modal
    // window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Pitch")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
