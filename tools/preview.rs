/// Preview: build a performance from a story file and play it in the terminal.
///
/// Usage: preview --story <path> [--elements <path>] [--config <path>] [--seed <n>]
///
/// Lines are printed instead of synthesized. Ctrl-C stops the performance
/// at the next line boundary.

use std::path::Path;

use story_performance::core::speech::SpeechService;
use story_performance::{
    Character, DialogueLine, InteractiveElement, PerformanceConfig, PerformanceDirector,
    PerformanceFactory, PerformanceObserver, PerformanceOutcome, Scene, SpeechError,
    SpeechRequest, Story, StoryElement,
};

/// Prints what a synthesizer would have been asked to say.
struct ConsoleSpeech;

impl SpeechService for ConsoleSpeech {
    fn speak(&self, request: &SpeechRequest<'_>) -> Result<(), SpeechError> {
        tracing::debug!(
            locale = request.language.locale(),
            emotion = request.emotion.name(),
            rate = request.emotion.speech_rate() * request.voice.speed,
            pitch = request.voice.pitch,
            "speak"
        );
        Ok(())
    }

    fn stop(&self) {
        tracing::debug!("speech stopped");
    }
}

/// Prints playback cues.
struct Stage;

impl PerformanceObserver for Stage {
    fn on_scene_start(&mut self, scene: &Scene) {
        println!();
        println!("--- Scene {} ({}) ---", scene.order + 1, scene.setting);
    }

    fn on_dialogue(&mut self, line: &DialogueLine, character: &Character) {
        println!("{} [{}]: {}", character.name, line.emotion.name(), line.text);
    }

    fn on_interactive(&mut self, element: &InteractiveElement) {
        println!("  >> {}", element.prompt);
    }

    fn on_complete(&mut self) {
        println!();
        println!("The End.");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut story_path = None;
    let mut elements_path = None;
    let mut config_path = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--story" if i + 1 < args.len() => {
                i += 1;
                story_path = Some(args[i].clone());
            }
            "--elements" if i + 1 < args.len() => {
                i += 1;
                elements_path = Some(args[i].clone());
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().ok();
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(story_path) = story_path else {
        eprintln!("--story is required");
        print_usage();
        std::process::exit(1);
    };

    let content = match std::fs::read_to_string(&story_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read story '{}': {}", story_path, e);
            std::process::exit(1);
        }
    };

    let elements = match elements_path {
        Some(ref path) => match StoryElement::load_list_from_ron(Path::new(path)) {
            Ok(elements) => elements,
            Err(e) => {
                eprintln!("Failed to load elements '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => Vec::new(),
    };

    let config = match config_path {
        Some(ref path) => match PerformanceConfig::load_from_ron(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => PerformanceConfig::default(),
    };

    let title = Path::new(&story_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("story")
        .to_string();
    let story = Story::new(&title, &title, &content);

    let mut factory = match seed {
        Some(seed) => PerformanceFactory::with_seed(seed),
        None => PerformanceFactory::new(),
    };
    let performance = factory.create(&story, &elements);

    println!("Seed: {}", factory.seed());
    println!("Cast:");
    for character in &performance.characters {
        println!(
            "  {} - {} ({}; {})",
            character.name,
            character.voice.info().name,
            character.personality.join(", "),
            character.dialogue_style
        );
    }
    println!(
        "{} scenes, {} lines",
        performance.scenes.len(),
        performance.line_count()
    );

    let director = PerformanceDirector::with_config(ConsoleSpeech, config);
    let mut stage = Stage;
    let play = director.start_performance(&performance, &mut stage);
    tokio::pin!(play);

    let finished = tokio::select! {
        outcome = &mut play => Some(outcome),
        _ = tokio::signal::ctrl_c() => None,
    };
    let outcome = match finished {
        Some(outcome) => outcome,
        None => {
            director.stop_performance();
            play.await
        }
    };

    match outcome {
        Ok(PerformanceOutcome::Completed) => {}
        Ok(PerformanceOutcome::Cancelled) => println!("\nPerformance stopped."),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Preview - play a story performance in the terminal.");
    println!();
    println!("Usage: preview --story <path> [--elements <path>] [--config <path>] [--seed <n>]");
    println!();
    println!("  --story <path>     Plain-text story file");
    println!("  --elements <path>  RON list of chosen story elements (optional)");
    println!("  --config <path>    RON playback config (optional)");
    println!("  --seed <n>         Seed for scene prompt selection (default: random)");
}
