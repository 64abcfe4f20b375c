use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::sync::Arc;
use vocoach::chat::GroqChatClient;
use vocoach::cli::{Cli, Commands, ModelsAction};
use vocoach::config::Config;
use vocoach::defaults;
use vocoach::interview::{Evaluator, QUESTIONS};
use vocoach::models::catalog::list_models;
use vocoach::models::download::{
    download_model, ensure_model, format_model_info, list_installed_models,
};
use vocoach::stt::whisper::{WhisperConfig, WhisperTranscriber};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(device) = cli.device {
        config.audio.device = Some(device);
    }
    if let Some(model) = cli.model {
        config.stt.model = model;
    }
    if let Some(language) = cli.language {
        config.stt.language = language;
    }

    match cli.command {
        None => {
            run_trainer_window(&config, cli.no_download)?;
        }
        Some(Commands::Evaluate { answers }) => {
            run_evaluate(&config, answers, cli.no_download, cli.quiet)?;
        }
        Some(Commands::Devices) => {
            list_audio_devices()?;
        }
        Some(Commands::Models { action }) => {
            handle_models_command(action)?;
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/vocoach/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };

    Ok(config.with_env_overrides())
}

/// Build the evaluation pipeline: local Whisper model plus the hosted chat
/// endpoint.
fn build_evaluator(config: &Config, no_download: bool) -> Result<Arc<Evaluator>> {
    let model_path = ensure_model(&config.stt.model, no_download)?;

    // English-only models reject language auto-detection
    let language = if config.stt.model.ends_with(defaults::ENGLISH_ONLY_SUFFIX)
        && config.stt.language == defaults::AUTO_LANGUAGE
    {
        "en".to_string()
    } else {
        config.stt.language.clone()
    };

    log::info!(
        "Loading Whisper model '{}' ({} backend)...",
        config.stt.model,
        defaults::gpu_backend()
    );
    let transcriber = WhisperTranscriber::new(WhisperConfig {
        model_path,
        language,
        threads: config.stt.threads,
    })?;

    let api_key = std::env::var(defaults::API_KEY_ENV).ok();
    if api_key.is_none() {
        log::warn!(
            "{} is not set; evaluation requests will fail until it is",
            defaults::API_KEY_ENV
        );
    }
    let chat = GroqChatClient::new(&config.chat, api_key)?;

    Ok(Arc::new(Evaluator::new(
        Arc::new(transcriber),
        Arc::new(chat),
    )))
}

/// Launch the recording window.
#[cfg(feature = "gui")]
fn run_trainer_window(config: &Config, no_download: bool) -> Result<()> {
    let evaluator = build_evaluator(config, no_download)?;
    let recordings_dir = Arc::new(tempfile::tempdir()?);

    vocoach::ui::run(evaluator, config.audio.device.clone(), recordings_dir)
        .map_err(|e| anyhow::anyhow!("window error: {}", e))
}

#[cfg(not(feature = "gui"))]
fn run_trainer_window(_config: &Config, _no_download: bool) -> Result<()> {
    anyhow::bail!(
        "This binary was built without the gui feature. \
         Use 'vocoach evaluate <WAV>...' for headless evaluation."
    );
}

/// Evaluate pre-recorded WAV answers and print the report to stdout.
fn run_evaluate(
    config: &Config,
    answers: Vec<PathBuf>,
    no_download: bool,
    quiet: bool,
) -> Result<()> {
    if answers.len() > QUESTIONS.len() {
        anyhow::bail!(
            "Got {} answers but there are only {} questions",
            answers.len(),
            QUESTIONS.len()
        );
    }

    let evaluator = build_evaluator(config, no_download)?;

    let mut slots: Vec<Option<PathBuf>> = answers.into_iter().map(Some).collect();
    slots.resize(QUESTIONS.len(), None);

    if !quiet {
        eprintln!("{}", defaults::STATUS_PROCESSING);
    }

    let evaluation = evaluator.evaluate(&slots)?;

    println!("{}", evaluation.report);
    if !quiet {
        eprintln!("{}", evaluation.status.green());
    }

    Ok(())
}

/// List available audio input devices.
#[cfg(feature = "cpal-audio")]
fn list_audio_devices() -> Result<()> {
    let devices = vocoach::audio::capture::list_devices()?;

    if devices.is_empty() {
        eprintln!("No audio input devices found");
        std::process::exit(1);
    }

    println!("Available audio input devices:");
    for (idx, device) in devices.iter().enumerate() {
        println!("  [{}] {}", idx, device);
    }

    Ok(())
}

#[cfg(not(feature = "cpal-audio"))]
fn list_audio_devices() -> Result<()> {
    anyhow::bail!("This binary was built without the cpal-audio feature");
}

/// Handle model management commands.
fn handle_models_command(action: ModelsAction) -> Result<()> {
    match action {
        ModelsAction::List => {
            println!("Available models:");
            for model in list_models() {
                println!("  {}", format_model_info(model));
            }

            // Manually placed model files outside the catalog still work
            let catalog_names: std::collections::HashSet<&str> =
                list_models().iter().map(|m| m.name).collect();
            let extras: Vec<String> = list_installed_models()
                .into_iter()
                .filter(|name| !catalog_names.contains(name.as_str()))
                .collect();
            if !extras.is_empty() {
                println!();
                println!("Other installed models:");
                for name in extras {
                    println!("  {:12} [installed]", name);
                }
            }
        }
        ModelsAction::Install { name } => {
            let path = download_model(&name, true)?;
            println!("Model '{}' installed successfully", name);
            println!("Location: {}", path.display());
        }
    }
    Ok(())
}
