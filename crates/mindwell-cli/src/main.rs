use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use mindwell_cli::config::{self, CredentialSource, MindwellConfig};
use mindwell_cli::snapshot::Snapshot;
use mindwell_cli::{aws, report};
use mindwell_core::notice::Notice;
use mindwell_flows::error::FlowError;
use mindwell_flows::flows::categorize::{CategorizeInput, categorize_post};
use mindwell_flows::flows::counselor::{CounselorInput, personal_counselor};
use mindwell_flows::flows::insights::{InsightsInput, generate_personalized_insights};
use mindwell_flows::flows::sentiment::analyze_journal_sentiment;
use mindwell_flows::flows::stress::{ForecastSource, forecast_stress};
use mindwell_flows::flows::wellness_tools::{WellnessToolsInput, suggest_wellness_tools};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "mindwell", version, about = "Student wellness tracker")]
struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "text", env = "MINDWELL_LOG_FORMAT")]
    log_format: LogFormat,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Streaks, wellness score, goal progress and this week's mood
    Stats {
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Classify the sentiment of a journal entry
    Sentiment {
        /// Entry text; defaults to the latest entry in the snapshot
        text: Option<String>,
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Personalized insights from mood, habits and goals
    Insights {
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Predict high-stress periods from the schedule
    Stress {
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Suggest wellness tools for the current mood
    Tools {
        #[arg(long)]
        mood: String,
        #[arg(long, default_value = "")]
        journal: String,
        /// Comma-separated stress triggers
        #[arg(long, default_value = "")]
        triggers: String,
    },
    /// Pick the forum for a new post
    Categorize {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Send a message to the personal counselor
    Counsel {
        message: String,
        /// Prior conversation is read from the snapshot
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Config file operations
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective config with secrets redacted
    Show,
    /// Write a new config file
    Init {
        #[arg(long, default_value = config::DEFAULT_REGION)]
        region: String,
        #[arg(long, default_value = config::DEFAULT_MODEL_ID)]
        model_id: String,
        /// Use a named AWS profile instead of the default chain
        #[arg(long)]
        profile: Option<String>,
        /// IANA time zone for day boundaries
        #[arg(long)]
        time_zone: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.command {
        Commands::Config(cmd) => run_config(cmd, cli.json),
        Commands::Stats { snapshot } => {
            let config = effective_config()?;
            let snapshot = Snapshot::load(&snapshot)?;
            let stats = report::stats(&snapshot, &config::now(&config)?);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", report::render(&stats));
            }
            Ok(())
        }
        command => run_flow_command(command, cli.json).await,
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn effective_config() -> Result<MindwellConfig> {
    let mut config = config::load_or_default()?;
    config::apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

fn run_config(cmd: ConfigCommands, json: bool) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = effective_config()?;
            let info = config::config_info(&config, &config::config_path()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("config:       {}", info.path);
                println!("region:       {}", info.region);
                println!("model:        {}", info.model_id);
                println!(
                    "time zone:    {}",
                    info.time_zone.as_deref().unwrap_or("system")
                );
                println!("credentials:  {}", info.credential_type);
                if let Some(profile) = &info.profile_name {
                    println!("profile:      {profile}");
                }
                if let Some(hint) = &info.access_key_hint {
                    println!("access key:   {hint}");
                }
            }
            Ok(())
        }
        ConfigCommands::Init {
            region,
            model_id,
            profile,
            time_zone,
        } => {
            if let Some(name) = &time_zone {
                jiff::tz::TimeZone::get(name)
                    .map_err(|e| eyre::eyre!("unknown time zone {name:?}: {e}"))?;
            }
            let config = MindwellConfig {
                region,
                model_id,
                time_zone,
                credentials: match profile {
                    Some(profile_name) => CredentialSource::Profile { profile_name },
                    None => CredentialSource::DefaultChain,
                },
                ..MindwellConfig::default()
            };
            let path = config::save_config(&config)?;
            println!("wrote {}", path.display());
            Ok(())
        }
    }
}

async fn run_flow_command(command: Commands, json: bool) -> Result<()> {
    let config = effective_config()?;
    let model = aws::bedrock_model(&config).await;

    match command {
        Commands::Sentiment { text, snapshot } => {
            let text = match (text, snapshot) {
                (Some(text), _) => text,
                (None, Some(path)) => Snapshot::load(&path)?
                    .latest_journal_entry()
                    .map(|e| e.content.clone())
                    .ok_or_else(|| eyre::eyre!("the snapshot has no journal entries"))?,
                (None, None) => return Err(eyre::eyre!("pass the entry text or --snapshot")),
            };
            let analysis = analyze_journal_sentiment(&model, &text)
                .await
                .map_err(surface)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{} {:?}", analysis.emoji, analysis.sentiment);
                println!("{}", analysis.summary);
            }
        }
        Commands::Insights { snapshot } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let input =
                InsightsInput::from_records(&snapshot.mood_logs, &snapshot.habits, &snapshot.goals)
                    .map_err(surface)?;
            let output = generate_personalized_insights(&model, &input)
                .await
                .map_err(surface)?;
            println!("{}", output.insights);
        }
        Commands::Stress { snapshot } => {
            let snapshot = Snapshot::load(&snapshot)?;
            if snapshot.schedule.is_empty() {
                let notice = Notice::no_schedule();
                return Err(eyre::eyre!("{}: {}", notice.title, notice.description));
            }
            let now = config::now(&config)?;
            let forecast =
                forecast_stress(&model, &snapshot.schedule, &snapshot.mood_logs, &now).await;
            if forecast.source == ForecastSource::Heuristic {
                let notice = Notice::stress_fallback();
                eprintln!("{}: {}", notice.title, notice.description);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                for period in &forecast.periods {
                    println!("{}  {}", period.date, period.reason);
                }
            }
        }
        Commands::Tools {
            mood,
            journal,
            triggers,
        } => {
            let input = WellnessToolsInput {
                mood,
                journal_entry: journal,
                stress_triggers: triggers,
            };
            let output = suggest_wellness_tools(&model, &input)
                .await
                .map_err(surface)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                for tool in &output.suggested_tools {
                    println!("- {tool}");
                }
                println!();
                println!("{}", output.reasoning);
            }
        }
        Commands::Categorize {
            snapshot,
            title,
            content,
        } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let input = CategorizeInput {
                post_title: title,
                post_content: content,
                available_forums: snapshot.forums,
            };
            let output = categorize_post(&model, &input).await.map_err(surface)?;
            let name = input
                .available_forums
                .iter()
                .find(|f| f.id == output.forum_id)
                .map(|f| f.name.as_str())
                .unwrap_or_default();
            println!("{} ({name})", output.forum_id);
        }
        Commands::Counsel { message, snapshot } => {
            let history = match snapshot {
                Some(path) => Snapshot::load(&path)?.counselor_chats,
                None => Vec::new(),
            };
            let input = CounselorInput::from_messages(&history, message);
            let output = personal_counselor(&model, &input).await.map_err(surface)?;
            println!("{}", output.response);
        }
        Commands::Stats { .. } | Commands::Config(_) => {}
    }

    Ok(())
}

/// Log the underlying failure and hand the student the generic notice.
fn surface(e: FlowError) -> eyre::Report {
    tracing::error!(error = %e, "flow failed");
    let notice = e.notice();
    eyre::eyre!("{}: {}", notice.title, notice.description)
}
