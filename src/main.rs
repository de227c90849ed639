//! `finetune` - prepare training data, upload it, launch a fine-tuning
//! job, watch its progress, and spot-check the resulting model.

use anyhow::Context;
use clap::{Parser, Subcommand};
use finetune_pipeline::pipeline::{
    self, default_cleaned_path, prepare_training_data, FineTunePipeline, TrainOptions,
};
use finetune_pipeline::{FineTuneClient, FineTuneClientBuilder, FineTuneConfig, FineTuningJobStatus};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_SYSTEM_PROMPT: &str =
    "You are MenstruAI, a specialized assistant for menstrual health.";

const DEFAULT_TEST_QUESTIONS: [&str; 5] = [
    "Why is my period late?",
    "What are normal PMS symptoms?",
    "How can I track ovulation?",
    "I have severe period pain, what should I do?",
    "How does stress affect my cycle?",
];

#[derive(Parser, Debug)]
#[command(
    name = "finetune",
    version,
    about = "Fine-tuning pipeline: validate, upload, train, monitor, test"
)]
struct Cli {
    /// Provider API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the provider base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and clean a JSONL training file
    Prepare {
        /// Path to the exported JSONL training file
        #[arg(long)]
        training_file: PathBuf,

        /// Where to write the cleaned file (default: <input>_cleaned.jsonl)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Upload a cleaned training file to the provider
    Upload {
        /// Path to the cleaned JSONL training file
        #[arg(long)]
        training_file: PathBuf,
    },

    /// Start a fine-tuning job from an uploaded file
    Train {
        /// File ID returned by the upload step
        #[arg(long)]
        file_id: String,

        /// Base model to fine-tune
        #[arg(long, default_value = pipeline::DEFAULT_BASE_MODEL)]
        model: String,

        /// Number of training epochs
        #[arg(long, default_value_t = pipeline::DEFAULT_EPOCHS)]
        epochs: u64,

        /// Training batch size
        #[arg(long, default_value_t = pipeline::DEFAULT_BATCH_SIZE)]
        batch_size: u64,

        /// Learning-rate multiplier
        #[arg(long, default_value_t = pipeline::DEFAULT_LEARNING_RATE_MULTIPLIER)]
        learning_rate_multiplier: f64,

        /// Suffix for the fine-tuned model name
        #[arg(long)]
        suffix: Option<String>,

        /// Optional validation file ID
        #[arg(long)]
        validation_file_id: Option<String>,
    },

    /// Check the status of a fine-tuning job
    Status {
        /// Fine-tuning job ID
        #[arg(long)]
        job_id: String,

        /// Also print recent job events
        #[arg(long)]
        events: bool,
    },

    /// Ask the fine-tuned model a set of sample questions
    Test {
        /// Fine-tuned model ID
        #[arg(long)]
        model_id: String,

        /// System prompt to test with
        #[arg(long, default_value = DEFAULT_SYSTEM_PROMPT)]
        system: String,

        /// Question to ask (repeatable; defaults to the built-in samples)
        #[arg(long = "question")]
        questions: Vec<String>,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .expect("default filter is valid");

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_client(cli: &Cli) -> anyhow::Result<Arc<dyn FineTuneClient>> {
    let api_key = cli
        .api_key
        .clone()
        .context("an API key is required: pass --api-key or set OPENAI_API_KEY")?;

    let mut config = FineTuneConfig::new(api_key);
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(Url::parse(base_url).context("invalid --base-url")?);
    }

    Ok(FineTuneClientBuilder::new().with_config(config).build()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match &cli.command {
        Command::Prepare {
            training_file,
            output,
        } => {
            let output = output
                .clone()
                .unwrap_or_else(|| default_cleaned_path(training_file));

            let outcome = prepare_training_data(training_file, &output)?;
            println!("Read {} training examples", outcome.read);
            println!(
                "Saved {} cleaned examples to {}",
                outcome.kept,
                output.display()
            );
        }

        Command::Upload { training_file } => {
            let pipeline = FineTunePipeline::new(build_client(&cli)?);
            let file = pipeline.upload(training_file).await?;
            println!("File uploaded: {}", file.id);
            println!("Save this file ID for the train step");
        }

        Command::Train {
            file_id,
            model,
            epochs,
            batch_size,
            learning_rate_multiplier,
            suffix,
            validation_file_id,
        } => {
            let pipeline = FineTunePipeline::new(build_client(&cli)?);
            let options = TrainOptions {
                model: model.clone(),
                n_epochs: *epochs,
                batch_size: *batch_size,
                learning_rate_multiplier: *learning_rate_multiplier,
                suffix: suffix.clone(),
                validation_file: validation_file_id.clone(),
            };

            let job = pipeline.train(file_id, options).await?;
            println!("Fine-tuning job created: {}", job.id);
            println!("Save this job ID to check status");
        }

        Command::Status { job_id, events } => {
            let pipeline = FineTunePipeline::new(build_client(&cli)?);
            let job = pipeline.status(job_id).await?;

            println!("Job status: {}", job.status);
            match job.status {
                FineTuningJobStatus::Succeeded => {
                    if let Some(model) = &job.fine_tuned_model {
                        println!("Fine-tuned model ID: {}", model);
                    }
                }
                FineTuningJobStatus::Failed => {
                    if let Some(error) = &job.error {
                        println!(
                            "Fine-tuning failed: {}",
                            error.message.as_deref().unwrap_or("unknown error")
                        );
                    }
                }
                _ => println!("Job is still {}...", job.status),
            }

            if *events {
                for event in pipeline.events(job_id).await? {
                    println!("[{}] {}", event.level, event.message);
                }
            }
        }

        Command::Test {
            model_id,
            system,
            questions,
        } => {
            let pipeline = FineTunePipeline::new(build_client(&cli)?);

            let questions: Vec<String> = if questions.is_empty() {
                DEFAULT_TEST_QUESTIONS.iter().map(|q| q.to_string()).collect()
            } else {
                questions.clone()
            };

            let answers = pipeline.test(model_id, system, &questions).await?;
            for (i, answer) in answers.iter().enumerate() {
                println!("--- Test {} ---", i + 1);
                println!("Question: {}", answer.question);
                println!(
                    "Answer: {}",
                    answer.answer.as_deref().unwrap_or("(no content)")
                );
            }
        }
    }

    Ok(())
}
