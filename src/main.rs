use clap::Parser;
use std::{env, path::PathBuf, process::ExitCode, sync::Arc, time::Duration};

use openai_api::{OpenAIConfig, OpenAIHandler};
use practice::{
    GenerateError, PracticeGenerator, PracticeQuestions, PracticeRequest, PromptTemplate,
    QuestionCountPolicy,
};
use tracing::*;

#[derive(Parser, Debug)]
#[command(
    name = "practice-gen",
    about = "Generate practice questions for a lesson",
    version
)]
struct Cli {
    /// Lesson topic, e.g. "Introduction to algebraic variables"
    #[arg(long, required_unless_present = "request")]
    topic: Option<String>,

    /// Difficulty label (Beginner, Intermediate, Advanced or any other text)
    #[arg(long, default_value = "Beginner")]
    difficulty: String,

    /// Read a {"lessonTopic": .., "difficultyLevel": ..} JSON file instead
    #[arg(long, conflicts_with = "topic")]
    request: Option<PathBuf>,

    /// Fail unless the model returns exactly this many questions
    #[arg(long)]
    exact_count: Option<usize>,

    /// Print the JSON payload instead of a numbered list
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    info!(
        "Starting... CARGO_PKG_NAME={}, CARGO_PKG_VERSION={}, version={}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("version").unwrap_or("(not defined at compile)")
    );

    let cli = Cli::parse();

    let handler = OpenAIHandler::new(openai_config_from_env()?)?;
    let mut generator = PracticeGenerator::new(Arc::new(handler));
    if let Some(template) = prompt_template_from_env().await? {
        generator = generator.with_template(template);
    }
    if let Some(count) = cli.exact_count {
        generator = generator.with_count_policy(QuestionCountPolicy::Exact(count));
    }

    match run(&cli, &generator).await {
        Ok(questions) => {
            print_questions(&questions, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("generation failed: {}", e);
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(cli: &Cli, generator: &PracticeGenerator) -> Result<PracticeQuestions, GenerateError> {
    match &cli.request {
        Some(path) => {
            let payload = tokio::fs::read_to_string(path).await.map_err(|e| {
                GenerateError::InvalidRequest(format!("cannot read {}: {}", path.display(), e))
            })?;
            generator.generate_from_json(&payload).await
        }
        None => {
            let request = PracticeRequest::new(
                cli.topic.clone().unwrap_or_default(),
                cli.difficulty.clone(),
            );
            generator.generate(&request).await
        }
    }
}

fn print_questions(
    questions: &PracticeQuestions,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(questions)?);
        return Ok(());
    }
    if questions.is_empty() {
        println!("No questions were generated.");
    }
    for (i, q) in questions.questions.iter().enumerate() {
        println!("{}. {}", i + 1, q.question);
        println!("   Answer: {}", q.answer);
    }
    Ok(())
}

fn openai_config_from_env() -> Result<OpenAIConfig, Box<dyn std::error::Error>> {
    let mut config = OpenAIConfig::new(read_env_var("PRACTICE_OPENAI_API_KEY")?);
    if let Ok(base_url) = env::var("PRACTICE_OPENAI_BASE_URL") {
        config.base_url = base_url;
    }
    if let Ok(model) = env::var("PRACTICE_OPENAI_MODEL") {
        config.model = model;
    }
    if let Ok(timeout_s) = env::var("PRACTICE_OPENAI_TIMEOUT_S") {
        config.timeout = Some(parse_timeout(&timeout_s)?);
    }
    Ok(config)
}

async fn prompt_template_from_env() -> Result<Option<PromptTemplate>, Box<dyn std::error::Error>> {
    let Ok(path) = env::var("PRACTICE_PROMPT_TEMPLATE_FILE") else {
        return Ok(None);
    };
    let template = PromptTemplate::new(tokio::fs::read_to_string(&path).await?);
    for placeholder in template.missing_placeholders() {
        warn!("Prompt template {} never uses {}", path, placeholder);
    }
    Ok(Some(template))
}

fn parse_timeout(value: &str) -> Result<Duration, String> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| format!("Invalid PRACTICE_OPENAI_TIMEOUT_S={}: {}", value, e))
}

fn read_env_var(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("Expected env var: {}", name))
}
