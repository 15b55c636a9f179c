use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use open_brilliant_server::client::{
    api::{HttpPhysicsApi, PhysicsApi},
    session::{Session, ViewState},
    storage::FileStore,
    ClientError, ClientResult,
};

/// Ask for an interactive physics animation from a running server.
#[derive(Parser, Debug)]
#[command(name = "ask", version)]
struct Cli {
    /// Physics question to visualize
    question: Option<String>,

    /// Server base URL
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,

    /// Provider API key for this request
    #[arg(long)]
    api_key: Option<String>,

    /// Remember --api-key for later runs
    #[arg(long, requires = "api_key")]
    save_key: bool,

    /// Forget the stored API key
    #[arg(long)]
    clear_key: bool,

    /// List the sample questions and exit
    #[arg(long)]
    samples: bool,

    /// Write the animation page to this file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let api = HttpPhysicsApi::new(&cli.server);

    if cli.samples {
        for (index, question) in api.sample_questions().await?.iter().enumerate() {
            println!("{:>2}. {}", index + 1, question);
        }
        return Ok(());
    }

    let store = FileStore::default_location()?;
    let mut session = Session::new(store);

    if cli.clear_key {
        session.clear_api_key()?;
        println!("Stored API key cleared");
    }
    if cli.save_key {
        if let Some(key) = &cli.api_key {
            session.save_api_key(key)?;
            println!("API key saved");
        }
    }

    let Some(question) = cli.question.as_deref() else {
        return Ok(());
    };

    let mut submission = session
        .begin(question)
        .ok_or_else(|| ClientError::Api("Question is required".to_string()))?;
    if let Some(key) = &cli.api_key {
        submission.request.api_key = Some(key.clone());
    }

    eprintln!("Generating animation...");
    let outcome = api.generate(submission.request).await;
    session.complete(submission.ticket, outcome);

    match session.state() {
        ViewState::Success { response, .. } => {
            let result = &response.result;
            if let Some(brief) = &response.generated_prompt {
                println!("Topic: {}", brief.topic);
            }
            println!("Analysis: {}", result.analysis);
            println!("Solution: {}", result.solution);
            println!("Concepts: {}", result.concepts.join(", "));

            if let (Some(path), Some(page)) = (&cli.out, session.preview()) {
                std::fs::write(path, page).map_err(|e| ClientError::Storage(e.to_string()))?;
                println!("Animation written to {}", path.display());
            }
            Ok(())
        }
        ViewState::Error { message } => {
            if session.settings_open() {
                eprintln!("Pass --api-key KEY --save-key to store a key.");
            }
            Err(ClientError::Api(message.clone()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_question_and_flags() {
        let cli = Cli::try_parse_from([
            "ask",
            "A ball is dropped from 30m",
            "--server",
            "http://example:9000",
            "--out",
            "anim.html",
        ])
        .unwrap();

        assert_eq!(cli.question.as_deref(), Some("A ball is dropped from 30m"));
        assert_eq!(cli.server, "http://example:9000");
        assert_eq!(cli.out, Some(PathBuf::from("anim.html")));
        assert!(!cli.samples);
    }

    #[test]
    fn save_key_requires_api_key() {
        assert!(Cli::try_parse_from(["ask", "--save-key"]).is_err());
        assert!(Cli::try_parse_from(["ask", "--api-key", "csk-1", "--save-key"]).is_ok());
    }
}
