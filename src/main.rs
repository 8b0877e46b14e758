use std::process::ExitCode;

use quiz_authoring::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::TestDraft,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(link) => {
            println!("Your test is published and available at: {}", link);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{} ({})", err, err.error_code());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<String> {
    let path = std::env::args().nth(1).ok_or_else(|| {
        AppError::ValidationError("usage: quiz-authoring <draft.json>".to_string())
    })?;

    let contents = tokio::fs::read_to_string(&path).await?;
    let draft: TestDraft = serde_json::from_str(&contents)?;
    log::info!(
        "Loaded draft '{}' with {} question(s) from {}",
        draft.title,
        draft.questions.len(),
        path
    );

    let state = AppState::new(Config::from_env())?;
    let mut editor = state.editor_for(draft);
    let outcome = editor.submit().await?;

    Ok(outcome.link)
}
