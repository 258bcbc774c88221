//! ragsearch - CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ragsearch::chat::{ChatModel, HttpChatClient};
use ragsearch::cli::{Args, Commands};
use ragsearch::embedding::{Embedder, HttpEmbedder};
use ragsearch::index::QdrantSearcher;
use ragsearch::rag::SYSTEM_PROMPT;
use ragsearch::{Config, QueryPipeline};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Err(message) = args.validate() {
        eprintln!("{} {}", "Error:".red().bold(), message);
        std::process::exit(2);
    }

    let config = Config::from_env().context("failed to resolve configuration")?;

    let embedder = Arc::new(HttpEmbedder::new(&config.embedder_url)?);
    let index = Arc::new(QdrantSearcher::new(
        &config.index_url,
        &config.collection,
        config.embedding_dim,
    )?);
    let chat = Arc::new(HttpChatClient::new(
        &config.chat_url,
        &config.chat_api_key,
        &config.chat_model,
        config.chat_insecure_tls,
    )?);

    match args.command {
        Some(Commands::Check) => run_check(&config, embedder, index, chat).await,
        None => {
            // validate() guarantees the query is present here
            let query = args.query.unwrap_or_default();
            run_query(&config, embedder, index, chat, &query, args.hyde).await
        }
    }
}

async fn run_query(
    config: &Config,
    embedder: Arc<HttpEmbedder>,
    index: Arc<QdrantSearcher>,
    chat: Arc<HttpChatClient>,
    query: &str,
    use_hyde: bool,
) -> Result<()> {
    // One-time readiness: collection loaded and vector widths agree
    index
        .ready()
        .await
        .with_context(|| format!("collection {} is not ready", config.collection))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid spinner template"),
    );
    spinner.set_message("Answering...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let pipeline = QueryPipeline::new(embedder, index, chat, config.search_limit);
    let result = pipeline.answer(query, use_hyde).await;
    spinner.finish_and_clear();

    let answer = result?;

    println!("{}", answer.answer);
    println!();
    println!(
        "{} {}",
        "Sources:".dimmed(),
        answer.document_ids.join(", ").dimmed()
    );

    Ok(())
}

async fn run_check(
    config: &Config,
    embedder: Arc<HttpEmbedder>,
    index: Arc<QdrantSearcher>,
    chat: Arc<HttpChatClient>,
) -> Result<()> {
    let mut failed = false;

    match embedder.embed("healthcheck").await {
        Ok(vector) if vector.len() as u64 == config.embedding_dim => {
            println!("{} embedding service ({} dims)", "ok".green().bold(), vector.len());
        }
        Ok(vector) => {
            failed = true;
            println!(
                "{} embedding service returned {} dims, expected {}",
                "fail".red().bold(),
                vector.len(),
                config.embedding_dim
            );
        }
        Err(e) => {
            failed = true;
            println!("{} embedding service: {}", "fail".red().bold(), e);
        }
    }

    match index.ready().await {
        Ok(()) => println!(
            "{} vector index (collection {})",
            "ok".green().bold(),
            config.collection
        ),
        Err(e) => {
            failed = true;
            println!("{} vector index: {}", "fail".red().bold(), e);
        }
    }

    match chat.generate(SYSTEM_PROMPT, "Reply with the single word: ok").await {
        Ok(_) => println!("{} chat service ({})", "ok".green().bold(), config.chat_model),
        Err(e) => {
            failed = true;
            println!("{} chat service: {}", "fail".red().bold(), e);
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
