use anyhow::Context;
use h1wire::config::Config;
use h1wire::http::writer::MessageWriter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    tracing::info!(messages = cfg.messages.len(), "Loaded message descriptions");

    let mut stdout = tokio::io::stdout();
    for (index, message) in cfg.messages.iter().enumerate() {
        let bytes = message
            .serialize()
            .with_context(|| format!("message #{}", index + 1))?;

        MessageWriter::new(bytes)
            .write_to_stream(&mut stdout)
            .await
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
