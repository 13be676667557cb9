use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cncsend::cli::run().await
}
