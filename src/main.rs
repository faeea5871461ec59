use anyhow::Result;
use scanforge::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::from_args().await?;
    let args = scanforge::cli::Args::parse_args();

    app.run(args).await?;

    Ok(())
}
