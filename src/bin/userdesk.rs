use anyhow::Result;
use userdesk::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let action = cli::start()?;

    action.execute().await?;

    Ok(())
}
