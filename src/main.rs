use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let output = carmarket_lib::run(args)
        .await
        .context("carmarket search failed")?;
    println!("{}", output);

    Ok(())
}
