#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tabgrid_lib::run().await
}
