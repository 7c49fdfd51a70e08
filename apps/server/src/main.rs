#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cafe_server::run().await
}
