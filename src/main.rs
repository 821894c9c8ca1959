#[tokio::main]
async fn main() -> std::io::Result<()> {
    vitalboard::run().await
}
