#[tokio::main]
async fn main() {
    if let Err(e) = symcheck::run().await {
        eprintln!("symcheck: {e}");
        std::process::exit(1);
    }
}
