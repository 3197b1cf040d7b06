use newsletter_viewer::{logging, UreqTransport, ViewController, ViewerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let config = ViewerConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "loading newsletter content");

    let mut view = ViewController::mount(config.api_client(), UreqTransport::new());
    print!("{}", view.render());

    view.settle().await;
    println!();
    print!("{}", view.render());

    Ok(())
}
