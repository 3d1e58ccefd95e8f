use clap::Parser;

use asciify::ascii::{self, RenderConfig};
use asciify::cli::Args;
use asciify::config::Config;
use asciify::fetch::{FetchError, ImageClient};

/// Fetch an image and render it, returning the ASCII string.
///
/// Failures from either the fetch or the decode surface as `FetchError`;
/// the caller reports them and produces no art.
async fn load_and_render(url: &str, config: &RenderConfig) -> Result<String, FetchError> {
    let client = ImageClient::new()?;
    let img = client.fetch(url).await?;
    Ok(ascii::render(img, config))
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let render_config = config.render_config(args.width, args.ratio, args.threshold);

    match load_and_render(&args.url, &render_config).await {
        Ok(art) => println!("{}", art),
        Err(e) => {
            // Fetch/decode failures are reported on stdout and the
            // process still exits 0 with no art.
            log::error!("render failed: {}", e);
            println!("Error loading image: {}", e);
        }
    }
}
