use star_patterns::{PanelConfig, PpmFilePresenter, StarPanelController};

const OUTPUT_PATH: &str = "output/star_patterns.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter = PpmFilePresenter::new();
    let mut controller = StarPanelController::new(presenter, PanelConfig::default());

    controller.generate()?;
    controller.write(OUTPUT_PATH)?;

    Ok(())
}
