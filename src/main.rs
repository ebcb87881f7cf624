use mandelbrot_refine::{CliController, MandelbrotConfig, PpmFilePresenter};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 386;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter = PpmFilePresenter::new();
    let mut controller = CliController::new(presenter);

    controller.generate(MandelbrotConfig::default(), WIDTH, HEIGHT)?;
    controller.write("output/mandelbrot.ppm")?;

    Ok(())
}
