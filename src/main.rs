mod brightness;
mod config;
mod controller;
mod sensor;

fn main() {
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        std::process::exit(1);
    }));

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => panic!("Unable to load config: {}", err),
    };

    log::debug!("Using {:#?}", config);

    let sensor = Box::new(sensor::webcam::Webcam::new());
    let brightness = Box::new(brightness::qdbus::Qdbus::new());
    let mut controller = controller::Controller::new(sensor, brightness, config);

    log::info!("Watching ambient light on the webcam.");

    if let Err(err) = controller.run() {
        log::error!("Unable to obtain ambient light sample: {:?}", err);
        std::process::exit(1);
    }
}
