use campus_route::app::CampusRouteApp;
use clap::Parser;

fn main() {
    env_logger::init();
    log::info!("starting campus-route at {}", chrono::Local::now().to_rfc3339());
    let args = CampusRouteApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running campus-route: {e}");
            std::process::exit(1);
        }
    }
}
