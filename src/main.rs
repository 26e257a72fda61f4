use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use cube_field::app::App;
use cube_field::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
