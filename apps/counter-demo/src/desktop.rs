//! Windowed mode: winit events are translated by the desktop platform and
//! fed to the shell once per frame. Drawing still goes to the log surface.

use sapling_app_shell::{AppShell, FrameOutcome};
use sapling_platform_desktop_winit::DesktopWinitPlatform;
use winit::dpi::LogicalSize;
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::LogSurface;

pub fn run(mut shell: AppShell<LogSurface>) -> anyhow::Result<()> {
    let event_loop = EventLoop::new();
    let size = shell.options().initial_size();
    let window = WindowBuilder::new()
        .with_title(shell.title())
        .with_inner_size(LogicalSize::new(size.width as f64, size.height as f64))
        .build(&event_loop)
        .map_err(|err| anyhow::anyhow!("failed to create window: {err}"))?;

    let mut platform = DesktopWinitPlatform::new(window.scale_factor());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                platform.handle_window_event(&event);
            }
            Event::MainEventsCleared => match shell.frame(&mut platform) {
                Ok(FrameOutcome::Continue) => {}
                Ok(FrameOutcome::Quit) => {
                    log::info!("quitting after {} frames", shell.frames());
                    *control_flow = ControlFlow::Exit;
                }
                Err(err) => {
                    log::error!("frame {} failed: {err}", shell.frames() + 1);
                    *control_flow = ControlFlow::Exit;
                }
            },
            _ => {}
        }
    })
}
