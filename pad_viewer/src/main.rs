mod canvas;
mod cli;
mod export;
mod font;
mod keyboard;
mod present;
mod script;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use pad_overlay::{ControllerOverlayApp, HostControl, Navigator, Overlay};
use pollster::FutureExt;
use wgpu::SurfaceError;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::canvas::Canvas;
use crate::cli::Args;
use crate::export::dump_canvas_to_png;
use crate::font::TextRasterizer;
use crate::keyboard::{KeyAction, KeyboardPad};
use crate::present::{Presenter, letterbox};
use crate::script::{InputScript, ScriptStep, load_script};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::init();

    let config = args.overlay_config()?;
    let font = match args.font.as_deref() {
        Some(path) => Some(TextRasterizer::load(path)?),
        None => None,
    };
    let canvas = Canvas::new(args.width, args.height, font).context("allocating canvas")?;

    let mut app = ControllerOverlayApp::new(config);
    app.init_services()
        .context("initialising overlay services")?;

    if args.headless {
        let result = run_headless(&args, &mut app, canvas);
        app.exit_services();
        return result;
    }

    run_windowed(app, canvas)
}

/// Host control for scripted runs; there is no window to raise.
#[derive(Default)]
struct HeadlessHost;

impl HostControl for HeadlessHost {
    fn request_foreground(&mut self, enabled: bool) {
        debug!("headless host: foreground input {enabled}");
    }
}

fn run_headless(args: &Args, app: &mut ControllerOverlayApp, mut canvas: Canvas) -> Result<()> {
    let script = match args.script.as_deref() {
        Some(path) => load_script(path)?,
        None => InputScript::default(),
    };
    let mut steps = script.steps()?;
    if steps.is_empty() {
        steps.push(ScriptStep {
            back: false,
            input: Default::default(),
        });
    }

    let mut navigator = app.navigator();
    app.on_show();
    let replayed = replay_steps(args, &steps, &mut navigator, &mut canvas);
    app.on_hide();
    let rendered = replayed?;

    println!(
        "Replayed {rendered} frame{} ({:?} screen at exit)",
        if rendered == 1 { "" } else { "s" },
        navigator.screen()
    );

    if let Some(path) = args.dump_frame.as_ref() {
        let stats = dump_canvas_to_png(&canvas, path)?;
        println!(
            "Frame exported to {} ({}x{}), opaque pixels {} / {}",
            path.display(),
            canvas.width(),
            canvas.height(),
            stats.opaque_pixels,
            stats.total_pixels
        );
    }
    Ok(())
}

/// Feed each scripted step through the navigator, drawing after every one.
/// Returns the number of frames rendered.
fn replay_steps(
    args: &Args,
    steps: &[ScriptStep],
    navigator: &mut Navigator,
    canvas: &mut Canvas,
) -> Result<usize> {
    let mut host = HeadlessHost;
    let mut rendered = 0usize;
    for (index, step) in steps.iter().enumerate() {
        if step.back && !navigator.back() {
            info!("back gesture at menu root on frame {index}; closing overlay");
            break;
        }
        navigator
            .handle_input(&step.input, &mut host)
            .with_context(|| format!("frame {index}: opening controller overlay"))?;
        navigator.update();
        navigator.draw(canvas);
        rendered += 1;

        if let Some(dir) = args.dump_dir.as_ref() {
            let path = dir.join(format!("frame_{index:04}.png"));
            dump_canvas_to_png(canvas, &path)?;
        }
    }
    Ok(rendered)
}

/// Host control backed by the viewer window.
struct WindowHost {
    window: Arc<Window>,
}

impl HostControl for WindowHost {
    fn request_foreground(&mut self, enabled: bool) {
        debug!("window host: foreground input {enabled}");
        if enabled {
            self.window.focus_window();
        }
    }
}

/// Map a window-space cursor position onto canvas pixels.
fn cursor_to_canvas(
    position: PhysicalPosition<f64>,
    window: PhysicalSize<u32>,
    canvas: &Canvas,
) -> Option<(u32, u32)> {
    let (vx, vy, vw, vh) = letterbox(window, canvas.width(), canvas.height());
    let x = (position.x as f32 - vx) / vw * canvas.width() as f32;
    let y = (position.y as f32 - vy) / vh * canvas.height() as f32;
    if x < 0.0 || y < 0.0 || x >= canvas.width() as f32 || y >= canvas.height() as f32 {
        return None;
    }
    Some((x as u32, y as u32))
}

fn run_windowed(mut app: ControllerOverlayApp, mut canvas: Canvas) -> Result<()> {
    let event_loop = EventLoop::new().context("creating winit event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Controller Overlay")
            .with_inner_size(PhysicalSize::new(canvas.width(), canvas.height()))
            .build(&event_loop)
            .context("creating viewer window")?,
    );

    let mut presenter = Presenter::new(window.clone(), canvas.width(), canvas.height())
        .block_on()
        .context("initialising presenter")?;
    let mut host = WindowHost { window };
    let mut navigator: Navigator = app.navigator();
    let mut pad = KeyboardPad::new();
    let mut cursor = PhysicalPosition::new(0.0, 0.0);
    app.on_show();

    println!("Keys: X/Z/S/A = A/B/X/Y, Q/E = L/R, 1/3 = ZL/ZR, Enter/RShift = Plus/Minus");
    println!("      arrows = d-pad, TFGH / IJKL = sticks, C/V = stick clicks");
    println!("      Backspace = back, Esc = quit");

    event_loop
        .run(move |event, target| {
            target.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { window_id, event } if window_id == presenter.window().id() => {
                    match event {
                        WindowEvent::CloseRequested => target.exit(),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(code),
                                    state,
                                    repeat: false,
                                    ..
                                },
                            ..
                        } => {
                            let pressed = state == ElementState::Pressed;
                            if pad.handle_key(code, pressed) == KeyAction::Quit && pressed {
                                target.exit();
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => cursor = position,
                        WindowEvent::MouseInput {
                            state,
                            button: MouseButton::Left,
                            ..
                        } => {
                            let hit = cursor_to_canvas(cursor, presenter.size(), &canvas);
                            match (state, hit) {
                                (ElementState::Pressed, Some((x, y))) => pad.set_touch(true, x, y),
                                _ => pad.set_touch(false, 0, 0),
                            }
                        }
                        WindowEvent::Resized(new_size) => presenter.resize(new_size),
                        WindowEvent::RedrawRequested => {
                            let input = pad.take_frame();
                            if pad.take_back() && !navigator.back() {
                                app.on_hide();
                                target.exit();
                                return;
                            }
                            if let Err(err) = navigator.handle_input(&input, &mut host) {
                                error!("cannot open controller overlay: {err}");
                            }
                            navigator.update();
                            navigator.draw(&mut canvas);
                            match presenter.present(&canvas) {
                                Ok(()) => {}
                                Err(SurfaceError::Lost) => presenter.resize(presenter.size()),
                                Err(SurfaceError::OutOfMemory) => target.exit(),
                                Err(err) => error!("render error: {err:?}"),
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => presenter.window().request_redraw(),
                Event::LoopExiting => app.exit_services(),
                _ => {}
            }
        })
        .context("running viewer application")?;
    Ok(())
}
