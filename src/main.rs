use std::path::PathBuf;
use std::time::Instant;

use sdl2::keyboard::Keycode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wallbreaker::display::{Display, InputEvent, RenderTarget};
use wallbreaker::util::FpsCounter;
use wallbreaker::{Demo, Showcase, WreckingYard, YardConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoKind {
    Yard,
    Showcase,
}

impl DemoKind {
    fn next(self) -> Self {
        match self {
            DemoKind::Yard => DemoKind::Showcase,
            DemoKind::Showcase => DemoKind::Yard,
        }
    }
}

struct Args {
    width: Option<u32>,
    height: Option<u32>,
    vsync: bool,
    config: Option<PathBuf>,
    demo: DemoKind,
}

fn print_usage() {
    println!("Usage: wallbreaker [OPTIONS]");
    println!();
    println!("Options:");
    println!(
        "  --width W, -w W           Set window width (default: {})",
        DEFAULT_WIDTH
    );
    println!(
        "  --height H, -h H          Set window height (default: {})",
        DEFAULT_HEIGHT
    );
    println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
    println!("  --no-vsync                Disable VSync for uncapped framerate");
    println!("  --config PATH             Load the wrecking yard layout from JSON");
    println!("  --demo yard|showcase      Demo to start with (default: yard)");
    println!("  --help                    Show this help message");
}

/// Parse command line arguments; unparseable values are ignored
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        width: None,
        height: None,
        vsync: true,
        config: None,
        demo: DemoKind::Yard,
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--no-vsync" => parsed.vsync = false,
            "--width" | "-w" => {
                if let Some(v) = value {
                    parsed.width = v.parse().ok().or(parsed.width);
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if let Some(v) = value {
                    parsed.height = v.parse().ok().or(parsed.height);
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if let Some(v) = value {
                    // Parse WxH format (e.g., 1920x1080)
                    if let Some((w, h)) = v.split_once('x') {
                        if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
                            parsed.width = Some(w);
                            parsed.height = Some(h);
                        }
                    }
                    i += 1;
                }
            },
            "--config" => {
                if let Some(v) = value {
                    parsed.config = Some(PathBuf::from(v));
                    i += 1;
                }
            },
            "--demo" => {
                if let Some(v) = value {
                    match v.as_str() {
                        "yard" => parsed.demo = DemoKind::Yard,
                        "showcase" => parsed.demo = DemoKind::Showcase,
                        other => eprintln!("Unknown demo '{}', using yard", other),
                    }
                    i += 1;
                }
            },
            "--help" => {
                print_usage();
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    parsed
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args();

    let mut config = match &args.config {
        Some(path) => YardConfig::load(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => YardConfig::default(),
    };
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    let (width, height) = (config.width, config.height);

    let (mut display, texture_creator) =
        Display::with_options("wallbreaker", width, height, args.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, display.width(), display.height())?;

    let mut yard = WreckingYard::new(config).map_err(|e| e.to_string())?;
    let mut showcase = Showcase::new(width, height).map_err(|e| e.to_string())?;
    let mut active = args.demo;

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);
    let mut log_fps = false;
    let mut frames: u64 = 0;

    info!(width, height, vsync = args.vsync, "wallbreaker started");
    println!("Controls:");
    println!("  Tab     - Switch demo");
    println!("  R       - Rebuild the wall");
    println!("  F       - Toggle FPS logging");
    println!("  Escape  - Quit");

    let start = Instant::now();
    'main: loop {
        fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::Tab) => {
                    active = active.next();
                    let name = match active {
                        DemoKind::Yard => yard.name(),
                        DemoKind::Showcase => showcase.name(),
                    };
                    info!(demo = name, "switched demo");
                },
                InputEvent::KeyDown(Keycode::R) => yard.reset(),
                InputEvent::KeyDown(Keycode::F) => log_fps = !log_fps,
                InputEvent::KeyDown(_) => {},
            }
        }

        let t = start.elapsed().as_secs_f32();
        let demo: &mut dyn Demo = match active {
            DemoKind::Yard => &mut yard,
            DemoKind::Showcase => &mut showcase,
        };
        let buffer = demo.render(t);
        if let Err(e) = display.present(&mut target, buffer) {
            error!(?active, error = %e, "present failed");
            return Err(e);
        }

        frames += 1;
        if log_fps && frames % 60 == 0 {
            let (min_fps, max_fps) = fps_counter.min_max_fps();
            info!(
                avg = fps_counter.avg_fps() as u32,
                min = min_fps as u32,
                max = max_fps as u32,
                ms = fps_counter.avg_frame_time_ms(),
                broken = yard.grid().broken_count(),
                "frame timing"
            );
        }
    }

    Ok(())
}
