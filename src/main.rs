use glint::camera::Camera;
use glint::example_scenes::{self, View};
use glint::renderer::{RenderConfig, Renderer};
use glint::scene::Scene;

use getopts::{Matches, Options};
use log::info;
use std::fmt::Display;
use std::process::exit;
use std::str::FromStr;
use std::time::Instant;

fn usage(program: &str, opts: &Options) -> String {
    opts.usage(&format!("Usage: {} [options]", program))
}

fn opt_parse<T>(matches: &Matches, name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match matches.opt_str(name) {
        Some(raw) => match raw.parse() {
            Ok(v) => v,
            Err(e) => {
                eprintln!("invalid --{} value '{}': {}", name, raw, e);
                exit(2);
            }
        },
        None => default,
    }
}

// Accepts "16:9" or a plain float like "1.78".
fn parse_aspect(raw: &str) -> Option<f32> {
    let mut parts = raw.splitn(2, ':');
    match (parts.next(), parts.next()) {
        (Some(w), Some(h)) => {
            let w: f32 = w.parse().ok()?;
            let h: f32 = h.parse().ok()?;
            if h > 0.0 {
                Some(w / h)
            } else {
                None
            }
        }
        _ => raw.parse().ok(),
    }
}

fn build_scene(name: &str) -> Result<(Scene, View), String> {
    if name == "three-spheres" {
        Ok(example_scenes::three_spheres())
    } else if name == "cover" {
        Ok(example_scenes::cover(&mut rand::thread_rng()))
    } else if name.starts_with("image:") {
        example_scenes::image_sphere(&name["image:".len()..])
            .map_err(|e| format!("failed to build scene: {}", e))
    } else {
        Err(format!("unknown scene '{}'", name))
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("w", "width", "image width in pixels (default 1024)", "PIXELS");
    opts.optopt(
        "a",
        "aspect",
        "aspect ratio, W:H or a float (default 16:9)",
        "RATIO",
    );
    opts.optopt(
        "s",
        "samples",
        "per-axis sample rate, rate^2 samples per pixel (default 6)",
        "RATE",
    );
    opts.optopt("d", "depth", "maximum scatter depth (default 30)", "BOUNCES");
    opts.optopt("t", "threads", "worker threads (default: all cores)", "N");
    opts.optopt("o", "output", "output PPM file (default render.ppm)", "FILE");
    opts.optopt(
        "",
        "scene",
        "scene to render: three-spheres | cover | image:PATH (default cover)",
        "NAME",
    );
    opts.optopt("", "fov", "vertical field of view override, degrees", "DEG");
    opts.optopt("", "aperture", "lens aperture override", "SIZE");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            eprint!("{}", usage(&program, &opts));
            exit(2);
        }
    };
    if matches.opt_present("h") {
        print!("{}", usage(&program, &opts));
        return;
    }

    let width: u32 = opt_parse(&matches, "width", 1024);
    let aspect = match matches.opt_str("aspect") {
        Some(raw) => match parse_aspect(&raw) {
            Some(a) if a > 0.0 => a,
            _ => {
                eprintln!("invalid --aspect value '{}'", raw);
                exit(2);
            }
        },
        None => 16.0 / 9.0,
    };
    let height = ((width as f32 / aspect) as u32).max(1);
    let sample_rate: u32 = opt_parse(&matches, "samples", 6);
    let max_depth: usize = opt_parse(&matches, "depth", 30);
    let nthread: usize = opt_parse(&matches, "threads", num_cpus::get());
    let output = matches
        .opt_str("output")
        .unwrap_or_else(|| "render.ppm".to_string());
    let scene_name = matches
        .opt_str("scene")
        .unwrap_or_else(|| "cover".to_string());

    let (scene, view) = match build_scene(&scene_name) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    let vfov: f32 = opt_parse(&matches, "fov", view.vfov_degree);
    let aperture: f32 = opt_parse(&matches, "aperture", view.aperture);
    let camera = Camera::new(
        view.look_from,
        view.look_at,
        view.view_up,
        vfov,
        width as f32 / height as f32,
        aperture,
    );

    let config = RenderConfig {
        width,
        height,
        sample_rate,
        max_depth,
        nthread,
    };

    let start = Instant::now();
    let image = Renderer.render(&scene, &camera, &config);
    info!("rendered {} in {:?}", scene_name, start.elapsed());

    if let Err(e) = image.save_ppm(&output) {
        eprintln!("failed to write {}: {}", output, e);
        exit(1);
    }
    info!("wrote {}", output);
}
