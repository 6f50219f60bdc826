// What you SEE:
// • Live camera, mirrored, with the menu header across the top.
// • Index + middle finger up (or hold right mouse): hover the header to pick a color or tool.
// • Index finger only (or hold left mouse): draw. Strokes stay on screen.
// • Q quits.

use std::time::{Duration, Instant};

use air_canvas::camera::CameraCapture;
use air_canvas::config::{Args, Settings};
use air_canvas::draw::{draw_text_5x7, Drawer};
use air_canvas::hand::{HandTracker, PointerHand};
use air_canvas::header::HeaderSet;
use air_canvas::{Error, Session};
use clap::Parser;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = Settings::resolve(&args)?;

    /* --- Header thumbnails: fatal if none load --- */
    let mut headers = HeaderSet::load(&settings.header_dir)?;

    /* --- Camera + window setup --- */
    let mut cam = CameraCapture::new(
        settings.camera_index,
        settings.width,
        settings.height,
        settings.fps,
        settings.mirror,
    )?;
    let (w, h) = cam.resolution();
    let mut drawer = Drawer::new("Air Canvas", w as usize, h as usize, settings.fps)?;

    let mut hand_tracker = PointerHand::new();
    let mut session = Session::new(w as usize, h as usize, settings.min_detection_confidence);

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    log::info!("Ready. Press Q to quit.");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        // 1) Grab a fresh live frame; a failed read ends the session.
        let mut live = match cam.next_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("{e}");
                break;
            }
        };

        // 2) Find the hand for this frame.
        hand_tracker.feed(drawer.pointer());
        let hand = hand_tracker.detect(&live);

        // 3) Gesture -> menu / stroke -> composite.
        let tick = session.tick(&mut live, hand.as_ref());
        let mut screen = tick.output;

        // 4) Header for the active tool/color over the menu strip, then HUD.
        let tools = session.tools();
        let header_index = headers.index_for(tools.tool(), tools.color_index());
        headers.overlay(&mut screen, header_index);

        if settings.show_hud {
            let hud = format!("{} | {}", tools.tool().name(), hud_fps_text);
            let y = screen.height as i32 - 16;
            draw_text_5x7(&mut screen, 8, y, &hud, 0x00_FF_FF_FF);
        }

        // 5) Present; this also refreshes key and mouse state.
        drawer.present(&screen)?;
        if drawer.quit_pressed() {
            break;
        }

        // 6) FPS counter
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    log::info!("Session ended");
    Ok(())
}
