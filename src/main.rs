use chartrec::config::RecorderConfig;
use chartrec::model::{CHANNEL_COUNT, GROUND_CHANNELS, Tick};
use chartrec::recorder::Recorder;
use chartrec::util::logging::init_logging;
use macroquad::prelude::*;
use tracing::warn;

const TICKS_PER_SECOND: f64 = 480.0;
const VIEW_TICKS: Tick = 1920;

fn window_conf() -> Conf {
    Conf {
        window_title: "chartrec".to_owned(),
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = init_logging(None, true) {
        eprintln!("failed to set up logging: {e}");
    }

    let mut recorder = Recorder::new();
    match RecorderConfig::load() {
        Ok(config) => config.apply(&mut recorder),
        Err(e) => warn!("failed to load recorder config: {e}"),
    }

    loop {
        clear_background(BLACK);

        let tick = (get_time() * TICKS_PER_SECOND) as Tick;
        if is_key_pressed(KeyCode::Space) {
            if recorder.is_recording() {
                recorder.stop();
            } else {
                recorder.start(tick);
            }
        }
        if is_key_pressed(KeyCode::Backspace) {
            recorder.clear();
        }
        recorder.update(tick);

        let status = if recorder.is_recording() {
            "REC  [Space] stop  [Backspace] clear"
        } else {
            "[Space] record  [Backspace] clear"
        };

        let from = tick - VIEW_TICKS;
        let lane_width = screen_width() / CHANNEL_COUNT as f32;
        let data = recorder.get_recorded_data(from, tick);
        for (channel, intervals) in data.iter().enumerate() {
            let x = channel as f32 * lane_width;
            let color = if channel < GROUND_CHANNELS {
                SKYBLUE
            } else {
                ORANGE
            };
            for interval in intervals {
                let top = (tick - interval.end) as f32 / VIEW_TICKS as f32 * screen_height();
                let bottom = (tick - interval.start) as f32 / VIEW_TICKS as f32 * screen_height();
                draw_rectangle(x + 1.0, top, lane_width - 2.0, bottom - top, color);
            }
        }

        draw_text(status, 16.0, 24.0, 24.0, WHITE);

        next_frame().await;
    }
}
