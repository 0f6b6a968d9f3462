//! Fades between two colors and prints each interpolated step.
//!
//! Run with: cargo run -p tween-updaters --example color_fade

use std::time::Duration;

use tween_core::{easing, Tween};
use tween_updaters::{Color, Rgba};

fn main() {
    env_logger::init();

    let (updater, stream) = Color::channel(Rgba::new(255, 64, 0, 255), Rgba::new(0, 64, 255, 255));
    let mut tween = Tween::builder(Duration::from_secs(2))
        .framerate(30)
        .curve(easing::swing)
        .listener(updater)
        .build()
        .expect("valid tween parameters");

    tween.play();

    loop {
        crossbeam_channel::select! {
            recv(stream.updates) -> update => match update {
                Ok(color) => println!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b),
                Err(_) => break,
            },
            recv(stream.done) -> _ => {
                while let Ok(color) = stream.updates.try_recv() {
                    println!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
                }
                break;
            }
        }
    }
}
