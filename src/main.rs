//! Doodle Duel entry point
//!
//! The browser build is driven through `doodle_duel::web::WebGame`. The
//! native binary plays a seeded headless match between two simple bots and
//! prints the score.
//!
//! Usage: `doodle-duel [settings.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use doodle_duel::Settings;

    env_logger::init();
    log::info!("Doodle Duel (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load_from(Path::new(&path)) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);

    demo::run(settings, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use doodle_duel::sim::{Arena, GameState, NullSink, Player, PlayerSlot, TickInput, tick};
    use doodle_duel::{Action, Controls, KeyBindings, Settings};

    const ARENA: Arena = Arena::new(1280.0, 720.0);
    const FRAME_MS: u64 = 16;
    const MAX_FRAMES: u64 = 60 * 60 * 5;
    const ROUNDS: u32 = 5;

    /// Line up vertically with the opponent and shoot across at them
    fn steer(controls: &mut Controls, me: &Player, them: &Player) {
        let offset = them.rect.center() - me.rect.center();
        let vertical = if offset.y > me.speed {
            Some(Action::Down)
        } else if offset.y < -me.speed {
            Some(Action::Up)
        } else {
            None
        };
        let aim = if offset.x >= 0.0 {
            Action::Right
        } else {
            Action::Left
        };

        controls.release_all();
        let mut wanted = vec![aim, Action::Fire];
        wanted.extend(vertical);
        for action in wanted {
            let key = controls.bindings().key_for(action).map(str::to_owned);
            if let Some(key) = key {
                controls.key_down(&key);
            }
        }
    }

    pub fn run(settings: Settings, seed: u64) {
        let mut state = GameState::new(settings, ARENA, seed);
        let mut controls = [
            Controls::new(KeyBindings::player_one()),
            Controls::new(KeyBindings::player_two()),
        ];
        let mut sink = NullSink;

        let mut frame = 0;
        while state.round < ROUNDS && frame < MAX_FRAMES {
            for slot in PlayerSlot::ALL {
                let me = state.player(slot);
                let them = state.player(slot.opponent());
                steer(&mut controls[slot.index()], me, them);
            }

            let mut input = TickInput::new(ARENA, frame * FRAME_MS);
            for (player_input, controls) in input.players.iter_mut().zip(&mut controls) {
                *player_input = controls.take_input();
            }

            let outcome = tick(&mut state, &input, &mut sink);
            if outcome.round_over {
                log::info!("Frame {frame}: {:?}", outcome.hits);
            }
            frame += 1;
        }

        let [p1, p2] = state.scores();
        println!(
            "Seed {seed}: {} rounds in {frame} frames, player one {p1} - player two {p2}",
            state.round
        );
    }
}
