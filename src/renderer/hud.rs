//! Banners, tap prompt and score text

use super::{Sprite, Surface};
use crate::best_score::{ScoreStore, sync_best};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{GameState, RunState};

const TEXT_FILL: &str = "#FFFFFF";
const TEXT_STROKE: &str = "#000000";
const PLAYING_FONT: &str = "35px Squada One";
const ENDED_FONT: &str = "40px Squada One";

pub fn draw_overlay(state: &mut GameState, surface: &mut dyn Surface, store: &mut dyn ScoreStore) {
    match state.phase {
        RunState::Ready => draw_banner(Sprite::ReadyBanner, state.overlay.tap_frame, surface),
        RunState::Ended => draw_banner(Sprite::GameOverBanner, state.overlay.tap_frame, surface),
        RunState::Playing => {}
    }
    draw_score(state, surface, store);
}

/// Centred banner with the tap prompt tucked into its lower edge
fn draw_banner(banner: Sprite, tap_frame: usize, surface: &mut dyn Surface) {
    let size = surface.sprite_size(banner);
    let tap = surface.sprite_size(Sprite::Tap0);

    let x = (CANVAS_WIDTH - size.x) / 2.0;
    let y = (CANVAS_HEIGHT - size.y) / 2.0;
    let tx = (CANVAS_WIDTH - tap.x) / 2.0;
    let ty = y + size.y - tap.y;

    surface.draw_image(banner, x, y);
    surface.draw_image(Sprite::tap_frame(tap_frame), tx, ty);
}

fn outlined_text(surface: &mut dyn Surface, text: &str, x: f32, y: f32) {
    surface.fill_text(text, x, y);
    surface.stroke_text(text, x, y);
}

fn draw_score(state: &mut GameState, surface: &mut dyn Surface, store: &mut dyn ScoreStore) {
    surface.set_fill_style(TEXT_FILL);
    surface.set_stroke_style(TEXT_STROKE);

    match state.phase {
        RunState::Playing => {
            surface.set_line_width(2.0);
            surface.set_font(PLAYING_FONT);
            let text = state.score.current.to_string();
            outlined_text(surface, &text, CANVAS_WIDTH / 2.0 - 5.0, 50.0);
        }
        RunState::Ended => {
            surface.set_line_width(2.0);
            surface.set_font(ENDED_FONT);
            let score_line = format!("SCORE :     {}", state.score.current);
            match sync_best(store, state.score.current) {
                Ok(best) => {
                    state.score.best = best;
                    let best_line = format!("BEST  :     {}", best);
                    let x = CANVAS_WIDTH / 2.0 - 80.0;
                    outlined_text(surface, &score_line, x, CANVAS_HEIGHT / 2.0);
                    outlined_text(surface, &best_line, x, CANVAS_HEIGHT / 2.0 + 30.0);
                }
                Err(e) => {
                    log::debug!("Best score unavailable: {:#}", e);
                    outlined_text(
                        surface,
                        &score_line,
                        CANVAS_WIDTH / 2.0 - 85.0,
                        CANVAS_HEIGHT / 2.0 + 15.0,
                    );
                }
            }
        }
        RunState::Ready => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_score::MemoryStore;
    use crate::renderer::{DrawCommand, RecordingSurface};

    fn ended_with(current: u32) -> GameState {
        let mut state = GameState::with_seed(1);
        state.phase = RunState::Ended;
        state.score.current = current;
        state
    }

    #[test]
    fn test_ready_draws_banner_and_tap_only() {
        let mut state = GameState::with_seed(1);
        state.overlay.tap_frame = 1;
        let mut surface = RecordingSurface::with_default_sizes();

        draw_overlay(&mut state, &mut surface, &mut MemoryStore::new());

        assert_eq!(surface.images(), vec![Sprite::ReadyBanner, Sprite::Tap1]);
        assert!(surface.texts().is_empty());
    }

    #[test]
    fn test_banner_centred() {
        let mut state = GameState::with_seed(1);
        let mut surface = RecordingSurface::with_default_sizes();
        let banner = surface.sprite_size(Sprite::ReadyBanner);

        draw_overlay(&mut state, &mut surface, &mut MemoryStore::new());

        assert_eq!(
            surface.commands[0],
            DrawCommand::Image {
                sprite: Sprite::ReadyBanner,
                x: (CANVAS_WIDTH - banner.x) / 2.0,
                y: (CANVAS_HEIGHT - banner.y) / 2.0,
            }
        );
    }

    #[test]
    fn test_ended_shows_score_and_best() {
        let mut state = ended_with(7);
        let mut store = MemoryStore::with_best(3);
        let mut surface = RecordingSurface::with_default_sizes();

        draw_overlay(&mut state, &mut surface, &mut store);

        assert_eq!(
            surface.texts(),
            vec!["SCORE :     7", "BEST  :     7"]
        );
        assert_eq!(state.score.best, 7);
        assert_eq!(store.read_best().unwrap(), Some(7));
    }

    #[test]
    fn test_ended_keeps_higher_stored_best() {
        let mut state = ended_with(2);
        let mut store = MemoryStore::with_best(7);
        let mut surface = RecordingSurface::with_default_sizes();

        draw_overlay(&mut state, &mut surface, &mut store);

        assert_eq!(surface.texts()[1], "BEST  :     7");
        assert_eq!(store.read_best().unwrap(), Some(7));
    }

    #[test]
    fn test_storage_failure_degrades_to_score_only() {
        let mut state = ended_with(5);
        let mut surface = RecordingSurface::with_default_sizes();

        draw_overlay(&mut state, &mut surface, &mut MemoryStore::unavailable());

        assert_eq!(surface.texts(), vec!["SCORE :     5"]);
        assert!(surface.commands.contains(&DrawCommand::FillText {
            text: "SCORE :     5".to_string(),
            x: CANVAS_WIDTH / 2.0 - 85.0,
            y: CANVAS_HEIGHT / 2.0 + 15.0,
        }));
    }
}
