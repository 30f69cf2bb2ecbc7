/* Copyright 2018, 2023 Torbjørn Birch Moltu
 *
 * This file is part of target_games.
 * You can redistribute it and/or modify it under the terms of the
 * GNU General Public License as published by the Free Software Foundation,
 * either version 3 of the License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! Click the target before the next tick, or the game is over.

use crate::scoring::{Scoring, distance_squared};
use ::interface::game::*;

use std::time::Duration;
use rand::Rng;
use rand::rngs::StdRng;

pub const NAME: &str = "Target Game";
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const INITIAL_SIZE: [f32;2] = [WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32];

pub const TARGET_RADIUS: i32 = 50;
const INNER_RADIUS: i32 = 20;
pub const MAX_SCORE: u32 = 100;
pub const SCORE_STEP: u32 = 10;
const BUTTON_SIZE: [i32;2] = [100, 50];
const TEXT_SIZE: f32 = 18.0;

const TARGET_COLOR: &str = "ff0000";
const INNER_COLOR: &str = "000000";
const TEXT_COLOR: &str = "ffffff";
const BUTTON_COLOR: &str = "00ff00";
const BUTTON_TEXT_COLOR: &str = "000000";

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Phase {Start, Active, Ended}

/// What differs between the target games.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub struct Variant {
    /// Wait for the start button instead of starting at launch.
    pub start_screen: bool,
    /// Draw a black ring in the middle of the target.
    pub bullseye: bool,
    pub scoring: Scoring,
    /// How long the player has to hit each target.
    pub interval: Duration,
}

impl Variant {
    /// Starts at once, one second per target, score capped at 100.
    pub const REFLEX: Variant = Variant {
        start_screen: false,
        bullseye: false,
        scoring: Scoring::Step { step: SCORE_STEP, max: MAX_SCORE },
        interval: Duration::from_millis(1000),
    };
    /// Start screen, three seconds per target, rewards clicking near the center.
    pub const BULLSEYE: Variant = Variant {
        start_screen: true,
        bullseye: true,
        scoring: Scoring::Proximity { radius: TARGET_RADIUS as u32, step: SCORE_STEP },
        interval: Duration::from_millis(3000),
    };
}

/// Positions are in rendering coordinates: origin at the bottom left.
#[derive(Debug, Clone, PartialEq,Eq)]
pub struct GameState {
    pub phase: Phase,
    pub score: u32,
    pub target: [i32; 2],
    pub target_hit: bool,
    pub last_click: [i32; 2],
}

impl GameState {
    fn new() -> Self {
        GameState {
            phase: Phase::Start,
            score: 0,
            target: [WINDOW_WIDTH/2, WINDOW_HEIGHT/2],
            target_hit: false,
            last_click: [0, 0],
        }
    }
}

/// A position that keeps the whole target inside the window.
pub fn random_target(rng: &mut impl Rng) -> [i32; 2] {
    [
        rng.gen_range(TARGET_RADIUS..WINDOW_WIDTH-TARGET_RADIUS),
        rng.gen_range(TARGET_RADIUS..WINDOW_HEIGHT-TARGET_RADIUS),
    ]
}

pub fn is_hit(click: [i32; 2],  target: [i32; 2]) -> bool {
    let radius = TARGET_RADIUS as i64;
    distance_squared(click, target) <= radius*radius
}

/// [left, bottom, width, height] of the start and replay button.
fn button_area() -> [i32; 4] {
    [
        WINDOW_WIDTH/2 - BUTTON_SIZE[0]/2,
        WINDOW_HEIGHT/2 - BUTTON_SIZE[1]/2,
        BUTTON_SIZE[0],
        BUTTON_SIZE[1],
    ]
}

fn on_button(pos: [i32; 2]) -> bool {
    let [left, bottom, width, height] = button_area();
    pos[0] >= left && pos[0] <= left+width
    && pos[1] >= bottom && pos[1] <= bottom+height
}

pub struct TargetGame {
    state: GameState,
    variant: Variant,
    rng: StdRng,
}

impl TargetGame {
    pub fn new(variant: Variant,  rng: StdRng) -> Self {
        TargetGame { state: GameState::new(), variant, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn spawn_target(&mut self) {
        self.state.target = random_target(&mut self.rng);
        log::trace!("new target at {:?}", self.state.target);
    }

    fn begin(&mut self) -> Effect {
        log::info!("starting a new round");
        self.state.phase = Phase::Active;
        self.state.score = 0;
        self.state.target_hit = false;
        self.spawn_target();
        Effect::ScheduleTick(self.variant.interval)
    }

    fn draw_button(&self,  label: &'static str,  label_offset: f32,  gfx: &mut Graphics) {
        let [left, bottom, width, height] = button_area();
        let area = [left as f32, bottom as f32, width as f32, height as f32];
        gfx.rectangle(hex(BUTTON_COLOR), area);
        gfx.text(
                hex(BUTTON_TEXT_COLOR),
                [area[0]+label_offset, area[1]+20.0],
                [Align::Left, Align::Left],
                TEXT_SIZE,
                label,
        );
    }
}

impl Game for TargetGame {
    fn view(&self) -> View {
        View::pixels(INITIAL_SIZE[0], INITIAL_SIZE[1])
    }

    fn launch(&mut self) -> Option<Effect> {
        if self.variant.start_screen {
            None
        } else {
            Some(self.begin())
        }
    }

    fn render(&self,  gfx: &mut Graphics) {
        let (width, height) = (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        let text_color = hex(TEXT_COLOR);
        let score = format!("Score: {}", self.state.score);
        match self.state.phase {
            Phase::Start => {
                gfx.text(
                        text_color,
                        [width/2.0-70.0, height/2.0+50.0],
                        [Align::Left, Align::Left],
                        TEXT_SIZE,
                        "Click Start to Play!",
                );
                self.draw_button("Start", 25.0, gfx);
            }
            Phase::Active => {
                let center = [self.state.target[0] as f32, self.state.target[1] as f32];
                gfx.circle(hex(TARGET_COLOR), center, TARGET_RADIUS as f32);
                if self.variant.bullseye {
                    gfx.circle(hex(INNER_COLOR), center, INNER_RADIUS as f32);
                }
                gfx.text(text_color, [10.0, height-30.0], [Align::Left, Align::Left], TEXT_SIZE, score);
            }
            Phase::Ended => {
                gfx.text(
                        text_color,
                        [width/2.0-50.0, height/2.0+50.0],
                        [Align::Left, Align::Left],
                        TEXT_SIZE,
                        "Game Over!",
                );
                gfx.text(text_color, [width/2.0-50.0, height/2.0], [Align::Left, Align::Left], TEXT_SIZE, score);
                self.draw_button("Replay", 30.0, gfx);
            }
        }
    }

    fn tick(&mut self) -> Option<Effect> {
        if self.state.phase != Phase::Active {
            return None;
        }
        if !self.state.target_hit {
            self.state.phase = Phase::Ended;
            log::info!("Game over! Score: {}", self.state.score);
            return None;
        }
        let state = &mut self.state;
        state.score = self.variant.scoring.award(state.score, state.last_click, state.target);
        state.target_hit = false;
        log::debug!("score is now {}", state.score);
        self.spawn_target();
        Some(Effect::ScheduleTick(self.variant.interval))
    }

    fn key_press(&mut self,  _: Key) -> Option<Effect> {
        None
    }

    fn mouse_press(&mut self,  button: MouseButton,  pos: [f32; 2]) -> Option<Effect> {
        if button != MouseButton::Left {
            return None;
        }
        // window events have y pointing down
        let pos = [pos[0] as i32, WINDOW_HEIGHT - pos[1] as i32];
        match self.state.phase {
            Phase::Active => {
                self.state.last_click = pos;
                if is_hit(pos, self.state.target) {
                    log::trace!("hit at {:?}", pos);
                    self.state.target_hit = true;
                }
                None
            }
            Phase::Start | Phase::Ended if on_button(pos) => Some(self.begin()),
            Phase::Start | Phase::Ended => None,
        }
    }
}
