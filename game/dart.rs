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

//! Aim a dart at the board with the arrow keys and throw it with `s`.

use ::interface::game::*;

use std::time::Duration;

pub const NAME: &str = "DART_BOARD";
pub const INITIAL_SIZE: [f32;2] = [650.0, 600.0];
const VIEW: View = View { left: -200.0, bottom: -200.0, width: 400.0, height: 400.0 };

/// [left, bottom, width, height], outermost first.
const BOARD: [[i32; 4]; 3] = [
    [-150, 30, 120, 130],
    [-130, 50, 80, 90],
    [-110, 70, 40, 50],
];
const BOARD_COLORS: [&str; 3] = ["ff0000", "00ff00", "0000ff"];
const POINTS: [&str; 3] = ["Point 5", "Point 10", "Point 15"];
const DART_SIZE: [i32; 2] = [25, 25];
const DART_START: [i32; 2] = [70, -120];
const DART_COLOR: &str = "ffffff";
const TEXT_COLOR: &str = "ffffff";
const TEXT_SIZE: f32 = 10.0;
/// Both how far a throw goes and ten times an arrow key step.
const MOVE_UNIT: f32 = 130.5;
const THROW_STEP: Duration = Duration::from_millis(5);

/// Whether two [left, bottom, width, height] boxes overlap or touch.
pub fn overlaps(a: [i32; 4],  b: [i32; 4]) -> bool {
    !(a[1]+a[3] < b[1]
    || a[1] > b[1]+b[3]
    || a[0]+a[2] < b[0]
    || a[0] > b[0]+b[2])
}

pub struct DartGame {
    pos: [i32; 2],
    /// How far the current throw has gone
    goal: u32,
    in_flight: bool,
}

impl DartGame {
    pub fn new() -> Self {
        DartGame { pos: DART_START, goal: 0, in_flight: false }
    }

    pub fn position(&self) -> [i32; 2] {
        self.pos
    }

    fn dart_area(&self) -> [i32; 4] {
        [self.pos[0], self.pos[1], DART_SIZE[0], DART_SIZE[1]]
    }

    /// How many of the nested board rectangles the dart is on, from the outside in.
    fn rings_hit(&self) -> usize {
        let dart = self.dart_area();
        BOARD.iter().take_while(|&&ring| overlaps(ring, dart)).count()
    }

    pub fn points(&self) -> u32 {
        5 * self.rings_hit() as u32
    }

    fn can_throw(&self) -> bool {
        self.goal as f32 <= MOVE_UNIT
    }

    /// Moves one axis, truncating toward zero.
    fn nudge(coordinate: &mut i32,  by: f32) {
        *coordinate = (*coordinate as f32 + by) as i32;
    }
}

impl Default for DartGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for DartGame {
    fn view(&self) -> View {
        VIEW
    }

    fn launch(&mut self) -> Option<Effect> {
        None
    }

    fn render(&self,  gfx: &mut Graphics) {
        for (ring, color) in BOARD.iter().zip(BOARD_COLORS) {
            let area = [ring[0] as f32, ring[1] as f32, ring[2] as f32, ring[3] as f32];
            gfx.rectangle(hex(color), area);
        }

        let [x, y] = [self.pos[0] as f32, self.pos[1] as f32];
        let corners = [[x, y], [x+DART_SIZE[0] as f32, y], [x, y+DART_SIZE[1] as f32]];
        gfx.triangle(hex(DART_COLOR), corners);

        for (n, &text) in POINTS.iter().enumerate().take(self.rings_hit()) {
            let position = [0.0, 10.0 * n as f32];
            gfx.text(hex(TEXT_COLOR), position, [Align::Left, Align::Left], TEXT_SIZE, text);
        }
    }

    fn tick(&mut self) -> Option<Effect> {
        if !self.in_flight {
            return None;
        }
        if self.can_throw() {
            self.pos[0] -= 1;
            self.pos[1] += 1;
            self.goal += 1;
        }
        if self.can_throw() {
            Some(Effect::ScheduleTick(THROW_STEP))
        } else {
            self.in_flight = false;
            log::info!("dart landed at {:?} for {} points", self.pos, self.points());
            None
        }
    }

    fn key_press(&mut self,  key: Key) -> Option<Effect> {
        if key == Key::Char('0') {
            log::info!("quitting");
            return Some(Effect::Quit);
        }
        if self.in_flight {
            return None;
        }
        let step = MOVE_UNIT / 10.0;
        match key {
            Key::ArrowRight => Self::nudge(&mut self.pos[0], step),
            Key::ArrowLeft => Self::nudge(&mut self.pos[0], -step),
            Key::ArrowUp => Self::nudge(&mut self.pos[1], step),
            Key::ArrowDown => Self::nudge(&mut self.pos[1], -step),
            Key::Char('s') if self.can_throw() => {
                log::info!("throwing dart from {:?}", self.pos);
                self.in_flight = true;
                return Some(Effect::ScheduleTick(THROW_STEP));
            }
            Key::Char('c') => self.goal = 0,
            _ => {}
        }
        None
    }

    fn mouse_press(&mut self,  _: MouseButton,  _: [f32; 2]) -> Option<Effect> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs ticks until the game stops asking for more.
    fn finish_throw(game: &mut DartGame) -> usize {
        let mut ticks = 0;
        while let Some(effect) = game.tick() {
            assert_eq!(effect, Effect::ScheduleTick(THROW_STEP));
            ticks += 1;
            assert!(ticks < 1000, "throw never ends");
        }
        ticks + 1
    }

    #[test]
    fn arrow_keys_truncate_toward_zero() {
        let mut game = DartGame::new();
        game.key_press(Key::ArrowRight);
        assert_eq!(game.position(), [83, -120]);
        game.key_press(Key::ArrowLeft);
        assert_eq!(game.position(), [69, -120]);
        game.key_press(Key::ArrowUp);
        assert_eq!(game.position(), [69, -106]);
        game.key_press(Key::ArrowDown);
        assert_eq!(game.position(), [69, -119]);
    }

    #[test]
    fn throw_moves_up_left() {
        let mut game = DartGame::new();
        assert_eq!(game.key_press(Key::Char('s')), Some(Effect::ScheduleTick(THROW_STEP)));
        assert_eq!(finish_throw(&mut game), 131);
        assert_eq!(game.position(), [70-131, -120+131]);
        assert_eq!(game.tick(), None);
    }

    #[test]
    fn throw_needs_reset() {
        let mut game = DartGame::new();
        game.key_press(Key::Char('s'));
        finish_throw(&mut game);
        let landed = game.position();
        assert_eq!(game.key_press(Key::Char('s')), None);
        assert_eq!(game.position(), landed);

        assert_eq!(game.key_press(Key::Char('c')), None);
        assert!(game.key_press(Key::Char('s')).is_some());
    }

    #[test]
    fn keys_ignored_in_flight() {
        let mut game = DartGame::new();
        game.key_press(Key::Char('s'));
        game.tick();
        assert_eq!(game.key_press(Key::Char('s')), None);
        assert_eq!(game.key_press(Key::ArrowRight), None);
        assert_eq!(game.position(), [69, -119]);
        assert_eq!(game.key_press(Key::Char('0')), Some(Effect::Quit));
    }

    #[test]
    fn quit() {
        assert_eq!(DartGame::new().key_press(Key::Char('0')), Some(Effect::Quit));
    }

    #[test]
    fn overlap_includes_touching() {
        assert!(overlaps([0, 0, 10, 10], [10, 10, 5, 5]));
        assert!(overlaps([0, 0, 10, 10], [2, 2, 1, 1]));
        assert!(!overlaps([0, 0, 10, 10], [11, 0, 5, 5]));
        assert!(!overlaps([0, 0, 10, 10], [0, -6, 5, 5]));
    }

    #[test]
    fn points_are_nested() {
        let mut game = DartGame::new();
        assert_eq!(game.points(), 0);
        game.pos = [-170, 20];
        assert_eq!(game.points(), 5);
        game.pos = [-140, 40];
        assert_eq!(game.points(), 10);
        game.pos = [-100, 80];
        assert_eq!(game.points(), 15);
    }

    #[test]
    fn render_board_and_points() {
        let mut game = DartGame::new();
        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        assert_eq!(gfx.shapes().len(), 4);
        assert_eq!(gfx.shapes()[3], Shape::Triangle {
            color: hex(DART_COLOR),
            corners: [[70.0, -120.0], [95.0, -120.0], [70.0, -95.0]],
        });

        game.pos = [-140, 40];
        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        let texts: Vec<_> = gfx.shapes().iter().filter_map(|shape| match shape {
            Shape::StaticText { text, position, .. } => Some((*text, *position)),
            _ => None,
        }).collect();
        assert_eq!(texts, [("Point 5", [0.0, 0.0]), ("Point 10", [0.0, 10.0])]);
    }
}
