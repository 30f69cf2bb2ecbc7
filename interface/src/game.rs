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

use std::borrow::Cow;
use std::mem;
use std::time::Duration;

pub type Color = [f32;4];

/// Parse a hex string of 6 or 8 bytes into a color.
/// Format is rrggbbaa, where the aa is optional.
#[track_caller]
pub fn hex(color: &str) -> Color {
    let a = match color.len() {
        8 => u8::from_str_radix(&color[6..], 16).unwrap(),
        6 => 255,
        _ => panic!("color string must be 6 or 8 characters")
    };
    let r = u8::from_str_radix(&color[..2], 16).unwrap();
    let g = u8::from_str_radix(&color[2..4], 16).unwrap();
    let b = u8::from_str_radix(&color[4..6], 16).unwrap();
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
}

/// The area of game coordinates that is shown in the window.
///
/// Shapes are positioned in these coordinates with y pointing up,
/// like an OpenGL orthographic projection.
#[derive(Debug, Clone,Copy, PartialEq)]
pub struct View {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl View {
    /// A view with its origin in the bottom left corner of the window.
    pub const fn pixels(width: f32,  height: f32) -> Self {
        View { left: 0.0, bottom: 0.0, width, height }
    }
}

/// Where text is anchored relative to its position.
///
/// For the vertical axis `Left` means the bottom edge of the text
/// and `Right` means the top edge.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Align {Left, Center, Right}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// area is [left, bottom, width, height]
    Rectangle {color: Color,  area: [f32; 4]},
    Circle {color: Color,  center: [f32; 2],  radius: f32},
    Triangle {color: Color,  corners: [[f32; 2]; 3]},
    StaticText {
        color: Color,
        size: f32,
        position: [f32; 2],
        center: [Align; 2],
        text: &'static str,
    },
    DynamicText {
        color: Color,
        size: f32,
        position: [f32; 2],
        center: [Align; 2],
        text: String,
    },
}

/// Shapes to draw this frame, in order.
#[derive(Debug, Default)]
pub struct Graphics {
    shapes: Vec<Shape>,
}

impl Graphics {
    pub fn rectangle(&mut self,  color: Color,  area: [f32; 4]) {
        self.shapes.push(Shape::Rectangle { color, area });
    }
    pub fn circle(&mut self,  color: Color,  center: [f32; 2],  radius: f32) {
        self.shapes.push(Shape::Circle { color, center, radius });
    }
    pub fn triangle(&mut self,  color: Color,  corners: [[f32; 2]; 3]) {
        self.shapes.push(Shape::Triangle { color, corners });
    }
    /// Borrowed strings are assumed to be constants and get their layout cached.
    pub fn text(&mut self,
            color: Color,
            position: [f32; 2],
            center: [Align; 2],
            size: f32,
            text: impl Into<Cow<'static, str>>,
    ) {
        self.shapes.push(match text.into() {
            Cow::Borrowed(text) => Shape::StaticText { color, size, position, center, text },
            Cow::Owned(text) => Shape::DynamicText { color, size, position, center, text },
        });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
    pub fn drain(&mut self) -> impl Iterator<Item=Shape> {
        mem::take(&mut self.shapes).into_iter()
    }
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Space,
    /// A printable character
    Char(char),
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Something the game wants the engine to do after a callback returns.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Effect {
    /// Call `Game::tick()` once after the delay.
    /// The game asks again from `tick()` if it wants another one.
    ScheduleTick(Duration),
    /// Close the window and end the process.
    Quit,
}

pub trait Game {
    fn view(&self) -> View;
    /// Called once when the window has been created.
    fn launch(&mut self) -> Option<Effect>;
    fn render(&self,  gfx: &mut Graphics);
    fn tick(&mut self) -> Option<Effect>;
    fn key_press(&mut self,  key: Key) -> Option<Effect>;
    /// `pos` is in view units, but measured from the top left corner
    /// with y pointing down, like window events are.
    fn mouse_press(&mut self,  button: MouseButton,  pos: [f32; 2]) -> Option<Effect>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(hex("ff0000"), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex("00ff0000"), [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn hex_wrong_length() {
        hex("fff");
    }

    #[test]
    fn text_is_cached_only_when_static() {
        let mut gfx = Graphics::default();
        let white = hex("ffffff");
        gfx.text(white, [0.0, 0.0], [Align::Left, Align::Left], 18.0, "Start");
        gfx.text(white, [0.0, 0.0], [Align::Left, Align::Left], 18.0, format!("Score: {}", 5));
        match gfx.shapes() {
            [Shape::StaticText { text: "Start", .. }, Shape::DynamicText { text, .. }] => {
                assert_eq!(text, "Score: 5");
            }
            other => panic!("unexpected shapes {:?}", other),
        }
    }

    #[test]
    fn drain_empties() {
        let mut gfx = Graphics::default();
        gfx.circle(hex("ff0000"), [1.0, 2.0], 3.0);
        gfx.rectangle(hex("00ff00"), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(gfx.drain().count(), 2);
        assert!(gfx.shapes().is_empty());
    }
}
