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

use crate::common::{icon, Mapping, StartError};
use crate::font;
use interface::game::*;

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

extern crate speedy2d;
use speedy2d::Graphics2D;
use speedy2d::Window;
use speedy2d::color::Color as spColor;
use speedy2d::dimen::Vector2;
use speedy2d::font::{Font, TextLayout, TextOptions, FormattedTextBlock};
use speedy2d::shape::Rectangle;
use speedy2d::window::{
    MouseButton as spMouseButton,
    UserEventSender,
    VirtualKeyCode,
    WindowCreationOptions,
    WindowHandler,
    WindowHelper,
    WindowSize,
};

extern crate fxhash;
use fxhash::FxBuildHasher;

const ICON_SIZE: u32 = 32;

fn map_key(key: VirtualKeyCode) -> Option<Key> {
    match key {
        VirtualKeyCode::Up => Some(Key::ArrowUp),
        VirtualKeyCode::Down => Some(Key::ArrowDown),
        VirtualKeyCode::Left => Some(Key::ArrowLeft),
        VirtualKeyCode::Right => Some(Key::ArrowRight),
        VirtualKeyCode::Escape => Some(Key::Escape),
        VirtualKeyCode::Return => Some(Key::Enter),
        VirtualKeyCode::Space => Some(Key::Space),
        _ => None
    }
}

fn map_button(b: spMouseButton) -> Option<MouseButton> {
    match b {
        spMouseButton::Left => Some(MouseButton::Left),
        spMouseButton::Right => Some(MouseButton::Right),
        spMouseButton::Middle => Some(MouseButton::Middle),
        spMouseButton::Other(_) => None
    }
}

fn map_color([r, g, b, a]: [f32; 4]) -> spColor {
    spColor::from_rgba(r, g, b, a)
}

fn vector([x, y]: [f32; 2]) -> Vector2<f32> {
    Vector2::new(x, y)
}

/// Moves the top left corner of a text block so that `anchor` ends up where `center` says.
/// Window coordinates have y pointing down, but `Align::Left` means the bottom of the text.
fn align_text(anchor: [f32; 2],  center: [Align; 2],  text: &FormattedTextBlock) -> Vector2<f32> {
    let x = match center[0] {
        Align::Left => anchor[0],
        Align::Center => anchor[0] - text.width()/2.0,
        Align::Right => anchor[0] - text.width(),
    };
    let y = match center[1] {
        Align::Left => anchor[1] - text.height(),
        Align::Center => anchor[1] - text.height()/2.0,
        Align::Right => anchor[1],
    };
    Vector2::new(x, y)
}

/// Fires a single `on_user_event()` after `delay`.
fn schedule_tick(sender: UserEventSender<()>,  delay: Duration) {
    thread::spawn(move || {
        thread::sleep(delay);
        if let Err(e) = sender.send_event(()) {
            log::warn!("cannot deliver tick: {:?}", e);
        }
    });
}

struct TextCache {
    font: Font,
    statics: HashMap<(&'static str, i32), Rc<FormattedTextBlock>, FxBuildHasher>,
}

impl TextCache {
    fn new(font: Font) -> Self {
        TextCache {
            font,
            statics: HashMap::default(),
        }
    }
    fn create(&self,  text: &str,  scaled_size: f32) -> Rc<FormattedTextBlock> {
        self.font.layout_text(text, scaled_size, TextOptions::new())
    }
    fn get_static(&mut self,  text: &'static str,  scaled_size: f32) -> Rc<FormattedTextBlock> {
        let key = (text, scaled_size as i32);
        let font = &self.font;
        self.statics.entry(key).or_insert_with(|| {
            font.layout_text(text, scaled_size, TextOptions::new())
        }).clone()
    }
}

struct GameWrapper<G: Game> {
    game: G,
    window_size: [f32; 2], // changes if window is resized
    cursor: [f32; 2], // in window pixels
    shapes: Graphics,
    text: TextCache,
}

impl<G: Game> GameWrapper<G> {
    fn mapping(&self) -> Mapping {
        Mapping::letterbox(self.window_size, self.game.view())
    }

    fn apply(&mut self,  effect: Option<Effect>,  h: &mut WindowHelper<()>) {
        match effect {
            Some(Effect::ScheduleTick(delay)) => {
                log::trace!("next tick in {:?}", delay);
                schedule_tick(h.create_user_event_sender(), delay);
            }
            Some(Effect::Quit) => h.terminate_loop(),
            None => {}
        }
    }
}

impl<G: Game> WindowHandler for GameWrapper<G> {
    fn on_start(&mut self,
            h: &mut WindowHelper<()>,
            info: speedy2d::window::WindowStartupInfo
    ) {
        let size = info.viewport_size_pixels().into_f32();
        self.window_size = [size.x, size.y];
        h.set_cursor_visible(true);
        if let Err(e) = h.set_cursor_grab(false) {
            log::warn!("cannot release cursor: {:?}", e);
        }

        let icon = icon(ICON_SIZE);
        let size = Vector2::new(icon.width(), icon.height());
        if let Err(e) = h.set_icon_from_rgba_pixels(icon.into_raw(), size) {
            log::warn!("cannot set window icon: {:?}", e);
        }

        let effect = self.game.launch();
        self.apply(effect, h);
    }

    fn on_user_event(&mut self,  h: &mut WindowHelper<()>,  _: ()) {
        let effect = self.game.tick();
        self.apply(effect, h);
    }

    fn on_draw(&mut self,  h: &mut WindowHelper<()>,  g: &mut Graphics2D) {
        g.clear_screen(spColor::BLACK);
        self.game.render(&mut self.shapes);

        let mapping = self.mapping();
        let scale = mapping.scale();
        for shape in self.shapes.drain() {
            match shape {
                Shape::Rectangle { color, area: [left, bottom, width, height] } => {
                    let rect = Rectangle::new(
                        vector(mapping.to_window([left, bottom+height])),
                        vector(mapping.to_window([left+width, bottom])),
                    );
                    g.draw_rectangle(rect, map_color(color));
                }
                Shape::Circle{ color, center,  radius } => {
                    let center = vector(mapping.to_window(center));
                    g.draw_circle(center, radius * scale, map_color(color));
                }
                Shape::Triangle{ color, corners } => {
                    let corners = corners.map(|corner| vector(mapping.to_window(corner)));
                    g.draw_triangle(corners, map_color(color));
                }
                Shape::StaticText{ color, size, position, center, text } => {
                    let text = self.text.get_static(text, size * scale);
                    let position = align_text(mapping.to_window(position), center, &text);
                    g.draw_text(position, map_color(color), &text);
                }
                Shape::DynamicText{ color, size, position, center, text } => {
                    let text = self.text.create(&text, size * scale);
                    let position = align_text(mapping.to_window(position), center, &text);
                    g.draw_text(position, map_color(color), &text);
                }
            }
        }

        // Required to make the screen update.
        // Surprisingly doesn't cause 100% CPU usage.
        h.request_redraw();
    }

    fn on_resize(&mut self,  _: &mut WindowHelper<()>,  size: speedy2d::dimen::UVec2) {
        self.window_size[0] = size.into_f32().x;
        self.window_size[1] = size.into_f32().y;
        log::debug!("resized to {:?}, scale is now {}", self.window_size, self.mapping().scale());
    }

    fn on_mouse_move(&mut self,  _: &mut WindowHelper<()>,  pos: Vector2<f32>) {
        self.cursor = [pos.x, pos.y];
    }

    fn on_mouse_button_down(&mut self,  h: &mut WindowHelper<()>,  button: spMouseButton) {
        if let Some(button) = map_button(button) {
            let pos = self.mapping().from_window(self.cursor);
            let effect = self.game.mouse_press(button, pos);
            self.apply(effect, h);
        }
    }

    fn on_key_down(
            &mut self,
            h: &mut WindowHelper<()>,
            key: Option<VirtualKeyCode>,
            _: speedy2d::window::KeyScancode
    ) {
        if let Some(key) = key.and_then(map_key) {
            let effect = self.game.key_press(key);
            self.apply(effect, h);
        }
    }

    fn on_keyboard_char(&mut self,  h: &mut WindowHelper<()>,  c: char) {
        // space and enter are reported by on_key_down()
        if !c.is_control() && !c.is_whitespace() {
            let effect = self.game.key_press(Key::Char(c));
            self.apply(effect, h);
        }
    }
}

/// Opens the window and runs the game until the window is closed.
///
/// Only returns if something fails before the event loop starts.
#[inline(never)]
pub fn start<G:Game+'static>(
        game: G,
        name: &'static str,
        initial_size: [f32; 2],
        font_path: Option<&Path>,
) -> Result<(), StartError> {
    let wrapper = GameWrapper {
        game,
        window_size: initial_size,
        cursor: [0.0, 0.0],
        shapes: Graphics::default(),
        text: TextCache::new(font::load(font_path)?),
    };

    let window_size = WindowSize::ScaledPixels(vector(initial_size));
    let options = WindowCreationOptions::new_windowed(window_size, None)
            .with_always_on_top(false)
            .with_decorations(true)
            .with_resizable(true)
            .with_transparent(false)
            .with_vsync(true);
    let window = Window::new_with_options(name, options)
            .map_err(|e| StartError::Window(format!("{:?}", e)))?;
    log::info!("opened {} window", name);
    window.run_loop(wrapper)
}
