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

//! Backend-independent parts of the engine.

use interface::game::View;

use std::io;
use std::path::PathBuf;

extern crate image;
use image::{Rgba, RgbaImage};

extern crate thiserror;
use thiserror::Error;

/// Why the window couldn't be opened.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("no font found, tried {tried:?}")]
    NoFont {tried: Vec<PathBuf>},
    #[error("cannot read font {path:?}: {source}")]
    ReadFont {path: PathBuf,  #[source] source: io::Error},
    #[error("cannot parse font {path:?}: {reason}")]
    ParseFont {path: PathBuf,  reason: String},
    #[error("cannot create window: {0}")]
    Window(String),
}

/// Fits the view inside the window with equal scale on both axes,
/// centered with black bars on the sides that are too long.
#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Mapping {
    view: View,
    offset: [f32; 2],
    scale: f32,
}

impl Mapping {
    pub fn letterbox(window_size: [f32; 2],  view: View) -> Self {
        let scale = f32::min(window_size[0]/view.width, window_size[1]/view.height);
        let offset = [
            (window_size[0] - view.width*scale) / 2.0,
            (window_size[1] - view.height*scale) / 2.0,
        ];
        Mapping { view, offset, scale }
    }

    /// Window pixels per view unit
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// From view coordinates (y up) to window pixels (y down).
    pub fn to_window(&self,  [x, y]: [f32; 2]) -> [f32; 2] {
        let top = self.view.bottom + self.view.height;
        [
            self.offset[0] + (x - self.view.left) * self.scale,
            self.offset[1] + (top - y) * self.scale,
        ]
    }

    /// From window pixels to view units measured from the top left corner of the view.
    pub fn from_window(&self,  [x, y]: [f32; 2]) -> [f32; 2] {
        [(x - self.offset[0]) / self.scale, (y - self.offset[1]) / self.scale]
    }
}

const ICON_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
const ICON_CENTER_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const ICON_BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A red target with a black center.
pub fn icon(size: u32) -> RgbaImage {
    let radius = size as f32 / 2.0;
    let inner = radius * 0.4;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        let distance = dx.hypot(dy);
             if distance <= inner  {ICON_CENTER_COLOR}
        else if distance <= radius {ICON_COLOR}
        else                       {ICON_BACKGROUND}
    })
}
