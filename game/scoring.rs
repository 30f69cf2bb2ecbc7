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

/// How a hit target is rewarded.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Scoring {
    /// A fixed number of points per hit, never going above `max`.
    Step {step: u32,  max: u32},
    /// `(radius - distance) * step` points, where distance is from the
    /// last click to the target center, truncated to whole units.
    /// Clicks further away than `radius` give nothing.
    Proximity {radius: u32,  step: u32},
}

impl Scoring {
    /// Returns the new score after a hit.
    pub fn award(self,  score: u32,  click: [i32; 2],  target: [i32; 2]) -> u32 {
        match self {
            Scoring::Step { step, max } => score.saturating_add(step).min(max),
            Scoring::Proximity { radius, step } => {
                let reward = radius.saturating_sub(distance(click, target)) * step;
                score.saturating_add(reward)
            }
        }
    }
}

pub fn distance_squared(a: [i32; 2],  b: [i32; 2]) -> i64 {
    let dx = (a[0] - b[0]) as i64;
    let dy = (a[1] - b[1]) as i64;
    dx*dx + dy*dy
}

fn distance(a: [i32; 2],  b: [i32; 2]) -> u32 {
    (distance_squared(a, b) as f64).sqrt() as u32
}
