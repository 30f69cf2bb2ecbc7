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

use crate::common::StartError;

use std::fs;
use std::path::{Path, PathBuf};

use speedy2d::font::Font;

/// Monospace fonts that are likely to be installed.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "/Library/Fonts/Courier New.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

fn find(candidates: &[&str]) -> Result<PathBuf, StartError> {
    candidates.iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
        .ok_or_else(|| StartError::NoFont {
            tried: candidates.iter().map(PathBuf::from).collect(),
        })
}

/// Loads `path`, or the first system font found if there is none.
pub fn load(path: Option<&Path>) -> Result<Font, StartError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => find(SYSTEM_FONTS)?,
    };
    log::debug!("loading font {:?}", path);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) => return Err(StartError::ReadFont { path, source }),
    };
    Font::new(&bytes).map_err(|e| StartError::ParseFont { path, reason: format!("{:?}", e) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn nothing_found() {
        match find(&["/nonexistent/a.ttf", "/nonexistent/b.ttf"]) {
            Err(StartError::NoFont { tried }) => assert_eq!(tried.len(), 2),
            other => panic!("expected NoFont, got {:?}", other),
        }
    }

    #[test]
    fn first_existing_wins() {
        let file = env::temp_dir().join("target_games_find_test.ttf");
        fs::write(&file, b"not really a font").unwrap();
        let file_str = file.to_str().unwrap();
        let found = find(&["/nonexistent/a.ttf", file_str]).unwrap();
        assert_eq!(found, file);
        let _ = fs::remove_file(&file);
    }

    #[test]
    fn missing_explicit_font() {
        let path = Path::new("/nonexistent/font.ttf");
        match load(Some(path)) {
            Err(StartError::ReadFont { path: reported, .. }) => assert_eq!(reported, path),
            Err(other) => panic!("expected ReadFont, got {}", other),
            Ok(_) => panic!("loaded a font that doesn't exist"),
        }
    }

    #[test]
    fn garbage_font() {
        let file = env::temp_dir().join("target_games_garbage_test.ttf");
        fs::write(&file, b"definitely not a font").unwrap();
        let result = load(Some(&file));
        let _ = fs::remove_file(&file);
        match result {
            Err(StartError::ParseFont { path, .. }) => assert_eq!(path, file),
            Err(other) => panic!("expected ParseFont, got {}", other),
            Ok(_) => panic!("parsed garbage as a font"),
        }
    }
}
