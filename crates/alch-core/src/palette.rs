//! Ordered swatch list with a selection cursor.
//!
//! A [`Palette`] always holds at least one color and always has a valid
//! selection. Edits keep the cursor on the same swatch where possible:
//! moving the selected swatch carries the selection along, deleting a swatch
//! before the cursor shifts it down.
//!
//! The editor's "current color" is an [`AdaptiveLch`] owned by the host.
//! [`Palette::load_selected`] copies the selected swatch out to it and
//! [`Palette::store_current`] writes edits back.
//!
//! # Example
//!
//! ```
//! use alch_core::{AdaptiveLch, Palette};
//!
//! let mut palette = Palette::sample();
//! let mut current = palette.load_selected();
//!
//! current.hue = 90.0;
//! palette.store_current(current);
//! assert_eq!(palette.selected().hue, 90.0);
//!
//! palette.add_from(current);
//! assert_eq!(palette.selected_index(), palette.len() - 1);
//! ```

use crate::error::{Error, Result};
use crate::swatch::{AdaptiveLch, AdaptiveLchColor};
use tracing::debug;

/// Ordered, never-empty list of swatches.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<AdaptiveLchColor>,
    selected: usize,
}

impl Palette {
    /// Builds a palette from existing swatches, selecting the first.
    pub fn from_colors(colors: Vec<AdaptiveLchColor>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self { colors, selected: 0 })
    }

    /// Four starter swatches: red, green, blue and yellow at 100 nits.
    pub fn sample() -> Self {
        Self {
            colors: vec![
                AdaptiveLchColor::new(100.0, 0.3, 0.15, 0.0, Some("Red")),
                AdaptiveLchColor::new(100.0, 0.5, 0.15, 120.0, Some("Green")),
                AdaptiveLchColor::new(100.0, 0.5, 0.15, 240.0, Some("Blue")),
                AdaptiveLchColor::new(100.0, 0.7, 0.15, 60.0, Some("Yellow")),
            ],
            selected: 0,
        }
    }

    /// Number of swatches.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All swatches in order.
    #[inline]
    pub fn colors(&self) -> &[AdaptiveLchColor] {
        &self.colors
    }

    /// Swatch at `index`.
    pub fn get(&self, index: usize) -> Option<&AdaptiveLchColor> {
        self.colors.get(index)
    }

    /// Index of the selected swatch.
    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected swatch.
    pub fn selected(&self) -> &AdaptiveLchColor {
        // `selected` is kept in bounds by every mutation and the list is never empty.
        &self.colors[self.selected]
    }

    /// Moves the cursor to `index`.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.selected = index;
        Ok(())
    }

    /// Appends a new swatch with the given axes and selects it.
    pub fn add_from(&mut self, current: AdaptiveLch) -> &AdaptiveLchColor {
        self.colors.push(AdaptiveLchColor::from_lch(current, None));
        self.selected = self.colors.len() - 1;
        let added = &self.colors[self.selected];
        debug!(id = %added.id, name = %added.name, "palette: added color");
        added
    }

    /// Removes the swatch at `index`.
    ///
    /// Refuses to remove the only remaining swatch.
    pub fn delete(&mut self, index: usize) -> Result<AdaptiveLchColor> {
        self.check(index)?;
        if self.colors.len() <= 1 {
            return Err(Error::LastColor);
        }

        let removed = self.colors.remove(index);
        if self.selected >= self.colors.len() {
            self.selected = self.colors.len() - 1;
        } else if self.selected > index {
            self.selected -= 1;
        }

        debug!(index, id = %removed.id, selected = self.selected, "palette: deleted color");
        Ok(removed)
    }

    /// Swaps the swatch at `index` with its predecessor.
    pub fn move_up(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        if index == 0 {
            return Err(Error::AtEdge { index, direction: "up" });
        }
        self.swap(index - 1, index);
        Ok(())
    }

    /// Swaps the swatch at `index` with its successor.
    pub fn move_down(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        if index + 1 >= self.colors.len() {
            return Err(Error::AtEdge { index, direction: "down" });
        }
        self.swap(index, index + 1);
        Ok(())
    }

    /// Renames the swatch at `index`.
    pub fn rename(&mut self, index: usize, name: &str) -> Result<()> {
        self.check(index)?;
        self.colors[index].name = name.to_owned();
        Ok(())
    }

    /// Axes of the selected swatch, for loading into the editor.
    pub fn load_selected(&self) -> AdaptiveLch {
        self.selected().lch()
    }

    /// Writes the editor's axes back into the selected swatch.
    pub fn store_current(&mut self, current: AdaptiveLch) {
        let selected = self.selected;
        self.colors[selected].set_lch(current);
    }

    /// Swaps adjacent entries `lo` and `lo + 1`, carrying the selection.
    fn swap(&mut self, lo: usize, hi: usize) {
        self.colors.swap(lo, hi);
        if self.selected == hi {
            self.selected = lo;
        } else if self.selected == lo {
            self.selected = hi;
        }
        debug!(lo, hi, selected = self.selected, "palette: swapped colors");
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.colors.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len: self.colors.len() })
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(p: &Palette) -> Vec<&str> {
        p.colors().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_sample() {
        let p = Palette::sample();
        assert_eq!(names(&p), ["Red", "Green", "Blue", "Yellow"]);
        assert_eq!(p.selected_index(), 0);
        assert_eq!(p.get(3).unwrap().lightness, 0.7);
        assert_eq!(p.get(3).unwrap().hue, 60.0);
    }

    #[test]
    fn test_from_colors_rejects_empty() {
        assert_eq!(Palette::from_colors(Vec::new()), Err(Error::Empty));
    }

    #[test]
    fn test_add_selects_new() {
        let mut p = Palette::sample();
        let current = AdaptiveLch::new(250.0, 0.6, 0.05, 300.0);
        let id = p.add_from(current).id.clone();
        assert_eq!(p.len(), 5);
        assert_eq!(p.selected_index(), 4);
        assert_eq!(p.selected().id, id);
        assert_eq!(p.load_selected(), current);
    }

    #[test]
    fn test_delete_last_refused() {
        let mut p = Palette::from_colors(vec![AdaptiveLchColor::default()]).unwrap();
        assert_eq!(p.delete(0), Err(Error::LastColor));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_delete_before_selection_shifts_cursor() {
        let mut p = Palette::sample();
        p.select(2).unwrap();
        p.delete(0).unwrap();
        assert_eq!(p.selected_index(), 1);
        assert_eq!(p.selected().name, "Blue");
    }

    #[test]
    fn test_delete_selected_tail_clamps_cursor() {
        let mut p = Palette::sample();
        p.select(3).unwrap();
        p.delete(3).unwrap();
        assert_eq!(p.selected_index(), 2);
        assert_eq!(p.selected().name, "Blue");
    }

    #[test]
    fn test_delete_after_selection_keeps_cursor() {
        let mut p = Palette::sample();
        p.select(1).unwrap();
        p.delete(3).unwrap();
        assert_eq!(p.selected_index(), 1);
        assert_eq!(p.selected().name, "Green");
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut p = Palette::sample();
        assert_eq!(p.delete(9), Err(Error::IndexOutOfRange { index: 9, len: 4 }));
    }

    #[test]
    fn test_move_up_carries_selection() {
        let mut p = Palette::sample();
        p.select(2).unwrap();
        p.move_up(2).unwrap();
        assert_eq!(names(&p), ["Red", "Blue", "Green", "Yellow"]);
        assert_eq!(p.selected().name, "Blue");
    }

    #[test]
    fn test_move_up_neighbor_selection() {
        let mut p = Palette::sample();
        p.select(1).unwrap();
        p.move_up(2).unwrap();
        assert_eq!(p.selected_index(), 2);
        assert_eq!(p.selected().name, "Green");
    }

    #[test]
    fn test_move_edges() {
        let mut p = Palette::sample();
        assert_eq!(p.move_up(0), Err(Error::AtEdge { index: 0, direction: "up" }));
        assert_eq!(p.move_down(3), Err(Error::AtEdge { index: 3, direction: "down" }));
        assert_eq!(names(&p), ["Red", "Green", "Blue", "Yellow"]);
    }

    #[test]
    fn test_move_down_carries_selection() {
        let mut p = Palette::sample();
        p.move_down(0).unwrap();
        assert_eq!(names(&p), ["Green", "Red", "Blue", "Yellow"]);
        assert_eq!(p.selected_index(), 1);
        assert_eq!(p.selected().name, "Red");
    }

    #[test]
    fn test_rename() {
        let mut p = Palette::sample();
        p.rename(1, "Leaf").unwrap();
        assert_eq!(p.get(1).unwrap().name, "Leaf");
        assert!(p.rename(4, "x").is_err());
    }

    #[test]
    fn test_store_current_targets_selection() {
        let mut p = Palette::sample();
        p.select(1).unwrap();
        let edited = AdaptiveLch::new(600.0, 0.4, 0.2, 150.0);
        p.store_current(edited);
        assert_eq!(p.get(1).unwrap().lch(), edited);
        assert_eq!(p.get(0).unwrap().hue, 0.0);
    }
}
