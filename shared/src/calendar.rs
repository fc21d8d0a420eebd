//! Grid layout, cell lookup and glyph selection for the 25 calendar doors.

use std::fmt;

use crate::config::CalendarWindow;
use crate::models::{Article, QiitaItem};

pub const GRID_SIZE: usize = 5;

/// Door numbers as they sit on the house, top row first.
pub const HOUSE_LAYOUT: [[u8; GRID_SIZE]; GRID_SIZE] = [
    [1, 2, 3, 4, 5],
    [6, 7, 8, 9, 10],
    [11, 12, 13, 14, 15],
    [16, 17, 18, 19, 20],
    [21, 22, 23, 24, 25],
];

/// A calendar slot, 1 through 25
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 25;

    pub fn new(day: u8) -> Option<Self> {
        (Self::FIRST..=Self::LAST).contains(&day).then_some(Day(day))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Day> {
        (Self::FIRST..=Self::LAST).map(Day)
    }

    /// `(row, column)` of this door in [`HOUSE_LAYOUT`]
    #[cfg(test)]
    fn position(self) -> (usize, usize) {
        let index = usize::from(self.0 - 1);
        (index / GRID_SIZE, index % GRID_SIZE)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Rows of the house, each a left-to-right run of doors.
pub fn house_rows() -> impl Iterator<Item = [Day; GRID_SIZE]> {
    HOUSE_LAYOUT.into_iter().map(|row| row.map(Day))
}

/// Icon drawn on a door. Depends only on the day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Star,
    Gift,
    Tree,
    Number(Day),
}

impl Glyph {
    pub fn for_day(day: Day) -> Self {
        match day.get() {
            25 => Glyph::Star,
            n if n % 5 == 0 => Glyph::Gift,
            n if n % 7 == 0 => Glyph::Tree,
            _ => Glyph::Number(day),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState<'a> {
    Linked(&'a Article),
    Empty,
}

impl CellState<'_> {
    #[cfg(test)]
    fn is_linked(&self) -> bool {
        matches!(self, CellState::Linked(_))
    }
}

/// Look up the door for `day`. With several articles on the same day the
/// first one in API order wins.
pub fn cell_for(day: Day, articles: &[Article]) -> CellState<'_> {
    articles
        .iter()
        .find(|article| article.day_of_month() == u32::from(day.get()))
        .map_or(CellState::Empty, CellState::Linked)
}

/// Keep the items published on days 1-25 of the window, in their original order.
pub fn filter_window(items: Vec<QiitaItem>, window: &CalendarWindow) -> Vec<Article> {
    items
        .into_iter()
        .filter_map(|item| {
            let created_at = match item.parse_created_at() {
                Ok(created_at) => created_at,
                Err(e) => {
                    tracing::warn!(
                        url = %item.url,
                        created_at = %item.created_at,
                        "Skipping item with unparseable timestamp: {}",
                        e
                    );
                    return None;
                }
            };
            window.day_of(&created_at)?;
            Some(Article {
                title: item.title,
                url: item.url,
                created_at,
            })
        })
        .collect()
}
