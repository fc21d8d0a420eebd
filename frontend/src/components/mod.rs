pub mod calendar_cell;
pub mod calendar_grid;
pub mod decorations;
pub mod glyph;
pub mod id_form;
