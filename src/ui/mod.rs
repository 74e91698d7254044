pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{
    concept, empty, error, header, info, init_quiet, is_quiet, listing, relation_line,
    render_error, render_listing, render_sinset_line, sinset_line, timing, warn,
};
pub use table::{stats_table, TableBuilder};
pub use theme::{theme, Theme};
