pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{banner, error, info, section, success, warn};
pub use table::{settings_table, TableBuilder};
pub use theme::{theme, Theme};
