pub mod formatter;

pub use formatter::{
    format_class_badge, format_mod_items, format_name_list, format_points, format_result,
    format_saved_list, should_use_colors,
};
