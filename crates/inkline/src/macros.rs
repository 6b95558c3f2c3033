//! Template construction macro.

/// Build a [`Template`](crate::Template) from a pattern and arguments.
///
/// Each argument goes through [`Value::from`](crate::Value), so colors,
/// strings, numbers, bools and the restore markers can be mixed freely:
///
/// ```rust
/// use inkline::{Color, Value, template};
///
/// let t = template!("{0}error:{1} {2} failures", Color::Red, Value::RestoreColor, 3);
/// assert_eq!(t.args().len(), 3);
/// ```
#[macro_export]
macro_rules! template {
    ($pattern:expr $(,)?) => {
        $crate::Template::new($pattern, ::std::vec::Vec::new())
    };
    ($pattern:expr, $($arg:expr),+ $(,)?) => {
        $crate::Template::new($pattern, ::std::vec![$($crate::Value::from($arg)),+])
    };
}
