//! Built-in mazes.
//!
//! `%` wall, `.` food, `o` capsule, `P` pacman, `G` ghost, ` ` free.

pub const TEST_CLASSIC: &str = r#"
%%%%%
% . %
%.G.%
% . %
%. .%
%   %
%  .%
%   %
%P .%
%%%%%
"#;

pub const MINIMAX_CLASSIC: &str = r#"
%%%%%%%%%
%.P    G%
% %.%G%%%
%G    %%%
%%%%%%%%%
"#;

pub const TRAPPED_CLASSIC: &str = r#"
%%%%%%%%
%   P G%
%G%%%%%%
%....  %
%%%%%%%%
"#;

pub const SMALL_CLASSIC: &str = r#"
%%%%%%%%%%%%%%%%%%%%
%......%G  G%......%
%.%%...%%  %%...%%.%
%.%o.%........%.o%.%
%.%%.%.%%%%%%.%.%%.%
%........P.........%
%%%%%%%%%%%%%%%%%%%%
"#;

pub const OPEN_CLASSIC: &str = r#"
%%%%%%%%%%%%%%%%%%%%%%%%%
%.. P  ....      ....   %
%..  ...  ...  ...  ... %
%..  ...  ...  ...  ... %
%..    ....      .... G %
%..  ...  ...  ...  ... %
%..  ...  ...  ...  ... %
%..    ....      ....  o%
%%%%%%%%%%%%%%%%%%%%%%%%%
"#;

/// Names of all built-in layouts.
pub const NAMES: [&str; 5] = [
    "testClassic",
    "minimaxClassic",
    "trappedClassic",
    "smallClassic",
    "openClassic",
];

/// Returns the built-in layout with the given name.
pub fn get(name: &str) -> Option<&'static str> {
    match name {
        "testClassic" => Some(TEST_CLASSIC),
        "minimaxClassic" => Some(MINIMAX_CLASSIC),
        "trappedClassic" => Some(TRAPPED_CLASSIC),
        "smallClassic" => Some(SMALL_CLASSIC),
        "openClassic" => Some(OPEN_CLASSIC),
        _ => None,
    }
}

/// Returns the built-in layout `layout` or reads it from the file system.
pub fn load(layout: &str) -> std::io::Result<String> {
    match get(layout) {
        Some(txt) => Ok(txt.to_string()),
        None => std::fs::read_to_string(layout),
    }
}
