//! String helpers shared by validation and rendering.

pub trait TextExt {
    /// True when the string is empty or holds only whitespace.
    fn is_blank(&self) -> bool;

    /// Capitalizes every space-separated word and lower-cases the rest of it.
    fn titleize(&self) -> String;
}

impl TextExt for str {
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }

    fn titleize(&self) -> String {
        self.split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
