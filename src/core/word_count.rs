/// Counts tokens separated by space, tab or newline.
///
/// Only those three characters split words. Carriage return and other Unicode
/// whitespace (NBSP, ideographic space, ...) are treated as word characters.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_separator(c) {
            if in_word {
                count += 1;
                in_word = false;
            }
        } else {
            in_word = true;
        }
    }

    if in_word {
        count += 1;
    }

    count
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}
