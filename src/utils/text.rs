/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `"python developer"` becomes `"Python Developer"` and
/// `"c++/RUST"` becomes `"C++/Rust"`.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}
