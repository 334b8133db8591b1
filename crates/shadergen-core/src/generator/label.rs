/// Spaced label for a camel-case directive name
///
/// A word is an uppercase letter followed by at least one non-uppercase
/// character, and a space is placed after each word: `ShadowCaster` becomes
/// `Shadow Caster`. Runs of capitals stay joined to what follows them
/// (`RGBColor` is unchanged).
pub fn display_label(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut label = String::with_capacity(name.len() + 4);
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        label.push(c);
        index += 1;

        if c.is_ascii_uppercase() {
            let word_end = chars[index..]
                .iter()
                .position(|next| next.is_ascii_uppercase())
                .map_or(chars.len(), |offset| index + offset);
            if word_end > index {
                label.extend(&chars[index..word_end]);
                label.push(' ');
                index = word_end;
            }
        }
    }

    label.trim_end().to_string()
}
