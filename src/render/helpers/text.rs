use super::text_metrics::BuiltinFontMeasurer;

/// Split an upper-cased name over two lines with the most even character counts
///
/// One word leaves the second line empty and two words get a line each. Longer
/// names break where the two halves differ least in length; ties keep the
/// earliest break.
pub fn split_name_two_lines(name: &str) -> (String, String) {
    let upper = name.to_uppercase();
    let words: Vec<&str> = upper.split_whitespace().collect();

    match words.len() {
        0 => (String::new(), String::new()),
        1 => (words[0].to_string(), String::new()),
        2 => (words[0].to_string(), words[1].to_string()),
        _ => {
            let mut best_break = 1;
            let mut best_diff = usize::MAX;

            for i in 1..words.len() {
                let left = words[..i].join(" ").chars().count();
                let right = words[i..].join(" ").chars().count();
                let diff = left.abs_diff(right);
                if diff < best_diff {
                    best_diff = diff;
                    best_break = i;
                }
            }

            (words[..best_break].join(" "), words[best_break..].join(" "))
        }
    }
}

/// Greedy word wrap to `max_width` mm
///
/// A single word wider than the line is kept whole on its own line.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    measurer: &BuiltinFontMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if measurer.measure_width_mm(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
