use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

/// Right-pad `s` with spaces until it fills `cells` terminal cells.
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let width = display_width(s);
    let mut padded = s.to_string();
    if width < cells {
        padded.push_str(&" ".repeat(cells - width));
    }
    padded
}
