/// Canonical lookup key for a service category: lowercased, every run of
/// non-alphanumeric characters collapsed to a single hyphen, no leading or
/// trailing hyphen. Total over arbitrary input; empty in, empty out.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut gap = false;

    for c in input.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c);
        } else {
            gap = true;
        }
    }

    slug
}
