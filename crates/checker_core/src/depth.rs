/// Path depth of a URL, the way operators count "levels": scheme stripped,
/// one trailing slash stripped, remaining `/` occurrences counted.
///
/// `https://a.com/b/c/` is 2, `https://a.com` is 0.
pub fn path_depth(url: &str) -> usize {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    rest.matches('/').count()
}
