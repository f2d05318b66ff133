//! Remote Path Helpers
//!
//! Lexical POSIX path manipulation for paths on the remote host. These never
//! consult the local filesystem or the local working directory: the remote
//! layout is only known by name.

/// Strip trailing `/` and `\` separators, keeping a bare root as `/`
pub fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(|c| c == '/' || c == '\\');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Resolve `.` and `..` segments and collapse repeated separators
pub fn normalize(path: &str) -> String {
    let absolute = is_absolute(path);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                // `..` above the root stays at the root
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join `path` onto `base` unless `path` is already absolute
pub fn join(base: &str, path: &str) -> String {
    if is_absolute(path) {
        normalize(path)
    } else {
        normalize(&format!("{}/{}", base, path))
    }
}

/// Parent directory of `path` (`.` for a bare relative name)
pub fn dirname(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rsplit_once('/') {
        Some(("", _)) => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
        None if normalized == ".." => "../..".to_string(),
        None => ".".to_string(),
    }
}

/// Final component of `path`, ignoring trailing separators
pub fn basename(path: &str) -> &str {
    let trimmed = trim_trailing_separators(path);
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Relative path that leads from directory `from` to `to`
///
/// Both arguments are normalized first. Identical paths yield `.`.
pub fn relative(from: &str, to: &str) -> String {
    let from = normalize(from);
    let to = normalize(to);
    let from_segments = segments(&from);
    let to_segments = segments(&to);

    let common = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from_segments.len() - common];
    parts.extend_from_slice(&to_segments[common..]);

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}
