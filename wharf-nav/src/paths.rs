pub fn path_join(base: &str, path: &str) -> String {
    let joined = format!("{base}/{path}");
    let mut out = String::with_capacity(joined.len());
    for segment in joined.split('/').filter(|segment| !segment.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

pub fn path_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}

pub fn path_base(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn strip_query(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}

pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn join_base(base: &str, path: &str) -> String {
    if base == "/" || base.is_empty() {
        return path.to_string();
    }
    path_join(base, path)
}

pub fn trim_base(base: &str, path: &str) -> String {
    if base == "/" || base.is_empty() {
        return path.to_string();
    }
    match path.strip_prefix(base) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}
