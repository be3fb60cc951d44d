/// Return the protocol tokens in front of the first `://`.
///
/// `git+ssh://host/repo` yields `["git", "ssh"]`. Input without `://`
/// (SCP-like syntax) yields an empty list.
pub fn extract_protocols(url: &str) -> Vec<String> {
    match url.find("://") {
        Some(index) => url[..index].split('+').map(str::to_string).collect(),
        None => Vec::new(),
    }
}
