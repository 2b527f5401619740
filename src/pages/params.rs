//! Navigation parameter resolution
//!
//! Detail pages receive their identity through the route's query string
//! so the shell never touches routing mechanics directly. Absent,
//! unrecognized or empty-valued keys resolve to `None`, never to an
//! empty string and never to an error: a `None` name means "identity
//! not resolvable yet" and withholds the fetch.

use url::form_urlencoded;

/// Identity fragment carried in a detail route's query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailParams {
    pub name: Option<String>,
    pub cluster_name: Option<String>,
}

/// Resolve `name` and `clusterName` from a raw query string.
///
/// Accepts the string with or without a leading `?`. Later duplicates
/// win, matching common query-string parsers.
pub fn resolve_detail_params(query: &str) -> DetailParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = DetailParams::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "name" => params.name = Some(value.into_owned()),
            "clusterName" => params.cluster_name = Some(value.into_owned()),
            _ => {}
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_params_present() {
        let params = resolve_detail_params("name=flux-system&clusterName=prod");
        assert_eq!(params.name.as_deref(), Some("flux-system"));
        assert_eq!(params.cluster_name.as_deref(), Some("prod"));
    }

    #[test]
    fn test_leading_question_mark() {
        let params = resolve_detail_params("?name=repo");
        assert_eq!(params.name.as_deref(), Some("repo"));
        assert_eq!(params.cluster_name, None);
    }

    #[test]
    fn test_absent_keys_resolve_to_none() {
        let params = resolve_detail_params("other=x&unrelated=y");
        assert_eq!(params.name, None);
        assert_eq!(params.cluster_name, None);
    }

    #[test]
    fn test_empty_values_resolve_to_none_not_empty_string() {
        let params = resolve_detail_params("name=&clusterName=");
        assert_eq!(params.name, None);
        assert_eq!(params.cluster_name, None);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(resolve_detail_params(""), DetailParams::default());
        assert_eq!(resolve_detail_params("?"), DetailParams::default());
    }

    #[test]
    fn test_url_decoding() {
        let params = resolve_detail_params("name=my%2Drepo&clusterName=east%201");
        assert_eq!(params.name.as_deref(), Some("my-repo"));
        assert_eq!(params.cluster_name.as_deref(), Some("east 1"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let params = resolve_detail_params("name=a&name=b");
        assert_eq!(params.name.as_deref(), Some("b"));
    }
}
