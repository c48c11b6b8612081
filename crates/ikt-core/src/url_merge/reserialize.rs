//! Parse-and-rebuild merge using `application/x-www-form-urlencoded` rules.

use url::form_urlencoded;

use super::TRANSFORM_PARAM;

pub(super) fn merge(path: &str, query: Option<&str>, tokens: &str) -> String {
    let mut params: Vec<(String, String)> = Vec::new();

    if let Some(query) = query {
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            if name == TRANSFORM_PARAM {
                continue;
            }
            match params.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = value.into_owned(),
                None => params.push((name.into_owned(), value.into_owned())),
            }
        }
    }
    params.push((TRANSFORM_PARAM.to_string(), tokens.to_string()));

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&params)
        .finish();
    format!("{path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_every_tr_occurrence() {
        assert_eq!(
            merge("https://x/y", Some("tr=a&k=v&tr=b"), "w-1"),
            "https://x/y?k=v&tr=w-1"
        );
    }

    #[test]
    fn keys_without_values() {
        assert_eq!(merge("/p", Some("flag&k="), "w-1"), "/p?flag=&k=&tr=w-1");
    }
}
