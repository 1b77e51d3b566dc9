use conflink::errors::ConflinkError;
use conflink::shortener::shorten_url;
use conflink::token;

#[cfg(test)]
mod composition_tests {
    use super::*;

    #[test]
    fn test_full_pipeline_derived_base() {
        assert_eq!(
            shorten_url("https://conf.example.com/pages/123456/My+Page", None).unwrap(),
            "https://conf.example.com/x/QOIBAA"
        );
    }

    #[test]
    fn test_full_pipeline_viewpage_action() {
        assert_eq!(
            shorten_url("https://conf.example.com/viewpage.action?pageId=987", None).unwrap(),
            "https://conf.example.com/x/2wMAAA"
        );
    }

    #[test]
    fn test_port_survives_into_short_url() {
        assert_eq!(
            shorten_url("https://conf.example.com:8443/pages/5", None).unwrap(),
            format!("https://conf.example.com:8443/x/{}", token::encode(5))
        );
    }

    #[test]
    fn test_base_override_replaces_derived_origin() {
        assert_eq!(
            shorten_url(
                "https://conf.example.com/pages/123456",
                Some("https://wiki.example.org"),
            )
            .unwrap(),
            "https://wiki.example.org/x/QOIBAA"
        );
    }

    #[test]
    fn test_base_override_trailing_slashes_trimmed() {
        assert_eq!(
            shorten_url("https://conf.example.com/pages/987", Some("https://s.example.com//"))
                .unwrap(),
            "https://s.example.com/x/2wMAAA"
        );
    }

    #[test]
    fn test_short_url_token_round_trips() {
        let short_url = shorten_url("https://conf.example.com/pages/31337", None).unwrap();
        let token = short_url.rsplit("/x/").next().unwrap();
        assert_eq!(token::decode(token).unwrap(), 31337);
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[test]
    fn test_unresolvable_url() {
        let err = shorten_url("https://conf.example.com/display/SPACE/Title", None).unwrap_err();
        assert!(matches!(err, ConflinkError::PageIdNotFound(_)));
    }

    #[test]
    fn test_malformed_url_without_override() {
        // 没有 override 时需要从输入推导 base，坏 URL 在这里暴露
        let err = shorten_url("not a url /pages/5", None).unwrap_err();
        assert!(matches!(err, ConflinkError::MalformedUrl(_)));
    }

    #[test]
    fn test_override_skips_origin_parsing() {
        // 提供了 override 就不再解析输入的 origin，只要 pageId 能解析出来
        assert_eq!(
            shorten_url("/pages/987", Some("https://s.example.com")).unwrap(),
            "https://s.example.com/x/2wMAAA"
        );
    }
}
