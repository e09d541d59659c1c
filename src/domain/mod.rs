//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Method, Request};
pub use response::ResponseEnvelope;
pub use validation::ValidationError;
pub use value::{AppSid, BaseUrl, Resource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_sid_rejects_empty() {
        assert!(matches!(
            AppSid::new("   "),
            Err(ValidationError::Empty {
                field: AppSid::FIELD
            })
        ));
    }

    #[test]
    fn app_sid_is_trimmed_and_redacted_in_debug() {
        let sid = AppSid::new(" secret-sid ").unwrap();
        assert_eq!(sid.as_str(), "secret-sid");
        assert!(!format!("{sid:?}").contains("secret-sid"));
    }

    #[test]
    fn base_url_default_parses() {
        let base = BaseUrl::parse(BaseUrl::DEFAULT).unwrap();
        assert_eq!(base.as_url().as_str(), "http://api.unifonic.com/rest/");
    }

    #[test]
    fn base_url_appends_trailing_slash() {
        let base = BaseUrl::parse("https://example.invalid/rest").unwrap();
        assert_eq!(base.as_url().as_str(), "https://example.invalid/rest/");

        let resource = Resource::new("Messages/Send").unwrap();
        assert_eq!(
            base.join(&resource).unwrap().as_str(),
            "https://example.invalid/rest/Messages/Send"
        );
    }

    #[test]
    fn base_url_rejects_empty_and_malformed_input() {
        assert!(matches!(
            BaseUrl::parse(""),
            Err(ValidationError::Empty { field: "base_url" })
        ));
        assert!(matches!(
            BaseUrl::parse("api.unifonic.com/rest"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::parse("http://"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::parse("mailto:ops@example.invalid"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::parse("ftp://example.invalid/rest/"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn resource_strips_leading_slash() {
        let resource = Resource::new("/Account/GetBalance").unwrap();
        assert_eq!(resource.as_str(), "Account/GetBalance");

        let base = BaseUrl::parse(BaseUrl::DEFAULT).unwrap();
        assert_eq!(
            base.join(&resource).unwrap().as_str(),
            "http://api.unifonic.com/rest/Account/GetBalance"
        );
    }

    #[test]
    fn resource_rejects_absolute_urls() {
        for input in [
            "https://attacker.example/collect",
            "http://api.unifonic.com/rest/Messages/Send",
            "mailto:ops@attacker.example",
        ] {
            assert!(
                matches!(
                    Resource::new(input),
                    Err(ValidationError::InvalidResource { .. })
                ),
                "accepted resource {input:?}"
            );
        }
    }

    #[test]
    fn resource_network_path_stays_beneath_base() {
        let base = BaseUrl::parse("https://api.unifonic.com/rest/").unwrap();
        for input in ["//attacker.example/collect", "\\\\attacker.example/collect"] {
            let resource = Resource::new(input).unwrap();
            assert_eq!(
                base.join(&resource).unwrap().as_str(),
                "https://api.unifonic.com/rest/attacker.example/collect"
            );
        }
    }

    #[test]
    fn resource_rejects_dot_segments() {
        for input in [
            "../admin/x",
            "Messages/../../admin",
            "./Messages/Send",
            "%2e%2e/admin",
            "Messages/.%2E/x",
            "..\\admin",
        ] {
            assert!(
                matches!(
                    Resource::new(input),
                    Err(ValidationError::InvalidResource { .. })
                ),
                "accepted resource {input:?}"
            );
        }
    }

    #[test]
    fn resource_allows_dots_inside_segment_names() {
        let resource = Resource::new("Files/report..v2.csv").unwrap();
        let base = BaseUrl::parse("https://api.unifonic.com/rest/").unwrap();
        assert_eq!(
            base.join(&resource).unwrap().as_str(),
            "https://api.unifonic.com/rest/Files/report..v2.csv"
        );
    }

    #[test]
    fn request_rejects_resource_outside_base_path() {
        assert!(Request::post("https://attacker.example/collect").is_err());
        assert!(Request::get("../admin/x").is_err());
    }

    #[test]
    fn resource_rejects_empty() {
        assert!(Resource::new("").is_err());
        assert!(Resource::new(" / ").is_err());
    }

    #[test]
    fn request_keeps_params_in_order() {
        let request = Request::post("Messages/Send")
            .unwrap()
            .param("Recipient", "966500000000")
            .param("Body", "hello");
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.resource().as_str(), "Messages/Send");
        assert_eq!(
            request.params(),
            &[
                ("Recipient".to_owned(), "966500000000".to_owned()),
                ("Body".to_owned(), "hello".to_owned()),
            ]
        );
    }

    #[test]
    fn method_displays_as_http_verb() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
