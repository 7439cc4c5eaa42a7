//! Integration tests for rampart-security

use rampart_core::{HttpRequest, HttpResponse};
use rampart_security::*;
use std::io::Write;

const CORP: &str = "Cross-Origin-Resource-Policy";

fn get(path: &str) -> HttpRequest {
    HttpRequest::new("GET", path)
}

#[test]
fn test_same_site_on_empty_response() {
    let writer =
        CrossOriginResourcePolicyHeaderWriter::with_policy(CrossOriginResourcePolicy::SameSite);
    let mut response = HttpResponse::ok();

    writer.write_headers(&get("/"), &mut response);

    let headers: Vec<_> = response.headers.iter().collect();
    assert_eq!(headers, vec![(CORP, "same-site")]);
}

#[test]
fn test_request_does_not_affect_output() {
    let writer =
        CrossOriginResourcePolicyHeaderWriter::with_policy(CrossOriginResourcePolicy::CrossOrigin);

    let plain = get("/a");
    let cross_site = HttpRequest::new("POST", "/b")
        .with_header("Origin", "https://other.example")
        .with_header("Sec-Fetch-Site", "cross-site");

    let mut first = HttpResponse::ok();
    let mut second = HttpResponse::not_found();
    writer.write_headers(&plain, &mut first);
    writer.write_headers(&cross_site, &mut second);

    assert_eq!(first.headers, second.headers);
}

#[test]
fn test_handler_header_wins_regardless_of_case() {
    let writer =
        CrossOriginResourcePolicyHeaderWriter::with_policy(CrossOriginResourcePolicy::SameOrigin);

    for name in [
        "Cross-Origin-Resource-Policy",
        "cross-origin-resource-policy",
        "CROSS-ORIGIN-RESOURCE-POLICY",
    ] {
        let mut response = HttpResponse::ok().with_header(name, "cross-origin");
        writer.write_headers(&get("/"), &mut response);

        assert_eq!(response.headers.get_all(CORP), vec!["cross-origin"]);
    }
}

#[test]
fn test_reconfigure_before_sharing() {
    let mut writer = CrossOriginResourcePolicyHeaderWriter::new();
    writer.set_policy(CrossOriginResourcePolicy::SameSite).unwrap();
    assert_eq!(
        writer.set_policy(None),
        Err(SecurityError::InvalidArgument(
            "resource policy cannot be absent".to_string()
        ))
    );

    let mut response = HttpResponse::ok();
    writer.write_headers(&get("/"), &mut response);
    assert_eq!(response.header(CORP), Some("same-site"));
}

#[test]
fn test_composite_earlier_writer_suppresses_corp() {
    let writers = CompositeHeaderWriter::new()
        .with_writer(|req: &HttpRequest, res: &mut HttpResponse| {
            if req.path.starts_with("/public/") {
                res.add_header(CORP, "cross-origin");
            }
        })
        .with_writer(CrossOriginResourcePolicyHeaderWriter::with_policy(
            CrossOriginResourcePolicy::SameOrigin,
        ));

    let mut public = HttpResponse::ok();
    writers.write_headers(&get("/public/font.woff2"), &mut public);
    assert_eq!(public.headers.get_all(CORP), vec!["cross-origin"]);

    let mut private = HttpResponse::ok();
    writers.write_headers(&get("/account"), &mut private);
    assert_eq!(private.headers.get_all(CORP), vec!["same-origin"]);
}

#[test]
fn test_config_from_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "cross_origin_resource_policy = \"same-origin\"").unwrap();

    let config = SecurityHeadersConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config.cross_origin_resource_policy,
        Some(CrossOriginResourcePolicy::SameOrigin)
    );

    let mut response = HttpResponse::ok();
    config.build_writer().write_headers(&get("/"), &mut response);
    assert_eq!(response.header(CORP), Some("same-origin"));
}

#[test]
fn test_config_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"cross_origin_resource_policy": "cross-origin"}}"#).unwrap();

    let config = SecurityHeadersConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config.cross_origin_resource_policy,
        Some(CrossOriginResourcePolicy::CrossOrigin)
    );
}

#[test]
fn test_config_file_errors() {
    let yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    assert!(matches!(
        SecurityHeadersConfig::from_file(yaml.path()),
        Err(SecurityError::Config(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        SecurityHeadersConfig::from_file(&missing),
        Err(SecurityError::Config(_))
    ));

    let mut bad = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(bad, "cross_origin_resource_policy = \"same-host\"").unwrap();
    assert!(SecurityHeadersConfig::from_file(bad.path()).is_err());
}

#[test]
fn test_config_from_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# security headers").unwrap();
    writeln!(file, "RAMPART_ENVFILE_OK_CROSS_ORIGIN_RESOURCE_POLICY=\" same-origin \"").unwrap();
    writeln!(file, "RAMPART_ENVFILE_BAD_CROSS_ORIGIN_RESOURCE_POLICY=same-host").unwrap();
    drop(file);

    let config = SecurityHeadersConfig::from_env_file(&path, "RAMPART_ENVFILE_OK").unwrap();
    assert_eq!(
        config.cross_origin_resource_policy,
        Some(CrossOriginResourcePolicy::SameOrigin)
    );

    let mut response = HttpResponse::ok();
    config.build_writer().write_headers(&get("/"), &mut response);
    assert_eq!(response.header(CORP), Some("same-origin"));

    assert_eq!(
        SecurityHeadersConfig::from_env_file(&path, "RAMPART_ENVFILE_BAD"),
        Err(SecurityError::UnknownPolicy("same-host".to_string()))
    );

    assert!(matches!(
        SecurityHeadersConfig::from_env_file(dir.path().join("missing.env"), "RAMPART"),
        Err(SecurityError::Config(_))
    ));
}

#[test]
fn test_config_from_process_env() {
    // SAFETY: the variable names are unique to this test
    unsafe {
        std::env::set_var("RAMPART_PROCENV_OK_CROSS_ORIGIN_RESOURCE_POLICY", " cross-origin ");
        std::env::set_var("RAMPART_PROCENV_BAD_CROSS_ORIGIN_RESOURCE_POLICY", "nonsense");
    }

    let config = SecurityHeadersConfig::from_env_with_prefix("RAMPART_PROCENV_OK").unwrap();
    assert_eq!(
        config.cross_origin_resource_policy,
        Some(CrossOriginResourcePolicy::CrossOrigin)
    );

    assert_eq!(
        SecurityHeadersConfig::from_env_with_prefix("RAMPART_PROCENV_BAD"),
        Err(SecurityError::UnknownPolicy("nonsense".to_string()))
    );

    let unset = SecurityHeadersConfig::from_env_with_prefix("RAMPART_PROCENV_UNSET").unwrap();
    assert_eq!(unset.cross_origin_resource_policy, None);
}

#[tokio::test]
async fn test_writer_shared_across_tasks() {
    let writers = std::sync::Arc::new(
        SecurityHeadersConfig::new()
            .with_cross_origin_resource_policy(CrossOriginResourcePolicy::SameSite)
            .build_writer(),
    );

    let mut handles = Vec::new();
    for i in 0..16 {
        let writers = std::sync::Arc::clone(&writers);
        handles.push(tokio::spawn(async move {
            let mut response = HttpResponse::ok();
            writers.write_headers(&get(&format!("/item/{}", i)), &mut response);
            response
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.headers.get_all(CORP), vec!["same-site"]);
    }
}
