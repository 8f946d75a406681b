use super::*;
use crate::compose::ComposeRoot;
use crate::compose::index::list_versions;
use crate::core::diff::diff;
use crate::manifest::{ManifestError, parse_manifest};
use crate::traits::SilentObserver;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FROM_MANIFEST: &str = r#"{"payload": {"rpms": {"Everything": {"x86_64": {
    "bash-0:5.2.37-1.fc43.src": {},
    "nano-0:8.4-1.fc43.src": {}
}}}}}"#;

const TO_MANIFEST: &str = r#"{"payload": {"rpms": {"Everything": {"x86_64": {
    "bash-0:5.2.37-2.fc43.src": {},
    "helix-0:25.01-1.fc43.src": {}
}}}}}"#;

fn source() -> HttpSource {
    HttpSource::new(Duration::from_secs(10), true).unwrap()
}

async fn serve(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn streams_manifests_over_http() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/rawhide/Fedora-Rawhide-20250709.n.0/compose/metadata/rpms.json",
        FROM_MANIFEST,
    )
    .await;
    serve(
        &server,
        "/rawhide/latest-Fedora-Rawhide/compose/metadata/rpms.json",
        TO_MANIFEST,
    )
    .await;

    let root = ComposeRoot::parse(&format!("{}/rawhide", server.uri())).unwrap();

    let result = tokio::task::spawn_blocking(move || {
        let source = source();
        let open = |version: &str| {
            let location = root.manifest_location(&version.parse().unwrap());
            let stream = source.open(&location).unwrap();
            parse_manifest(stream, "x86_64", &SilentObserver).unwrap()
        };
        diff(&open("20250709.n.0"), &open("latest"))
    })
    .await
    .unwrap();

    assert_eq!(result.removed.len(), 1);
    assert_eq!(result.removed[0].name, "nano");
    assert_eq!(result.added[0].name, "helix");
    assert_eq!(result.changed[0].version_from, "0:5.2.37-1");
    assert_eq!(result.changed[0].version_to, "0:5.2.37-2");
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/rawhide/missing/rpms.json", server.uri());
    let reason = tokio::task::spawn_blocking(move || match source().open(&url) {
        Err(ComposeDiffError::Fetch { reason, .. }) => reason,
        Err(other) => panic!("expected Fetch, got {:?}", other),
        Ok(_) => panic!("404 must fail"),
    })
    .await
    .unwrap();

    assert!(reason.contains("404"), "{}", reason);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_body_is_an_empty_manifest() {
    let server = MockServer::start().await;
    serve(&server, "/rpms.json", "").await;

    let url = format!("{}/rpms.json", server.uri());
    let err = tokio::task::spawn_blocking(move || {
        let stream = source().open(&url).unwrap();
        parse_manifest(stream, "x86_64", &SilentObserver).unwrap_err()
    })
    .await
    .unwrap();

    assert!(matches!(err, ManifestError::Empty));
}

#[tokio::test(flavor = "multi_thread")]
async fn lists_composes_from_index_page() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/rawhide/",
        r#"<a href="Fedora-Rawhide-20250709.n.0/">x</a>
<a href="Fedora-Rawhide-20250710.n.0/">x</a>
<a href="latest-Fedora-Rawhide/">x</a>"#,
    )
    .await;

    let root = ComposeRoot::parse(&format!("{}/rawhide/", server.uri())).unwrap();
    let listed = tokio::task::spawn_blocking(move || list_versions(&root, &source()).unwrap())
        .await
        .unwrap();

    let listed: Vec<String> = listed.iter().map(ToString::to_string).collect();
    assert_eq!(listed, vec!["20250709.n.0", "20250710.n.0", "latest"]);
}

#[test]
fn plain_http_is_refused_without_opt_in() {
    let strict = HttpSource::new(Duration::from_secs(1), false).unwrap();
    let err = strict.open("http://127.0.0.1:9/rpms.json").err().unwrap();
    assert!(matches!(err, ComposeDiffError::Fetch { .. }));
}
