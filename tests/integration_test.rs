/// Integration tests for the application layer
mod test_utilities;

use gradle_spdx_sbom::prelude::*;
use gradle_spdx_sbom::sbom_generation::domain::{
    OrganizationInfo, PomInfo, PomLicense, Relationship, SpdxId,
};
use gradle_spdx_sbom::sbom_generation::policies::RepositoryMapping;
use gradle_spdx_sbom::shared::error::SbomError;
use test_utilities::mocks::*;

fn project(path: &str) -> ComponentId {
    ComponentId::project(path)
}

fn module(group: &str, name: &str, version: &str) -> ComponentId {
    ComponentId::module(group, name, version)
}

fn node(id: &ComponentId, children: &[&ComponentId]) -> ResolvedComponent {
    let mut component = ResolvedComponent::new(id.clone());
    if !id.is_project() {
        component = component.with_repository(MAVEN_REPO);
    }
    children
        .iter()
        .fold(component, |c, child| c.depends_on((*child).clone()))
}

fn request() -> SbomRequest {
    SbomRequest::builder()
        .input_path("build/resolution.json")
        .build()
        .unwrap()
}

async fn generate(
    reader: MockResolutionReader,
    request: SbomRequest,
) -> (Result<SbomResponse>, MockDiagnosticLogger, MockProgressReporter) {
    let logger = MockDiagnosticLogger::new();
    let progress = MockProgressReporter::new();
    let use_case = GenerateSbomUseCase::new(reader, progress.clone(), logger.clone());
    let result = use_case.execute(request).await;
    (result, logger, progress)
}

/// (parent name, child name) for every depends-on relationship, in emission order
fn edges(document: &SbomDocument) -> Vec<(String, String)> {
    let name = |id: &SpdxId| document.package(id).map(|p| p.name.clone()).unwrap();
    document
        .relationships()
        .map(|r: &Relationship| (name(&r.element), name(&r.related)))
        .collect()
}

fn edge(parent: &str, child: &str) -> (String, String) {
    (parent.to_string(), child.to_string())
}

fn package<'d>(document: &'d SbomDocument, name: &str) -> &'d PackageRecord {
    document.packages().find(|p| p.name == name).unwrap()
}

#[tokio::test]
async fn test_generate_sbom_happy_path() {
    let app = project(":");
    let guava = module("com.google.guava", "guava", "33.0.0-jre");
    let failureaccess = module("com.google.guava", "failureaccess", "1.0.2");

    let reader = MockResolutionReader::new(
        app.clone(),
        vec![
            node(&app, &[&guava]),
            node(&guava, &[&failureaccess]),
            node(&failureaccess, &[]),
        ],
    )
    .with_artifact(guava.clone(), "guava-33.0.0-jre.jar")
    .with_artifact(failureaccess.clone(), "failureaccess-1.0.2.jar")
    .with_pom(
        &guava,
        PomInfo {
            licenses: vec![PomLicense {
                name: Some("Apache License, Version 2.0".to_string()),
                url: None,
            }],
            ..PomInfo::default()
        },
    );

    let (result, logger, _) = generate(reader, request()).await;
    let response = result.unwrap();
    let document = &response.document;

    assert_eq!(response.stats.packages, 3);
    assert_eq!(
        edges(document),
        vec![
            edge("app", "com.google.guava:guava"),
            edge("com.google.guava:guava", "com.google.guava:failureaccess"),
        ]
    );

    let guava_package = package(document, "com.google.guava:guava");
    assert_eq!(guava_package.version, "33.0.0-jre");
    assert_eq!(guava_package.license_declared, "Apache-2.0");
    assert_eq!(
        guava_package.download_location,
        "https://repo.maven.apache.org/maven2/com/google/guava/guava/33.0.0-jre/guava-33.0.0-jre.jar"
    );
    assert!(!guava_package.files_analyzed);
    assert!(logger.warnings().is_empty());
    assert!(logger.errors().is_empty());
}

#[tokio::test]
async fn test_generate_sbom_diamond_keeps_both_parents() {
    let (r, a, b) = (project(":"), project(":a"), project(":b"));
    let shared = module("org.slf4j", "slf4j-api", "2.0.9");

    let reader = MockResolutionReader::new(
        r.clone(),
        vec![
            node(&r, &[&a, &b]),
            node(&a, &[&shared]),
            node(&b, &[&shared]),
            node(&shared, &[]),
        ],
    )
    .with_artifact(shared.clone(), "slf4j-api-2.0.9.jar");

    let (result, _, _) = generate(reader, request()).await;
    let document = result.unwrap().document;

    assert_eq!(
        document
            .packages()
            .filter(|p| p.name == "org.slf4j:slf4j-api")
            .count(),
        1
    );
    assert_eq!(
        edges(&document),
        vec![
            edge("app", "a"),
            edge("app", "b"),
            edge("a", "org.slf4j:slf4j-api"),
            edge("b", "org.slf4j:slf4j-api"),
        ]
    );
}

#[tokio::test]
async fn test_generate_sbom_cycle_terminates_without_back_edge() {
    let (r, a, b) = (project(":"), project(":a"), project(":b"));

    let reader = MockResolutionReader::new(
        r.clone(),
        vec![node(&r, &[&a]), node(&a, &[&b]), node(&b, &[&a])],
    );

    let (result, _, _) = generate(reader, request()).await;
    let document = result.unwrap().document;

    assert_eq!(edges(&document), vec![edge("app", "a"), edge("a", "b")]);
}

#[tokio::test]
async fn test_generate_sbom_placeholder_and_conflicts() {
    let app = project(":");
    let marker = module("org.acme", "marker", "1.0");
    let lib = module("org.acme", "lib", "1.0");

    let reader = MockResolutionReader::new(
        app.clone(),
        vec![node(&app, &[&marker, &lib]), node(&marker, &[]), node(&lib, &[])],
    )
    .with_artifact(marker.clone(), "marker-1.0.rip")
    .with_artifact(lib.clone(), "lib-1.0.jar")
    .with_artifact(lib.clone(), "lib-1.0-sources.jar");

    let (result, logger, _) = generate(reader, request()).await;
    let response = result.unwrap();

    assert_eq!(
        edges(&response.document),
        vec![edge("app", "org.acme:lib")]
    );
    assert_eq!(response.stats.elided, 1);
    assert_eq!(logger.warnings().len(), 1);
    assert!(logger.warnings()[0].starts_with("Conflict detected: cannot merge duplicate"));
    assert_eq!(logger.infos(), vec!["ignoring: org.acme:marker:1.0"]);

    let lib_package = package(&response.document, "org.acme:lib");
    assert!(lib_package.download_location.ends_with("/lib-1.0.jar"));
}

#[tokio::test]
async fn test_generate_sbom_reports_checksum_progress() {
    let app = project(":");
    let lib = module("org.acme", "lib", "1.0");
    let reader = MockResolutionReader::new(app.clone(), vec![node(&app, &[&lib]), node(&lib, &[])])
        .with_artifact(lib.clone(), "lib-1.0.jar");

    let (result, _, progress) = generate(reader, request()).await;
    result.unwrap();

    let messages = progress.get_messages();
    assert!(messages.contains(&"Progress: 1/1 - checksums".to_string()));
    assert!(messages.last().unwrap().starts_with("Completed: "));
}

#[tokio::test]
async fn test_generate_sbom_repository_mapping_and_private_repo() {
    let app = project(":");
    let sensor = module("com.polar.sdk", "sensor", "2.1.0");

    let reader = MockResolutionReader::new(
        app.clone(),
        vec![
            node(&app, &[&sensor]),
            ResolvedComponent::new(sensor.clone()).with_repository("PolarRepo"),
        ],
    )
    .with_repository("PolarRepo", "https://nexus.internal/repository/releases")
    .with_artifact(sensor.clone(), "sensor-2.1.0.jar");
    let request = SbomRequest::builder()
        .input_path("build/resolution.json")
        .repository_mappings(vec![RepositoryMapping {
            from: "https://nexus.internal".to_string(),
            to: "https://maven.polar.com".to_string(),
        }])
        .build()
        .unwrap();

    let (result, _, _) = generate(reader, request).await;
    let document = result.unwrap().document;
    let sensor_package = package(&document, "com.polar.sdk:sensor");

    assert_eq!(
        sensor_package.external_ref.as_ref().unwrap().locator,
        "pkg:maven/com.polar.sdk/sensor@2.1.0?repository_url=https%3A%2F%2Fmaven.polar.com%2Frepository%2Freleases"
    );
    assert!(sensor_package
        .download_location
        .starts_with("https://maven.polar.com/repository/releases/com/polar/sdk/sensor/2.1.0/"));
}

#[tokio::test]
async fn test_generate_sbom_missing_pom_uses_organization_heuristics() {
    let app = project(":");
    let sensor = module("com.polar.sdk", "sensor", "2.1.0");

    let reader = MockResolutionReader::new(
        app.clone(),
        vec![node(&app, &[&sensor]), node(&sensor, &[])],
    )
    .with_artifact(sensor.clone(), "sensor-2.1.0.jar")
    .with_resolution(|resolution| {
        resolution.poms.clear();
    });

    let (result, logger, _) = generate(reader, request()).await;
    let response = result.unwrap();

    assert_eq!(
        package(&response.document, "com.polar.sdk:sensor").supplier,
        "Organization: Polar Electro"
    );
    assert_eq!(logger.errors().len(), 1);
    assert_eq!(response.stats.errors, 1);
}

#[tokio::test]
async fn test_generate_sbom_organization_from_pom() {
    let app = project(":");
    let lib = module("org.acme", "lib", "1.0");
    let reader = MockResolutionReader::new(app.clone(), vec![node(&app, &[&lib]), node(&lib, &[])])
        .with_artifact(lib.clone(), "lib-1.0.jar")
        .with_pom(
            &lib,
            PomInfo {
                organization: Some(OrganizationInfo {
                    name: "ACME Corp".to_string(),
                    url: None,
                }),
                ..PomInfo::default()
            },
        );

    let (result, _, _) = generate(reader, request()).await;
    let document = result.unwrap().document;

    assert_eq!(
        package(&document, "org.acme:lib").supplier,
        "Organization: ACME Corp"
    );
}

#[tokio::test]
async fn test_generate_sbom_unresolved_source_repository_is_fatal() {
    let app = project(":");
    let lib = module("org.acme", "lib", "1.0");
    let reader = MockResolutionReader::new(
        app.clone(),
        vec![node(&app, &[&lib]), ResolvedComponent::new(lib.clone())],
    )
    .with_artifact(lib.clone(), "lib-1.0.jar");

    let (result, _, _) = generate(reader, request()).await;
    let err = result.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::UnresolvedSourceRepository { .. })
    ));
}

#[tokio::test]
async fn test_generate_sbom_dangling_edge_is_fatal() {
    let app = project(":");
    let ghost = module("org.acme", "ghost", "1.0");
    let reader = MockResolutionReader::new(app.clone(), vec![node(&app, &[&ghost])]);

    let (result, _, _) = generate(reader, request()).await;

    assert!(matches!(
        result.unwrap_err().downcast_ref::<SbomError>(),
        Some(SbomError::UnknownComponent { .. })
    ));
}

#[tokio::test]
async fn test_generate_sbom_formats_as_spdx_json() {
    let app = project(":");
    let lib = module("org.acme", "lib", "1.0");
    let reader = MockResolutionReader::new(app.clone(), vec![node(&app, &[&lib]), node(&lib, &[])])
        .with_artifact(lib.clone(), "lib-1.0.jar");

    let (result, _, _) = generate(reader, request()).await;
    let output = SpdxJsonFormatter::new()
        .format(&result.unwrap().document)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["spdxVersion"], "SPDX-2.3");
    assert_eq!(json["packages"].as_array().unwrap().len(), 2);
    assert_eq!(json["relationships"][0]["relationshipType"], "DESCRIBES");
    assert_eq!(json["relationships"][1]["relationshipType"], "DEPENDS_ON");
    assert_eq!(
        json["packages"][1]["checksums"].as_array().unwrap().len(),
        2
    );
}
